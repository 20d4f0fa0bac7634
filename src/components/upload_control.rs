use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadControlProps {
    pub on_file: Callback<File>,
}

#[function_component]
pub fn UploadControl(props: &UploadControlProps) -> Html {
    let onchange = {
        let cb = props.on_file.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            // No selection (dialog cancelled): nothing to do.
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                cb.emit(file);
            }
        })
    };
    html! { <input type="file" accept="image/*" {onchange} /> }
}
