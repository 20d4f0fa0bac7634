use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadButtonProps {
    pub enabled: bool,
    pub label: AttrValue,
    pub on_download: Callback<()>,
}

#[function_component]
pub fn DownloadButton(props: &DownloadButtonProps) -> Html {
    let onclick = {
        let cb = props.on_download.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button class="download" disabled={!props.enabled} {onclick}>{props.label.clone()}</button>
    }
}
