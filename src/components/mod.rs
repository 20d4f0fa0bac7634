pub mod download_button;
pub mod frame_box;
pub mod upload_control;
