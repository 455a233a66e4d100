pub mod root;
pub mod video_form;
