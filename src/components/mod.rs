mod compose;
mod select_media;

pub use compose::{config_warning, ComposeScreen};
pub use select_media::SelectMediaScreen;
