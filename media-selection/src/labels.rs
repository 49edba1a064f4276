/// User-visible strings of the picker
///
/// Hosts with translations pass their own; the defaults are English.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerLabels {
    pub title: String,
    pub next: String,
    pub photo_tab: String,
    pub video_tab: String,
    pub loading: String,
    pub empty_photos: String,
    pub empty_videos: String,
    pub permission_denied: String,
    pub load_error: String,
    pub confirm_error: String,
}

impl Default for PickerLabels {
    fn default() -> Self {
        Self {
            title: "Post".to_string(),
            next: "Next".to_string(),
            photo_tab: "Photo".to_string(),
            video_tab: "Video".to_string(),
            loading: "Loading…".to_string(),
            empty_photos: "No photos on this device".to_string(),
            empty_videos: "No videos on this device".to_string(),
            permission_denied: "Allow access to your photos and videos to attach them."
                .to_string(),
            load_error: "Could not load media".to_string(),
            confirm_error: "Could not read the selected media".to_string(),
        }
    }
}
