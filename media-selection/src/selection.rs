/// Which kind of media the current selection holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Images,
    Video,
}

/// Selection state of the picker
///
/// Either an ordered list of photo indices or a single video index, never
/// both. Indices point into the photo and video feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    images: Vec<usize>,
    video: Option<usize>,
    max_images: usize,
}

impl Selection {
    pub fn new(max_images: usize) -> Self {
        Self {
            images: Vec::new(),
            video: None,
            max_images,
        }
    }

    /// Toggle the photo at `index`
    ///
    /// Clears a selected video first. Adding beyond `max_images` is ignored.
    /// Returns whether the image selection changed.
    pub fn select_image(&mut self, index: usize) -> bool {
        self.video = None;

        if let Some(position) = self.images.iter().position(|&i| i == index) {
            self.images.remove(position);
            return true;
        }
        if self.images.len() >= self.max_images {
            log::debug!(
                "Image {} not selected, limit of {} reached",
                index,
                self.max_images
            );
            return false;
        }
        self.images.push(index);
        true
    }

    /// Toggle the video at `index`, replacing any other selection
    pub fn select_video(&mut self, index: usize) {
        self.images.clear();
        self.video = if self.video == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.video = None;
    }

    pub fn mode(&self) -> Option<SelectionMode> {
        if !self.images.is_empty() {
            Some(SelectionMode::Images)
        } else if self.video.is_some() {
            Some(SelectionMode::Video)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mode().is_none()
    }

    /// Selected photo indices in selection order
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    pub fn video(&self) -> Option<usize> {
        self.video
    }

    pub fn max_images(&self) -> usize {
        self.max_images
    }

    /// 1-based position of the photo in the selection, shown on its cell
    pub fn image_badge(&self, index: usize) -> Option<usize> {
        self.images
            .iter()
            .position(|&i| i == index)
            .map(|position| position + 1)
    }

    pub fn is_video_selected(&self, index: usize) -> bool {
        self.video == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exclusive(selection: &Selection) {
        assert!(selection.images().is_empty() || selection.video().is_none());
    }

    #[test]
    fn test_toggle_and_limit() {
        let mut selection = Selection::new(2);

        assert!(selection.select_image(3));
        assert!(selection.select_image(5));
        assert!(selection.select_image(3));
        assert_eq!(selection.images(), &[5]);

        assert!(selection.select_image(7));
        assert_eq!(selection.images(), &[5, 7]);

        assert!(!selection.select_image(9));
        assert_eq!(selection.images(), &[5, 7]);
    }

    #[test]
    fn test_deselect_at_limit_still_allowed() {
        let mut selection = Selection::new(2);
        selection.select_image(1);
        selection.select_image(2);

        assert!(selection.select_image(1));
        assert_eq!(selection.images(), &[2]);
    }

    #[test]
    fn test_video_clears_images() {
        let mut selection = Selection::new(9);
        selection.select_image(0);
        selection.select_image(4);

        selection.select_video(2);
        assert!(selection.images().is_empty());
        assert_eq!(selection.video(), Some(2));
        assert_eq!(selection.mode(), Some(SelectionMode::Video));
        assert_exclusive(&selection);
    }

    #[test]
    fn test_image_clears_video() {
        let mut selection = Selection::new(9);
        selection.select_video(1);

        selection.select_image(6);
        assert_eq!(selection.video(), None);
        assert_eq!(selection.images(), &[6]);
        assert_eq!(selection.mode(), Some(SelectionMode::Images));
        assert_exclusive(&selection);
    }

    #[test]
    fn test_reselecting_video_deselects() {
        let mut selection = Selection::new(9);
        selection.select_video(3);
        selection.select_video(3);
        assert_eq!(selection.video(), None);
        assert!(selection.is_empty());

        selection.select_video(3);
        selection.select_video(8);
        assert_eq!(selection.video(), Some(8));
    }

    #[test]
    fn test_zero_limit_rejects_but_clears_video() {
        let mut selection = Selection::new(0);
        selection.select_video(1);

        assert!(!selection.select_image(0));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_badges_follow_selection_order() {
        let mut selection = Selection::new(9);
        selection.select_image(8);
        selection.select_image(2);
        selection.select_image(5);
        assert_eq!(selection.image_badge(8), Some(1));
        assert_eq!(selection.image_badge(5), Some(3));
        assert_eq!(selection.image_badge(4), None);

        selection.select_image(8);
        assert_eq!(selection.image_badge(2), Some(1));
        assert_eq!(selection.image_badge(5), Some(2));
    }

    #[test]
    fn test_exclusive_after_mixed_sequence() {
        let mut selection = Selection::new(3);
        let steps: [(bool, usize); 8] = [
            (true, 1),
            (true, 2),
            (false, 0),
            (true, 3),
            (false, 4),
            (false, 4),
            (true, 5),
            (false, 5),
        ];
        for (image, index) in steps {
            if image {
                selection.select_image(index);
            } else {
                selection.select_video(index);
            }
            assert_exclusive(&selection);
        }
        assert_eq!(selection.video(), Some(5));
    }
}
