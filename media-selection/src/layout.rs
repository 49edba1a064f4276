/// Edge of the selection indicator relative to the cell edge
pub const INDICATOR_RATIO: f64 = 0.16;

/// The two pages of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Photo,
    Video,
}

impl Page {
    pub fn index(&self) -> usize {
        match self {
            Page::Photo => 0,
            Page::Video => 1,
        }
    }

    /// Page whose left edge is closest to a horizontal scroll offset
    pub fn from_scroll_offset(offset: f64, page_width: f64) -> Self {
        if page_width <= 0.0 || !offset.is_finite() {
            return Page::Photo;
        }
        if (offset / page_width).round() >= 1.0 {
            Page::Video
        } else {
            Page::Photo
        }
    }
}

/// Whether the viewport bottom is within `threshold` viewport heights of the content end
pub fn is_near_end(
    scroll_top: f64,
    viewport_height: f64,
    content_height: f64,
    threshold: f64,
) -> bool {
    let remaining = content_height - (scroll_top + viewport_height);
    remaining <= threshold * viewport_height
}

/// Scroll position and extent of a vertically scrolling grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn is_near_end(&self, threshold: f64) -> bool {
        is_near_end(
            self.scroll_top,
            self.viewport_height,
            self.content_height,
            threshold,
        )
    }
}

/// Fires once per arrival near the end of a list
///
/// Re-arms when the list grows or the user scrolls away from the end, so
/// continuous scroll events near the bottom ask for a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndReached {
    fired_at_len: Option<usize>,
}

impl EndReached {
    pub fn update(&mut self, near_end: bool, list_len: usize) -> bool {
        if !near_end {
            self.fired_at_len = None;
            return false;
        }
        if self.fired_at_len == Some(list_len) {
            return false;
        }
        self.fired_at_len = Some(list_len);
        true
    }

    /// Same as [`EndReached::update`], measuring the grid first
    ///
    /// Content shorter than the viewport counts as near the end, so checking
    /// after every append keeps loading until the grid overflows.
    pub fn check(&mut self, metrics: ScrollMetrics, threshold: f64, list_len: usize) -> bool {
        self.update(metrics.is_near_end(threshold), list_len)
    }
}

/// Format a duration in seconds as `m:ss` (or `h:mm:ss`)
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_scroll_offset() {
        assert_eq!(Page::from_scroll_offset(0.0, 400.0), Page::Photo);
        assert_eq!(Page::from_scroll_offset(150.0, 400.0), Page::Photo);
        assert_eq!(Page::from_scroll_offset(250.0, 400.0), Page::Video);
        assert_eq!(Page::from_scroll_offset(400.0, 400.0), Page::Video);
        assert_eq!(Page::from_scroll_offset(100.0, 0.0), Page::Photo);
    }

    #[test]
    fn test_near_end_threshold() {
        // 1000px of content, 400px viewport: end is reached within 200px
        assert!(!is_near_end(0.0, 400.0, 1000.0, 0.5));
        assert!(!is_near_end(399.0, 400.0, 1000.0, 0.5));
        assert!(is_near_end(400.0, 400.0, 1000.0, 0.5));
        assert!(is_near_end(600.0, 400.0, 1000.0, 0.5));
        // Content shorter than the viewport is always at the end
        assert!(is_near_end(0.0, 400.0, 100.0, 0.5));
    }

    #[test]
    fn test_end_reached_fires_once_per_length() {
        let mut end = EndReached::default();
        assert!(end.update(true, 24));
        assert!(!end.update(true, 24));
        // New page arrived while still near the end
        assert!(end.update(true, 48));
        // Scrolling away and back re-arms
        assert!(!end.update(false, 48));
        assert!(end.update(true, 48));
    }

    #[test]
    fn test_short_grid_keeps_asking_after_append() {
        let mut end = EndReached::default();
        let short = |content_height| ScrollMetrics {
            scroll_top: 0.0,
            viewport_height: 800.0,
            content_height,
        };
        // first page of 6 rows does not fill the viewport
        assert!(end.check(short(300.0), 0.5, 24));
        // re-measuring before the next page arrives does not ask twice
        assert!(!end.check(short(300.0), 0.5, 24));
        // second page is still short, ask again
        assert!(end.check(short(600.0), 0.5, 48));
        // third page overflows the viewport well past the threshold
        assert!(!end.check(short(2000.0), 0.5, 72));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(12.4), "0:12");
        assert_eq!(format_duration(75.0), "1:15");
        assert_eq!(format_duration(3725.0), "1:02:05");
        assert_eq!(format_duration(f64::NAN), "0:00");
    }
}
