use serde::{Deserialize, Serialize};

/// Configuration of the media picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Maximum number of images that can be selected at once
    pub max_images: usize,
    /// Grid cells per row
    pub columns: usize,
    /// Assets requested per page, for the first and every following fetch
    pub page_size: usize,
    /// How close to the end (in viewport heights) scrolling triggers the next page
    pub end_reached_threshold: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_images: 9,
            columns: 3,
            page_size: 24,
            end_reached_threshold: 0.5,
        }
    }
}

impl PickerConfig {
    /// Clamp values the layout and pagination cannot work with
    pub fn validated(&self) -> Self {
        Self {
            max_images: self.max_images,
            columns: self.columns.max(1),
            page_size: self.page_size.max(1),
            end_reached_threshold: if self.end_reached_threshold.is_finite() {
                self.end_reached_threshold.max(0.0)
            } else {
                PickerConfig::default().end_reached_threshold
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.max_images, 9);
        assert_eq!(config.columns, 3);
        assert_eq!(config.page_size, 24);
        assert_eq!(config.end_reached_threshold, 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PickerConfig = toml::from_str("max_images = 4\ncolumns = 4").unwrap();
        assert_eq!(config.max_images, 4);
        assert_eq!(config.columns, 4);
        assert_eq!(config.page_size, 24);
    }

    #[test]
    fn test_validated_clamps() {
        let config = PickerConfig {
            max_images: 0,
            columns: 0,
            page_size: 0,
            end_reached_threshold: f64::NAN,
        }
        .validated();
        assert_eq!(config.max_images, 0);
        assert_eq!(config.columns, 1);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.end_reached_threshold, 0.5);
    }
}
