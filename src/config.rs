use crate::error::AppError;
use crate::filesystem;
use media_selection::PickerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "media-post.toml";

/// Settings read from `media-post.toml` in the app data directory
///
/// ```toml
/// media_roots = ["/home/me/Pictures"]
///
/// [picker]
/// max_images = 9
/// columns = 3
/// page_size = 24
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub picker: PickerConfig,
    /// Directories scanned by the desktop media library
    pub media_roots: Vec<PathBuf>,
}

impl AppConfig {
    pub fn media_roots_or_default(&self) -> Vec<PathBuf> {
        if self.media_roots.is_empty() {
            filesystem::default_media_roots()
        } else {
            self.media_roots.clone()
        }
    }
}

pub fn config_path() -> PathBuf {
    filesystem::get_app_data_dir().join(CONFIG_FILE_NAME)
}

pub fn parse_config(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Read the configuration, a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig, AppError> {
    if !path.exists() {
        log::info!("No config at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    log::info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn load_config() -> Result<AppConfig, AppError> {
    load_config_from(&config_path())
}
