use crate::config::AppConfig;
use media_library::MediaSource;

/// Pick the media library backend for this platform
#[cfg(target_os = "android")]
pub fn media_source(_config: &AppConfig) -> MediaSource {
    MediaSource::from(media_library::AndroidMediaLibrary::new(
        media_library::AndroidLibraryConfig::default(),
    ))
}

/// Pick the media library backend for this platform
#[cfg(not(target_os = "android"))]
pub fn media_source(config: &AppConfig) -> MediaSource {
    let roots = config.media_roots_or_default();
    log::info!("Reading media from {:?}", roots);
    MediaSource::from(media_library::FsMediaLibrary::new(roots))
}
