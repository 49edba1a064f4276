/// Error type for media library operations
#[derive(Debug)]
pub enum MediaLibraryError {
    PermissionDenied(String),
    NotFound(String),
    InvalidCursor(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Metadata(String),
    Timeout(String),
    PlatformNotSupported(String),
    Other(String),
}

impl std::fmt::Display for MediaLibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaLibraryError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            MediaLibraryError::NotFound(msg) => write!(f, "Not found: {}", msg),
            MediaLibraryError::InvalidCursor(cursor) => write!(f, "Invalid cursor: {}", cursor),
            MediaLibraryError::IoError(e) => write!(f, "IO error: {}", e),
            MediaLibraryError::JsonError(e) => write!(f, "JSON error: {}", e),
            MediaLibraryError::Metadata(msg) => write!(f, "Metadata error: {}", msg),
            MediaLibraryError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            MediaLibraryError::PlatformNotSupported(msg) => {
                write!(f, "Platform not supported: {}", msg)
            }
            MediaLibraryError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MediaLibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaLibraryError::IoError(e) => Some(e),
            MediaLibraryError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MediaLibraryError {
    fn from(err: std::io::Error) -> Self {
        MediaLibraryError::IoError(err)
    }
}

impl From<serde_json::Error> for MediaLibraryError {
    fn from(err: serde_json::Error) -> Self {
        MediaLibraryError::JsonError(err)
    }
}

impl From<image::ImageError> for MediaLibraryError {
    fn from(err: image::ImageError) -> Self {
        MediaLibraryError::Metadata(err.to_string())
    }
}
