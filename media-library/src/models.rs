use serde::{Deserialize, Serialize};

/// Kind of media item stored in the device library
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    Audio,
    Unknown,
}

impl MediaType {
    /// Classify a file by its extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" | "heic" | "heif" | "bmp" => MediaType::Photo,
            "mp4" | "mov" | "m4v" | "mkv" | "webm" | "3gp" | "avi" => MediaType::Video,
            "mp3" | "m4a" | "aac" | "wav" | "ogg" | "flac" => MediaType::Audio,
            _ => MediaType::Unknown,
        }
    }

    pub fn mime_type(&self, ext: &str) -> String {
        let ext = ext.to_ascii_lowercase();
        let ext = match ext.as_str() {
            "jpg" => "jpeg",
            "mov" => "quicktime",
            "m4v" | "3gp" => "mp4",
            "mkv" => "x-matroska",
            "avi" => "x-msvideo",
            other => other,
        };
        match self {
            MediaType::Photo => format!("image/{}", ext),
            MediaType::Video => format!("video/{}", ext),
            MediaType::Audio => format!("audio/{}", ext),
            MediaType::Unknown => "application/octet-stream".to_string(),
        }
    }
}

/// Sort key for asset enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Default,
    CreationTime,
    ModificationTime,
}

/// Sort key plus direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortBy {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortBy {
    /// Newest first
    pub fn creation_time() -> Self {
        Self {
            key: SortKey::CreationTime,
            ascending: false,
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::creation_time()
    }
}

/// Opaque continuation token: the id of the last asset of the previous page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A media item reference as returned by enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub filename: String,
    /// Displayable URI (data URL, file URL or content URI depending on backend)
    pub uri: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub modification_time: i64,
    /// Seconds, 0 for photos
    #[serde(default)]
    pub duration: f64,
}

/// Full metadata of a single asset, resolved on demand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    #[serde(flatten)]
    pub asset: Asset,
    /// Location of the file on the device
    pub local_uri: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl AssetInfo {
    pub fn id(&self) -> &str {
        &self.asset.id
    }

    pub fn filename(&self) -> &str {
        &self.asset.filename
    }

    pub fn media_type(&self) -> MediaType {
        self.asset.media_type
    }
}

/// Parameters for one page of asset enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetsOptions {
    /// Page size
    pub first: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
    pub media_type: MediaType,
    pub sort_by: Vec<SortBy>,
}

impl AssetsOptions {
    /// First page of `media_type`, newest first
    pub fn new(media_type: MediaType, first: usize) -> Self {
        Self {
            first,
            after: None,
            media_type,
            sort_by: vec![SortBy::creation_time()],
        }
    }

    pub fn after(mut self, cursor: Option<Cursor>) -> Self {
        self.after = cursor;
        self
    }
}

/// One page of enumerated assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedAssets {
    pub assets: Vec<Asset>,
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
    pub total_count: usize,
}

/// Outcome of a media permission request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(MediaType::from_extension("JPG"), MediaType::Photo);
        assert_eq!(MediaType::from_extension("heic"), MediaType::Photo);
        assert_eq!(MediaType::from_extension("mov"), MediaType::Video);
        assert_eq!(MediaType::from_extension("flac"), MediaType::Audio);
        assert_eq!(MediaType::from_extension("txt"), MediaType::Unknown);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(MediaType::Photo.mime_type("jpg"), "image/jpeg");
        assert_eq!(MediaType::Video.mime_type("MOV"), "video/quicktime");
        assert_eq!(
            MediaType::Unknown.mime_type("bin"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_options_default_to_newest_first() {
        let options = AssetsOptions::new(MediaType::Video, 24);
        assert_eq!(options.first, 24);
        assert!(options.after.is_none());
        assert_eq!(options.sort_by, vec![SortBy::creation_time()]);
        assert!(!options.sort_by[0].ascending);
    }

    #[test]
    fn test_asset_info_json_from_bridge() {
        let json = r#"{
            "id": "42",
            "filename": "IMG_0042.jpg",
            "uri": "content://media/external/images/media/42",
            "mediaType": "photo",
            "width": 4000,
            "height": 3000,
            "creationTime": 1700000000000,
            "localUri": "/storage/emulated/0/DCIM/IMG_0042.jpg",
            "fileSize": 2048
        }"#;
        let info: AssetInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id(), "42");
        assert_eq!(info.media_type(), MediaType::Photo);
        assert_eq!(info.asset.duration, 0.0);
        assert_eq!(info.file_size, 2048);
        assert!(info.mime_type.is_none());
    }

    #[test]
    fn test_cursor_is_transparent_in_json() {
        let options = AssetsOptions::new(MediaType::Photo, 2).after(Some(Cursor("7".into())));
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["after"], "7");
        assert_eq!(json["mediaType"], "photo");
    }
}
