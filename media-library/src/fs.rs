// Filesystem-backed media library for desktop builds
//
// Photos and videos are discovered by walking the configured roots. The walk
// runs on every page request so the listing always reflects the directory
// contents; only the items of the returned page are read further. All file
// access runs on tokio's blocking pool.

use crate::error::MediaLibraryError;
use crate::library::{paginate, MediaLibrary};
use crate::models::{Asset, AssetInfo, AssetsOptions, MediaType, PagedAssets, PermissionStatus};
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Media library reading photos and videos from local directories
#[derive(Debug, Clone)]
pub struct FsMediaLibrary {
    roots: Vec<PathBuf>,
    /// Asset id -> file path, filled while enumerating
    index: Arc<Mutex<HashMap<String, PathBuf>>>,
}

impl FsMediaLibrary {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            index: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan(&self) -> Vec<(Asset, PathBuf)> {
        let mut found = Vec::new();
        for root in &self.roots {
            if let Err(e) = collect_files(root, &mut found) {
                log::warn!("Skipping media root {:?}: {}", root, e);
            }
        }

        let entries: Vec<(Asset, PathBuf)> = found
            .into_iter()
            .filter_map(|path| describe_file(&path).map(|asset| (asset, path)))
            .collect();

        if let Ok(mut index) = self.index.lock() {
            for (asset, path) in &entries {
                index.insert(asset.id.clone(), path.clone());
            }
        }

        log::debug!("Scanned {} media files", entries.len());
        entries
    }

    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let cached = self
            .index
            .lock()
            .ok()
            .and_then(|index| index.get(id).cloned());
        cached.or_else(|| {
            self.scan()
                .into_iter()
                .find(|(asset, _)| asset.id == id)
                .map(|(_, path)| path)
        })
    }

    fn permission_blocking(&self) -> PermissionStatus {
        let readable = self
            .roots
            .iter()
            .any(|root| std::fs::read_dir(root).is_ok());
        if readable {
            PermissionStatus::Granted
        } else {
            log::warn!("None of the media roots {:?} is readable", self.roots);
            PermissionStatus::Denied
        }
    }

    fn assets_blocking(&self, options: &AssetsOptions) -> Result<PagedAssets, MediaLibraryError> {
        let entries = self.scan();
        let paths: HashMap<String, PathBuf> = entries
            .iter()
            .map(|(asset, path)| (asset.id.clone(), path.clone()))
            .collect();

        let mut page = paginate(entries.into_iter().map(|(asset, _)| asset).collect(), options)?;
        for asset in &mut page.assets {
            if let Some(path) = paths.get(&asset.id) {
                hydrate(asset, path);
            }
        }
        Ok(page)
    }

    fn asset_info_blocking(&self, asset: &Asset) -> Result<AssetInfo, MediaLibraryError> {
        let path = self
            .path_for(&asset.id)
            .ok_or_else(|| MediaLibraryError::NotFound(format!("asset {}", asset.id)))?;
        let metadata = std::fs::metadata(&path)?;

        let mut resolved = asset.clone();
        if resolved.media_type == MediaType::Photo && (resolved.width == 0 || resolved.height == 0)
        {
            let (width, height) = image::image_dimensions(&path)?;
            resolved.width = width;
            resolved.height = height;
        }

        Ok(AssetInfo {
            asset: resolved,
            local_uri: path.to_string_lossy().to_string(),
            file_size: metadata.len(),
            mime_type: Some(asset.media_type.mime_type(&extension(&path))),
            is_favorite: false,
        })
    }
}

/// Run directory walks and file reads off the async runtime
async fn blocking<T, F>(task: F) -> Result<T, MediaLibraryError>
where
    F: FnOnce() -> Result<T, MediaLibraryError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| MediaLibraryError::Other(format!("Task join error: {}", e)))?
}

impl MediaLibrary for FsMediaLibrary {
    async fn request_permissions(&self) -> Result<PermissionStatus, MediaLibraryError> {
        let library = self.clone();
        blocking(move || Ok(library.permission_blocking())).await
    }

    async fn get_assets(&self, options: AssetsOptions) -> Result<PagedAssets, MediaLibraryError> {
        let library = self.clone();
        blocking(move || library.assets_blocking(&options)).await
    }

    async fn get_asset_info(&self, asset: &Asset) -> Result<AssetInfo, MediaLibraryError> {
        let library = self.clone();
        let asset = asset.clone();
        blocking(move || library.asset_info_blocking(&asset)).await
    }
}

fn collect_files(dir: &Path, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)?.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden {
            continue;
        }
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if let Err(e) = collect_files(&path, found) {
                log::debug!("Cannot read {:?}: {}", path, e);
            }
        } else if file_type.is_symlink() {
            // Linked files are listed, linked directories are not walked
            if path.is_file() {
                found.push(path);
            } else {
                log::debug!("Not following link {:?}", path);
            }
        } else if file_type.is_file() {
            found.push(path);
        }
    }
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string()
}

fn millis(time: std::io::Result<SystemTime>) -> Option<i64> {
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as i64)
}

/// Stable asset id derived from the file path
pub fn asset_id(path: &Path) -> String {
    let digest = Sha256::digest(path.to_string_lossy().as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn describe_file(path: &Path) -> Option<Asset> {
    let media_type = MediaType::from_extension(&extension(path));
    if !matches!(media_type, MediaType::Photo | MediaType::Video) {
        return None;
    }

    let metadata = std::fs::metadata(path).ok()?;
    let modification_time = millis(metadata.modified()).unwrap_or_default();
    let creation_time = millis(metadata.created()).unwrap_or(modification_time);

    Some(Asset {
        id: asset_id(path),
        filename: path.file_name()?.to_string_lossy().to_string(),
        uri: file_url(path),
        media_type,
        width: 0,
        height: 0,
        creation_time,
        modification_time,
        duration: 0.0,
    })
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.to_string_lossy())
}

/// Fill in the displayable URI and dimensions of a photo on the current page
fn hydrate(asset: &mut Asset, path: &Path) {
    if asset.media_type != MediaType::Photo {
        return;
    }

    match image::image_dimensions(path) {
        Ok((width, height)) => {
            asset.width = width;
            asset.height = height;
        }
        Err(e) => log::debug!("No dimensions for {:?}: {}", path, e),
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            let mime_type = asset.media_type.mime_type(&extension(path));
            let encoded = general_purpose::STANDARD.encode(&bytes);
            asset.uri = format!("data:{};base64,{}", mime_type, encoded);
        }
        Err(e) => log::warn!("Cannot read photo {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_media_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "media-library-{}-{}-{}",
            name,
            std::process::id(),
            nanos
        ));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbImage::new(width, height).save(path).unwrap();
    }

    #[tokio::test]
    async fn test_scan_classifies_and_skips_hidden() {
        let dir = temp_media_dir("classify");
        write_png(&dir.join("a.png"), 4, 3);
        write_png(&dir.join("nested").join("b.png"), 2, 2);
        std::fs::write(dir.join("clip.mp4"), b"not really a video").unwrap();
        std::fs::write(dir.join("notes.txt"), b"ignored").unwrap();
        std::fs::create_dir_all(dir.join(".thumbnails")).unwrap();
        write_png(&dir.join(".thumbnails").join("c.png"), 1, 1);

        let library = FsMediaLibrary::new(vec![dir.clone()]);
        let photos = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 10))
            .await
            .unwrap();
        let videos = library
            .get_assets(AssetsOptions::new(MediaType::Video, 10))
            .await
            .unwrap();

        let mut names: Vec<&str> = photos.assets.iter().map(|a| a.filename.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["a.png", "b.png"]);
        assert_eq!(videos.assets.len(), 1);
        assert!(videos.assets[0].uri.starts_with("file://"));

        let a = photos.assets.iter().find(|a| a.filename == "a.png").unwrap();
        assert_eq!((a.width, a.height), (4, 3));
        assert!(a.uri.starts_with("data:image/png;base64,"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_pages_extend_without_overlap() {
        let dir = temp_media_dir("pages");
        for i in 0..5 {
            write_png(&dir.join(format!("p{}.png", i)), 1, 1);
        }

        let library = FsMediaLibrary::new(vec![dir.clone()]);
        let first = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 2))
            .await
            .unwrap();
        let second = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 2).after(first.end_cursor.clone()))
            .await
            .unwrap();

        assert_eq!(first.assets.len(), 2);
        assert_eq!(second.assets.len(), 2);
        assert_eq!(first.total_count, 5);
        for asset in &second.assets {
            assert!(first.assets.iter().all(|seen| seen.id != asset.id));
        }

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_asset_info_reports_file_details() {
        let dir = temp_media_dir("info");
        let path = dir.join("shot.png");
        write_png(&path, 8, 6);

        let library = FsMediaLibrary::new(vec![dir.clone()]);
        let page = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 1))
            .await
            .unwrap();
        let info = library.get_asset_info(&page.assets[0]).await.unwrap();

        assert_eq!(info.local_uri, path.to_string_lossy());
        assert_eq!(info.mime_type.as_deref(), Some("image/png"));
        assert_eq!((info.asset.width, info.asset.height), (8, 6));
        assert!(info.file_size > 0);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_linked_directories_are_not_walked() {
        let dir = temp_media_dir("links");
        write_png(&dir.join("only.png"), 1, 1);
        std::os::unix::fs::symlink(&dir, dir.join("loop")).unwrap();
        std::os::unix::fs::symlink(&dir, dir.join("nested").join("back")).unwrap();

        let library = FsMediaLibrary::new(vec![dir.clone()]);
        let page = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 1000))
            .await
            .unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.assets[0].filename, "only.png");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_unreadable_roots_deny_permission() {
        let library = FsMediaLibrary::new(vec![PathBuf::from("/definitely/not/here")]);
        let status = library.request_permissions().await.unwrap();
        assert_eq!(status, PermissionStatus::Denied);
    }

    #[test]
    fn test_asset_id_is_stable() {
        let path = Path::new("/media/photo.jpg");
        assert_eq!(asset_id(path), asset_id(path));
        assert_eq!(asset_id(path).len(), 64);
        assert_ne!(asset_id(path), asset_id(Path::new("/media/other.jpg")));
    }
}
