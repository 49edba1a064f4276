use crate::error::MediaLibraryError;
use crate::fs::FsMediaLibrary;
use crate::memory::MemoryMediaLibrary;
use crate::models::{Asset, AssetInfo, AssetsOptions, PagedAssets, PermissionStatus, SortKey};
use std::cmp::Ordering;
use std::future::Future;

#[cfg(target_os = "android")]
use crate::android::AndroidMediaLibrary;

/// Access to the device media library
///
/// Backends enumerate assets page by page in a stable order and resolve the
/// full metadata of single assets. Futures are `Send` so callers can fan
/// metadata requests out onto separate tasks.
pub trait MediaLibrary {
    /// Ask the platform for read access to photos and videos
    fn request_permissions(
        &self,
    ) -> impl Future<Output = Result<PermissionStatus, MediaLibraryError>> + Send;

    /// Fetch one page of assets continuing after `options.after`
    fn get_assets(
        &self,
        options: AssetsOptions,
    ) -> impl Future<Output = Result<PagedAssets, MediaLibraryError>> + Send;

    /// Resolve the full metadata of a single asset
    fn get_asset_info(
        &self,
        asset: &Asset,
    ) -> impl Future<Output = Result<AssetInfo, MediaLibraryError>> + Send;
}

fn compare_assets(a: &Asset, b: &Asset, options: &AssetsOptions) -> Ordering {
    for sort in &options.sort_by {
        let ordering = match sort.key {
            SortKey::Default => Ordering::Equal,
            SortKey::CreationTime => a.creation_time.cmp(&b.creation_time),
            SortKey::ModificationTime => a.modification_time.cmp(&b.modification_time),
        };
        let ordering = if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.id.cmp(&b.id)
}

/// Cut one page out of a full asset listing
///
/// Filters by media type, orders by the requested sort keys (ties broken by
/// id) and continues strictly after the asset named by the cursor. A cursor
/// that names no asset of the listing is rejected.
pub fn paginate(
    mut assets: Vec<Asset>,
    options: &AssetsOptions,
) -> Result<PagedAssets, MediaLibraryError> {
    assets.retain(|asset| asset.media_type == options.media_type);
    assets.sort_by(|a, b| compare_assets(a, b, options));

    let total_count = assets.len();
    let start = match &options.after {
        None => 0,
        Some(cursor) => {
            assets
                .iter()
                .position(|asset| asset.id == cursor.as_str())
                .ok_or_else(|| MediaLibraryError::InvalidCursor(cursor.to_string()))?
                + 1
        }
    };

    let end = start.saturating_add(options.first).min(total_count);
    let page: Vec<Asset> = assets.drain(start..end).collect();
    let end_cursor = page.last().map(|asset| crate::models::Cursor(asset.id.clone()));

    Ok(PagedAssets {
        has_next_page: end < total_count,
        assets: page,
        end_cursor,
        total_count,
    })
}

/// The media library backend available on this platform
#[derive(Debug, Clone)]
pub enum MediaSource {
    #[cfg(target_os = "android")]
    Android(AndroidMediaLibrary),
    Filesystem(FsMediaLibrary),
    Memory(MemoryMediaLibrary),
}

impl MediaSource {
    pub fn backend_name(&self) -> &'static str {
        match self {
            #[cfg(target_os = "android")]
            MediaSource::Android(_) => "android",
            MediaSource::Filesystem(_) => "filesystem",
            MediaSource::Memory(_) => "memory",
        }
    }
}

impl MediaLibrary for MediaSource {
    async fn request_permissions(&self) -> Result<PermissionStatus, MediaLibraryError> {
        match self {
            #[cfg(target_os = "android")]
            MediaSource::Android(lib) => lib.request_permissions().await,
            MediaSource::Filesystem(lib) => lib.request_permissions().await,
            MediaSource::Memory(lib) => lib.request_permissions().await,
        }
    }

    async fn get_assets(&self, options: AssetsOptions) -> Result<PagedAssets, MediaLibraryError> {
        match self {
            #[cfg(target_os = "android")]
            MediaSource::Android(lib) => lib.get_assets(options).await,
            MediaSource::Filesystem(lib) => lib.get_assets(options).await,
            MediaSource::Memory(lib) => lib.get_assets(options).await,
        }
    }

    async fn get_asset_info(&self, asset: &Asset) -> Result<AssetInfo, MediaLibraryError> {
        match self {
            #[cfg(target_os = "android")]
            MediaSource::Android(lib) => lib.get_asset_info(asset).await,
            MediaSource::Filesystem(lib) => lib.get_asset_info(asset).await,
            MediaSource::Memory(lib) => lib.get_asset_info(asset).await,
        }
    }
}

impl From<FsMediaLibrary> for MediaSource {
    fn from(lib: FsMediaLibrary) -> Self {
        MediaSource::Filesystem(lib)
    }
}

impl From<MemoryMediaLibrary> for MediaSource {
    fn from(lib: MemoryMediaLibrary) -> Self {
        MediaSource::Memory(lib)
    }
}

#[cfg(target_os = "android")]
impl From<AndroidMediaLibrary> for MediaSource {
    fn from(lib: AndroidMediaLibrary) -> Self {
        MediaSource::Android(lib)
    }
}
