use crate::error::MediaLibraryError;
use crate::library::{paginate, MediaLibrary};
use crate::models::{Asset, AssetInfo, AssetsOptions, PagedAssets, PermissionStatus};
use std::sync::Arc;

/// A fixed, in-memory media library
///
/// Useful for hosts without access to device media and for exercising the
/// picker in tests.
#[derive(Debug, Clone)]
pub struct MemoryMediaLibrary {
    items: Arc<Vec<AssetInfo>>,
    permission: PermissionStatus,
}

impl MemoryMediaLibrary {
    pub fn new(items: Vec<AssetInfo>) -> Self {
        Self {
            items: Arc::new(items),
            permission: PermissionStatus::Granted,
        }
    }

    /// Outcome returned by `request_permissions`
    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ensure_granted(&self) -> Result<(), MediaLibraryError> {
        if self.permission.is_granted() {
            Ok(())
        } else {
            Err(MediaLibraryError::PermissionDenied(
                "media library access not granted".to_string(),
            ))
        }
    }
}

impl MediaLibrary for MemoryMediaLibrary {
    async fn request_permissions(&self) -> Result<PermissionStatus, MediaLibraryError> {
        Ok(self.permission)
    }

    async fn get_assets(&self, options: AssetsOptions) -> Result<PagedAssets, MediaLibraryError> {
        self.ensure_granted()?;
        let assets = self.items.iter().map(|info| info.asset.clone()).collect();
        paginate(assets, &options)
    }

    async fn get_asset_info(&self, asset: &Asset) -> Result<AssetInfo, MediaLibraryError> {
        self.ensure_granted()?;
        self.items
            .iter()
            .find(|info| info.asset.id == asset.id)
            .cloned()
            .ok_or_else(|| MediaLibraryError::NotFound(format!("asset {}", asset.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn info(id: &str, media_type: MediaType, created: i64) -> AssetInfo {
        AssetInfo {
            asset: Asset {
                id: id.to_string(),
                filename: format!("{}.jpg", id),
                uri: format!("file:///media/{}.jpg", id),
                media_type,
                width: 640,
                height: 480,
                creation_time: created,
                modification_time: created,
                duration: 0.0,
            },
            local_uri: format!("/media/{}.jpg", id),
            file_size: 1024,
            mime_type: Some("image/jpeg".to_string()),
            is_favorite: false,
        }
    }

    #[tokio::test]
    async fn test_get_assets_pages_through_library() {
        let library = MemoryMediaLibrary::new(
            (0..5)
                .map(|i| info(&format!("p{}", i), MediaType::Photo, i))
                .collect(),
        );

        let first = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 3))
            .await
            .unwrap();
        assert_eq!(first.assets.len(), 3);
        assert!(first.has_next_page);

        let second = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 3).after(first.end_cursor))
            .await
            .unwrap();
        assert_eq!(second.assets.len(), 2);
        assert!(!second.has_next_page);
        assert_eq!(second.assets[1].id, "p0");
    }

    #[tokio::test]
    async fn test_denied_permission_blocks_enumeration() {
        let library = MemoryMediaLibrary::new(vec![info("p0", MediaType::Photo, 0)])
            .with_permission(PermissionStatus::Denied);

        let status = library.request_permissions().await.unwrap();
        assert_eq!(status, PermissionStatus::Denied);

        let result = library
            .get_assets(AssetsOptions::new(MediaType::Photo, 3))
            .await;
        assert!(matches!(result, Err(MediaLibraryError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_get_asset_info_unknown_asset() {
        let library = MemoryMediaLibrary::new(vec![info("p0", MediaType::Photo, 0)]);
        let stranger = info("zz", MediaType::Photo, 0).asset;

        let result = library.get_asset_info(&stranger).await;
        assert!(matches!(result, Err(MediaLibraryError::NotFound(_))));
    }
}
