use crate::selection::Selection;
use media_library::{Asset, AssetInfo, MediaLibrary, MediaLibraryError};
use tokio::task::JoinSet;

/// What the picker hands to the caller when the user confirms
///
/// Images always arrive as a list in selection order, a video as a single
/// item.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmed {
    Images(Vec<AssetInfo>),
    Video(AssetInfo),
}

impl Confirmed {
    pub fn len(&self) -> usize {
        match self {
            Confirmed::Images(infos) => infos.len(),
            Confirmed::Video(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assets picked by the current selection, before metadata resolution
#[derive(Debug, Clone, PartialEq)]
pub enum Picked {
    Images(Vec<Asset>),
    Video(Asset),
}

/// Look up the selected assets in the feeds
///
/// Returns `Ok(None)` for an empty selection.
pub fn picked_assets(
    selection: &Selection,
    photos: &[Asset],
    videos: &[Asset],
) -> Result<Option<Picked>, MediaLibraryError> {
    if !selection.images().is_empty() {
        let assets = selection
            .images()
            .iter()
            .map(|&index| {
                photos.get(index).cloned().ok_or_else(|| {
                    MediaLibraryError::NotFound(format!("photo at position {}", index))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Some(Picked::Images(assets)));
    }

    match selection.video() {
        Some(index) => videos
            .get(index)
            .cloned()
            .map(|asset| Some(Picked::Video(asset)))
            .ok_or_else(|| MediaLibraryError::NotFound(format!("video at position {}", index))),
        None => Ok(None),
    }
}

/// Resolve full metadata for the picked assets
///
/// Image requests run concurrently; the result keeps the picking order. The
/// first failing request fails the whole resolution.
pub async fn resolve<L>(library: &L, picked: Picked) -> Result<Confirmed, MediaLibraryError>
where
    L: MediaLibrary + Clone + Send + Sync + 'static,
{
    match picked {
        Picked::Video(asset) => Ok(Confirmed::Video(library.get_asset_info(&asset).await?)),
        Picked::Images(assets) => {
            let count = assets.len();
            let mut tasks = JoinSet::new();
            for (position, asset) in assets.into_iter().enumerate() {
                let library = library.clone();
                tasks.spawn(async move { (position, library.get_asset_info(&asset).await) });
            }

            let mut resolved: Vec<Option<AssetInfo>> = vec![None; count];
            while let Some(joined) = tasks.join_next().await {
                let (position, result) = joined.map_err(|e| {
                    MediaLibraryError::Other(format!("metadata task failed: {}", e))
                })?;
                resolved[position] = Some(result?);
            }

            let infos = resolved
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| MediaLibraryError::Other("metadata missing".to_string()))?;
            log::info!("Resolved metadata for {} images", infos.len());
            Ok(Confirmed::Images(infos))
        }
    }
}

/// Confirm the current selection: `Ok(None)` when nothing is selected
pub async fn resolve_selection<L>(
    library: &L,
    selection: &Selection,
    photos: &[Asset],
    videos: &[Asset],
) -> Result<Option<Confirmed>, MediaLibraryError>
where
    L: MediaLibrary + Clone + Send + Sync + 'static,
{
    match picked_assets(selection, photos, videos)? {
        Some(picked) => resolve(library, picked).await.map(Some),
        None => Ok(None),
    }
}
