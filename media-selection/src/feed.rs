use media_library::{
    Asset, AssetsOptions, Cursor, MediaLibrary, MediaLibraryError, MediaType, PagedAssets,
};

/// Load status of a feed
#[derive(Debug, Clone, PartialEq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Failed(String),
}

/// Paginated, append-only list of one media type
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFeed {
    media_type: MediaType,
    page_size: usize,
    assets: Vec<Asset>,
    cursor: Option<Cursor>,
    exhausted: bool,
    total_count: Option<usize>,
    status: FeedStatus,
}

impl AssetFeed {
    pub fn new(media_type: MediaType, page_size: usize) -> Self {
        Self {
            media_type,
            page_size,
            assets: Vec::new(),
            cursor: None,
            exhausted: false,
            total_count: None,
            status: FeedStatus::Idle,
        }
    }

    /// Options for the next page, `None` once the library has no more items
    ///
    /// The cursor is only sent after the first page came back.
    pub fn next_request(&self) -> Option<AssetsOptions> {
        if self.exhausted {
            return None;
        }
        Some(AssetsOptions::new(self.media_type, self.page_size).after(self.cursor.clone()))
    }

    /// Mark a request as sent
    ///
    /// Nothing prevents a second request with the same cursor while this one
    /// is pending.
    pub fn begin(&mut self) {
        self.status = FeedStatus::Loading;
    }

    pub fn append(&mut self, page: PagedAssets) {
        log::debug!(
            "{:?} feed: +{} assets (total {}), more: {}",
            self.media_type,
            page.assets.len(),
            page.total_count,
            page.has_next_page
        );
        self.assets.extend(page.assets);
        // An empty page carries no cursor; keep the last one
        if let Some(cursor) = page.end_cursor {
            self.cursor = Some(cursor);
        }
        self.exhausted = !page.has_next_page;
        self.total_count = Some(page.total_count);
        self.status = FeedStatus::Idle;
    }

    pub fn fail(&mut self, err: &MediaLibraryError) {
        self.status = FeedStatus::Failed(err.to_string());
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }
}

/// Request one page from the library
pub async fn fetch_page<L: MediaLibrary>(
    library: &L,
    request: AssetsOptions,
) -> Result<PagedAssets, MediaLibraryError> {
    let media_type = request.media_type;
    let first_page = request.after.is_none();
    let page = library.get_assets(request).await.inspect_err(|e| {
        log::warn!("Fetching {:?} page failed: {}", media_type, e);
    })?;
    if first_page {
        log::info!(
            "{:?} library holds {} assets",
            media_type,
            page.total_count
        );
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_library::{AssetInfo, MemoryMediaLibrary, PermissionStatus};

    fn library(photos: usize, videos: usize) -> MemoryMediaLibrary {
        let make = |id: String, media_type: MediaType, created: i64| AssetInfo {
            asset: Asset {
                id: id.clone(),
                filename: id.clone(),
                uri: format!("file:///{}", id),
                media_type,
                width: 0,
                height: 0,
                creation_time: created,
                modification_time: created,
                duration: 0.0,
            },
            local_uri: format!("/{}", id),
            file_size: 0,
            mime_type: None,
            is_favorite: false,
        };
        let mut items: Vec<AssetInfo> = (0..photos)
            .map(|i| make(format!("p{:02}", i), MediaType::Photo, i as i64))
            .collect();
        items.extend((0..videos).map(|i| make(format!("v{:02}", i), MediaType::Video, i as i64)));
        MemoryMediaLibrary::new(items)
    }

    async fn load(library: &MemoryMediaLibrary, feed: &mut AssetFeed) -> bool {
        let Some(request) = feed.next_request() else {
            return false;
        };
        feed.begin();
        match fetch_page(library, request).await {
            Ok(page) => feed.append(page),
            Err(e) => feed.fail(&e),
        }
        true
    }

    #[test]
    fn test_first_request_has_no_cursor() {
        let feed = AssetFeed::new(MediaType::Photo, 24);
        let request = feed.next_request().unwrap();
        assert_eq!(request.first, 24);
        assert_eq!(request.media_type, MediaType::Photo);
        assert!(request.after.is_none());
    }

    #[tokio::test]
    async fn test_successive_fetches_extend_without_overlap() {
        let library = library(5, 1);
        let mut feed = AssetFeed::new(MediaType::Photo, 2);

        assert!(load(&library, &mut feed).await);
        let first: Vec<Asset> = feed.assets().to_vec();
        assert_eq!(first.len(), 2);
        assert_eq!(feed.cursor(), Some(&Cursor("p03".to_string())));

        assert!(load(&library, &mut feed).await);
        assert_eq!(feed.len(), 4);
        assert_eq!(&feed.assets()[..2], &first[..]);
        for asset in &feed.assets()[2..] {
            assert!(!first.contains(asset));
        }
        assert_eq!(feed.total_count(), Some(5));
        assert_eq!(feed.status(), &FeedStatus::Idle);
    }

    #[tokio::test]
    async fn test_exhausted_feed_stops_requesting() {
        let library = library(3, 0);
        let mut feed = AssetFeed::new(MediaType::Photo, 2);

        assert!(load(&library, &mut feed).await);
        assert!(load(&library, &mut feed).await);
        assert!(feed.is_exhausted());
        assert_eq!(feed.len(), 3);
        assert!(!load(&library, &mut feed).await);
    }

    #[tokio::test]
    async fn test_empty_library_keeps_no_cursor() {
        let library = library(0, 0);
        let mut feed = AssetFeed::new(MediaType::Video, 24);

        assert!(load(&library, &mut feed).await);
        assert!(feed.is_empty());
        assert!(feed.cursor().is_none());
        assert!(feed.is_exhausted());
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_list_untouched() {
        let library = library(3, 0).with_permission(PermissionStatus::Denied);
        let mut feed = AssetFeed::new(MediaType::Photo, 2);

        assert!(load(&library, &mut feed).await);
        assert!(feed.is_empty());
        assert!(matches!(feed.status(), FeedStatus::Failed(_)));
        // No retry bookkeeping: the same request is available again
        assert!(feed.next_request().unwrap().after.is_none());
    }
}
