//! Dioxus UI for the media picker
//!
//! The picker reads its media library from the Dioxus context, so the host
//! must provide a [`MediaSource`] above it with `use_context_provider`.

use crate::config::PickerConfig;
use crate::confirm::{picked_assets, resolve, Confirmed};
use crate::feed::{fetch_page, AssetFeed, FeedStatus};
use crate::labels::PickerLabels;
use crate::layout::{format_duration, EndReached, Page, ScrollMetrics, INDICATOR_RATIO};
use crate::selection::Selection;
use dioxus::prelude::*;
use media_library::{MediaLibrary, MediaSource, MediaType, PermissionStatus};
use std::rc::Rc;

/// Props for the MediaSelection component
#[derive(Props, Clone, PartialEq)]
pub struct MediaSelectionProps {
    #[props(default)]
    pub config: PickerConfig,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<PickerLabels>,
    /// Called with the resolved metadata once the user confirms
    pub on_next: EventHandler<Confirmed>,
    /// Called when the user closes the picker
    pub on_back: EventHandler<()>,
    /// Called with a readable message whenever loading or resolving fails
    #[props(default)]
    pub on_error: Option<EventHandler<String>>,
}

/// Indicator shown on a selected cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellBadge {
    /// 1-based position in the image selection
    Order(usize),
    Check,
}

fn report(on_error: Option<EventHandler<String>>, message: String) {
    log::error!("{}", message);
    if let Some(handler) = on_error {
        handler.call(message);
    }
}

/// Request the next page of `feed` and append it when it arrives
///
/// Pending requests are not tracked; a second call before the first one
/// returns asks for the same page again.
fn load_next(
    library: MediaSource,
    mut feed: Signal<AssetFeed>,
    on_error: Option<EventHandler<String>>,
    error_prefix: String,
) {
    let request = feed.read().next_request();
    let Some(request) = request else {
        return;
    };
    feed.write().begin();

    spawn(async move {
        match fetch_page(&library, request).await {
            Ok(page) => feed.write().append(page),
            Err(e) => {
                feed.write().fail(&e);
                report(on_error, format!("{}: {}", error_prefix, e));
            }
        }
    });
}

fn scroll_metrics(data: &ScrollData) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: data.scroll_top() as f64,
        viewport_height: data.client_height() as f64,
        content_height: data.scroll_height() as f64,
    }
}

async fn measure(mounted: &MountedData) -> MountedResult<ScrollMetrics> {
    let offset = mounted.get_scroll_offset().await?;
    let size = mounted.get_scroll_size().await?;
    let rect = mounted.get_client_rect().await?;
    Ok(ScrollMetrics {
        scroll_top: offset.y,
        viewport_height: rect.height(),
        content_height: size.height,
    })
}

/// Request another page while a settled grid is still near its end
///
/// Reads the feed, so an effect calling this re-runs whenever the feed
/// changes.
fn fill_viewport(
    library: MediaSource,
    feed: Signal<AssetFeed>,
    mut end: Signal<EndReached>,
    mounted: Option<Rc<MountedData>>,
    threshold: f64,
    on_error: Option<EventHandler<String>>,
    error_prefix: String,
) {
    let (len, settled) = {
        let feed = feed.read();
        (
            feed.len(),
            *feed.status() == FeedStatus::Idle && !feed.is_exhausted() && !feed.is_empty(),
        )
    };
    let Some(mounted) = mounted else {
        return;
    };
    if !settled {
        return;
    }

    spawn(async move {
        match measure(&mounted).await {
            Ok(metrics) => {
                if end.write().check(metrics, threshold, len) {
                    log::debug!("Grid not filled at {} items, loading more", len);
                    load_next(library, feed, on_error, error_prefix);
                }
            }
            Err(e) => log::debug!("Cannot measure grid: {:?}", e),
        }
    });
}

/// Text shown above a grid, if any
fn feed_notice(
    feed: &AssetFeed,
    permission: Option<PermissionStatus>,
    labels: &PickerLabels,
    empty_label: &str,
) -> Option<String> {
    if let Some(status) = permission {
        if !status.is_granted() {
            return Some(labels.permission_denied.clone());
        }
    }
    match feed.status() {
        FeedStatus::Failed(message) => Some(format!("{}: {}", labels.load_error, message)),
        _ if !feed.is_empty() => None,
        FeedStatus::Loading => Some(labels.loading.clone()),
        FeedStatus::Idle if permission.is_none() => Some(labels.loading.clone()),
        FeedStatus::Idle if feed.is_exhausted() => Some(empty_label.to_string()),
        FeedStatus::Idle => None,
    }
}

/// Photo and video picker screen
///
/// Shows a header with close and "next" buttons, a Photo/Video tab strip and
/// a horizontally swipeable pager with one paginated grid per media type.
/// Photos are multi-select up to `config.max_images`; a single video can be
/// selected instead. Selecting in one grid clears the other.
///
/// # Example
/// ```rust,ignore
/// use_context_provider(|| MediaSource::from(FsMediaLibrary::new(roots)));
///
/// MediaSelection {
///     config: PickerConfig::default(),
///     on_next: move |confirmed: Confirmed| {
///         // Attach the media to the post
///     },
///     on_back: move |_| {
///         // Leave the picker
///     },
/// }
/// ```
#[component]
pub fn MediaSelection(props: MediaSelectionProps) -> Element {
    let library = use_context::<MediaSource>();
    let config = props.config.validated();
    let labels = props.labels.clone().unwrap_or_default();
    let on_next = props.on_next;
    let on_back = props.on_back;
    let on_error = props.on_error;

    let photos = use_signal(|| AssetFeed::new(MediaType::Photo, config.page_size));
    let videos = use_signal(|| AssetFeed::new(MediaType::Video, config.page_size));
    let mut selection = use_signal(|| Selection::new(config.max_images));
    let mut current_page = use_signal(|| Page::Photo);
    let mut permission = use_signal(|| None::<PermissionStatus>);
    let mut confirm_error = use_signal(|| None::<String>);
    let mut page_mounts = use_signal(|| [None::<Rc<MountedData>>, None]);
    let mut photo_end = use_signal(EndReached::default);
    let mut video_end = use_signal(EndReached::default);

    // Ask for access once, then load the first page of both grids
    use_hook({
        let library = library.clone();
        let load_error = labels.load_error.clone();
        let denied = labels.permission_denied.clone();
        move || {
            spawn(async move {
                match library.request_permissions().await {
                    Ok(status) => {
                        log::info!(
                            "Media permission via {}: {:?}",
                            library.backend_name(),
                            status
                        );
                        permission.set(Some(status));
                        if status.is_granted() {
                            load_next(library.clone(), photos, on_error, load_error.clone());
                            load_next(library, videos, on_error, load_error);
                        } else {
                            report(on_error, denied);
                        }
                    }
                    Err(e) => {
                        permission.set(Some(PermissionStatus::Denied));
                        report(on_error, format!("{}: {}", denied, e));
                    }
                }
            })
        }
    });

    let confirm = {
        let library = library.clone();
        let confirm_label = labels.confirm_error.clone();
        move |_| {
            let picked = picked_assets(
                &selection.read(),
                photos.read().assets(),
                videos.read().assets(),
            );
            let picked = match picked {
                Ok(Some(picked)) => picked,
                Ok(None) => return,
                Err(e) => {
                    let message = format!("{}: {}", confirm_label, e);
                    confirm_error.set(Some(message.clone()));
                    report(on_error, message);
                    return;
                }
            };
            confirm_error.set(None);

            let library = library.clone();
            let confirm_label = confirm_label.clone();
            spawn(async move {
                match resolve(&library, picked).await {
                    Ok(confirmed) => {
                        log::info!("Confirming {} media item(s)", confirmed.len());
                        on_next.call(confirmed);
                    }
                    Err(e) => {
                        let message = format!("{}: {}", confirm_label, e);
                        confirm_error.set(Some(message.clone()));
                        report(on_error, message);
                    }
                }
            });
        }
    };

    let mut show_page = move |page: Page| {
        current_page.set(page);
        let mounted = page_mounts.read()[page.index()].clone();
        if let Some(mounted) = mounted {
            spawn(async move {
                if mounted.scroll_to(ScrollBehavior::Smooth).await.is_err() {
                    log::debug!("Pager could not scroll to {:?}", page);
                }
            });
        }
    };

    let threshold = config.end_reached_threshold;
    let on_photo_scroll = {
        let library = library.clone();
        let load_error = labels.load_error.clone();
        move |e: ScrollEvent| {
            let len = photos.read().len();
            if photo_end.write().check(scroll_metrics(&e.data()), threshold, len) {
                load_next(library.clone(), photos, on_error, load_error.clone());
            }
        }
    };
    let on_video_scroll = {
        let library = library.clone();
        let load_error = labels.load_error.clone();
        move |e: ScrollEvent| {
            let len = videos.read().len();
            if video_end.write().check(scroll_metrics(&e.data()), threshold, len) {
                load_next(library.clone(), videos, on_error, load_error.clone());
            }
        }
    };

    // A grid that does not overflow never scrolls, so re-measure after every change
    use_effect({
        let library = library.clone();
        let load_error = labels.load_error.clone();
        move || {
            let mounted = page_mounts.read()[Page::Photo.index()].clone();
            fill_viewport(
                library.clone(),
                photos,
                photo_end,
                mounted,
                threshold,
                on_error,
                load_error.clone(),
            );
        }
    });
    use_effect({
        let library = library.clone();
        let load_error = labels.load_error.clone();
        move || {
            let mounted = page_mounts.read()[Page::Video.index()].clone();
            fill_viewport(
                library.clone(),
                videos,
                video_end,
                mounted,
                threshold,
                on_error,
                load_error.clone(),
            );
        }
    });

    let has_selection = !selection.read().is_empty();
    let photo_notice = feed_notice(&photos.read(), permission(), &labels, &labels.empty_photos);
    let video_notice = feed_notice(&videos.read(), permission(), &labels, &labels.empty_videos);
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, 1fr); gap: 0;",
        config.columns
    );
    let page_style = "flex: 0 0 100%; height: 100%; overflow-y: auto; scroll-snap-align: start;";
    let tab_active = "background: none; border: none; color: #FFFFFF; font-size: 14px; font-weight: 700; cursor: pointer;";
    let tab_inactive = "background: none; border: none; color: lightgrey; font-size: 14px; font-weight: 400; cursor: pointer;";
    let (photo_tab_style, video_tab_style) = match current_page() {
        Page::Photo => (tab_active, tab_inactive),
        Page::Video => (tab_inactive, tab_active),
    };

    rsx! {
        div {
            class: "media-selection",
            style: "display: flex; flex-direction: column; height: 100%; background: black; color: white;",

            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px;",
                button {
                    style: "background: none; border: none; color: white; font-size: 20px; cursor: pointer;",
                    onclick: move |_| on_back.call(()),
                    "✕"
                }
                span { style: "color: white; font-size: 20px; font-weight: 700;", "{labels.title}" }
                button {
                    disabled: !has_selection,
                    style: if has_selection {
                        "background: none; border: none; color: white; font-size: 16px; cursor: pointer;"
                    } else {
                        "background: none; border: none; color: grey; font-size: 16px;"
                    },
                    onclick: confirm,
                    "{labels.next}"
                }
            }

            if let Some(error) = confirm_error() {
                div {
                    style: "background: #f8d7da; color: #721c24; padding: 8px 16px; font-size: 14px;",
                    "{error}"
                }
            }

            // Tabs
            div {
                style: "display: flex; justify-content: space-evenly; padding: 12px 0;",
                button {
                    style: "{photo_tab_style}",
                    onclick: move |_| show_page(Page::Photo),
                    "{labels.photo_tab}"
                }
                button {
                    style: "{video_tab_style}",
                    onclick: move |_| show_page(Page::Video),
                    "{labels.video_tab}"
                }
            }

            // Pager
            div {
                class: "media-pager",
                style: "flex: 1; display: flex; overflow-x: auto; overflow-y: hidden; scroll-snap-type: x mandatory;",
                onscroll: move |e: ScrollEvent| {
                    let data = e.data();
                    let page = Page::from_scroll_offset(
                        data.scroll_left() as f64,
                        data.client_width() as f64,
                    );
                    if page != current_page() {
                        current_page.set(page);
                    }
                },

                div {
                    class: "media-grid",
                    style: "{page_style}",
                    onmounted: move |e: MountedEvent| page_mounts.write()[Page::Photo.index()] = Some(e.data()),
                    onscroll: on_photo_scroll,
                    if let Some(notice) = photo_notice {
                        p { style: "padding: 16px; text-align: center; color: lightgrey;", "{notice}" }
                    }
                    div {
                        style: "{grid_style}",
                        for (index, asset) in photos.read().assets().iter().enumerate() {
                            MediaCell {
                                key: "{asset.id}",
                                uri: asset.uri.clone(),
                                media_type: MediaType::Photo,
                                duration: asset.duration,
                                badge: selection.read().image_badge(index).map(CellBadge::Order),
                                on_press: move |_| {
                                    selection.write().select_image(index);
                                },
                            }
                        }
                    }
                }

                div {
                    class: "media-grid",
                    style: "{page_style}",
                    onmounted: move |e: MountedEvent| page_mounts.write()[Page::Video.index()] = Some(e.data()),
                    onscroll: on_video_scroll,
                    if let Some(notice) = video_notice {
                        p { style: "padding: 16px; text-align: center; color: lightgrey;", "{notice}" }
                    }
                    div {
                        style: "{grid_style}",
                        for (index, asset) in videos.read().assets().iter().enumerate() {
                            MediaCell {
                                key: "{asset.id}",
                                uri: asset.uri.clone(),
                                media_type: MediaType::Video,
                                duration: asset.duration,
                                badge: selection
                                    .read()
                                    .is_video_selected(index)
                                    .then_some(CellBadge::Check),
                                on_press: move |_| selection.write().select_video(index),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One square grid cell
///
/// Selected cells are dimmed and carry an order number (photos) or a check
/// (videos). Videos show a glyph and their duration instead of a frame.
#[component]
fn MediaCell(
    uri: String,
    media_type: MediaType,
    duration: f64,
    badge: Option<CellBadge>,
    on_press: EventHandler<()>,
) -> Element {
    let indicator = format!("{:.0}%", INDICATOR_RATIO * 100.0);
    let opacity = if badge.is_some() { 0.5 } else { 1.0 };
    let duration_label = format_duration(duration);

    rsx! {
        div {
            style: "position: relative; aspect-ratio: 1 / 1; overflow: hidden; cursor: pointer; background: #111;",
            onclick: move |_| on_press.call(()),
            if let Some(badge) = badge {
                div {
                    style: "position: absolute; top: 5px; right: 5px; z-index: 1; width: {indicator}; height: {indicator}; min-width: 18px; min-height: 18px; background: #00E1DF; border-radius: 10px; display: flex; align-items: center; justify-content: center; color: white; font-weight: 700; font-size: 12px;",
                    match badge {
                        CellBadge::Order(position) => rsx! { "{position}" },
                        CellBadge::Check => rsx! { "✓" },
                    }
                }
            }
            if media_type == MediaType::Video {
                div {
                    style: "width: 100%; height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 4px; color: #ccc; opacity: {opacity};",
                    span { style: "font-size: 28px;", "🎬" }
                    span { style: "font-size: 12px;", "{duration_label}" }
                }
            } else {
                img {
                    src: "{uri}",
                    style: "width: 100%; height: 100%; object-fit: cover; opacity: {opacity};",
                }
            }
        }
    }
}
