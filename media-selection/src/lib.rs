//! # Media Selection
//!
//! A photo and video picker screen for Dioxus apps, meant for attaching media
//! to a post.
//!
//! The crate is split into plain state types and the UI on top of them:
//! - [`Selection`]: multi-select of photos up to a limit, or a single video
//! - [`AssetFeed`]: one paginated, append-only grid source per media type
//! - [`resolve_selection`]: metadata resolution when the user confirms
//! - [`MediaSelection`]: the screen itself
//!
//! Device access goes through the `media-library` crate; the screen takes its
//! [`media_library::MediaSource`] from the Dioxus context.

pub mod components;
pub mod config;
pub mod confirm;
pub mod feed;
pub mod labels;
pub mod layout;
pub mod selection;

pub use components::{CellBadge, MediaSelection, MediaSelectionProps};
pub use config::PickerConfig;
pub use confirm::{picked_assets, resolve, resolve_selection, Confirmed, Picked};
pub use feed::{fetch_page, AssetFeed, FeedStatus};
pub use labels::PickerLabels;
pub use layout::{format_duration, is_near_end, EndReached, Page};
pub use selection::{Selection, SelectionMode};
