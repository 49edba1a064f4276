//! # Media Library
//!
//! Paginated, platform-independent access to the photos and videos stored on
//! a device.
//!
//! This crate provides:
//! - Asset models shared by every backend (and by the Android bridge as JSON)
//! - The [`MediaLibrary`] trait: permission request, cursor-based page
//!   enumeration ordered by creation time, per-asset metadata resolution
//! - Backends: Android MediaStore via JNI, local directories, in-memory
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use media_library::{AssetsOptions, FsMediaLibrary, MediaLibrary, MediaType};
//!
//! let library = FsMediaLibrary::new(vec!["./media".into()]);
//! let first = library.get_assets(AssetsOptions::new(MediaType::Photo, 24)).await?;
//! let next = library
//!     .get_assets(AssetsOptions::new(MediaType::Photo, 24).after(first.end_cursor))
//!     .await?;
//! ```

pub mod error;
pub mod fs;
pub mod library;
pub mod memory;
pub mod models;

#[cfg(target_os = "android")]
pub mod android;

pub use error::MediaLibraryError;
pub use fs::FsMediaLibrary;
pub use library::{paginate, MediaLibrary, MediaSource};
pub use memory::MemoryMediaLibrary;
pub use models::{
    Asset, AssetInfo, AssetsOptions, Cursor, MediaType, PagedAssets, PermissionStatus, SortBy,
    SortKey,
};

#[cfg(target_os = "android")]
pub use android::{AndroidLibraryConfig, AndroidMediaLibrary};
