#![deny(missing_docs)]

//! # appver-core — Domain Types for the App Release Version Tracker
//!
//! Everything the tracker knows about a release lives in this crate. It has
//! no I/O and no internal crate dependencies: only `serde`, `thiserror` and
//! `chrono` from the external ecosystem (plus `utoipa` behind the `openapi`
//! feature).
//!
//! ## Contents
//!
//! - [`VersionDraft`] / [`VersionRecord`]: the create/update payload and the
//!   persisted shape of one release.
//! - [`OsFilter`]: the platform filter for listing, including dual-platform
//!   matching.
//! - [`ExportTable`]: the fixed eleven-column export layout.
//! - [`seed`]: literal rows inserted into an empty store.
//! - [`ValidationError`]: everything a payload or query can get wrong.

pub mod error;
pub mod export;
pub mod platform;
pub mod record;
pub mod seed;

pub use error::ValidationError;
pub use export::{ExportTable, EXPORT_HEADERS};
pub use platform::{OsFilter, OS_ANDROID, OS_DUAL, OS_IOS};
pub use record::{VersionDraft, VersionRecord};
