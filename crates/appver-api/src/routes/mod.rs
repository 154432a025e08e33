//! # API Route Modules
//!
//! - `versions` — CRUD over release versions with platform filtering.
//! - `export` — spreadsheet export (JSON table and CSV download).
//!
//! The password check lives in [`crate::auth`].

pub mod export;
pub mod versions;
