//! Domain building blocks shared by the database, storage, and API crates.
//!
//! Nothing in here performs I/O; the media-store seam is a trait that the
//! `maya-storage` crate implements.

pub mod content;
pub mod error;
pub mod media;
pub mod storage;
pub mod types;
