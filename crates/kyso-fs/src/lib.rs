//! Filesystem layer for the Kyso CLI
//!
//! Walks report directories honoring nested ignore files, hashes their
//! contents, and packs/unpacks the ZIP payloads exchanged with the API.

pub mod archive;
pub mod checksum;
pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod ignore_set;
pub mod io;
pub mod path;

pub use collector::{CollectPolicy, FileEntry, HashPolicy, ListPolicy, collect, collect_files, list_files};
pub use config::ConfigStore;
pub use constants::KysoPath;
pub use error::{Error, Result};
pub use ignore_set::{IgnoreMatcher, IgnoreSet};
pub use path::NormalizedPath;
