//! Report-level logic for the Kyso CLI
//!
//! Sits between the filesystem layer and the command layer:
//!
//! - **Config resolution**: locate and parse `kyso.json` / `kyso.yml` /
//!   `kyso.yaml`, normalizing the legacy `channel` alias
//! - **Diff engine**: classify local files against a remote manifest
//! - **Report discovery**: expand `meta` configs into their sub-reports
//!
//! ```text
//!            kyso-cli
//!           /        \
//!     kyso-api --> kyso-core
//!                      |
//!                   kyso-fs
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod report;
pub mod slug;

pub use config::{KysoConfig, ReportType, find_config, resolve_config, select_config_path};
pub use diff::{DiffResult, ManifestEntry, diff, diff_under, normalize_name};
pub use error::{Error, Result};
pub use report::{ReportDir, discover_reports};
pub use slug::slugify;
