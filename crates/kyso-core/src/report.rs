//! Report discovery
//!
//! A directory is either a single report or a `meta` report whose config
//! lists sub-report folders. Sub-reports carry their own config and borrow
//! `organization` / `team` from the parent when they leave them out.

use std::path::{Path, PathBuf};

use crate::config::{KysoConfig, ReportType, find_config};
use crate::slug::slugify;
use crate::{Error, Result};

/// One pushable report: its root directory and resolved config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDir {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub config: KysoConfig,
}

impl ReportDir {
    /// Report slug as used in API paths.
    pub fn slug(&self) -> String {
        slugify(&self.config.title)
    }

    pub fn organization(&self) -> &str {
        &self.config.organization
    }

    /// Channel the report belongs to; empty when the config omits it.
    pub fn team(&self) -> &str {
        self.config.team().unwrap_or_default()
    }
}

/// Expand the config at `root` into the list of reports it describes.
///
/// # Errors
///
/// Fails if `root` or any listed sub-report has no config, if a config does
/// not parse or validate, or if a sub-report is itself `meta`.
pub fn discover_reports(root: &Path) -> Result<Vec<ReportDir>> {
    let (config_path, config) = find_config(root)?;
    config.validate(&config_path)?;

    if config.report_type != ReportType::Meta {
        return Ok(vec![ReportDir {
            root: root.to_path_buf(),
            config_path,
            config,
        }]);
    }

    let mut reports = Vec::new();
    for folder in config.reports.iter().flatten() {
        let sub_root = root.join(folder);
        tracing::debug!(?sub_root, "Resolving sub-report");
        let (sub_path, mut sub_config) = find_config(&sub_root)?;

        if sub_config.organization.trim().is_empty() {
            sub_config.organization = config.organization.clone();
        }
        if sub_config.team().is_none() {
            sub_config.team = config.team.clone();
        }
        if sub_config.report_type == ReportType::Meta {
            return Err(Error::ConfigInvalid {
                path: sub_path,
                message: "sub-reports of a `meta` report cannot be `meta` themselves".into(),
            });
        }
        sub_config.validate(&sub_path)?;

        reports.push(ReportDir {
            root: sub_root,
            config_path: sub_path,
            config: sub_config,
        });
    }
    Ok(reports)
}
