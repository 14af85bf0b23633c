//! Kyso report configuration (`kyso.json`, `kyso.yml`, `kyso.yaml`)
//!
//! A report directory carries exactly one config file. When several
//! candidates are present, JSON wins over YAML regardless of listing order.

use std::fs;
use std::path::{Path, PathBuf};

use kyso_fs::{ConfigStore, KysoPath, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Kind of report a config describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// A single report rooted at the config's directory
    #[default]
    Report,
    /// A folder of sub-reports listed in `reports`
    Meta,
}

/// Report metadata read from a Kyso config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KysoConfig {
    #[serde(default)]
    pub organization: String,

    /// Channel that owns the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Legacy spelling of `team`, only read
    #[serde(default, skip_serializing)]
    pub channel: Option<String>,

    #[serde(default, rename = "type")]
    pub report_type: ReportType,

    #[serde(default)]
    pub title: String,

    /// Entry point rendered by the platform
    #[serde(default, rename = "main", skip_serializing_if = "Option::is_none")]
    pub main_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Sub-report folders of a `meta` report, relative to the config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<String>>,
}

impl KysoConfig {
    /// Effective channel, after legacy normalization.
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref().filter(|t| !t.is_empty())
    }

    /// Copy a legacy `channel` into `team` when `team` is unset.
    pub fn normalize_legacy(mut self) -> Self {
        if self.team.as_deref().is_none_or(str::is_empty) {
            if let Some(channel) = self.channel.take().filter(|c| !c.is_empty()) {
                self.team = Some(channel);
            }
        }
        self
    }

    /// Check the fields a push needs.
    pub fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| Error::ConfigInvalid {
            path: path.to_path_buf(),
            message: message.to_string(),
        };
        if self.organization.trim().is_empty() {
            return Err(invalid("missing `organization`"));
        }
        if self.team().is_none() {
            return Err(invalid("missing `team` (or legacy `channel`)"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("missing `title`"));
        }
        if self.report_type == ReportType::Meta
            && self.reports.as_ref().is_none_or(Vec::is_empty)
        {
            return Err(invalid("a `meta` report must list its `reports`"));
        }
        Ok(())
    }
}

/// Pick the config file among `candidates`.
///
/// The first path ending in `kyso.json` wins; otherwise the first ending in
/// `kyso.yml` or `kyso.yaml`.
pub fn select_config_path<P: AsRef<Path>>(candidates: &[P]) -> Option<&P> {
    let ends_with = |candidate: &P, name: KysoPath| {
        NormalizedPath::new(candidate.as_ref())
            .as_str()
            .ends_with(name.as_str())
    };
    candidates
        .iter()
        .find(|c| ends_with(c, KysoPath::ConfigJson))
        .or_else(|| {
            candidates
                .iter()
                .find(|c| ends_with(c, KysoPath::ConfigYml) || ends_with(c, KysoPath::ConfigYaml))
        })
}

/// Locate the config among `candidates`, parse it and apply the legacy
/// `channel` alias.
///
/// # Errors
///
/// [`Error::ConfigNotFound`] when no candidate qualifies,
/// [`Error::ConfigParse`] when the chosen file is not valid JSON/YAML.
pub fn resolve_config<P: AsRef<Path>>(candidates: &[P]) -> Result<KysoConfig> {
    let path = select_config_path(candidates).ok_or(Error::ConfigNotFound { path: None })?;
    load_config(path.as_ref())
}

/// Resolve the config among the direct children of `dir`.
///
/// Returns the chosen path alongside the parsed config.
pub fn find_config(dir: &Path) -> Result<(PathBuf, KysoConfig)> {
    let not_found = || Error::ConfigNotFound {
        path: Some(dir.to_path_buf()),
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(kyso_fs::Error::io(dir, e).into()),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| kyso_fs::Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            candidates.push(path);
        }
    }

    let path = select_config_path(&candidates).ok_or_else(not_found)?.clone();
    let config = load_config(&path)?;
    Ok((path, config))
}

/// Parse a single config file.
pub fn load_config(path: &Path) -> Result<KysoConfig> {
    tracing::debug!(?path, "Loading report config");
    let config: KysoConfig = ConfigStore::new()
        .load(&NormalizedPath::new(path))
        .map_err(|e| match e {
            kyso_fs::Error::ConfigParse {
                path,
                format,
                message,
            } => Error::ConfigParse {
                path,
                format,
                message,
            },
            other => Error::Fs(other),
        })?;
    Ok(config.normalize_legacy())
}
