//! Local-vs-remote file classification
//!
//! Compares the collector's view of a report directory with the manifest
//! the platform stored for the last pushed version. Renames are not
//! detected: a moved file shows up once in `added` and once in `deleted`.

use std::collections::{HashMap, HashSet};

use kyso_fs::FileEntry;
use serde::{Deserialize, Serialize};

/// A file record of a pushed report version, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            sha: Some(sha.into()),
        }
    }
}

/// Classification of every local and remote file name.
///
/// The four lists are disjoint. Names appear in the order they were
/// classified: local files first, then remote-only entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub unmodified: Vec<String>,
    pub deleted: Vec<String>,
}

impl DiffResult {
    /// True when a push would not change anything.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    /// Number of names that differ from the remote.
    pub fn change_count(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len()
    }
}

/// Normalize a file name for comparison: forward slashes, no leading `./`,
/// and no `root` prefix.
pub fn normalize_name(name: &str, root: Option<&str>) -> String {
    let mut name = name.replace('\\', "/");
    while let Some(rest) = name.strip_prefix("./") {
        name = rest.to_string();
    }
    if let Some(root) = root.map(|r| r.replace('\\', "/")) {
        let root = root.trim_end_matches('/');
        if !root.is_empty() {
            if let Some(rest) = name.strip_prefix(root).and_then(|r| r.strip_prefix('/')) {
                name = rest.to_string();
            }
        }
    }
    name
}

/// Classify `local` against `manifest`.
pub fn diff(local: &[FileEntry], manifest: &[ManifestEntry]) -> DiffResult {
    diff_under(local, manifest, None)
}

/// Classify `local` against `manifest`, stripping `root` from names on
/// both sides first.
///
/// Local files are classified first: no remote entry with the same name is
/// `added`, an entry with the same name and hash is `unmodified`, anything
/// else is `modified`. Then every remote entry that no local file matches
/// by name is `deleted`. Manifest entries without a name are skipped.
pub fn diff_under(local: &[FileEntry], manifest: &[ManifestEntry], root: Option<&str>) -> DiffResult {
    let mut remote: Vec<(String, &str)> = Vec::with_capacity(manifest.len());
    for entry in manifest {
        match entry.name.as_deref() {
            Some(name) => remote.push((normalize_name(name, root), entry.sha.as_deref().unwrap_or(""))),
            None => tracing::warn!(?entry, "Skipping manifest entry without a name"),
        }
    }

    // First entry per name decides the local classification.
    let mut remote_by_name: HashMap<&str, &str> = HashMap::with_capacity(remote.len());
    for (name, sha) in &remote {
        remote_by_name.entry(name.as_str()).or_insert(*sha);
    }

    let mut result = DiffResult::default();
    let mut local_names: HashSet<String> = HashSet::with_capacity(local.len());

    for file in local {
        let name = normalize_name(&file.path, root);
        match remote_by_name.get(name.as_str()) {
            None => result.added.push(name.clone()),
            Some(sha) if *sha == file.content_hash => result.unmodified.push(name.clone()),
            Some(_) => result.modified.push(name.clone()),
        }
        local_names.insert(name);
    }

    let mut deleted: HashSet<&str> = HashSet::new();
    for (name, _) in &remote {
        if !local_names.contains(name) && deleted.insert(name.as_str()) {
            result.deleted.push(name.clone());
        }
    }

    tracing::debug!(
        added = result.added.len(),
        modified = result.modified.len(),
        unmodified = result.unmodified.len(),
        deleted = result.deleted.len(),
        "Computed report diff"
    );
    result
}
