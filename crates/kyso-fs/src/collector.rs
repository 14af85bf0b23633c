//! Report file collection
//!
//! A single depth-first traversal decides which files under a report root
//! take part in synchronization. What happens to each surviving file is
//! delegated to a [`CollectPolicy`]: [`ListPolicy`] just records the path,
//! [`HashPolicy`] also hashes the contents.
//!
//! At every directory the inherited [`IgnoreSet`] is extended with that
//! directory's `.gitignore`/`.kysoignore` lines and the result is handed to
//! the recursion by reference. Children are visited in the order the
//! platform's directory listing returns them.
//!
//! Symlinked directories are followed, but each real directory is walked at
//! most once per collection, so link cycles terminate.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::checksum::compute_file_checksum;
use crate::{Error, IgnoreSet, NormalizedPath, Result};

/// A collected file and its content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root, forward-slash separated
    pub path: String,
    /// Native path used for I/O
    #[serde(skip)]
    pub absolute: PathBuf,
    /// Lowercase hex SHA-256 of the file bytes
    pub content_hash: String,
}

/// What the traversal does with each file that survives the ignore rules.
pub trait CollectPolicy {
    type Item;

    /// Called once per non-ignored regular file, in traversal order.
    fn visit(&mut self, root: &Path, file: &Path) -> Result<Self::Item>;
}

/// Records the native path of every valid file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListPolicy;

impl CollectPolicy for ListPolicy {
    type Item = PathBuf;

    fn visit(&mut self, _root: &Path, file: &Path) -> Result<PathBuf> {
        Ok(file.to_path_buf())
    }
}

/// Hashes every valid file into a [`FileEntry`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HashPolicy;

impl CollectPolicy for HashPolicy {
    type Item = FileEntry;

    fn visit(&mut self, root: &Path, file: &Path) -> Result<FileEntry> {
        let content_hash = compute_file_checksum(file).map_err(|e| Error::io(file, e))?;
        Ok(FileEntry {
            path: relative_name(root, file),
            absolute: file.to_path_buf(),
            content_hash,
        })
    }
}

/// Root-relative, forward-slash name of `file`.
pub fn relative_name(root: &Path, file: &Path) -> String {
    let normalized = NormalizedPath::new(file);
    normalized
        .relative_to(&NormalizedPath::new(root))
        .unwrap_or_else(|| normalized.as_str().to_string())
}

/// Walk `root` and apply `policy` to every file not excluded by ignore rules.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `root` does not exist, and [`Error::Io`]
/// for the first directory or file that cannot be read. The walk is
/// abandoned at the first error; no partial result is returned.
pub fn collect<P: CollectPolicy>(root: impl AsRef<Path>, policy: &mut P) -> Result<Vec<P::Item>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(Error::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut walk = Walk {
        root,
        visited: HashSet::new(),
    };
    let mut items = Vec::new();
    walk.dir(root, &IgnoreSet::default(), policy, &mut items)?;
    tracing::debug!(root = %root.display(), files = items.len(), "Collected report files");
    Ok(items)
}

/// Collect and hash every valid file under `root`.
pub fn collect_files(root: impl AsRef<Path>) -> Result<Vec<FileEntry>> {
    collect(root, &mut HashPolicy)
}

/// List every valid file under `root` without hashing.
pub fn list_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    collect(root, &mut ListPolicy)
}

struct Walk<'a> {
    root: &'a Path,
    /// Canonical paths of directories already entered
    visited: HashSet<PathBuf>,
}

impl Walk<'_> {
    fn dir<P: CollectPolicy>(
        &mut self,
        dir: &Path,
        inherited: &IgnoreSet,
        policy: &mut P,
        items: &mut Vec<P::Item>,
    ) -> Result<()> {
        let canonical = dunce::canonicalize(dir).map_err(|e| Error::io(dir, e))?;
        if !self.visited.insert(canonical) {
            tracing::warn!("Skipping {}: directory already collected", dir.display());
            return Ok(());
        }

        let ignores = inherited.extend_from_dir(dir)?;
        let matcher = ignores.matcher(dir);

        let mut children = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let is_dir = is_directory(&entry, &path)?;
            if matcher.is_ignored(&path, is_dir) {
                tracing::debug!(path = %path.display(), "Ignored");
                continue;
            }
            children.push((path, is_dir));
        }

        for (path, is_dir) in children {
            if is_dir {
                self.dir(&path, &ignores, policy, items)?;
            } else {
                items.push(policy.visit(self.root, &path)?);
            }
        }
        Ok(())
    }
}

/// Symlinks are resolved; a dangling link counts as a file so that hashing
/// it reports the broken target.
fn is_directory(entry: &fs::DirEntry, path: &Path) -> Result<bool> {
    let file_type = entry.file_type().map_err(|e| Error::io(path, e))?;
    if file_type.is_symlink() {
        return Ok(fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false));
    }
    Ok(file_type.is_dir())
}
