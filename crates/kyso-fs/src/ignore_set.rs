//! Inherited ignore rules for report directory walks
//!
//! An [`IgnoreSet`] is a value: reading a directory's ignore files produces a
//! new set for that subtree and leaves the parent's set untouched. Patterns
//! therefore flow strictly downward and never leak into siblings.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ::ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::constants::{DEFAULT_IGNORES, KysoPath};
use crate::{Error, Result};

/// Ordered, deduplicated list of gitignore-style patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl Default for IgnoreSet {
    /// A set holding only the built-in defaults (`.git` and OS metadata).
    fn default() -> Self {
        Self::empty().with_patterns(DEFAULT_IGNORES.iter().copied())
    }
}

impl IgnoreSet {
    /// A set with no patterns at all, not even the defaults.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return a new set with `patterns` appended.
    ///
    /// Blank lines are dropped and patterns already present keep their
    /// original position.
    pub fn with_patterns<I, S>(&self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            if !next.patterns.iter().any(|p| p == pattern) {
                next.patterns.push(pattern.to_string());
            }
        }
        next
    }

    /// Return the set governing `dir`: this set plus the lines of `dir`'s
    /// `.gitignore` and `.kysoignore`, when present.
    ///
    /// Ignore files are decoded lossily; a line that is not valid UTF-8
    /// keeps its replacement characters and simply matches nothing real.
    pub fn extend_from_dir(&self, dir: &Path) -> Result<Self> {
        let mut next = self.clone();
        for ignore_file in KysoPath::IGNORE_FILES {
            let path = dir.join(ignore_file.as_str());
            match fs::read(&path) {
                Ok(bytes) => {
                    tracing::debug!(?path, "Reading ignore file");
                    next = next.with_patterns(String::from_utf8_lossy(&bytes).lines());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(Error::io(path, e)),
            }
        }
        Ok(next)
    }

    /// Compile the set into a matcher rooted at `dir`.
    ///
    /// Patterns the glob compiler rejects are skipped with a warning, so a
    /// single bad line in an ignore file does not block a push.
    pub fn matcher(&self, dir: &Path) -> IgnoreMatcher {
        let mut builder = GitignoreBuilder::new(dir);
        for pattern in &self.patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!("Skipping invalid ignore pattern {:?}: {}", pattern, e);
            }
        }
        let inner = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Failed to compile ignore patterns for {}: {}", dir.display(), e);
            Gitignore::empty()
        });
        IgnoreMatcher { inner }
    }
}

/// Compiled form of an [`IgnoreSet`] for one directory.
#[derive(Debug)]
pub struct IgnoreMatcher {
    inner: Gitignore,
}

impl IgnoreMatcher {
    /// Whether `path`, a direct child of the matcher's directory, is ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.inner.matched(path, is_dir).is_ignore()
    }
}
