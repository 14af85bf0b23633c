//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Report file names travel to the API and back as forward-slash strings,
/// so every name the collector produces goes through this type before it is
/// compared or archived. Conversion to a native `PathBuf` happens only at
/// I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_str_lossy(&path.as_ref().to_string_lossy())
    }

    fn from_str_lossy(raw: &str) -> Self {
        let mut normalized = raw.replace('\\', "/");
        while normalized.contains("//") && !normalized.starts_with("//") {
            normalized = normalized.replace("//", "/");
        }
        Self { inner: normalized }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Express this path relative to `root`.
    ///
    /// Returns `None` when the path does not live under `root`. The
    /// comparison is component-wise, so `/a/bc` is not under `/a/b`.
    pub fn relative_to(&self, root: &NormalizedPath) -> Option<String> {
        let root = root.inner.trim_end_matches('/');
        if root.is_empty() {
            return Some(self.inner.trim_start_matches("./").to_string());
        }
        let rest = self.inner.strip_prefix(root)?;
        if rest.is_empty() {
            return Some(String::new());
        }
        rest.strip_prefix('/').map(str::to_string)
    }

    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// Extension of the last component; dotfiles like `.gitignore` have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_become_forward_slashes() {
        let path = NormalizedPath::new("reports\\q1\\index.md");
        assert_eq!(path.as_str(), "reports/q1/index.md");
    }

    #[test]
    fn relative_to_strips_root() {
        let root = NormalizedPath::new("/work/report");
        let file = NormalizedPath::new("/work/report/data/a.csv");
        assert_eq!(file.relative_to(&root).as_deref(), Some("data/a.csv"));
    }

    #[test]
    fn relative_to_is_component_wise() {
        let root = NormalizedPath::new("/work/rep");
        let file = NormalizedPath::new("/work/report/a.csv");
        assert_eq!(file.relative_to(&root), None);
    }

    #[test]
    fn extension_ignores_dotfiles() {
        assert_eq!(NormalizedPath::new(".gitignore").extension(), None);
        assert_eq!(NormalizedPath::new("kyso.yaml").extension(), Some("yaml"));
    }
}
