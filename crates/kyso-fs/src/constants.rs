//! Well-known file names inside a Kyso report directory.

use std::path::Path;

/// File names with special meaning to the collector and config resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KysoPath {
    /// `.gitignore`
    GitIgnore,
    /// `.kysoignore`
    KysoIgnore,
    /// `.git` directory, never synchronized
    GitDir,
    /// `kyso.json`
    ConfigJson,
    /// `kyso.yml`
    ConfigYml,
    /// `kyso.yaml`
    ConfigYaml,
}

impl KysoPath {
    /// Ignore files read at every directory level, in read order.
    pub const IGNORE_FILES: [KysoPath; 2] = [KysoPath::GitIgnore, KysoPath::KysoIgnore];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitIgnore => ".gitignore",
            Self::KysoIgnore => ".kysoignore",
            Self::GitDir => ".git",
            Self::ConfigJson => "kyso.json",
            Self::ConfigYml => "kyso.yml",
            Self::ConfigYaml => "kyso.yaml",
        }
    }
}

/// Patterns every IgnoreSet starts with: VCS data and OS metadata files.
pub const DEFAULT_IGNORES: &[&str] = &[KysoPath::GitDir.as_str(), ".DS_Store", "Thumbs.db", "desktop.ini"];

impl AsRef<Path> for KysoPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for KysoPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for KysoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ignores_start_with_git_dir() {
        assert_eq!(DEFAULT_IGNORES[0], KysoPath::GitDir.as_str());
        assert_eq!(DEFAULT_IGNORES.iter().filter(|p| **p == ".git").count(), 1);
    }
}
