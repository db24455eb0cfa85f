// src/watch/filter.rs

use std::fmt;
use std::path::Path;

/// Suffix-only file name filter (e.g. `".txt"` or `"log"`).
///
/// The comparison is a plain `ends_with` on the file name: no glob syntax, no
/// case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffix: String,
}

impl ExtensionFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns true if the final component of `path` ends with the suffix.
    pub fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => name.to_string_lossy().ends_with(&self.suffix),
            None => false,
        }
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.suffix)
    }
}
