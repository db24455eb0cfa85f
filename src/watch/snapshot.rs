// src/watch/snapshot.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::errors::{DirwatchError, Result};
use crate::fs::FileSystem;
use crate::watch::filter::ExtensionFilter;

/// The filtered set of file paths seen by one directory listing.
///
/// Paths are kept sorted so that anything derived from a snapshot (diffs,
/// event order) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySnapshot {
    paths: BTreeSet<PathBuf>,
}

impl DirectorySnapshot {
    /// List `directory` (non-recursively) and keep regular files accepted by
    /// `filter`.
    ///
    /// `directory` is expected to be absolute already; entries are joined onto
    /// it, so the resulting paths are absolute as well.
    pub fn take(
        fs: &dyn FileSystem,
        directory: &Path,
        filter: &ExtensionFilter,
    ) -> Result<Self> {
        let entries = fs
            .read_dir(directory)
            .map_err(|source| DirwatchError::ListDir {
                path: directory.to_path_buf(),
                source,
            })?;

        let paths = entries
            .into_iter()
            .filter(|p| filter.matches(p))
            .filter(|p| {
                let is_file = fs.is_file(p);
                if !is_file {
                    trace!(path = ?p, "skipping non-file entry");
                }
                is_file
            })
            .collect();

        Ok(Self { paths })
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
