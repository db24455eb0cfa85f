// src/watch/tracked.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::watch::snapshot::DirectorySnapshot;

/// First line of a freshly tracked file.
pub const FIRST_LINE: usize = 1;

/// Result of comparing the tracked set against a new snapshot.
///
/// Both lists are sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub added: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Files currently being watched, each with its next line to scan.
///
/// Values are 1-based and never below [`FIRST_LINE`].
#[derive(Debug, Clone, Default)]
pub struct TrackedFiles {
    next_lines: BTreeMap<PathBuf, usize>,
}

impl TrackedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.next_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_lines.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.next_lines.contains_key(path)
    }

    pub fn next_line(&self, path: &Path) -> Option<usize> {
        self.next_lines.get(path).copied()
    }

    /// Tracked paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.next_lines.keys().map(PathBuf::as_path)
    }

    /// Read-only pass: what would change if `snapshot` became current.
    pub fn diff(&self, snapshot: &DirectorySnapshot) -> SnapshotDiff {
        let added = snapshot
            .iter()
            .filter(|p| !self.next_lines.contains_key(*p))
            .map(Path::to_path_buf)
            .collect();

        let removed = self
            .next_lines
            .keys()
            .filter(|p| !snapshot.contains(p))
            .cloned()
            .collect();

        SnapshotDiff { added, removed }
    }

    /// Second pass: drop removed paths, start added ones at [`FIRST_LINE`].
    pub fn apply(&mut self, diff: &SnapshotDiff) {
        for path in &diff.removed {
            self.next_lines.remove(path);
        }
        for path in &diff.added {
            self.next_lines.entry(path.clone()).or_insert(FIRST_LINE);
        }
    }

    /// Store the scanner's result for `path`.
    ///
    /// Returns false (and stores nothing) if the path is not tracked.
    pub fn record_scan(&mut self, path: &Path, next_line: usize) -> bool {
        match self.next_lines.get_mut(path) {
            Some(slot) => {
                *slot = next_line.max(FIRST_LINE);
                true
            }
            None => false,
        }
    }
}
