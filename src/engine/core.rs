// src/engine/core.rs

//! Pure core of the watch loop.
//!
//! [`WatchCore`] performs exactly one cycle at a time:
//! 1. take a [`DirectorySnapshot`],
//! 2. reconcile it with the [`TrackedFiles`] (removals, then additions),
//! 3. scan every tracked file from its stored next line.
//!
//! It owns no timers, channels or Tokio types; the async shell
//! (`engine::runtime::Runtime`) decides when a cycle runs. Everything goes
//! through the [`FileSystem`] trait so the core can be tested in memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::Settings;
use crate::engine::EventSink;
use crate::errors::{DirwatchError, Result};
use crate::fs::FileSystem;
use crate::types::WatchEvent;
use crate::watch::{
    scan_file, DirectorySnapshot, ExtensionFilter, SnapshotDiff, TrackedFiles, FIRST_LINE,
};

/// Summary of one successful cycle.
///
/// `failures` holds per-file scan errors; the files involved kept their
/// previous next line.
#[derive(Debug, Default)]
pub struct CycleReport {
    pub added: usize,
    pub removed: usize,
    pub scanned: usize,
    pub matches: usize,
    pub failures: Vec<DirwatchError>,
}

/// Owner of the tracked file set.
#[derive(Debug)]
pub struct WatchCore {
    fs: Arc<dyn FileSystem>,
    directory: PathBuf,
    filter: ExtensionFilter,
    magic: String,
    tracked: TrackedFiles,
}

impl WatchCore {
    pub fn new(fs: Arc<dyn FileSystem>, settings: &Settings) -> Self {
        Self {
            fs,
            directory: settings.directory().to_path_buf(),
            filter: settings.filter().clone(),
            magic: settings.magic().to_string(),
            tracked: TrackedFiles::new(),
        }
    }

    pub fn tracked(&self) -> &TrackedFiles {
        &self.tracked
    }

    /// Run snapshot, diff and scan-all once.
    ///
    /// A listing failure is returned as `Err` and leaves the tracked set
    /// untouched. Scan failures do not stop the cycle; they are collected in
    /// the report.
    pub fn run_cycle(&mut self, sink: &mut dyn EventSink) -> Result<CycleReport> {
        let snapshot = DirectorySnapshot::take(self.fs.as_ref(), &self.directory, &self.filter)?;
        trace!(entries = snapshot.len(), "directory snapshot taken");

        let diff = self.reconcile(&snapshot, sink);
        let mut report = CycleReport {
            added: diff.added.len(),
            removed: diff.removed.len(),
            ..CycleReport::default()
        };

        self.scan_all(sink, &mut report);
        Ok(report)
    }

    /// Bring the tracked set in line with `snapshot`, emitting `Removed` and
    /// `Added` events (in that order, each sorted by path).
    pub fn reconcile(
        &mut self,
        snapshot: &DirectorySnapshot,
        sink: &mut dyn EventSink,
    ) -> SnapshotDiff {
        let diff = self.tracked.diff(snapshot);
        if diff.is_empty() {
            return diff;
        }

        self.tracked.apply(&diff);

        for path in &diff.removed {
            sink.emit(WatchEvent::Removed { path: path.clone() });
        }
        for path in &diff.added {
            sink.emit(WatchEvent::Added { path: path.clone() });
        }

        debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            tracked = self.tracked.len(),
            "reconciled tracked files"
        );
        diff
    }

    fn scan_all(&mut self, sink: &mut dyn EventSink, report: &mut CycleReport) {
        let paths: Vec<PathBuf> = self.tracked.paths().map(Path::to_path_buf).collect();

        for path in paths {
            let start = self.tracked.next_line(&path).unwrap_or(FIRST_LINE);

            match scan_file(self.fs.as_ref(), &path, start, &self.magic) {
                Ok(outcome) => {
                    trace!(?path, start, next = outcome.next_line, "scanned file");
                    report.scanned += 1;
                    report.matches += outcome.matches.len();

                    for m in outcome.matches {
                        sink.emit(WatchEvent::Match {
                            path: path.clone(),
                            line_number: m.line_number,
                            text: m.text,
                        });
                    }
                    self.tracked.record_scan(&path, outcome.next_line);
                }
                Err(source) => {
                    report.failures.push(DirwatchError::Scan { path, source });
                }
            }
        }
    }
}
