// src/watch/mod.rs

//! Directory listing, change detection and incremental scanning.
//!
//! This module is responsible for:
//! - Filtering directory entries by file name suffix.
//! - Taking snapshots of the watched directory.
//! - Tracking which files are watched and how far each has been scanned.
//! - Scanning new lines of a file for the magic text.
//!
//! It does **not** own any timing or shutdown logic; that lives in
//! [`crate::engine`].

pub mod filter;
pub mod scanner;
pub mod snapshot;
pub mod tracked;

pub use filter::ExtensionFilter;
pub use scanner::{scan_file, scan_lines, ScanOutcome};
pub use snapshot::DirectorySnapshot;
pub use tracked::{SnapshotDiff, TrackedFiles, FIRST_LINE};
