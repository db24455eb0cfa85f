// src/watch/scanner.rs

//! Incremental line scanning for the magic text.
//!
//! A scan always reads a file from its first line, but only lines at or after
//! `start_line` are compared against the magic text. The returned
//! `next_line` is `lines seen + 1`, which means:
//!
//! - an unchanged file returns the same `next_line` it was called with;
//! - a file that shrank returns its new length + 1 (lines between the new
//!   and the old length are never revisited, even if the file regrows);
//! - a trailing line without `\n` still counts, so text later appended to
//!   that same line is not re-examined.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::fs::FileSystem;
use crate::types::LineMatch;

/// What one scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// 1-based index of the first line not seen by this scan.
    pub next_line: usize,
    /// Matching lines at or after the start line, in file order.
    pub matches: Vec<LineMatch>,
}

/// Open `path` through `fs` and scan it.
pub fn scan_file(
    fs: &dyn FileSystem,
    path: &Path,
    start_line: usize,
    magic: &str,
) -> io::Result<ScanOutcome> {
    let reader = fs.open_read(path)?;
    scan_lines(BufReader::new(reader), start_line, magic)
}

/// Scan an already opened source.
///
/// Matches are only handed back with a successful outcome; a read error
/// halfway through discards them so the caller can retry without reporting
/// anything twice.
pub fn scan_lines<R: BufRead>(
    mut reader: R,
    start_line: usize,
    magic: &str,
) -> io::Result<ScanOutcome> {
    let mut buf = Vec::new();
    let mut line_number = 0usize;
    let mut matches = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        if line_number < start_line {
            continue;
        }

        // Undecodable bytes must not abort the scan.
        let text = String::from_utf8_lossy(trim_line_ending(&buf));
        if text.contains(magic) {
            matches.push(LineMatch {
                line_number,
                text: text.into_owned(),
            });
        }
    }

    Ok(ScanOutcome {
        next_line: line_number + 1,
        matches,
    })
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
