use std::fmt;
use std::path::PathBuf;

/// How a cycle-level failure is classified when it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Directory unreadable, file vanished, permission denied, ...
    Io,
    /// Anything that is not an I/O failure.
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => f.write_str("io"),
            ErrorKind::Unexpected => f.write_str("unexpected"),
        }
    }
}

/// A single line that contained the magic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line index.
    pub line_number: usize,
    pub text: String,
}

/// Events emitted by the watch loop.
///
/// These are the only observable output of the core; the production sink
/// turns them into log records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A matching file appeared in the directory and is now tracked.
    Added { path: PathBuf },
    /// A tracked file is no longer in the directory.
    Removed { path: PathBuf },
    /// A newly scanned line contains the magic text.
    Match {
        path: PathBuf,
        line_number: usize,
        text: String,
    },
    /// Non-fatal, cycle-level failure.
    Error { kind: ErrorKind, message: String },
}
