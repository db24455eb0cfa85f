// src/engine/sink.rs

use tracing::{error, info};

use crate::engine::EventSink;
use crate::types::{ErrorKind, WatchEvent};

/// Production sink: every event becomes a structured log record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: WatchEvent) {
        match event {
            WatchEvent::Added { path } => {
                info!(path = %path.display(), "watching new file");
            }
            WatchEvent::Removed { path } => {
                info!(path = %path.display(), "file removed; no longer watching");
            }
            WatchEvent::Match {
                path,
                line_number,
                text,
            } => {
                info!(
                    path = %path.display(),
                    line = line_number,
                    %text,
                    "magic text found"
                );
            }
            WatchEvent::Error {
                kind: ErrorKind::Io,
                message,
            } => {
                error!(kind = %ErrorKind::Io, "{message}");
            }
            WatchEvent::Error {
                kind: ErrorKind::Unexpected,
                message,
            } => {
                error!(kind = %ErrorKind::Unexpected, "unhandled error: {message}");
            }
        }
    }
}
