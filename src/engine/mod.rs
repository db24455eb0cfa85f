// src/engine/mod.rs

//! Watch loop for dirwatch.
//!
//! The pure, synchronous cycle logic (snapshot, diff, scan-all) lives in
//! [`core`]; the async shell that owns timing, backoff and shutdown is
//! implemented in [`runtime`].

use std::time::Duration;

use crate::config::Settings;
use crate::types::WatchEvent;

/// Receiver of everything the watch loop reports.
pub trait EventSink: Send {
    fn emit(&mut self, event: WatchEvent);
}

/// Collecting events in a plain `Vec` is handy for driving the core directly.
impl EventSink for Vec<WatchEvent> {
    fn emit(&mut self, event: WatchEvent) {
        self.push(event);
    }
}

/// Timing used by the async shell.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeOptions {
    /// Sleep at the start of every cycle.
    pub interval: Duration,
    /// Extra pause after a cycle that reported errors.
    pub backoff: Duration,
}

impl RuntimeOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            interval: settings.interval(),
            backoff: settings.backoff(),
        }
    }
}

pub mod core;
pub mod runtime;
pub mod sink;

pub use self::core::{CycleReport, WatchCore};
pub use runtime::Runtime;
pub use sink::TracingSink;
