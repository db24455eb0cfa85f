use std::path::Path;
use std::sync::{Arc, Mutex};

use dirwatch::engine::EventSink;
use dirwatch::types::WatchEvent;

/// A sink that:
/// - records every event it receives
/// - shares its buffer between clones, so a test can keep one handle while
///   the runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<WatchEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<WatchEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn matches_for(&self, path: &Path) -> Vec<(usize, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                WatchEvent::Match {
                    path: p,
                    line_number,
                    text,
                } if p == path => Some((line_number, text)),
                _ => None,
            })
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, WatchEvent::Error { .. }))
            .count()
    }

    pub fn count(&self, pred: impl Fn(&WatchEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: WatchEvent) {
        self.events.lock().unwrap().push(event);
    }
}
