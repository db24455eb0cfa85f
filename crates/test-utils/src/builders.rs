#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use dirwatch::config::Settings;
use dirwatch::watch::ExtensionFilter;

/// Builder for `Settings` to simplify test setup.
///
/// Skips validation on purpose so tests can point at mock paths. Timings
/// default to a few milliseconds to keep async tests fast.
pub struct SettingsBuilder {
    directory: PathBuf,
    magic: String,
    extension: String,
    interval: Duration,
    backoff: Duration,
}

impl SettingsBuilder {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            magic: "MAGIC".to_string(),
            extension: ".txt".to_string(),
            interval: Duration::from_millis(10),
            backoff: Duration::from_millis(20),
        }
    }

    pub fn magic(mut self, magic: &str) -> Self {
        self.magic = magic.to_string();
        self
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn build(self) -> Settings {
        Settings::new_unchecked(
            self.directory,
            self.magic,
            ExtensionFilter::new(self.extension),
            self.interval,
            self.backoff,
        )
    }
}
