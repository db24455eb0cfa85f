// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::watch::ExtensionFilter;

pub const DEFAULT_EXTENSION: &str = ".txt";
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;
pub const DEFAULT_BACKOFF_SECS: f64 = 5.0;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [watch]
/// directory = "/var/log/app"
/// magic = "ERROR"
/// extension = ".log"
/// interval = 0.5
/// backoff = 5.0
/// ```
///
/// Everything is optional here; missing values are filled from the CLI or
/// from defaults before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[watch]` section, and the unvalidated shape of [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    pub directory: Option<PathBuf>,
    pub magic: Option<String>,
    pub extension: Option<String>,
    /// Seconds between polling cycles.
    pub interval: Option<f64>,
    /// Seconds to pause after a failed cycle.
    pub backoff: Option<f64>,
}

impl WatchSection {
    /// Layer `over` on top of `self`: any value set in `over` wins.
    pub fn overlay(self, over: WatchSection) -> WatchSection {
        WatchSection {
            directory: over.directory.or(self.directory),
            magic: over.magic.or(self.magic),
            extension: over.extension.or(self.extension),
            interval: over.interval.or(self.interval),
            backoff: over.backoff.or(self.backoff),
        }
    }
}

/// Validated, immutable settings for one process lifetime.
#[derive(Debug, Clone)]
pub struct Settings {
    directory: PathBuf,
    magic: String,
    filter: ExtensionFilter,
    interval: Duration,
    backoff: Duration,
}

impl Settings {
    /// Build settings without any validation.
    ///
    /// Use `Settings::try_from(WatchSection)` for user input.
    pub fn new_unchecked(
        directory: PathBuf,
        magic: String,
        filter: ExtensionFilter,
        interval: Duration,
        backoff: Duration,
    ) -> Self {
        Self {
            directory,
            magic,
            filter,
            interval,
            backoff,
        }
    }

    /// Absolute path of the watched directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn magic(&self) -> &str {
        &self.magic
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }
}
