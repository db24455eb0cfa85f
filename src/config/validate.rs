// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::config::model::{
    Settings, WatchSection, DEFAULT_BACKOFF_SECS, DEFAULT_EXTENSION, DEFAULT_INTERVAL_SECS,
};
use crate::errors::{DirwatchError, Result};
use crate::watch::ExtensionFilter;

impl TryFrom<WatchSection> for Settings {
    type Error = DirwatchError;

    fn try_from(raw: WatchSection) -> std::result::Result<Self, Self::Error> {
        let magic = validate_magic(raw.magic)?;
        let extension = validate_extension(raw.extension)?;
        let interval = validate_seconds("interval", raw.interval.unwrap_or(DEFAULT_INTERVAL_SECS))?;
        let backoff = validate_seconds("backoff", raw.backoff.unwrap_or(DEFAULT_BACKOFF_SECS))?;
        let directory = resolve_directory(raw.directory)?;

        Ok(Settings::new_unchecked(
            directory,
            magic,
            ExtensionFilter::new(extension),
            interval,
            backoff,
        ))
    }
}

fn validate_magic(magic: Option<String>) -> Result<String> {
    match magic {
        Some(m) if !m.is_empty() => Ok(m),
        Some(_) => Err(DirwatchError::Config(
            "magic text must not be empty".to_string(),
        )),
        None => Err(DirwatchError::Config(
            "magic text is required (MAGIC argument or [watch].magic)".to_string(),
        )),
    }
}

fn validate_extension(extension: Option<String>) -> Result<String> {
    let extension = extension.unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    if extension.is_empty() {
        return Err(DirwatchError::Config(
            "extension must not be empty".to_string(),
        ));
    }
    Ok(extension)
}

fn validate_seconds(field: &str, secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(DirwatchError::Config(format!(
            "{field} must be a positive number of seconds (got {secs})"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| DirwatchError::Config(format!("{field} is out of range: {e}")))
}

/// Canonicalise the directory: it must exist and be a directory.
///
/// Resolving `..` and symlinks up front keeps every reported path in one
/// spelling for the lifetime of the watcher.
fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf> {
    let directory = directory.ok_or_else(|| {
        DirwatchError::Config(
            "a directory to watch is required (DIRECTORY argument or [watch].directory)"
                .to_string(),
        )
    })?;

    let canonical = std::fs::canonicalize(&directory).map_err(|e| {
        DirwatchError::Config(format!("cannot resolve directory {:?}: {e}", directory))
    })?;

    if !canonical.is_dir() {
        return Err(DirwatchError::Config(format!(
            "{:?} is not a directory",
            canonical
        )));
    }

    debug!(directory = ?canonical, "resolved watch directory");
    Ok(canonical)
}
