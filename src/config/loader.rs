// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{RawConfigFile, Settings, WatchSection};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** validate
/// anything. Use [`resolve_settings`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Build validated [`Settings`] from CLI args and the optional config file.
///
/// Precedence: CLI value, then `[watch]` value from `--config`, then the
/// built-in default.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let file = match &args.config {
        Some(path) => {
            debug!(?path, "loading config file");
            load_from_path(path)?
        }
        None => RawConfigFile::default(),
    };

    let merged = file.watch.overlay(WatchSection::from(args));
    Settings::try_from(merged)
}

impl From<&CliArgs> for WatchSection {
    fn from(args: &CliArgs) -> Self {
        WatchSection {
            directory: args.directory.clone(),
            magic: args.magic.clone(),
            extension: args.extension.clone(),
            interval: args.interval,
            backoff: args.backoff,
        }
    }
}
