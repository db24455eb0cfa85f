// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirwatch`.
///
/// Every watch setting may also come from `--config`; values given here win.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dirwatch",
    version,
    about = "Watch a directory and report lines containing a magic text.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to monitor (not recursive).
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Exact, case-sensitive text to search for in watched files.
    #[arg(value_name = "MAGIC")]
    pub magic: Option<String>,

    /// Only watch files whose name ends with this suffix.
    ///
    /// Default: `.txt`.
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX")]
    pub extension: Option<String>,

    /// Polling interval in seconds (fractions allowed).
    ///
    /// Default: 1.
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// Pause in seconds after a cycle that hit an error.
    ///
    /// Default: 5.
    #[arg(long, value_name = "SECONDS")]
    pub backoff: Option<f64>,

    /// Optional TOML file with a `[watch]` section.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file instead of writing them to stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Resolve + validate settings, print them, but don't start watching.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
