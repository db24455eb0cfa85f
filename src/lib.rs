// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod shutdown;
pub mod types;
pub mod watch;

use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{resolve_settings, Settings};
use crate::engine::{Runtime, RuntimeOptions, TracingSink, WatchCore};
use crate::fs::{FileSystem, RealFileSystem};

const BANNER_RULE: &str =
    "-------------------------------------------------------------------";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings resolution (CLI + optional config file)
/// - SIGINT / SIGTERM handling
/// - the watch core and its async runtime
/// - startup and shutdown banners
pub async fn run(args: CliArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(());
    }

    let started = Instant::now();
    info!("{}", startup_banner(&settings, &Local::now()));

    // Ctrl-C / SIGTERM → graceful shutdown after the current cycle.
    let (trigger, shutdown) = shutdown::channel();
    let _signals = shutdown::spawn_signal_listener(trigger);

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let core = WatchCore::new(fs, &settings);
    let runtime = Runtime::new(
        core,
        TracingSink,
        RuntimeOptions::from_settings(&settings),
        shutdown,
    );

    let core = runtime.run().await;

    let uptime = format_uptime(started.elapsed());
    info!(
        "\n{BANNER_RULE}\n    Stopped dirwatch (pid {})\n    Uptime was {uptime}\n    Files tracked at exit: {}\n{BANNER_RULE}",
        std::process::id(),
        core.tracked().len(),
    );

    Ok(())
}

/// Banner logged once the watcher is about to start polling.
pub fn startup_banner<Tz>(settings: &Settings, started_on: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "\n{BANNER_RULE}\n    Running dirwatch {} (pid {})\n    Started on {}\n    Watching {} for {} files\n    Magic text {:?}, polling every {:?}\n{BANNER_RULE}",
        env!("CARGO_PKG_VERSION"),
        std::process::id(),
        started_on.format("%Y-%m-%d %H:%M:%S%.6f"),
        settings.directory().display(),
        settings.filter(),
        settings.magic(),
        settings.interval(),
    )
}

/// Format a duration as `H:MM:SS.ffffff`.
///
/// Hours are not wrapped into days.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let micros = elapsed.subsec_micros();
    format!("{hours}:{minutes:02}:{seconds:02}.{micros:06}")
}

/// Simple dry-run output: print the resolved settings.
fn print_dry_run(settings: &Settings) {
    println!("dirwatch dry-run");
    println!("  directory = {}", settings.directory().display());
    println!("  magic     = {:?}", settings.magic());
    println!("  extension = {:?}", settings.filter().suffix());
    println!("  interval  = {:?}", settings.interval());
    println!("  backoff   = {:?}", settings.backoff());

    debug!("dry-run complete (not watching)");
}
