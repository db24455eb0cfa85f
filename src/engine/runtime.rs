// src/engine/runtime.rs

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::DirwatchError;
use crate::shutdown::Shutdown;
use crate::types::{ErrorKind, WatchEvent};

use super::core::WatchCore;
use super::{EventSink, RuntimeOptions};

/// Drives [`WatchCore`] on a fixed cadence until shutdown is requested.
///
/// This is the IO shell around the core: it sleeps, checks the shutdown
/// signal, runs a cycle and applies the backoff after failures. No error
/// ever ends the loop; only a shutdown request does.
pub struct Runtime<S: EventSink> {
    core: WatchCore,
    sink: S,
    options: RuntimeOptions,
    shutdown: Shutdown,
}

impl<S: EventSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<S: EventSink> Runtime<S> {
    pub fn new(core: WatchCore, sink: S, options: RuntimeOptions, shutdown: Shutdown) -> Self {
        Self {
            core,
            sink,
            options,
            shutdown,
        }
    }

    /// Main loop.
    ///
    /// Each cycle: sleep, check shutdown, run the core cycle, report
    /// failures and back off if there were any. Returns the core (with its
    /// final tracked state) once shutdown has been observed.
    pub async fn run(mut self) -> WatchCore {
        info!(
            interval = ?self.options.interval,
            backoff = ?self.options.backoff,
            "dirwatch runtime started"
        );

        loop {
            let interval = self.options.interval;
            self.pause(interval).await;

            if self.shutdown.is_requested() {
                info!("shutdown requested; stopping watch loop");
                break;
            }

            // A panic inside a cycle is reported like any other failure.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                self.core.run_cycle(&mut self.sink)
            }))
            .unwrap_or_else(|payload| {
                Err(DirwatchError::CyclePanicked(panic_message(payload.as_ref())))
            });

            let failed = match outcome {
                Ok(report) => {
                    debug!(
                        added = report.added,
                        removed = report.removed,
                        scanned = report.scanned,
                        matches = report.matches,
                        failures = report.failures.len(),
                        "cycle complete"
                    );
                    let failed = !report.failures.is_empty();
                    for err in report.failures {
                        self.report_error(err);
                    }
                    failed
                }
                Err(err) => {
                    self.report_error(err);
                    true
                }
            };

            if failed {
                let backoff = self.options.backoff;
                info!(?backoff, "retrying after backoff");
                self.pause(backoff).await;
            }
        }

        info!("runtime exiting");
        self.core
    }

    fn report_error(&mut self, err: DirwatchError) {
        let kind = err.kind();
        let message = match kind {
            ErrorKind::Io => err.to_string(),
            ErrorKind::Unexpected => format!("{err:?}"),
        };
        self.sink.emit(WatchEvent::Error { kind, message });
    }

    /// Sleep for `duration`, waking early if shutdown is requested.
    async fn pause(&mut self, duration: Duration) {
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            _ = self.shutdown.requested() => {
                debug!("pause cut short by shutdown request");
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
