// src/shutdown.rs

//! Shutdown signalling between the OS signal listener and the watch loop.
//!
//! One [`ShutdownTrigger`] (the writer) and one [`Shutdown`] (the reader)
//! share a `watch` channel holding a boolean that starts `false` and is only
//! ever flipped to `true`.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, warn};

/// Create a connected trigger/receiver pair.
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

/// Write side: requests shutdown.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Request shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Read side, owned by the watch loop.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// Non-blocking check, used at the top of every cycle.
    pub fn is_requested(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been requested.
    ///
    /// If the trigger is dropped without firing, this never resolves.
    pub async fn requested(&mut self) {
        if self.rx.wait_for(|stop| *stop).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Spawn a task that fires `trigger` on SIGINT or SIGTERM.
pub fn spawn_signal_listener(trigger: ShutdownTrigger) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                warn!(signal = name, "received signal; stopping after the current cycle");
                trigger.trigger();
            }
            Err(e) => {
                error!("failed to listen for shutdown signals: {e}");
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
