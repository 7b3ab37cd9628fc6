//! The repeating poll cycle.
//!
//! A [`Poller`] owns a [`SnapshotSource`] and the [`ViewBindings`] it
//! writes to. [`Poller::spawn`] moves it onto a tokio task and returns a
//! [`PollerHandle`]; stopping or dropping the handle ends the task.
//!
//! ```text
//!   spawn ──(interval)──▶ cycle ──(interval)──▶ cycle ──▶ ...
//!                           │
//!                           ├─ Ok(snapshot) ─▶ apply_snapshot
//!                           └─ Err(e) ───────▶ log, display untouched
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{watch, Notify};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::error::PollError;
use crate::source::SnapshotSource;
use crate::view::{apply_snapshot, ViewBindings};

/// Time between cycles unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Running record of how the feed is doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStatus {
    /// Cycles completed, successful or not.
    pub cycles: u64,
    /// Failed cycles in total.
    pub failures: u64,
    /// Failed cycles since the last success.
    pub consecutive_failures: u64,
    /// When a snapshot was last applied.
    pub last_success: Option<Instant>,
    /// Message from the most recent failure; cleared by a success.
    pub last_error: Option<String>,
}

impl PollStatus {
    /// Whether at least one snapshot has been applied.
    pub fn has_data(&self) -> bool {
        self.last_success.is_some()
    }
}

/// Fetches snapshots and applies them to the bound view.
#[derive(Debug)]
pub struct Poller {
    source: Box<dyn SnapshotSource>,
    bindings: ViewBindings,
    interval: Duration,
    status: watch::Sender<PollStatus>,
}

impl Poller {
    /// Create a poller with the default one-second interval.
    pub fn new(source: Box<dyn SnapshotSource>, bindings: ViewBindings) -> Self {
        let (status, _) = watch::channel(PollStatus::default());
        Self {
            source,
            bindings,
            interval: DEFAULT_INTERVAL,
            status,
        }
    }

    /// Set the time between cycles. A zero interval is raised to 1ms.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Subscribe to status updates, published after every cycle.
    pub fn status(&self) -> watch::Receiver<PollStatus> {
        self.status.subscribe()
    }

    /// Run a single cycle now.
    ///
    /// On success the snapshot is applied to the bindings. On failure the
    /// error is logged and returned, and the bindings are not touched.
    pub async fn poll_once(&mut self) -> Result<(), PollError> {
        match self.source.fetch().await {
            Ok(snapshot) => {
                apply_snapshot(&self.bindings, &snapshot);
                debug!(
                    posture = ?snapshot.posture,
                    tilt = ?snapshot.tilt,
                    distance = ?snapshot.distance,
                    blink = %snapshot.blink_text(),
                    "Applied snapshot"
                );
                self.status.send_modify(|s| {
                    s.cycles += 1;
                    s.consecutive_failures = 0;
                    s.last_success = Some(Instant::now());
                    s.last_error = None;
                });
                Ok(())
            }
            Err(e) => {
                error!(source = %self.source.description(), error = %e, "Error fetching data");
                self.status.send_modify(|s| {
                    s.cycles += 1;
                    s.failures += 1;
                    s.consecutive_failures += 1;
                    s.last_error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }

    /// Move the poller onto a background task.
    ///
    /// The first cycle runs one interval from now. Must be called from
    /// within a tokio runtime.
    pub fn spawn(mut self) -> PollerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let refresh = Arc::new(Notify::new());
        let status = self.status();
        let trigger = refresh.clone();

        let task = tokio::spawn(async move {
            info!(
                source = %self.source.description(),
                interval_ms = self.interval.as_millis() as u64,
                "Poller started"
            );

            let start = time::Instant::now() + self.interval;
            let mut ticker = time::interval_at(start, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {}
                    _ = trigger.notified() => {}
                }

                // A stop request abandons an in-flight fetch; nothing is applied.
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = self.poll_once() => {}
                }
            }

            info!(source = %self.source.description(), "Poller stopped");
        });

        PollerHandle {
            shutdown: shutdown_tx,
            control: PollerControl { refresh, status },
            task,
        }
    }
}

/// The parts of a running poller the UI needs: status and a refresh trigger.
#[derive(Debug, Clone)]
pub struct PollerControl {
    refresh: Arc<Notify>,
    status: watch::Receiver<PollStatus>,
}

impl PollerControl {
    /// Ask for a cycle now, without waiting for the next tick.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// The status as of the last completed cycle.
    pub fn status(&self) -> PollStatus {
        self.status.borrow().clone()
    }

    /// A receiver that is notified after every cycle.
    pub fn subscribe(&self) -> watch::Receiver<PollStatus> {
        self.status.clone()
    }
}

/// Owner of a running poller task.
///
/// Dropping the handle stops the task at its next await point; use
/// [`PollerHandle::stop`] to wait for it to finish.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    control: PollerControl,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn control(&self) -> PollerControl {
        self.control.clone()
    }

    /// Ask for a cycle now, without waiting for the next tick.
    pub fn refresh(&self) {
        self.control.refresh();
    }

    /// A receiver that is notified after every cycle.
    pub fn status(&self) -> watch::Receiver<PollStatus> {
        self.control.subscribe()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the poller and wait for its task to end.
    pub async fn stop(self) -> Result<(), JoinError> {
        let _ = self.shutdown.send(true);
        self.task.await
    }
}
