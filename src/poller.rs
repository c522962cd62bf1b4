//! Change-detecting store poller
//!
//! Each display surface owns one `ChangePoller`. The poller fetches the
//! timer record on a fixed cadence and invokes its callback only when the
//! store-assigned `updated_at` change token differs from the last accepted
//! one, so callers never re-render on a poll that observed nothing new.

use std::{future::Future, time::Duration};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::state::TimerRecord;

/// Change-token dedup, kept separate from the polling loop. Accepts a
/// record iff its token differs from the last accepted one; the very first
/// record always passes.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_token: Option<DateTime<Utc>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record when its change token is new, None when it
    /// matches the last accepted token.
    pub fn accept(&mut self, record: TimerRecord) -> Option<TimerRecord> {
        if self.last_token == Some(record.updated_at) {
            return None;
        }
        self.last_token = Some(record.updated_at);
        Some(record)
    }
}

/// A running poller task. Fetches are serialized: the next one is scheduled
/// `interval` after the previous one completes, never concurrently, so
/// callbacks can never arrive out of arrival order.
pub struct ChangePoller {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ChangePoller {
    /// Spawn a poller. `fetch` yields `None` for any failed cycle
    /// (transport error, store rejection, malformed body); such cycles
    /// neither advance the token nor invoke `on_change`.
    ///
    /// The first fetch fires immediately, and its record (if any) always
    /// counts as a change.
    pub fn spawn<F, Fut, C>(interval: Duration, mut fetch: F, mut on_change: C) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Option<TimerRecord>> + Send,
        C: FnMut(TimerRecord) + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut tracker = ChangeTracker::new();
            loop {
                tokio::select! {
                    fetched = fetch() => {
                        // A result that lands after stop() must be discarded.
                        if *shutdown_rx.borrow() {
                            break;
                        }
                        match fetched {
                            Some(record) => {
                                if let Some(changed) = tracker.accept(record) {
                                    debug!("Change token advanced to {}", changed.updated_at);
                                    on_change(changed);
                                }
                            }
                            None => debug!("No record this cycle, retrying next interval"),
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = shutdown_rx.changed() => break,
                }
            }
            debug!("Poller stopped");
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Cancel future fetches. Idempotent; safe to call when the task has
    /// already stopped.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Stop and wait for the task to wind down.
    ///
    /// Dropping the poller without calling this also stops the task: the
    /// loop breaks as soon as its end of the shutdown channel closes.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.handle.await;
    }
}
