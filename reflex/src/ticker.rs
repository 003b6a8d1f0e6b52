//! Periodic clock updates with cancel-on-drop.

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::task::JoinHandle;

use crate::state::State;

/// A periodic callback driving a [`State`] clock.
///
/// Once per tick the current time is written into an isolated state cell;
/// bound presentation picks it up through the usual dirty flag. The task
/// is aborted on [`stop`](Ticker::stop) or drop, so tearing down the view
/// unregisters the callback.
#[derive(Debug)]
pub struct Ticker {
    now: State<DateTime<Utc>>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Start ticking with the given period. Requires a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let now = State::new(Utc::now());
        let state = now.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // First tick completes immediately; skip it so the initial
            // value stands until one full period elapses.
            interval.tick().await;
            loop {
                interval.tick().await;
                state.set(Utc::now());
            }
        });
        debug!("ticker started with period {period:?}");
        Self { now, handle }
    }

    /// The most recent tick time.
    pub fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    /// The underlying state cell, for bindings and memos.
    pub fn state(&self) -> State<DateTime<Utc>> {
        self.now.clone()
    }

    /// Stop ticking. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
