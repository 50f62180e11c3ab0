//! Background polling tasks publishing into snapshots.
//!
//! A poller calls its fetch function, publishes the result on success
//! and then waits: the update interval after a success, the retry
//! interval after a failure. Waits are sliced so a shared cancel flag
//! stops the thread within one slice.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use embassy_time::Duration;
use log::{info, warn};

use crate::frame_scheduler::to_std_duration;
use crate::snapshot::Snapshot;

/// Granularity of cancellation checks while waiting
pub const CANCEL_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// Two-interval refresh policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Wait after a successful fetch
    pub update_interval: Duration,
    /// Wait after a failed fetch
    pub retry_interval: Duration,
}

impl PollPolicy {
    pub const fn new(update_interval: Duration, retry_interval: Duration) -> Self {
        Self {
            update_interval,
            retry_interval,
        }
    }

    pub const fn next_delay(&self, succeeded: bool) -> Duration {
        if succeeded {
            self.update_interval
        } else {
            self.retry_interval
        }
    }
}

/// Run one fetch and publish its result
///
/// Returns whether the fetch succeeded.
pub fn poll_once<T, E, F>(name: &str, target: &Snapshot<T>, fetch: &mut F) -> bool
where
    E: core::fmt::Display,
    F: FnMut() -> Result<T, E>,
{
    match fetch() {
        Ok(value) => {
            target.publish(value);
            info!("[Poller] {name}: published new value");
            true
        }
        Err(err) => {
            warn!("[Poller] {name}: fetch failed: {err}");
            false
        }
    }
}

/// Spawn a named polling thread
///
/// The thread exits once `cancel` is set; it is never joined by the
/// render loop.
pub fn spawn_poller<T, E, F>(
    name: &'static str,
    policy: PollPolicy,
    target: Arc<Snapshot<T>>,
    cancel: Arc<AtomicBool>,
    mut fetch: F,
) -> std::io::Result<JoinHandle<()>>
where
    T: Send + 'static,
    E: core::fmt::Display,
    F: FnMut() -> Result<T, E> + Send + 'static,
{
    thread::Builder::new()
        .name(name.to_owned())
        .spawn(move || {
            info!("[Poller] {name}: started");
            while !cancel.load(Ordering::Relaxed) {
                let succeeded = poll_once(name, &target, &mut fetch);
                wait_cancellable(policy.next_delay(succeeded), &cancel);
            }
            info!("[Poller] {name}: stopped");
        })
}

/// Sleep for `duration`, returning early once `cancel` is set
pub fn wait_cancellable(duration: Duration, cancel: &AtomicBool) {
    let mut remaining = duration;
    while remaining.as_ticks() > 0 && !cancel.load(Ordering::Relaxed) {
        let slice = remaining.min(CANCEL_CHECK_INTERVAL);
        thread::sleep(to_std_duration(slice));
        remaining = remaining.checked_sub(slice).unwrap_or(Duration::MIN);
    }
}
