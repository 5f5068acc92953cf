//! # Debounced Dispatch
//!
//! `schedule()` runs a future after a delay and hands back a `ScheduledTask`
//! that can cancel it until the delay elapses. `Debouncer` keeps at most one
//! such task pending and replaces it on every `dispatch()`, so only the last
//! call inside a quiet window reaches the wrapped function.
//!
//! Cancellation only covers the waiting period. Once the delay elapses the
//! work is detached onto its own task, so a newer dispatch never aborts an
//! in-flight lookup.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use log::debug;
use tokio::task::AbortHandle;

/// Quiet period after the last keystroke before a lookup is dispatched.
pub const QUIET_WINDOW: Duration = Duration::from_millis(500);

type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Handle to work scheduled with [`schedule`].
#[derive(Debug)]
pub struct ScheduledTask {
    timer: AbortHandle,
}

impl ScheduledTask {
    /// Prevents the work from starting. No-op once it has started.
    pub fn cancel(&self) {
        self.timer.abort();
    }

    /// True once the delay elapsed (work handed off) or the task was cancelled.
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// Runs `work` after `delay` unless cancelled first. Must be called from
/// within a tokio runtime.
pub fn schedule<F>(delay: Duration, work: F) -> ScheduledTask
where
    F: Future<Output = ()> + Send + 'static,
{
    let timer = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tokio::spawn(work);
    });
    ScheduledTask {
        timer: timer.abort_handle(),
    }
}

/// Wraps an async function so that only the most recent call within
/// `delay` actually runs it.
pub struct Debouncer<T> {
    target: Box<dyn Fn(T) -> BoxFuture + Send + Sync>,
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl<T> Debouncer<T> {
    pub fn new<F, Fut>(delay: Duration, target: F) -> Self
    where
        T: 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            target: Box::new(move |arg| -> BoxFuture { Box::pin(target(arg)) }),
            delay,
            pending: None,
        }
    }

    /// Cancels any pending call and schedules `target(arg)` after the delay.
    pub fn dispatch(&mut self, arg: T) {
        if let Some(previous) = self.pending.take()
            && !previous.is_finished()
        {
            debug!("Superseding pending dispatch");
            previous.cancel();
        }
        let work = (self.target)(arg);
        self.pending = Some(schedule(self.delay, work));
    }

    /// Drops the pending call, if any, without scheduling a new one.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
