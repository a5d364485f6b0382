//! Call debouncing
//!
//! Coalesces bursts of calls into a single delayed invocation carrying
//! the most recent arguments. Used to rate-limit save-draft and search
//! calls triggered from the UI.
//!
//! A debounced task is either idle or has exactly one pending invocation.
//! Each call replaces the pending value and restarts the countdown
//! (last-write-wins, no queuing of intermediate calls). `cancel` discards
//! the pending invocation, `flush` runs it immediately; both are no-ops
//! when idle.
//!
//! All state lives behind one mutex, so a shared instance is safe to call
//! from multiple threads. Timers are tokio tasks: `call` must run inside
//! a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::trace;

/// Pending-invocation state: captured value plus the armed timer.
struct DebounceState<T> {
    /// Value captured by the most recent call; None when idle
    pending: Option<T>,
    /// Bumped on every arm, cancel, and flush; a timer task only fires
    /// while its generation still matches
    generation: u64,
    /// Handle of the armed timer task
    timer: Option<JoinHandle<()>>,
}

/// Debounced task wrapping a callback and a delay.
///
/// Clones share the same pending state and timer, like handles to a
/// single logical task. Dropping a handle does not cancel a pending
/// invocation; use [`Debouncer::cancel`] for that.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    state: Arc<Mutex<DebounceState<T>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debounced task invoking `callback` after `delay` of quiet.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            state: Arc::new(Mutex::new(DebounceState {
                pending: None,
                generation: 0,
                timer: None,
            })),
        }
    }

    /// Schedule an invocation with `value`, replacing any pending one.
    ///
    /// Disarms the current timer, captures `value` (last-write-wins), and
    /// arms a fresh timer for the full delay. Returns immediately; the
    /// callback's return value is never surfaced.
    pub fn call(&self, value: T) {
        let mut state = self.state.lock();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.pending = Some(value);
        state.generation += 1;

        let generation = state.generation;
        let delay = self.delay;
        let callback = Arc::clone(&self.callback);
        let shared = Arc::clone(&self.state);
        state.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let value = {
                let mut state = shared.lock();
                if state.generation != generation {
                    // A newer call, cancel, or flush superseded this timer
                    return;
                }
                state.timer = None;
                state.pending.take()
            };
            // Idle transition happened above, so a callback that calls
            // back into this instance behaves as a fresh idle-state call
            if let Some(value) = value {
                trace!("debounce timer fired");
                callback(value);
            }
        }));
    }

    /// Discard any pending invocation without invoking the callback.
    ///
    /// No-op when idle.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        if state.pending.take().is_some() {
            trace!("pending invocation cancelled");
        }
        state.generation += 1;
    }

    /// Invoke any pending invocation immediately, ahead of its timer.
    ///
    /// The invalidated timer never fires a second time. No-op when idle.
    /// A panic from the callback propagates to the caller.
    pub fn flush(&self) {
        let value = {
            let mut state = self.state.lock();
            if let Some(timer) = state.timer.take() {
                timer.abort();
            }
            state.generation += 1;
            state.pending.take()
        };
        if let Some(value) = value {
            trace!("pending invocation flushed");
            (self.callback)(value);
        }
    }

    /// Check whether an invocation is currently pending.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Get the configured quiet-period delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T: Send + 'static> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            callback: Arc::clone(&self.callback),
            state: Arc::clone(&self.state),
        }
    }
}
