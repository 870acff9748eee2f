//! Single-slot, fire-once expiry timer.
//!
//! Arming always cancels whatever was armed before, so at most one timer
//! is pending at any instant. The fired token travels back through the
//! UI event channel; [`ExpiryTimer::fire`] tells the owner whether it is
//! still the current one.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::event::{UiEvent, UiEventSender};

/// Identifies one arming of an [`ExpiryTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Returns the raw sequence number.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct ArmedTimer {
    token: TimerToken,
    task: JoinHandle<()>,
}

/// Owned handle to at most one pending expiry.
#[derive(Debug)]
pub struct ExpiryTimer {
    runtime: Handle,
    events: UiEventSender,
    armed: Option<ArmedTimer>,
    next_token: u64,
}

impl ExpiryTimer {
    /// Creates an idle timer that spawns onto `runtime`.
    #[must_use]
    pub fn new(runtime: Handle, events: UiEventSender) -> Self {
        Self {
            runtime,
            events,
            armed: None,
            next_token: 0,
        }
    }

    /// Cancels any pending expiry and arms a new one.
    pub fn arm(&mut self, after: Duration) -> TimerToken {
        self.cancel();

        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);

        let deadline = Instant::now() + after;
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            events.send(UiEvent::MessageExpired(token));
        });

        self.armed = Some(ArmedTimer { token, task });
        token
    }

    /// Cancels the pending expiry. Returns true if one was armed.
    pub fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some(armed) => {
                armed.task.abort();
                true
            }
            None => false,
        }
    }

    /// Consumes a fired token.
    ///
    /// Returns true only for the currently armed token, which disarms the
    /// timer. Tokens from cancelled arms return false.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match &self.armed {
            Some(armed) if armed.token == token => {
                self.armed = None;
                true
            }
            _ => {
                tracing::debug!("Ignoring stale expiry token {}", token.raw());
                false
            }
        }
    }

    /// Returns true while an expiry is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
