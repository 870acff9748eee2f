//! # Game Event Bus
//!
//! Bounded channel carrying [`GameEvent`]s from the network layer to the
//! frame that owns the view.
//!
//! ```text
//! network task ──send()──→ [ capacity ] ──drain()──→ ViewDriver::frame
//! ```
//!
//! Producers never block: when the view falls behind, new events are
//! dropped and logged rather than stalling the network layer.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serpentine_shared::GameEvent;

/// Creates a bus holding at most `capacity` undelivered events.
///
/// A `capacity` of zero makes every send fail; [`ClientConfig::validate`]
/// rejects it.
///
/// [`ClientConfig::validate`]: serpentine_shared::ClientConfig::validate
#[must_use]
pub fn channel(capacity: usize) -> (EventSender, EventReceiver) {
    let (sender, receiver) = bounded(capacity);
    (EventSender { sender }, EventReceiver { receiver })
}

/// Producer side, handed to the network layer. Clone per producer.
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Queues an event without waiting.
    ///
    /// Returns `false` if it was dropped: the bus is full or the view is
    /// gone.
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    capacity = ?self.sender.capacity(),
                    kill_feed = event.is_kill_feed(),
                    "Game event bus full, dropping event"
                );
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("Game event bus disconnected");
                false
            }
        }
    }
}

/// Consumer side, owned by the [`crate::ViewDriver`].
#[derive(Debug)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Yields every event queued so far, oldest first. Never waits.
    pub fn drain(&self) -> impl Iterator<Item = GameEvent> + '_ {
        self.receiver.try_iter()
    }
}
