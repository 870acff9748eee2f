//! Completions posted back to the UI thread.
//!
//! Timers and decodes run as tokio tasks. They never touch the surface;
//! they send a [`UiEvent`] and the owning [`crate::GameView`] applies it.

use image::DynamicImage;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::surface::UploadSlot;
use crate::timer::TimerToken;

/// Asynchronous completion waiting to be applied.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A kill-feed expiry timer fired.
    MessageExpired(TimerToken),

    /// An uploaded file finished decoding.
    ImageDecoded {
        /// Slot the file was picked for.
        slot: UploadSlot,
        /// Decoded image.
        image: DynamicImage,
        /// MIME type the file declared.
        mime_type: String,
    },
}

/// Creates a linked sender/receiver pair.
#[must_use]
pub fn channel() -> (UiEventSender, UnboundedReceiver<UiEvent>) {
    let (sender, receiver) = unbounded_channel();
    (UiEventSender { sender }, receiver)
}

/// Handle for posting completions (clone per task).
#[derive(Clone, Debug)]
pub struct UiEventSender {
    sender: UnboundedSender<UiEvent>,
}

impl UiEventSender {
    /// Posts an event.
    ///
    /// Returns `false` if the view has been dropped; the event is lost.
    #[inline]
    pub fn send(&self, event: UiEvent) -> bool {
        match self.sender.send(event) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("UI event dropped: view is gone");
                false
            }
        }
    }
}
