//! # Media Ingestion
//!
//! Turns picked files into decoded images without blocking input.
//!
//! ```text
//! file picked ─→ ingest() ─→ tokio task ─→ spawn_blocking(decode)
//!                                                │
//!      hooks.on_*_uploaded ←─ GameView::pump ←─ UiEvent::ImageDecoded
//! ```
//!
//! Each pick is independent: a slow decode that finishes after a newer
//! pick for the same slot still reports. Failed decodes are logged and
//! never reported.

use image::DynamicImage;
use tokio::runtime::Handle;

use crate::error::DecodeError;
use crate::event::{UiEvent, UiEventSender};
use crate::hooks::GameHooks;
use crate::surface::{UploadRequest, UploadSlot};

/// Decodes image bytes on the blocking pool.
///
/// The format is sniffed from the data, not taken from the declared type.
///
/// # Errors
///
/// [`DecodeError::Image`] for unsupported or corrupt data,
/// [`DecodeError::Cancelled`] if the blocking task died.
pub async fn decode_image(bytes: Vec<u8>) -> Result<DynamicImage, DecodeError> {
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|_| DecodeError::Cancelled)?;
    Ok(decoded?)
}

/// Hands a decoded image to the hook for its slot.
pub fn deliver<H: GameHooks + ?Sized>(
    hooks: &mut H,
    slot: UploadSlot,
    image: DynamicImage,
    mime_type: &str,
) {
    match slot {
        UploadSlot::Background => hooks.on_background_image_uploaded(image, mime_type),
        UploadSlot::Player => hooks.on_image_uploaded(image, mime_type),
    }
}

/// Starts decodes for both upload slots.
#[derive(Debug, Clone)]
pub struct MediaIngestor {
    runtime: Handle,
    events: UiEventSender,
}

impl MediaIngestor {
    /// Creates an ingestor spawning onto `runtime`.
    #[must_use]
    pub fn new(runtime: Handle, events: UiEventSender) -> Self {
        Self { runtime, events }
    }

    /// Starts decoding the file picked for `slot`.
    ///
    /// Returns false (and does nothing) when the selection was cleared.
    pub fn ingest(&self, slot: UploadSlot, file: Option<UploadRequest>) -> bool {
        let Some(UploadRequest { bytes, mime_type }) = file else {
            tracing::debug!("{:?} upload cleared, nothing to decode", slot);
            return false;
        };

        tracing::debug!("Decoding {:?} upload ({}, {} bytes)", slot, mime_type, bytes.len());
        let events = self.events.clone();
        self.runtime.spawn(async move {
            match decode_image(bytes).await {
                Ok(image) => {
                    events.send(UiEvent::ImageDecoded {
                        slot,
                        image,
                        mime_type,
                    });
                }
                Err(err) => {
                    tracing::warn!("Dropping {:?} upload ({}): {}", slot, mime_type, err);
                }
            }
        });
        true
    }
}
