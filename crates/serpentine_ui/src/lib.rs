//! # Serpentine UI
//!
//! Input & transient-display coordinator for the Serpentine client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        GAME VIEW                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Physical keys ─┐                                            │
//! │                 ├─→ Input Router ─→ on_key_command(code)     │
//! │  On-screen  ────┘        │                                   │
//! │  arrows                  └─→ Name Editor (owns Mode)         │
//! │                                                              │
//! │  Game events ─→ Kill Feed / Leaderboard / Notifications      │
//! │                          ↓                                   │
//! │                   Display Surface                            │
//! │                                                              │
//! │  File picks ─→ Media Ingestor ─(blocking pool)─→ UiEvent     │
//! │  Kill feed  ─→ Expiry Timer ──(tokio task)────→ UiEvent      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything that touches the [`DisplaySurface`] or the [`GameHooks`]
//! runs on the thread that owns the [`GameView`]. Spawned tasks only post
//! [`UiEvent`]s back, which the view applies in [`GameView::pump`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod event;
pub mod hooks;
pub mod input;
pub mod leaderboard;
pub mod markup;
pub mod media;
pub mod messages;
pub mod name_edit;
pub mod notifications;
pub mod play_toggle;
pub mod router;
pub mod surface;
pub mod timer;
pub mod view;

pub use error::{DecodeError, NameError, UiError, UiResult};
pub use event::{UiEvent, UiEventSender};
pub use hooks::GameHooks;
pub use input::{Control, Direction, EventOrigin, KeyCode, KeyEvent, Modifiers};
pub use media::{decode_image, MediaIngestor};
pub use messages::KillFeed;
pub use name_edit::{validate_name, Mode, NameEditor};
pub use notifications::NotificationLog;
pub use play_toggle::{PlayToggle, PLAY_LABEL, WATCH_LABEL};
pub use router::{InputRouter, KeyDisposition};
pub use surface::{DisplaySurface, MemorySurface, Region, UploadRequest, UploadSlot};
pub use timer::{ExpiryTimer, TimerToken};
pub use view::GameView;
