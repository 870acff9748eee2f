//! # Serpentine
//!
//! Client view for the Serpentine arcade game.
//!
//! ```text
//! Network layer ──GameEvent──→ event bus ─┐
//!                                          ├─→ ViewDriver::frame() ─→ GameView
//! Timers / decodes ──UiEvent──────────────┘
//! ```
//!
//! The network layer holds an [`EventSender`]; the frame loop owns the
//! [`ViewDriver`] and calls [`ViewDriver::frame`] once per frame.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod driver;
pub mod events;

pub use driver::{FrameStats, ViewDriver};
pub use events::{EventReceiver, EventSender};

pub use serpentine_shared::{ClientConfig, GameEvent};
pub use serpentine_ui::{
    Control, Direction, DisplaySurface, GameHooks, GameView, KeyCode, KeyDisposition, KeyEvent,
    MemorySurface, Mode, Region, UiError, UiResult, UploadRequest, UploadSlot,
};
