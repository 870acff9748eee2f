//! # Serpentine Shared
//!
//! Plain data used by both the client view and the game/network layer.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - an async runtime
//! - image decoding
//! - anything that touches the display surface
//!
//! If you need any of those, put them in `serpentine_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod stats;

pub use config::ClientConfig;
pub use constants::{
    DEFAULT_EVENT_CAPACITY, DEFAULT_KILL_MESSAGE_DURATION_MS, DEFAULT_MAX_NAME_LENGTH,
    DEFAULT_MAX_NOTIFICATIONS,
};
pub use error::{ConfigError, ConfigResult};
pub use events::GameEvent;
pub use stats::{PlayerStatEntry, VictimSummary};
