//! # Client Constants
//!
//! Defaults baked into the client binary. Every value here can be
//! overridden through [`crate::ClientConfig`] except the key codes, which
//! are part of the command contract with the movement layer.

// =============================================================================
// VIEW DEFAULTS
// =============================================================================

/// How long a kill-feed message stays visible (milliseconds).
pub const DEFAULT_KILL_MESSAGE_DURATION_MS: u64 = 5_000;

/// Longest player name accepted by the name editor (characters).
pub const DEFAULT_MAX_NAME_LENGTH: usize = 10;

/// Number of notifications kept in the notification panel.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 50;

/// Capacity of the inbound game-event bus.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

// =============================================================================
// KEY CODES
// =============================================================================

/// Enter / Return.
pub const ENTER_KEYCODE: u32 = 13;

/// Space bar.
pub const SPACE_BAR_KEYCODE: u32 = 32;

/// Left arrow.
pub const LEFT_ARROW_KEYCODE: u32 = 37;

/// Up arrow.
pub const UP_ARROW_KEYCODE: u32 = 38;

/// Right arrow.
pub const RIGHT_ARROW_KEYCODE: u32 = 39;

/// Down arrow.
pub const DOWN_ARROW_KEYCODE: u32 = 40;
