//! # Client Configuration
//!
//! Loaded once at startup from TOML. Any key left out falls back to the
//! defaults in [`crate::constants`].
//!
//! ```toml
//! kill_message_duration_ms = 5000
//! max_name_length = 10
//! max_notifications = 50
//! event_capacity = 1024
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EVENT_CAPACITY, DEFAULT_KILL_MESSAGE_DURATION_MS, DEFAULT_MAX_NAME_LENGTH,
    DEFAULT_MAX_NOTIFICATIONS,
};
use crate::error::{ConfigError, ConfigResult};

/// Tunables consumed by the client view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// How long a kill-feed message stays on screen (milliseconds).
    pub kill_message_duration_ms: u64,
    /// Longest accepted player name (characters).
    pub max_name_length: usize,
    /// Notifications kept before the oldest is dropped.
    pub max_notifications: usize,
    /// Capacity of the inbound game-event bus.
    pub event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            kill_message_duration_ms: DEFAULT_KILL_MESSAGE_DURATION_MS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values that parse but cannot be used.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Rejects values the view cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.kill_message_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "kill_message_duration_ms must be greater than zero".into(),
            ));
        }
        if self.max_name_length == 0 {
            return Err(ConfigError::Invalid(
                "max_name_length must be greater than zero".into(),
            ));
        }
        if self.max_notifications == 0 {
            return Err(ConfigError::Invalid(
                "max_notifications must be greater than zero".into(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid(
                "event_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Kill-feed display window as a [`Duration`].
    #[must_use]
    pub const fn kill_message_duration(&self) -> Duration {
        Duration::from_millis(self.kill_message_duration_ms)
    }
}
