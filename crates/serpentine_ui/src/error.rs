//! # UI Error Types
//!
//! None of these reach the player as a failure. Name errors become the
//! inline warning, decode errors are logged and the upload is dropped.

use serpentine_shared::ConfigError;
use thiserror::Error;

/// Why a candidate player name was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Nothing left after trimming whitespace.
    #[error("player name is empty")]
    Empty,

    /// Longer than the configured maximum.
    #[error("player name is {length} characters, maximum is {max}")]
    TooLong {
        /// Length of the candidate (characters).
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Why an uploaded file did not produce an image.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The bytes are not a supported image.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// The decode task was dropped before finishing.
    #[error("decode task did not complete")]
    Cancelled,
}

/// Errors from setting up the view.
#[derive(Error, Debug)]
pub enum UiError {
    /// The view was created outside a tokio runtime.
    #[error("no tokio runtime available for timers and decoding")]
    NoRuntime,

    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for view setup.
pub type UiResult<T> = Result<T, UiError>;
