//! Crate-level error types.

use std::fmt;

/// Errors produced by the feedframe crate.
///
/// Gesture and transition requests never fail with an error: a request
/// whose precondition does not hold is simply not started. Errors are
/// reserved for configuration and host-supplied geometry.
#[derive(Debug)]
pub enum FeedFrameError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the engine cannot run with.
    InvalidOptions(String),
    /// Frame side length was not a positive finite number of pixels.
    InvalidFrameSize(f32),
}

impl fmt::Display for FeedFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::InvalidFrameSize(size) => {
                write!(f, "invalid frame size: {size}")
            }
        }
    }
}

impl std::error::Error for FeedFrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FeedFrameError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
