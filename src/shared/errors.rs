//! Strict error handling with CommandError enum
//!
//! All errors are serializable for IPC communication with the widget frontend.
//! Unparseable numeric input is not an error: it resolves to an empty result.

use thiserror::Error;
use serde::Serialize;

/// Converter command errors
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CommandError {
    /// Unit identifier not present in the registry
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Invalid input or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Converter settings could not be parsed or are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Managed session state could not be accessed
    #[error("State unavailable: {0}")]
    StateUnavailable(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Config(format!("JSON error: {}", err))
    }
}

// Helper type alias for command results
pub type CommandResult<T> = Result<T, CommandError>;

// Error message constants
pub const ERR_MISSING_TEXT_PARAM: &str = "Missing 'text' parameter";
