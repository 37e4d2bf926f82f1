//! Unified error type for gridlift operations.
//!
//! Setup-phase variants (`Config`, `Source`, `Authentication`, `NotFound`)
//! abort the whole run before any transfer starts. `RemoteService` is scoped
//! to the sheet whose transfer raised it and ends up in that sheet's manifest
//! entry rather than aborting siblings.

use thiserror::Error;

/// Main error type for gridlift operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file missing, malformed, or incomplete
    #[error("config error: {0}")]
    Config(String),

    /// Source workbook missing or unreadable
    #[error("source error: {0}")]
    Source(String),

    /// Credential missing or invalid, or the service rejected it
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Destination spreadsheet id did not resolve
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport or service failure while talking to the destination
    #[error("remote service error: {0}")]
    RemoteService(String),

    /// Programming-contract violation, e.g. a negative column index
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for gridlift operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::RemoteService(error.to_string())
    }
}
