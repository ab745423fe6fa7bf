use thiserror::Error;

use crate::schema::SchemaViolation;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Completion error: {0}")]
    Completion(String),

    /// The completion service answered, but the text is not a JSON document.
    #[error("Unparseable completion response: {0}")]
    Parse(String),

    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("Missing input: {0}")]
    EmptyInput(&'static str),

    /// The view already has a request outstanding.
    #[error("A request is already in flight")]
    InFlight,

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures that happened before any usable response text was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Completion(_))
    }

    /// True when the service answered but the payload could not be trusted.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::Schema(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
