//! Error types for docfox

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("Apifox API call failed: {status} - {body}")]
    Rejection { status: u16, body: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("timed out after {0}s waiting for Apifox")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
