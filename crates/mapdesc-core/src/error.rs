use thiserror::Error;

use crate::tier::Tier;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid beatmap URL: {0}")]
    InvalidUrl(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("HTTP {status} error: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No style entry for tier {0}")]
    MissingTierInfo(Tier),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Error::Http {
                status: status.as_u16(),
                message: e.to_string(),
            };
        }

        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Network(message)
    }
}
