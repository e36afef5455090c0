//! Error types shared by the Spotify client, the pipeline and the exporters.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type used across featcli.
pub type Result<T> = std::result::Result<T, Error>;

/// How the pipeline reacts to a failed unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network hiccups, timeouts, 429 and 5xx responses.
    Transient,
    /// Requests that will fail the same way again (4xx, undecodable payloads).
    Permanent,
    /// Nothing useful can happen afterwards (bad credentials, missing config).
    Fatal,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::Auth(_) | Error::Config(_) => Severity::Fatal,
            Error::Status { status, .. } => classify_status(*status),
            Error::Http(err) => {
                if let Some(status) = err.status() {
                    classify_status(status)
                } else if err.is_decode() {
                    Severity::Permanent
                } else {
                    Severity::Transient
                }
            }
            Error::Json(_) | Error::Csv(_) => Severity::Permanent,
            Error::Io(_) => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

fn classify_status(status: StatusCode) -> Severity {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Severity::Fatal
    } else if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Severity::Transient
    } else {
        Severity::Permanent
    }
}
