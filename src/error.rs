// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names the pipeline stage that failed and why. Stages never
//! recover from each other's errors; the batch driver is the only place an
//! `AppError` is caught and reported.

use std::fmt;
use thiserror::Error;

/// Transport failures as a typed vocabulary.
///
/// The portal answers with plain HTML, so there is no error body worth
/// parsing. What matters is whether the request got an answer at all and,
/// if so, which status came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The portal answered with something other than 200 OK
    HttpStatus(u16),
    /// No answer within the configured request timeout
    TimedOut,
    /// The connection could not be established
    Connection(String),
    /// The response body could not be read or decoded
    Body(String),
}

impl TransportFailure {
    /// Classifies a reqwest error into the transport vocabulary.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimedOut
        } else if let Some(status) = err.status() {
            Self::HttpStatus(status.as_u16())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP status {}", code),
            Self::TimedOut => write!(f, "request timed out"),
            Self::Connection(cause) => write!(f, "connection failed: {}", cause),
            Self::Body(cause) => write!(f, "unreadable response body: {}", cause),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid API number {input:?}: expected 10, 12 or 14 digits, got {digits}")]
    InvalidIdentifier { input: String, digits: usize },

    #[error("Portal request to {url} failed: {failure}")]
    Transport {
        url: String,
        failure: TransportFailure,
    },

    #[error("Could not find {0} in portal response")]
    Extraction(&'static str),

    #[error("Unsupported well type: {0:?}")]
    InvalidWellType(String),

    #[error("Production report contained no monthly rows")]
    EmptyReport,

    #[error("Malformed production report: {0}")]
    MalformedReport(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport {
            url: err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string()),
            failure: TransportFailure::from_reqwest(&err),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::MalformedReport(err.to_string())
    }
}
