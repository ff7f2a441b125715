//! Error types for Opsconsole Core

use thiserror::Error;

/// Main error type for opsconsole operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Bus error: {0}")]
    Bus(#[from] BusError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Message bus errors
#[derive(Error, Debug)]
pub enum BusError {
    #[error("No live subscribers for topic: {0}")]
    NoSubscribers(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
