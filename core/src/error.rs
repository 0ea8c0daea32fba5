//! Error types for the posts client.
//!
//! # Design
//! `HttpStatus` covers every response outside the 2xx range and keeps only
//! the status code; the body of an error response is never read. Everything
//! that stops a request from producing a usable JSON value ends up in one of
//! the remaining variants. None of these escape `RequestExecutor`, which
//! turns each one into a `ResponseOutcome::Failure`.

use thiserror::Error;

/// The transport could not complete the round-trip.
///
/// Displays as the underlying error text, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Errors produced while building a request or interpreting a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside [200, 300).
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 2xx response whose body is not valid JSON.
    ///
    /// Unlike `Transport`, this keeps the status code: a response did
    /// arrive, only its body was unusable.
    #[error("invalid JSON response: {message}")]
    Deserialization { status: u16, message: String },

    #[error("could not encode request body: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Status code of the response that caused the error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status } | ApiError::Deserialization { status, .. } => {
                Some(*status)
            }
            ApiError::Transport(_) | ApiError::Serialization(_) => None,
        }
    }
}
