//! Error types for the food API client and the input form.
//!
//! `NotFound` gets a dedicated variant so callers can tell "the record does
//! not exist" from "the store returned an unexpected status". Every other
//! non-2xx response lands in `Http` with the raw status and body.

use thiserror::Error;

/// Errors returned by `FoodClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store returned 404.
    #[error("resource not found")]
    NotFound,

    /// The store returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (refused connection, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// A required form field was empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` must not be empty")]
pub struct ValidationError {
    pub field: &'static str,
}
