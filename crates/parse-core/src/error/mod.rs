//! Error types for Parse operations.
//!
//! Every failure surfaces as a single [`Error`]. Failures reported by the
//! service itself are normalized into a [`ServiceError`] through the fixed
//! catalog in [`service`], so callers can match on typed values instead of
//! message text.

mod service;

use serde::Deserialize;
use thiserror::Error;

pub use service::ServiceError;

/// The unified error type for Parse operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An error reported by the service, either a catalog entry or the
    /// verbatim code and message for codes the catalog does not know.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The service rejected the call without producing a body.
    #[error("unauthorized")]
    Unauthorized,

    /// The request could not be completed (DNS, TLS, connection, timeout).
    #[error("connection failed: {0}")]
    Transport(#[from] TransportError),

    /// A successful response could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Local validation rejected the input before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The operation needs the master key attached to the client.
    #[error("operation requires the master key")]
    RequiresMasterKey,

    /// The blocking client could not start its runtime.
    #[error("async runtime unavailable: {message}")]
    Runtime { message: String },
}

impl Error {
    /// Returns the wire error code this failure corresponds to.
    ///
    /// Transport failures map to [`ServiceError::CONNECTION_FAILED`] and
    /// decode failures to [`ServiceError::UNKNOWN`]. Purely local failures
    /// have no code.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Service(err) => Some(err.code),
            Error::Transport(_) => Some(ServiceError::CONNECTION_FAILED.code),
            Error::Decode(_) => Some(ServiceError::UNKNOWN.code),
            Error::Unauthorized
            | Error::InvalidInput(_)
            | Error::RequiresMasterKey
            | Error::Runtime { .. } => None,
        }
    }

    /// Returns the service error, if this is one.
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other HTTP-level failure (body read, redirect loop, client setup).
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Failures decoding a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The `{"results": ...}` envelope was missing or malformed.
    #[error("malformed results envelope: {message}")]
    Envelope { message: String },

    /// The envelope was fine but its contents did not fit the destination.
    #[error("results do not match the destination type: {message}")]
    Payload { message: String },

    /// A non-query response body was malformed.
    #[error("malformed response body: {message}")]
    Body { message: String },

    /// A record lacks a field pagination depends on.
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
}

impl DecodeError {
    pub fn envelope(err: &serde_json::Error) -> Self {
        DecodeError::Envelope {
            message: err.to_string(),
        }
    }

    pub fn payload(err: &serde_json::Error) -> Self {
        DecodeError::Payload {
            message: err.to_string(),
        }
    }

    pub fn body(err: &serde_json::Error) -> Self {
        DecodeError::Body {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Invalid class name.
    #[error("invalid class name '{value}': {reason}")]
    ClassName { value: String, reason: String },

    /// Invalid API URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// The object has not been saved yet.
    #[error("object has no objectId")]
    MissingObjectId,

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

/// Wire shape of an error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i32,
    error: String,
}

/// Classify the body of a non-success response.
///
/// An absent body means the service rejected the call before producing a
/// payload and yields [`Error::Unauthorized`]. A body that is not a
/// `{"code": int, "error": string}` object yields [`ServiceError::UNKNOWN`].
/// Known codes return the catalog entry, whose message replaces whatever the
/// service sent; unknown codes are returned verbatim.
pub fn decode_error(body: Option<&[u8]>) -> Error {
    let Some(body) = body else {
        return Error::Unauthorized;
    };

    let Ok(decoded) = serde_json::from_slice::<ErrorBody>(body) else {
        return Error::Service(ServiceError::UNKNOWN);
    };

    match ServiceError::by_code(decoded.code) {
        Some(known) => Error::Service(known),
        None => Error::Service(ServiceError::new(decoded.code, decoded.error)),
    }
}
