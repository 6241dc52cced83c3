//! Error types for the booking flow
//!
//! Transport errors describe why a join request produced no interpretable
//! application response. Booking errors are returned to the caller when the
//! flow refuses to start at all; every other failure is folded into an
//! [`Outcome`](crate::booking::Outcome) and reported through a notification.

use thiserror::Error;

/// Failures below the application layer of a join request
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("{0}")]
    Network(String),

    /// The ride service answered with a server fault (status >= 500)
    #[error("Request failed with status code {status}")]
    Server {
        status: u16,
        body: crate::booking::JoinBody,
    },

    /// The response arrived but its body could not be read
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The join endpoint could not be derived from the configured base URL
    #[error("Invalid ride service URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            Self::Malformed(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Reasons the booking flow refuses to run
#[derive(Debug, Error)]
pub enum BookingError {
    /// Ride details are still loading, failed to load, or are absent
    #[error("Ride details are not loaded")]
    RideNotLoaded,

    /// Another confirmation for this flow has not finished yet
    #[error("A booking request is already in flight")]
    AlreadyInFlight,
}
