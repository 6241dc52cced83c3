//! Join request execution
//!
//! A join request is a single `GET <base>/rides/{rideId}/join`. Any status in
//! `200..500` is an application answer for the classifier to interpret; 5xx,
//! network failures and unreadable bodies are transport failures and resolve
//! to [`Outcome::UnknownError`] with the best diagnostic available.

use super::classifier::{classify, JoinAttemptResult};
use super::Outcome;
use crate::error::TransportError;
use async_trait::async_trait;

/// Used when a transport failure carries no text of its own
pub const DEFAULT_TRANSPORT_MESSAGE: &str = "Failed to book ride";

/// Statuses the client accepts as a meaningful application response
pub const APPLICATION_STATUS_RANGE: std::ops::Range<u16> = 200..500;

/// Anything able to send a join request to the ride service
#[async_trait]
pub trait JoinTransport: Send + Sync {
    /// Send exactly one join request for `ride_id`
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained or read.
    async fn join(&self, ride_id: &str) -> Result<JoinAttemptResult, TransportError>;
}

/// Issue the join request and apply the accepted status window
///
/// # Errors
///
/// Returns a [`TransportError`] for network failures, unreadable bodies, and
/// any status outside [`APPLICATION_STATUS_RANGE`].
pub async fn execute_join<T>(transport: &T, ride_id: &str) -> Result<JoinAttemptResult, TransportError>
where
    T: JoinTransport + ?Sized,
{
    let result = transport.join(ride_id).await?;
    if APPLICATION_STATUS_RANGE.contains(&result.status_code) {
        Ok(result)
    } else {
        Err(TransportError::Server {
            status: result.status_code,
            body: result.body,
        })
    }
}

/// Run the join request and classify whatever comes back
///
/// Never fails: transport errors become [`Outcome::UnknownError`].
pub async fn resolve_join<T>(transport: &T, ride_id: &str) -> Outcome
where
    T: JoinTransport + ?Sized,
{
    match execute_join(transport, ride_id).await {
        Ok(result) => classify(&result),
        Err(err) => {
            log::warn!("Join request for ride {ride_id} failed: {err}");
            Outcome::UnknownError(diagnostic_message(&err))
        }
    }
}

/// Best human-readable description of a transport failure
///
/// Prefers a structured `error` field from the response body, then a
/// `message` field, then the transport's own description.
#[must_use]
pub fn diagnostic_message(err: &TransportError) -> String {
    if let TransportError::Server { body, .. } = err {
        if let Some(message) = body.field("error").or_else(|| body.field("message")) {
            return message.to_string();
        }
    }
    let message = err.to_string();
    if message.trim().is_empty() {
        DEFAULT_TRANSPORT_MESSAGE.to_string()
    } else {
        message
    }
}
