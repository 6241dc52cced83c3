//! Outcome classification for join responses
//!
//! The ride service reports known rejections as exact string payloads on a
//! 400 response rather than structured error codes. Every literal the client
//! understands lives in [`RejectionReason::from_literal`], so moving the
//! service to structured codes only touches that table.

use super::Outcome;
use crate::error::TransportError;
use serde_json::Value;

/// Shown when a rejection or unexpected status carries no usable text
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to join ride";

/// Response body of a join request, decoded the way a browser client sees it
#[derive(Debug, Clone, PartialEq)]
pub enum JoinBody {
    Empty,
    /// Plain text, or a JSON string literal
    Text(String),
    /// Any other JSON document
    Json(Value),
}

impl JoinBody {
    /// Decode a raw response body
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Malformed`] if the body is not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransportError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| TransportError::Malformed(format!("response body is not UTF-8: {e}")))?;
        Ok(Self::parse(text))
    }

    /// Interpret body text: JSON when it parses, raw text otherwise
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(text) {
            Ok(Value::String(s)) => Self::Text(s),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// The body as text, when it is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// A non-empty string field of a JSON object body
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Json(value) => value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }
}

/// Raw outcome of one join request: status plus body, consumed immediately
#[derive(Debug, Clone, PartialEq)]
pub struct JoinAttemptResult {
    pub status_code: u16,
    pub body: JoinBody,
}

impl JoinAttemptResult {
    #[must_use]
    pub fn new(status_code: u16, body: JoinBody) -> Self {
        Self { status_code, body }
    }

    /// Convenience for a plain-text body
    #[must_use]
    pub fn text(status_code: u16, body: &str) -> Self {
        Self::new(status_code, JoinBody::parse(body))
    }
}

/// Rejection reasons the ride service signals with a known literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    AlreadyJoined,
    OwnRide,
    RideFull,
}

impl RejectionReason {
    /// Match a rejection body against the known literals (exact, case-sensitive)
    #[must_use]
    pub fn from_literal(body: &str) -> Option<Self> {
        match body {
            "You already joined this ride!" => Some(Self::AlreadyJoined),
            "You cannot join your own ride!" => Some(Self::OwnRide),
            "Ride is full!" => Some(Self::RideFull),
            _ => None,
        }
    }
}

impl From<RejectionReason> for Outcome {
    fn from(reason: RejectionReason) -> Self {
        match reason {
            RejectionReason::AlreadyJoined => Self::AlreadyJoined,
            RejectionReason::OwnRide => Self::SelfRide,
            RejectionReason::RideFull => Self::Full,
        }
    }
}

/// Map a join response to exactly one outcome
#[must_use]
pub fn classify(result: &JoinAttemptResult) -> Outcome {
    match result.status_code {
        401 => Outcome::Unauthenticated,
        400 => classify_rejection(&result.body),
        200 => Outcome::Success,
        _ => Outcome::UnknownError(
            result
                .body
                .field("message")
                .unwrap_or(DEFAULT_REJECTION_MESSAGE)
                .to_string(),
        ),
    }
}

fn classify_rejection(body: &JoinBody) -> Outcome {
    if let Some(reason) = body.as_text().and_then(RejectionReason::from_literal) {
        return reason.into();
    }
    Outcome::GenericRejection(rejection_message(body))
}

fn rejection_message(body: &JoinBody) -> String {
    let message = match body {
        JoinBody::Text(text) if !text.is_empty() => Some(text.as_str()),
        JoinBody::Json(_) => body.field("message").or_else(|| body.field("error")),
        _ => None,
    };
    message.unwrap_or(DEFAULT_REJECTION_MESSAGE).to_string()
}
