//! Precondition checks that run before any network call

use super::Outcome;
use crate::models::UserIdentity;

/// Decision of the precondition guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    /// Signed in; the join request may be sent on behalf of this user
    Proceed(&'a UserIdentity),
    /// Stop here with this outcome, no request is sent
    Reject(Outcome),
}

/// Require an authenticated user before joining
#[must_use]
pub fn check_preconditions(user: Option<&UserIdentity>) -> GuardDecision<'_> {
    match user {
        Some(user) => GuardDecision::Proceed(user),
        None => GuardDecision::Reject(Outcome::Unauthenticated),
    }
}

/// Whether the signed-in user published this ride
///
/// Only used to disable the booking control. The ride service enforces the
/// rule itself, so this never stops a request from being sent.
#[must_use]
pub fn is_self_ride(user: Option<&UserIdentity>, creator_id: &str) -> bool {
    user.is_some_and(|user| user.id == creator_id)
}

/// State of the "Book Ride" control on the ride page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingControl {
    pub disabled: bool,
}

impl BookingControl {
    #[must_use]
    pub fn for_ride(user: Option<&UserIdentity>, creator_id: &str) -> Self {
        Self {
            disabled: is_self_ride(user, creator_id),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        if self.disabled {
            "Cannot Book Own Ride"
        } else {
            "Book Ride"
        }
    }
}
