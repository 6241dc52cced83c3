//! Effect dispatch for resolved outcomes
//!
//! Each outcome maps to exactly one notification and at most one navigation.
//! The mapping is computed as an [`Effects`] plan first and applied second,
//! so tests and callers can inspect it without touching any collaborator.

use super::Outcome;
use crate::models::RideSummary;
use crate::settings::{MessageSettings, RouteSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Info,
    Success,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Info => f.write_str("info"),
            Self::Success => f.write_str("success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// State carried into the confirmation view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    #[serde(rename = "rideData")]
    pub ride_data: RideSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: String,
    pub state: Option<NavigationState>,
}

/// Displays transient messages to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Moves the user interface to another route
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str, state: Option<&NavigationState>);
}

/// Everything one outcome causes, in application order
#[derive(Debug, Clone, PartialEq)]
pub struct Effects {
    pub notification: Notification,
    pub navigation: Option<Navigation>,
}

impl Effects {
    /// Work out the effects of `outcome` for `ride`
    #[must_use]
    pub fn plan(
        outcome: &Outcome,
        ride: &RideSummary,
        messages: &MessageSettings,
        routes: &RouteSettings,
    ) -> Self {
        use NotificationKind::{Error, Info, Success};

        let notification = match outcome {
            Outcome::Unauthenticated => Notification::new(Error, &messages.login_required),
            Outcome::AlreadyJoined => Notification::new(Info, &messages.already_joined),
            Outcome::SelfRide => Notification::new(Error, &messages.own_ride),
            Outcome::Full => Notification::new(Error, &messages.ride_full),
            Outcome::Success => Notification::new(Success, &messages.booking_successful),
            Outcome::GenericRejection(message) | Outcome::UnknownError(message) => {
                Notification::new(Error, message)
            }
        };

        let navigation = outcome.navigates_to_confirmation().then(|| Navigation {
            route: routes.confirmation_for(&ride.id),
            state: Some(NavigationState {
                ride_data: ride.clone(),
            }),
        });

        Self {
            notification,
            navigation,
        }
    }

    /// Apply the plan: notification first, then navigation
    pub fn apply<N, V>(&self, notifier: &N, navigator: &V)
    where
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        notifier.notify(self.notification.kind, &self.notification.message);
        if let Some(navigation) = &self.navigation {
            navigator.navigate(&navigation.route, navigation.state.as_ref());
        }
    }
}
