//! Booking-outcome resolution
//!
//! Joining a ride runs four strictly sequential steps:
//!
//! 1. [`guard`] - no identity, no request
//! 2. [`executor`] - one `GET <base>/rides/{rideId}/join`
//! 3. [`classifier`] - `(status, body)` to exactly one [`Outcome`]
//! 4. [`dispatcher`] - one notification, at most one navigation
//!
//! [`flow`] wires them together behind a confirmation prompt.

pub mod classifier;
pub mod dispatcher;
pub mod executor;
pub mod flow;
pub mod guard;
pub mod outcome;

pub use classifier::{classify, JoinAttemptResult, JoinBody, RejectionReason};
pub use dispatcher::{
    Effects, Navigation, NavigationState, Navigator, Notification, NotificationKind, Notifier,
};
pub use executor::{diagnostic_message, execute_join, resolve_join, JoinTransport};
pub use flow::{BookingFlow, BookingReport, ConfirmationPrompt};
pub use guard::{check_preconditions, is_self_ride, BookingControl, GuardDecision};
pub use outcome::Outcome;
