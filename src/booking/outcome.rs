use std::fmt;

/// Closed classification of a single join attempt
///
/// Exactly one outcome is produced per confirmation, and it alone decides
/// which notification is shown and whether the user is navigated away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No identity, or the ride service rejected the credentials
    Unauthenticated,
    /// The user is already a passenger on this ride
    AlreadyJoined,
    /// The user published this ride
    SelfRide,
    /// No seats left
    Full,
    /// Any other 400 rejection, carrying the server's text
    GenericRejection(String),
    Success,
    /// Unexpected status or transport failure, carrying the best diagnostic
    UnknownError(String),
}

impl Outcome {
    /// Whether this outcome leads to the booking confirmation view
    #[must_use]
    pub fn navigates_to_confirmation(&self) -> bool {
        matches!(self, Self::Success | Self::AlreadyJoined)
    }

    /// Short stable name, used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::AlreadyJoined => "already_joined",
            Self::SelfRide => "self_ride",
            Self::Full => "full",
            Self::GenericRejection(_) => "generic_rejection",
            Self::Success => "success",
            Self::UnknownError(_) => "unknown_error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericRejection(msg) | Self::UnknownError(msg) => {
                write!(f, "{}: {msg}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
