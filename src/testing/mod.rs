//! Testing utilities for ridebook
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-built rides, users and settings
//! - [`builders`] - Fluent builder for customised rides
//! - [`mock`] - Scripted join transport and recording collaborators
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ridebook::booking::{BookingFlow, JoinAttemptResult};
//! use ridebook::testing::{fixtures::TestFixtures, mock::*};
//!
//! let transport = Arc::new(ScriptedTransport::responding(JoinAttemptResult::text(400, "Ride is full!")));
//! let notifier = Arc::new(RecordingNotifier::default());
//! let navigator = Arc::new(RecordingNavigator::default());
//! let flow = BookingFlow::new(transport, notifier.clone(), navigator);
//! let ride = TestFixtures::ride();
//! ```

pub mod builders;
pub mod fixtures;
pub mod mock;

pub use builders::TestRideBuilder;
pub use fixtures::TestFixtures;

/// Common test constants
pub mod constants {
    pub const TEST_RIDE_ID: &str = "66f1c0ffee0000000000a001";

    pub const TEST_CREATOR_ID: &str = "66f1c0ffee0000000000b001";

    pub const TEST_CREATOR_NAME: &str = "Asha Kulkarni";

    pub const TEST_PASSENGER_ID: &str = "66f1c0ffee0000000000b002";

    pub const TEST_PASSENGER_NAME: &str = "Rohan Mehta";
}
