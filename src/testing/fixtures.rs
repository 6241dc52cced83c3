//! Test fixtures providing pre-built test objects

use super::builders::TestRideBuilder;
use super::constants::{TEST_CREATOR_ID, TEST_CREATOR_NAME, TEST_PASSENGER_ID, TEST_PASSENGER_NAME};
use crate::models::{RideSummary, UserIdentity};
use crate::settings::RidebookSettings;

/// Central fixture provider for all test data
pub struct TestFixtures;

impl TestFixtures {
    /// A loaded ride published by [`creator`](Self::creator)
    #[must_use]
    pub fn ride() -> RideSummary {
        TestRideBuilder::new().build()
    }

    /// The user who published [`ride`](Self::ride)
    #[must_use]
    pub fn creator() -> UserIdentity {
        UserIdentity::new(TEST_CREATOR_ID).with_name(TEST_CREATOR_NAME)
    }

    /// A signed-in user unrelated to the ride
    #[must_use]
    pub fn passenger() -> UserIdentity {
        UserIdentity::new(TEST_PASSENGER_ID).with_name(TEST_PASSENGER_NAME)
    }

    /// Settings pointing at a ride service on `base_url`
    #[must_use]
    pub fn settings(base_url: &str) -> RidebookSettings {
        let mut settings = RidebookSettings::default();
        settings.api.base_url = base_url.to_string();
        settings
    }
}
