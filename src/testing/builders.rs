//! Fluent builder for rides with custom attributes

use super::constants::{TEST_CREATOR_ID, TEST_CREATOR_NAME, TEST_RIDE_ID};
use crate::models::{AmenityTag, Place, RideCreator, RideSummary};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Builder for customized test rides
pub struct TestRideBuilder {
    id: String,
    creator_id: String,
    origin: String,
    destination: String,
    start_time: DateTime<Utc>,
    duration_hours: i64,
    available_seats: u32,
    price: f64,
    tags: Vec<AmenityTag>,
}

impl TestRideBuilder {
    /// Create a builder with fixed, reproducible defaults
    ///
    /// # Panics
    ///
    /// Never in practice; the default start time is a valid UTC timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: TEST_RIDE_ID.to_string(),
            creator_id: TEST_CREATOR_ID.to_string(),
            origin: "Pune".to_string(),
            destination: "Mumbai".to_string(),
            start_time: Utc.with_ymd_and_hms(2026, 11, 1, 8, 30, 0).unwrap(),
            duration_hours: 4,
            available_seats: 3,
            price: 450.0,
            tags: vec![AmenityTag::AirConditioning, AmenityTag::Music],
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[must_use]
    pub fn build(self) -> RideSummary {
        RideSummary {
            id: self.id,
            origin: Place {
                place: self.origin,
                coordinates: None,
            },
            destination: Place {
                place: self.destination,
                coordinates: None,
            },
            start_time: self.start_time,
            end_time: self.start_time + Duration::hours(self.duration_hours),
            available_seats: self.available_seats,
            price: self.price,
            tags: self.tags,
            creator: RideCreator {
                id: self.creator_id,
                name: TEST_CREATOR_NAME.to_string(),
                stars: Some(4.5),
                rides_created: Vec::new(),
                profile: None,
            },
            created_at: None,
        }
    }
}

impl Default for TestRideBuilder {
    fn default() -> Self {
        Self::new()
    }
}
