//! Ride listing data as returned by the ride service
//!
//! The wire format uses camelCase keys and Mongo-style `_id` identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a shared ride, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub origin: Place,
    pub destination: Place,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available_seats: u32,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<AmenityTag>,
    pub creator: RideCreator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RideSummary {
    /// Identifier of the user who published the ride
    #[must_use]
    pub fn creator_id(&self) -> &str {
        &self.creator.id
    }

    /// Whether the listing carries a given amenity
    #[must_use]
    pub fn has_tag(&self, tag: &AmenityTag) -> bool {
        self.tags.contains(tag)
    }
}

/// Origin or destination of a ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Publisher of a ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideCreator {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,
    // Either populated ride documents or bare ids, depending on the endpoint
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rides_created: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<CreatorProfile>,
}

impl RideCreator {
    /// Number of rides this user has published
    #[must_use]
    pub fn rides_published(&self) -> usize {
        self.rides_created.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreatorProfile {
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
}

/// Amenity tag attached to a ride listing
///
/// Tags are free-form strings on the wire. The ones the client knows how to
/// present get their own variant; anything else is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AmenityTag {
    AirConditioning,
    Music,
    PetFriendly,
    NoSmoking,
    LadiesOnly,
    ExpressRoute,
    Other(String),
}

impl AmenityTag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AirConditioning => "AC",
            Self::Music => "Music",
            Self::PetFriendly => "Pet Friendly",
            Self::NoSmoking => "No Smoking",
            Self::LadiesOnly => "Ladies Only",
            Self::ExpressRoute => "Express Route",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for AmenityTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "AC" => Self::AirConditioning,
            "Music" => Self::Music,
            "Pet Friendly" => Self::PetFriendly,
            "No Smoking" => Self::NoSmoking,
            "Ladies Only" => Self::LadiesOnly,
            "Express Route" => Self::ExpressRoute,
            _ => Self::Other(tag),
        }
    }
}

impl From<AmenityTag> for String {
    fn from(tag: AmenityTag) -> Self {
        match tag {
            AmenityTag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AmenityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIDE_JSON: &str = r#"{
        "_id": "ride-42",
        "origin": { "place": "Pune", "coordinates": { "lat": 18.52, "lng": 73.85 } },
        "destination": { "place": "Mumbai" },
        "startTime": "2026-11-01T08:30:00Z",
        "endTime": "2026-11-01T12:00:00.000Z",
        "availableSeats": 3,
        "price": 450,
        "tags": ["AC", "Pet Friendly", "Snacks"],
        "creator": {
            "_id": "user-7",
            "name": "Asha",
            "stars": 4.5,
            "ridesCreated": ["ride-1", "ride-42"],
            "profile": { "preferences": { "smoking": "No smoking", "music": "Any" } }
        },
        "createdAt": "2024-03-09T10:00:00Z",
        "__v": 0
    }"#;

    #[test]
    fn test_ride_summary_decodes_service_payload() {
        let ride: RideSummary = serde_json::from_str(RIDE_JSON).unwrap();

        assert_eq!(ride.id, "ride-42");
        assert_eq!(ride.creator_id(), "user-7");
        assert_eq!(ride.origin.place, "Pune");
        assert_eq!(
            ride.origin.coordinates,
            Some(Coordinates {
                lat: 18.52,
                lng: 73.85
            })
        );
        assert!(ride.destination.coordinates.is_none());
        assert_eq!(ride.available_seats, 3);
        assert_eq!(ride.creator.rides_published(), 2);
        assert_eq!(
            ride.creator
                .profile
                .as_ref()
                .and_then(|p| p.preferences.music.as_deref()),
            Some("Any")
        );
        assert!(ride.start_time < ride.end_time);
    }

    #[test]
    fn test_unknown_tags_are_preserved() {
        let ride: RideSummary = serde_json::from_str(RIDE_JSON).unwrap();

        assert_eq!(
            ride.tags,
            vec![
                AmenityTag::AirConditioning,
                AmenityTag::PetFriendly,
                AmenityTag::Other("Snacks".to_string()),
            ]
        );
        assert!(ride.has_tag(&AmenityTag::PetFriendly));
        assert!(!ride.has_tag(&AmenityTag::LadiesOnly));

        let encoded = serde_json::to_value(&ride).unwrap();
        assert_eq!(encoded["tags"][2], "Snacks");
        assert_eq!(encoded["tags"][0], "AC");
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let mut value: serde_json::Value = serde_json::from_str(RIDE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("tags");

        let ride: RideSummary = serde_json::from_value(value).unwrap();
        assert!(ride.tags.is_empty());
    }
}
