//! Data exchanged with the ride service and the surrounding application
//!
//! Rides come from the data-fetch layer, identities from the authentication
//! layer. The booking flow only ever reads them.

pub mod fetch;
pub mod ride;
pub mod user;

pub use fetch::FetchState;
pub use ride::{AmenityTag, Coordinates, CreatorProfile, Place, Preferences, RideCreator, RideSummary};
pub use user::UserIdentity;
