#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the ridebook crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod booking;
pub mod client;
pub mod console;
pub mod error;
pub mod models;
pub mod settings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use booking::{BookingFlow, BookingReport, Outcome};
pub use client::RideClient;
pub use error::{BookingError, TransportError};
pub use models::{FetchState, RideSummary, UserIdentity};
pub use settings::RidebookSettings;
