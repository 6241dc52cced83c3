#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{anyhow, Context};
use clap::Parser;
use ridebook::{
    booking::BookingFlow,
    console::{ConsoleNavigator, ConsoleNotifier},
    models::{RideSummary, UserIdentity},
    settings::RidebookSettings,
    RideClient,
};
use std::sync::Arc;

/// Join a shared ride and report what the user would see
#[derive(Debug, Parser)]
#[command(name = "ridebook", version, about)]
struct Cli {
    /// Identifier of the ride to join
    ride_id: String,

    /// Identifier of the signed-in user; omit to act anonymously
    #[arg(long)]
    user_id: Option<String>,

    /// Display name of the signed-in user
    #[arg(long, requires = "user_id")]
    user_name: Option<String>,

    /// Show the ride and the confirmation prompt, then cancel instead of booking
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from Settings.toml and environment variables
    // This also loads .env file and initializes the logger
    let settings = RidebookSettings::load().map_err(|e| anyhow!("Failed to load settings: {e}"))?;

    let client = Arc::new(RideClient::new(&settings.api).context("Failed to create ride client")?);

    let fetch = client.load_ride(&cli.ride_id).await;
    if let Some(error) = &fetch.error {
        return Err(anyhow!("Error: {error}"));
    }

    let user = cli.user_id.map(|id| {
        let user = UserIdentity::new(id);
        match cli.user_name {
            Some(name) => user.with_name(name),
            None => user,
        }
    });

    let flow = BookingFlow::from_settings(
        &settings,
        client.clone(),
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleNavigator),
    );
    let prompt = flow.open_prompt(&fetch, user.as_ref())?;
    print_ride(prompt.ride());

    let control = prompt.control();
    println!("[{}]{}", control.label(), if control.disabled { " (disabled)" } else { "" });
    println!();
    println!("{}", prompt.title());
    println!("{}", prompt.description());
    println!();

    if cli.dry_run {
        prompt.cancel();
        return Ok(());
    }

    let report = prompt.confirm().await?;
    log::debug!("Booking finished with outcome {}", report.outcome);
    Ok(())
}

fn print_ride(ride: &RideSummary) {
    println!(
        "{} ({}) → {} ({})",
        ride.origin.place,
        ride.start_time.format("%b %-d, %Y %H:%M"),
        ride.destination.place,
        ride.end_time.format("%b %-d, %Y %H:%M"),
    );
    println!("Seats: {}", ride.available_seats);
    println!("Total Price for 1 Passenger: ₹{}", ride.price);
    if ride.tags.is_empty() {
        println!("Ride Tags: No tags specified");
    } else {
        let tags: Vec<&str> = ride.tags.iter().map(|tag| tag.as_str()).collect();
        println!("Ride Tags: {}", tags.join(", "));
    }
    println!(
        "Rider: {} ({} rides published)",
        ride.creator.name,
        ride.creator.rides_published()
    );
}
