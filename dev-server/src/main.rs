//! Development server for the booking calendar
//!
//! Loads courts, booking types and calendar events through the hooks and
//! logs them. Without configuration it runs against an in-memory data
//! service seeded with a day of bookings.
//!
//! Environment variables can be set directly or loaded from a .env file:
//! - DATA_SERVICE_URL: base url of the hosted data service (optional)
//! - DATA_SERVICE_KEY: api key for it (required when the url is set)
//!
//! Usage: cargo run -p dev-server

mod telemetry;

use anyhow::Result;
use jiff::{Timestamp, ToSpan, Unit};
use telemetry::{get_subscriber, init_subscriber, log_error};
use test_helpers::mock::DevDataset;
use tracing::info;
use ui::hooks::{use_booking_types, use_bookings, use_courts};
use ui::utils::time::format_zoned_timestamp;
use ui::{Config, config, get_data_client};

#[tokio::main]
async fn main() -> Result<()> {
    // Silently ignore a missing .env file
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info,ui=debug,payloads=debug");
    init_subscriber(subscriber)?;

    // `_app` keeps the in-memory service alive for the whole run.
    let (client, _app) = if std::env::var(config::DATA_SERVICE_URL).is_ok() {
        let config = Config::from_env()?;
        info!("🔌 Using data service at {}", config.data_service_url);
        (get_data_client(&config), None)
    } else {
        info!("🚀 Starting in-memory data service");
        let app = test_helpers::spawn_app().await;
        info!("✅ Data service running on {}", app.address());

        let day_start = Timestamp::now().round(Unit::Hour)? + 1.hour();
        let dataset = DevDataset::create(&app.client, day_start).await?;
        dataset.print_summary();
        (app.client.clone(), Some(app))
    };

    let courts = use_courts(client.clone());
    match courts.load_courts().await {
        Ok(rows) => info!("🎾 {} courts", rows.len()),
        Err(e) => log_error(e),
    }

    let booking_types = use_booking_types(client.clone());
    match booking_types.load_booking_types().await {
        Ok(rows) => info!("🏷️ {} booking types", rows.len()),
        Err(e) => log_error(e),
    }

    let bookings = use_bookings(client);
    match bookings.load_calendar_events().await {
        Ok(events) => {
            for event in &events {
                info!(
                    "📅 [{}] {} | {} → {}",
                    event.calendar_id.as_deref().unwrap_or("-"),
                    event.title,
                    format_zoned_timestamp(&event.start),
                    format_zoned_timestamp(&event.end),
                );
            }
            info!("{}", serde_json::to_string_pretty(&events)?);
        }
        Err(e) => log_error(e),
    }

    info!("👋 Press Ctrl+C to shutdown");
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
