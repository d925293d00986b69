//! Development dataset for the booking calendar.
//!
//! Used by the dev-server and by integration tests that want a populated
//! service: two courts, three booking types and a day of bookings.

use anyhow::Result;
use jiff::{Span, Timestamp};
use payloads::{Booking, BookingType, Court, DataClient, requests, tables};
use serde_json::json;

pub struct DevDataset {
    pub courts: Vec<Court>,
    pub booking_types: Vec<BookingType>,
    pub bookings: Vec<Booking>,
}

impl DevDataset {
    /// Create the dataset through `client`, with bookings starting at
    /// `day_start`.
    pub async fn create(
        client: &DataClient,
        day_start: Timestamp,
    ) -> Result<Self> {
        tracing::info!("🎾 Creating courts");
        let mut courts: Vec<Court> = Vec::new();
        for (name, slug) in [
            ("Cancha 1", "cancha-1"),
            ("Cancha Central", "cancha-central"),
        ] {
            let body = requests::CreateCourt {
                name: name.into(),
                slug: slug.into(),
            };
            courts.push(client.insert_row(tables::COURTS, &body).await?);
        }

        tracing::info!("🏷️ Creating booking types");
        let mut booking_types: Vec<BookingType> = Vec::new();
        for (name, icon) in
            [("Vóley", Some("🏐")), ("Tenis", Some("🎾")), ("Clase", None)]
        {
            let body = requests::CreateBookingType {
                name: name.into(),
                icon: icon.map(str::to_string),
            };
            booking_types
                .push(client.insert_row(tables::BOOKING_TYPES, &body).await?);
        }

        tracing::info!("📅 Creating bookings");
        let slots: [(usize, Option<usize>, Option<&str>, i64, &str); 4] = [
            (0, Some(0), None, 0, "confirmed"),
            (0, Some(1), Some("Final de torneo"), 2, "pending"),
            (1, Some(2), Some("Escuelita"), 1, "confirmed"),
            (1, None, None, 4, "cancelled"),
        ];
        for (court, booking_type, title, hour, state) in slots {
            let start = day_start + Span::new().hours(hour);
            let end = start + Span::new().hours(1);
            let body = requests::CreateBooking {
                title: title.map(str::to_string),
                start_at: start.to_string(),
                end_at: end.to_string(),
                court_id: courts[court].id,
                booking_type_id: booking_type.map(|i| booking_types[i].id),
                booking_state: Some(json!(state)),
                client: Some(json!({ "name": format!("Cliente {hour}") })),
            };
            let _: Booking =
                client.insert_row(tables::BOOKINGS, &body).await?;
        }

        // Re-read so the bookings come back with court and type embedded.
        let bookings: Vec<Booking> = client
            .list_rows(tables::BOOKINGS, tables::BOOKINGS_SELECT)
            .await?;
        tracing::info!("✅ Dataset created ({} bookings)", bookings.len());

        Ok(DevDataset {
            courts,
            booking_types,
            bookings,
        })
    }

    /// Print a summary of the created test data
    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for court in &self.courts {
            tracing::info!("   🎾 Court {} ({})", court.name, court.slug);
        }
        for booking_type in &self.booking_types {
            tracing::info!(
                "   🏷️ Booking type {} {}",
                booking_type.icon.as_deref().unwrap_or("-"),
                booking_type.name
            );
        }
        tracing::info!("   📅 {} bookings", self.bookings.len());
    }
}
