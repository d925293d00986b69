pub mod data_service;
pub mod mock;

use std::sync::Arc;

use data_service::{ApiKey, TableStore};
use payloads::{
    Booking, BookingType, BookingTypeId, ClientError, Court, CourtId,
    DataClient, requests, tables,
};
use reqwest::StatusCode;
use secrecy::SecretString;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Key the in-memory data service accepts.
pub const API_KEY: &str = "test-anon-key";

pub struct TestApp {
    pub port: u16,
    pub client: DataClient,
    pub store: Arc<TableStore>,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// A client for the same service presenting a different key.
    pub fn client_with_key(&self, key: &str) -> DataClient {
        DataClient::new(self.address(), SecretString::from(key.to_string()))
    }
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub async fn create_test_court(&self) -> anyhow::Result<Court> {
        let court = self
            .client
            .insert_row(tables::COURTS, &court_details_a())
            .await?;
        Ok(court)
    }

    pub async fn create_test_booking_type(
        &self,
    ) -> anyhow::Result<BookingType> {
        let booking_type = self
            .client
            .insert_row(tables::BOOKING_TYPES, &booking_type_details_a())
            .await?;
        Ok(booking_type)
    }

    /// Create a court, a booking type and one booking on them.
    pub async fn create_test_booking(&self) -> anyhow::Result<Booking> {
        let court = self.create_test_court().await?;
        let booking_type = self.create_test_booking_type().await?;
        let body = booking_details_a(court.id, Some(booking_type.id));
        let booking = self.client.insert_row(tables::BOOKINGS, &body).await?;
        Ok(booking)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_test_writer()
        .finish();
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let store = Arc::new(TableStore::default());
    let (server, port) = data_service::build(
        port,
        store.clone(),
        ApiKey(API_KEY.to_string()),
    )
    .unwrap();
    tokio::spawn(server);

    TestApp {
        port,
        client: DataClient::new(
            format!("http://127.0.0.1:{port}"),
            SecretString::from(API_KEY.to_string()),
        ),
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn court_details_a() -> requests::CreateCourt {
    requests::CreateCourt {
        name: "Cancha 1".into(),
        slug: "cancha-1".into(),
    }
}

pub fn court_details_b() -> requests::CreateCourt {
    requests::CreateCourt {
        name: "Cancha Central".into(),
        slug: "cancha-central".into(),
    }
}

pub fn booking_type_details_a() -> requests::CreateBookingType {
    requests::CreateBookingType {
        name: "Vóley".into(),
        icon: Some("🏐".into()),
    }
}

/// A one hour booking on the morning of 2025-01-06 (UTC).
pub fn booking_details_a(
    court_id: CourtId,
    booking_type_id: Option<BookingTypeId>,
) -> requests::CreateBooking {
    requests::CreateBooking {
        title: None,
        start_at: "2025-01-06T13:00:00Z".into(),
        end_at: "2025-01-06T14:00:00Z".into(),
        court_id,
        booking_type_id,
        booking_state: Some(serde_json::json!("confirmed")),
        client: Some(serde_json::json!({ "name": "Ana", "phone": "1155550000" })),
    }
}
