use crate::{BookingId, BookingTypeId, CourtId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    /// Stable identifier used to group events per court in the calendar.
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingType {
    pub id: BookingTypeId,
    pub name: String,
    /// Short glyph (usually an emoji) prefixed to event titles.
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A booking row as listed with its booking type and court embedded.
///
/// The time fields are kept as the raw strings returned by the service;
/// they are only interpreted when mapped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub title: Option<String>,
    pub start_at: String,
    pub end_at: String,
    #[serde(default)]
    pub booking_type: Option<BookingTypeRef>,
    #[serde(default)]
    pub court: Option<CourtRef>,
    /// Either a plain state name or an embedded state row, passed through
    /// untouched.
    #[serde(default)]
    pub booking_state: Option<serde_json::Value>,
    #[serde(default)]
    pub client: Option<serde_json::Value>,
}

/// The subset of a booking type embedded in a booking listing. Every field
/// is optional since the select may project any columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingTypeRef {
    #[serde(default)]
    pub id: Option<BookingTypeId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// The subset of a court embedded in a booking listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtRef {
    #[serde(default)]
    pub id: Option<CourtId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Error body returned by the data service on failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_with_missing_relations_deserializes() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": 7,
            "start_at": "2024-01-01T10:00:00Z",
            "end_at": "2024-01-01T11:00:00Z",
            "court": null,
        }))
        .unwrap();

        assert_eq!(booking.id, BookingId(7));
        assert!(booking.court.is_none());
        assert!(booking.booking_type.is_none());
        assert!(booking.booking_state.is_none());
        assert!(booking.title.is_none());
    }

    #[test]
    fn booking_keeps_state_and_client_verbatim() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": 1,
            "start_at": "2024-01-01T10:00:00Z",
            "end_at": "2024-01-01T11:00:00Z",
            "booking_state": { "slug": "confirmed", "label": "Confirmado" },
            "client": { "name": "Ana", "phone": "+54 11 5555 0000" },
            "court": { "name": "A", "slug": "court-a" },
        }))
        .unwrap();

        assert_eq!(
            booking.booking_state.unwrap()["slug"],
            serde_json::json!("confirmed")
        );
        assert_eq!(booking.client.unwrap()["name"], serde_json::json!("Ana"));
        let court = booking.court.unwrap();
        assert_eq!(court.slug.as_deref(), Some("court-a"));
        assert_eq!(court.id, None);
    }

    #[test]
    fn booking_without_start_is_rejected() {
        let result = serde_json::from_value::<Booking>(serde_json::json!({
            "id": 1,
            "end_at": "2024-01-01T11:00:00Z",
        }));
        assert!(result.is_err());
    }
}
