use crate::{BookingTypeId, CourtId};
use serde::{Deserialize, Serialize};

// Payloads are forwarded as-is; the data service enforces constraints.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCourt {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO-8601 instant, e.g. `2024-01-01T10:00:00Z`.
    pub start_at: String,
    pub end_at: String,
    pub court_id: CourtId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_type_id: Option<BookingTypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_state: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<serde_json::Value>,
}
