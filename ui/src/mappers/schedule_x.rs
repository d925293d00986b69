//! Bookings as events for the Schedule-X calendar widget.

use jiff::Zoned;
use payloads::{Booking, BookingId};
use serde::Serialize;

use super::MapError;
use crate::utils::time::{CALENDAR_TZ, instant_in_tz};

/// Extra CSS classes the widget applies to every booking event.
pub const EVENT_CLASSES: &[&str] = &["customClass"];

/// An event as consumed by the calendar widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: BookingId,
    pub title: String,
    pub start: Zoned,
    pub end: Zoned,
    /// Court slug; events without a court are left ungrouped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(rename = "_options")]
    pub options: EventOptions,
    pub meta: EventMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOptions {
    pub additional_classes: Vec<String>,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self {
            additional_classes: EVENT_CLASSES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventMeta {
    pub state: Option<serde_json::Value>,
    /// The booking's `client` value as stored, not wrapped in another object.
    pub client: Option<serde_json::Value>,
}

/// Map a booking to a calendar event in the calendar timezone.
///
/// Missing booking type or court never fail the mapping; a start or end
/// that is not an ISO-8601 instant does.
pub fn map_booking_to_schedule_x_event(
    booking: &Booking,
) -> Result<CalendarEvent, MapError> {
    Ok(CalendarEvent {
        id: booking.id,
        title: event_title(booking),
        start: to_calendar_tz("start_at", &booking.start_at)?,
        end: to_calendar_tz("end_at", &booking.end_at)?,
        calendar_id: booking.court.as_ref().and_then(|c| c.slug.clone()),
        options: EventOptions::default(),
        meta: EventMeta {
            state: booking.booking_state.clone(),
            client: booking.client.clone(),
        },
    })
}

/// Map every booking, stopping at the first one that fails.
pub fn map_bookings(
    bookings: &[Booking],
) -> Result<Vec<CalendarEvent>, MapError> {
    bookings.iter().map(map_booking_to_schedule_x_event).collect()
}

/// Booking type icon followed by the booking's own title, or
/// `Turno - <court name>` when it has none.
fn event_title(booking: &Booking) -> String {
    let icon = booking
        .booking_type
        .as_ref()
        .and_then(|t| t.icon.as_deref())
        .unwrap_or_default();
    match &booking.title {
        Some(title) => format!("{icon}{title}"),
        None => {
            let court_name = booking
                .court
                .as_ref()
                .and_then(|c| c.name.as_deref())
                .unwrap_or_default();
            format!("{icon}Turno - {court_name}")
        }
    }
}

fn to_calendar_tz(field: &'static str, value: &str) -> Result<Zoned, MapError> {
    instant_in_tz(value, CALENDAR_TZ).map_err(|source| {
        MapError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        }
    })
}
