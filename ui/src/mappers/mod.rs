pub mod schedule_x;

pub use schedule_x::{
    CalendarEvent, EventMeta, EventOptions, map_booking_to_schedule_x_event,
    map_bookings,
};

/// Failure to turn a row into its display form.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid {field} '{value}': {source}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: jiff::Error,
    },
}
