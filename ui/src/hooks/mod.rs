pub mod use_booking_types;
pub mod use_bookings;
pub mod use_courts;
pub mod use_resource;

#[cfg(test)]
pub(crate) mod testing;

pub use use_booking_types::{
    BookingTypesHookReturn, use_booking_types, use_booking_types_with,
};
pub use use_bookings::{BookingsHookReturn, use_bookings, use_bookings_with};
pub use use_courts::{CourtsHookReturn, use_courts, use_courts_with};
pub use use_resource::UseResource;

use crate::SharedError;

/// Observable state of a hook.
#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    /// True while any call is queued or running.
    pub is_loading: bool,
    /// Failure of the most recent call, cleared when the next call starts.
    pub error: Option<SharedError>,
    in_flight: usize,
}

impl ResourceState {
    /// Calls currently queued or running.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
