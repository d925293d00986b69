//! Row and request types shared between the booking client and the data
//! service, plus the HTTP client for the hosted table API.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{ClientError, DataClient};
pub use responses::{Booking, BookingType, Court};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Table names on the hosted data service.
pub mod tables {
    pub const BOOKINGS: &str = "bookings";
    pub const BOOKING_TYPES: &str = "booking_types";
    pub const COURTS: &str = "courts";

    /// Booking columns with the booking type and the court embedded.
    pub const BOOKINGS_SELECT: &str =
        "*,booking_type:booking_types(*),court:courts(*)";
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CourtId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BookingTypeId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BookingId(pub i64);
