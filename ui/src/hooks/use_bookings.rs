use std::ops::Deref;

use payloads::{Booking, DataClient, requests};

use super::UseResource;
use crate::mappers::{CalendarEvent, map_bookings};
use crate::repositories::{BookingsRepo, Repository, create_bookings_repo};
use crate::{Error, SharedError};

/// Hook return type for bookings
pub struct BookingsHookReturn<R = BookingsRepo> {
    resource: UseResource<R>,
}

impl<R> Deref for BookingsHookReturn<R> {
    type Target = UseResource<R>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<R> BookingsHookReturn<R>
where
    R: Repository<Row = Booking, Create = requests::CreateBooking>,
{
    pub async fn load_bookings(&self) -> Result<Vec<Booking>, SharedError> {
        self.run(self.repository().list()).await
    }

    pub async fn create_booking(
        &self,
        payload: &requests::CreateBooking,
    ) -> Result<Booking, SharedError> {
        self.run(self.repository().create(payload)).await
    }

    /// Load bookings and map them to calendar events within a single
    /// loading window. A booking with a malformed time fails the whole
    /// call and is recorded like any other error.
    pub async fn load_calendar_events(
        &self,
    ) -> Result<Vec<CalendarEvent>, SharedError> {
        self.run(async {
            let bookings = self.repository().list().await?;
            let events = map_bookings(&bookings)?;
            Ok::<_, Error>(events)
        })
        .await
    }
}

/// Hook to list and create bookings, with court and booking type embedded
pub fn use_bookings(client: DataClient) -> BookingsHookReturn {
    use_bookings_with(create_bookings_repo(client))
}

pub fn use_bookings_with<R>(repo: R) -> BookingsHookReturn<R> {
    BookingsHookReturn {
        resource: UseResource::new(repo),
    }
}
