use std::ops::Deref;

use payloads::{BookingType, DataClient, requests};

use super::UseResource;
use crate::SharedError;
use crate::repositories::{
    BookingTypesRepo, Repository, create_booking_types_repo,
};

/// Hook return type for booking types
pub struct BookingTypesHookReturn<R = BookingTypesRepo> {
    resource: UseResource<R>,
}

impl<R> Deref for BookingTypesHookReturn<R> {
    type Target = UseResource<R>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<R> BookingTypesHookReturn<R>
where
    R: Repository<Row = BookingType, Create = requests::CreateBookingType>,
{
    pub async fn load_booking_types(
        &self,
    ) -> Result<Vec<BookingType>, SharedError> {
        self.run(self.repository().list()).await
    }

    pub async fn create_booking_type(
        &self,
        payload: &requests::CreateBookingType,
    ) -> Result<BookingType, SharedError> {
        self.run(self.repository().create(payload)).await
    }
}

/// Hook to list and create booking types on the data service
pub fn use_booking_types(client: DataClient) -> BookingTypesHookReturn {
    use_booking_types_with(create_booking_types_repo(client))
}

pub fn use_booking_types_with<R>(repo: R) -> BookingTypesHookReturn<R> {
    BookingTypesHookReturn {
        resource: UseResource::new(repo),
    }
}
