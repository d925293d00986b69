//! One repository per table, each a thin wrapper over [`DataClient`].

use payloads::{
    Booking, BookingType, ClientError, Court, DataClient, requests, tables,
};
use serde::{Serialize, de::DeserializeOwned};

/// List and create rows of a single table.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Row;
    type Create;

    async fn list(&self) -> Result<Vec<Self::Row>, ClientError>;

    async fn create(
        &self,
        payload: &Self::Create,
    ) -> Result<Self::Row, ClientError>;
}

/// A repository backed by a table of the hosted data service.
pub struct TableRepo<Row, Create> {
    client: DataClient,
    table: &'static str,
    select: &'static str,
    _rows: std::marker::PhantomData<fn(Create) -> Row>,
}

impl<Row, Create> TableRepo<Row, Create> {
    pub fn new(
        client: DataClient,
        table: &'static str,
        select: &'static str,
    ) -> Self {
        Self {
            client,
            table,
            select,
            _rows: std::marker::PhantomData,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }
}

impl<Row, Create> Repository for TableRepo<Row, Create>
where
    Row: DeserializeOwned,
    Create: Serialize,
{
    type Row = Row;
    type Create = Create;

    async fn list(&self) -> Result<Vec<Row>, ClientError> {
        self.client.list_rows(self.table, self.select).await
    }

    async fn create(&self, payload: &Create) -> Result<Row, ClientError> {
        self.client.insert_row(self.table, payload).await
    }
}

pub type CourtsRepo = TableRepo<Court, requests::CreateCourt>;
pub type BookingTypesRepo =
    TableRepo<BookingType, requests::CreateBookingType>;
pub type BookingsRepo = TableRepo<Booking, requests::CreateBooking>;

pub fn create_courts_repo(client: DataClient) -> CourtsRepo {
    TableRepo::new(client, tables::COURTS, "*")
}

pub fn create_booking_types_repo(client: DataClient) -> BookingTypesRepo {
    TableRepo::new(client, tables::BOOKING_TYPES, "*")
}

pub fn create_bookings_repo(client: DataClient) -> BookingsRepo {
    TableRepo::new(client, tables::BOOKINGS, tables::BOOKINGS_SELECT)
}
