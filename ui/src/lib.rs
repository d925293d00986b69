//! Client-side state for the court booking calendar: per-table hooks that
//! track loading and error state around repository calls, and the mapper
//! that turns bookings into calendar events.

pub mod config;
pub mod hooks;
pub mod mappers;
pub mod repositories;
pub mod utils;

use std::sync::Arc;

pub use config::Config;
use payloads::{ClientError, DataClient};

/// Any failure a hook can record: a data service call or mapping a row.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Map(#[from] mappers::MapError),
}

/// The error stored by a hook and handed back to the caller. Both hold the
/// same allocation.
pub type SharedError = Arc<Error>;

/// Build a data service client from configuration.
pub fn get_data_client(config: &Config) -> DataClient {
    DataClient::new(config.data_service_url.clone(), config.api_key.clone())
}
