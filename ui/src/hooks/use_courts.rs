use std::ops::Deref;

use payloads::{Court, DataClient, requests};

use super::UseResource;
use crate::SharedError;
use crate::repositories::{CourtsRepo, Repository, create_courts_repo};

/// Hook return type for courts
pub struct CourtsHookReturn<R = CourtsRepo> {
    resource: UseResource<R>,
}

impl<R> Deref for CourtsHookReturn<R> {
    type Target = UseResource<R>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<R> CourtsHookReturn<R>
where
    R: Repository<Row = Court, Create = requests::CreateCourt>,
{
    pub async fn load_courts(&self) -> Result<Vec<Court>, SharedError> {
        self.run(self.repository().list()).await
    }

    pub async fn create_court(
        &self,
        payload: &requests::CreateCourt,
    ) -> Result<Court, SharedError> {
        self.run(self.repository().create(payload)).await
    }
}

/// Hook to list and create courts on the data service
pub fn use_courts(client: DataClient) -> CourtsHookReturn {
    use_courts_with(create_courts_repo(client))
}

pub fn use_courts_with<R>(repo: R) -> CourtsHookReturn<R> {
    CourtsHookReturn {
        resource: UseResource::new(repo),
    }
}
