use crate::responses::ServiceError;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A client for the hosted table API (`/rest/v1/{table}`).
#[derive(Clone)]
pub struct DataClient {
    pub address: String,
    pub api_key: SecretString,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl DataClient {
    pub fn new(address: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            address: address.into().trim_end_matches('/').to_string(),
            api_key,
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", &self.address)
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        request.header("apikey", key).bearer_auth(key)
    }

    async fn get(&self, table: &str, select: &str) -> ReqwestResult {
        let request = self
            .inner_client
            .get(self.format_url(table))
            .query(&[("select", select)]);
        self.authorized(request).send().await
    }

    async fn post(&self, table: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(table))
            .header("Prefer", "return=representation")
            .json(body);
        self.authorized(request).send().await
    }
}

/// Table operations
impl DataClient {
    /// List every row of `table`, projecting columns (and embedded
    /// relations) with `select`.
    pub async fn list_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
    ) -> Result<Vec<T>, ClientError> {
        tracing::debug!(table, select, "listing rows");
        let response = self.get(table, select).await?;
        ok_body(response).await
    }

    /// Insert a single row and return it as stored by the service.
    pub async fn insert_row<T: DeserializeOwned>(
        &self,
        table: &str,
        payload: &impl Serialize,
    ) -> Result<T, ClientError> {
        tracing::debug!(table, "inserting row");
        let response = self.post(table, payload).await?;
        let rows: Vec<T> = ok_body(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ClientError::EmptyInsert(table.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the service message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The service accepted an insert but returned no representation.
    #[error("Insert into '{0}' returned no row")]
    EmptyInsert(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::EmptyInsert(_) => None,
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await?);
    }
    Ok(response.json::<T>().await?)
}

/// Build an APIError from a failed response, preferring the service's
/// `message` field over the raw body.
async fn api_error(
    response: reqwest::Response,
) -> Result<ClientError, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    let message = match serde_json::from_str::<ServiceError>(&text) {
        Ok(body) => body.message,
        Err(_) => text,
    };
    Ok(ClientError::APIError(status, message))
}
