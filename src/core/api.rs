//! HTTP client for the `/api/instances` endpoint

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::envelope::ApiResult;
use super::error::{ClientError, ClientResult};
use super::instance::{ControlRequest, CreateInstanceRequest, DeleteRequest, Instance, PowerAction};

/// Path of the only resource the server exposes
pub const INSTANCES_PATH: &str = "/api/instances";

/// Thin client over the instance API. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", base, INSTANCES_PATH),
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET /api/instances`
    pub async fn list_instances(&self) -> ClientResult<Vec<Instance>> {
        let envelope: ApiResult<Vec<Instance>> = self.send(Method::GET, None::<&()>).await?;
        Ok(envelope.into_result()?.unwrap_or_default())
    }

    /// `POST /api/instances`, returns the server's message if it sent one
    pub async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> ClientResult<Option<String>> {
        let envelope: ApiResult<serde_json::Value> =
            self.send(Method::POST, Some(request)).await?;
        Ok(envelope.into_result()?.and_then(message_text))
    }

    /// `PUT /api/instances`, returns the server's status message if it sent one
    pub async fn control_instance(
        &self,
        name: &str,
        action: PowerAction,
    ) -> ClientResult<Option<String>> {
        let body = ControlRequest { name, data: action };
        let envelope: ApiResult<serde_json::Value> = self.send(Method::PUT, Some(&body)).await?;
        Ok(envelope.into_result()?.and_then(message_text))
    }

    /// `DELETE /api/instances` with the name in the body
    pub async fn delete_instance(&self, name: &str) -> ClientResult<()> {
        let body = DeleteRequest { name };
        let envelope: ApiResult<serde_json::Value> =
            self.send(Method::DELETE, Some(&body)).await?;
        envelope.into_result()?;
        Ok(())
    }

    async fn send<B, T>(&self, method: Method, body: Option<&B>) -> ClientResult<ApiResult<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .request(method.clone(), &self.endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        debug!("{} {} -> {}", method, self.endpoint, response.status());

        // The envelope is authoritative; the HTTP status is not consulted
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::Transport(format!("invalid response from server: {}", e)))
    }
}

fn message_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
