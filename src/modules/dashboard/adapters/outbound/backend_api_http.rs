// REST implementation of the BackendApi port.
//
// Purpose
// - Talk to the event/quote backend over HTTP with the caller's bearer token.
//
// Responsibilities
// - Map 401 to SessionExpired, 403 to Forbidden, 404 to NotFound, anything else non-2xx to Status.
// - Prefer the backend's own `message` (or `error`) field as the error text.
//
// Boundaries
// - No retries. A failed listing is degraded by the load use case, not here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::modules::dashboard::adapters::outbound::backend_api::{BackendApi, BackendError};
use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::shared::core::primitives::BearerToken;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpBackendApi {
    client: Client,
    base_url: String,
}

impl HttpBackendApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        token: &BearerToken,
    ) -> Result<Response, BackendError> {
        let response = request
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(BackendError::SessionExpired),
            StatusCode::FORBIDDEN => Err(BackendError::Forbidden(error_message(response).await)),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound(error_message(response).await)),
            _ => Err(BackendError::Status {
                status: status.as_u16(),
                message: error_message(response).await,
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &BearerToken,
    ) -> Result<T, BackendError> {
        let response = self.send(self.client.get(self.url(path)), token).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let from_json = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|body| {
            ["message", "error"]
                .iter()
                .find_map(|key| body.get(key).and_then(|v| v.as_str()).map(str::to_string))
        });
    match from_json {
        Some(message) => message,
        None if text.trim().is_empty() => status.to_string(),
        None => text.trim().to_string(),
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackendApi {
    async fn list_events(&self, token: &BearerToken) -> Result<Vec<EventRecord>, BackendError> {
        self.get_json("/events", token).await
    }

    async fn list_quote_requests(
        &self,
        token: &BearerToken,
    ) -> Result<Vec<QuoteRecord>, BackendError> {
        self.get_json("/client/quote-requests", token).await
    }

    async fn delete_event(&self, token: &BearerToken, event_id: i64) -> Result<(), BackendError> {
        let url = self.url(&format!("/events/id/{event_id}"));
        self.send(self.client.delete(url), token).await?;
        Ok(())
    }

    async fn approve_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: &ApproveQuote,
    ) -> Result<(), BackendError> {
        let url = self.url(&format!("/admin/quotes/{quote_id}/approve"));
        self.send(self.client.put(url).json(command), token).await?;
        Ok(())
    }

    async fn reject_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: &RejectQuote,
    ) -> Result<(), BackendError> {
        let url = self.url(&format!("/admin/quotes/{quote_id}/reject"));
        self.send(self.client.put(url).json(command), token).await?;
        Ok(())
    }

    async fn send_quote(&self, token: &BearerToken, quote_id: i64) -> Result<(), BackendError> {
        let url = self.url(&format!("/client/quote-requests/{quote_id}/send"));
        self.send(self.client.post(url), token).await?;
        Ok(())
    }
}
