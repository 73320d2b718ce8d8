// Port to the event/quote backend that owns the data.
//
// Purpose
// - Describe what the dashboard needs from the backend without tying it to HTTP.
//
// Responsibilities
// - Every call carries the caller's bearer token.
// - A 401 is always reported as `SessionExpired`, whichever call produced it.
//
// Testing guidance
// - Use the in memory implementation; the REST implementation is tested against a stub server.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::shared::core::primitives::BearerToken;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("session expired")]
    SessionExpired,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("backend responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid backend response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_events(&self, token: &BearerToken) -> Result<Vec<EventRecord>, BackendError>;

    async fn list_quote_requests(
        &self,
        token: &BearerToken,
    ) -> Result<Vec<QuoteRecord>, BackendError>;

    async fn delete_event(&self, token: &BearerToken, event_id: i64) -> Result<(), BackendError>;

    async fn approve_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: &ApproveQuote,
    ) -> Result<(), BackendError>;

    async fn reject_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: &RejectQuote,
    ) -> Result<(), BackendError>;

    async fn send_quote(&self, token: &BearerToken, quote_id: i64) -> Result<(), BackendError>;
}
