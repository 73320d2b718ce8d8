// State changing calls issued from the dashboard.
//
// Responsibilities
// - Validate approve/reject commands before anything is sent.
// - Forward the caller's token; the backend owns the workflow rules.

use std::sync::Arc;

use crate::modules::dashboard::adapters::outbound::backend_api::BackendApi;
use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::core::decide::{decide_approve, decide_reject};
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::BearerToken;

pub struct ManageQuotesHandler {
    backend: Arc<dyn BackendApi>,
}

impl ManageQuotesHandler {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    pub async fn delete_event(
        &self,
        token: &BearerToken,
        event_id: i64,
    ) -> Result<(), ApplicationError> {
        self.backend.delete_event(token, event_id).await?;
        tracing::info!(event_id, "event deleted");
        Ok(())
    }

    pub async fn approve_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: ApproveQuote,
    ) -> Result<(), ApplicationError> {
        let command = decide_approve(command)?;
        self.backend.approve_quote(token, quote_id, &command).await?;
        tracing::info!(quote_id, final_price = %command.final_price, "quote approved");
        Ok(())
    }

    pub async fn reject_quote(
        &self,
        token: &BearerToken,
        quote_id: i64,
        command: RejectQuote,
    ) -> Result<(), ApplicationError> {
        let command = decide_reject(command)?;
        self.backend.reject_quote(token, quote_id, &command).await?;
        tracing::info!(quote_id, "quote rejected");
        Ok(())
    }

    pub async fn send_quote(&self, token: &BearerToken, quote_id: i64) -> Result<(), ApplicationError> {
        self.backend.send_quote(token, quote_id).await?;
        tracing::info!(quote_id, "quote sent to manager");
        Ok(())
    }
}
