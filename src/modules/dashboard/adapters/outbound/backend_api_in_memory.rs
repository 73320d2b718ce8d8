// In memory implementation of the BackendApi port.
//
// Purpose
// - Exercise the dashboard use cases and inbound adapters without a running backend.
//
// Responsibilities
// - Hold events and quote requests in memory and apply mutations the way the backend does.
// - Simulate failures: either listing can be taken offline and the session can be expired.
// - Count calls that reached the backend so tests can assert nothing was sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::modules::dashboard::adapters::outbound::backend_api::{BackendApi, BackendError};
use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::modules::dashboard::core::status::WorkflowStatus;
use crate::shared::core::primitives::BearerToken;

#[derive(Default)]
pub struct InMemoryBackend {
    events: RwLock<Vec<EventRecord>>,
    quotes: RwLock<Vec<QuoteRecord>>,
    calls: AtomicUsize,
    events_offline: bool,
    quotes_offline: bool,
    session_expired: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(events: Vec<EventRecord>, quotes: Vec<QuoteRecord>) -> Self {
        Self {
            events: RwLock::new(events),
            quotes: RwLock::new(quotes),
            ..Self::default()
        }
    }

    pub fn toggle_events_offline(&mut self) {
        self.events_offline = !self.events_offline;
    }

    pub fn toggle_quotes_offline(&mut self) {
        self.quotes_offline = !self.quotes_offline;
    }

    pub fn expire_session(&mut self) {
        self.session_expired = true;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn events(&self) -> Vec<EventRecord> {
        self.events.read().await.clone()
    }

    pub async fn quotes(&self) -> Vec<QuoteRecord> {
        self.quotes.read().await.clone()
    }

    fn enter(&self) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.session_expired {
            return Err(BackendError::SessionExpired);
        }
        Ok(())
    }

    async fn update_quote(
        &self,
        quote_id: i64,
        apply: impl FnOnce(&mut QuoteRecord),
    ) -> Result<(), BackendError> {
        let mut guard = self.quotes.write().await;
        let quote = guard
            .iter_mut()
            .find(|q| q.id == quote_id)
            .ok_or_else(|| BackendError::NotFound(format!("quote {quote_id}")))?;
        apply(quote);
        Ok(())
    }
}

#[async_trait::async_trait]
impl BackendApi for InMemoryBackend {
    async fn list_events(&self, _token: &BearerToken) -> Result<Vec<EventRecord>, BackendError> {
        self.enter()?;
        if self.events_offline {
            return Err(BackendError::Transport("Events backend offline".into()));
        }
        Ok(self.events.read().await.clone())
    }

    async fn list_quote_requests(
        &self,
        _token: &BearerToken,
    ) -> Result<Vec<QuoteRecord>, BackendError> {
        self.enter()?;
        if self.quotes_offline {
            return Err(BackendError::Transport("Quotes backend offline".into()));
        }
        Ok(self.quotes.read().await.clone())
    }

    async fn delete_event(&self, _token: &BearerToken, event_id: i64) -> Result<(), BackendError> {
        self.enter()?;
        let mut guard = self.events.write().await;
        let before = guard.len();
        guard.retain(|e| e.id != event_id);
        if guard.len() == before {
            return Err(BackendError::NotFound(format!("event {event_id}")));
        }
        Ok(())
    }

    async fn approve_quote(
        &self,
        _token: &BearerToken,
        quote_id: i64,
        command: &ApproveQuote,
    ) -> Result<(), BackendError> {
        self.enter()?;
        self.update_quote(quote_id, |quote| {
            quote.status = WorkflowStatus::Approved;
            quote.final_price = Some(command.final_price);
            quote.notes = command.admin_notes.clone();
        })
        .await
    }

    async fn reject_quote(
        &self,
        _token: &BearerToken,
        quote_id: i64,
        command: &RejectQuote,
    ) -> Result<(), BackendError> {
        self.enter()?;
        self.update_quote(quote_id, |quote| {
            quote.status = WorkflowStatus::Rejected;
            quote.reject_reason = Some(command.reason.clone());
        })
        .await
    }

    async fn send_quote(&self, _token: &BearerToken, quote_id: i64) -> Result<(), BackendError> {
        self.enter()?;
        self.update_quote(quote_id, |quote| {
            quote.status = WorkflowStatus::SentToManager;
        })
        .await
    }
}
