// Shared test builders for event and quote records.
//
// Defaults describe a plausible record; setters override single fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::modules::dashboard::core::status::WorkflowStatus;

pub struct EventRecordBuilder {
    inner: EventRecord,
}

#[allow(dead_code)]
impl EventRecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            inner: EventRecord {
                id,
                name: Some(format!("Event {id}")),
                description: None,
                location: Some("Tel Aviv".to_string()),
                event_date: NaiveDate::from_ymd_opt(2025, 6, 12),
                start_time: None,
                participant_count: Some(100),
                status: WorkflowStatus::Draft,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn location(mut self, v: Option<&str>) -> Self {
        self.inner.location = v.map(str::to_string);
        self
    }

    pub fn participants(mut self, v: u32) -> Self {
        self.inner.participant_count = Some(v);
        self
    }

    pub fn status(mut self, v: WorkflowStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> EventRecord {
        self.inner
    }
}

pub struct QuoteRecordBuilder {
    inner: QuoteRecord,
}

#[allow(dead_code)]
impl QuoteRecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            inner: QuoteRecord {
                id,
                event_id: None,
                event_name: Some(format!("Quote {id}")),
                location: Some("Haifa".to_string()),
                event_date: NaiveDate::from_ymd_opt(2025, 7, 1),
                start_time: None,
                participant_count: Some(80),
                final_price: None,
                quote_amount: Some(Decimal::new(1000, 0)),
                price: None,
                total_price: None,
                currency: Some("ILS".to_string()),
                status: WorkflowStatus::Submitted,
                notes: None,
                reject_reason: None,
                approved_at: None,
            },
        }
    }

    pub fn event_id(mut self, v: i64) -> Self {
        self.inner.event_id = Some(v);
        self
    }

    pub fn event_name(mut self, v: impl Into<String>) -> Self {
        self.inner.event_name = Some(v.into());
        self
    }

    pub fn location(mut self, v: Option<&str>) -> Self {
        self.inner.location = v.map(str::to_string);
        self
    }

    pub fn participants(mut self, v: u32) -> Self {
        self.inner.participant_count = Some(v);
        self
    }

    pub fn no_participants(mut self) -> Self {
        self.inner.participant_count = None;
        self
    }

    pub fn no_date(mut self) -> Self {
        self.inner.event_date = None;
        self
    }

    pub fn quote_amount(mut self, v: Decimal) -> Self {
        self.inner.quote_amount = Some(v);
        self
    }

    pub fn no_price(mut self) -> Self {
        self.inner.final_price = None;
        self.inner.quote_amount = None;
        self.inner.price = None;
        self.inner.total_price = None;
        self
    }

    pub fn status(mut self, v: WorkflowStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> QuoteRecord {
        self.inner
    }
}

#[cfg(test)]
mod record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_draft_event_by_default() {
        let event = EventRecordBuilder::new(3).build();
        assert_eq!(event.id, 3);
        assert_eq!(event.status, WorkflowStatus::Draft);
        assert_eq!(event.name.as_deref(), Some("Event 3"));
    }

    #[rstest]
    fn it_should_override_quote_fields() {
        let quote = QuoteRecordBuilder::new(8)
            .event_id(3)
            .status(WorkflowStatus::Approved)
            .no_price()
            .build();
        assert_eq!(quote.event_id, Some(3));
        assert_eq!(quote.status, WorkflowStatus::Approved);
        assert_eq!(quote.amount(), None);
    }
}
