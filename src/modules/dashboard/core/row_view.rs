// Display model for a merged dashboard row.
//
// Purpose
// - Resolve the fields a dashboard line shows from whichever side of the row describes the
//   event best, and substitute placeholders for anything neither side knows.
//
// Resolution order
// - Quote in an active workflow state (pending or approved), then event, then any quote.
// - Status: the quote's when it is recognised, else the event's, else the quote's raw text,
//   else draft. A quote without any status counts as having none.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::dashboard::core::merge::MergedRow;
use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};
use crate::modules::dashboard::core::status::{
    StatusClassification, WorkflowStatus, missing_quote_status,
};

pub const NAME_PLACEHOLDER: &str = "ללא שם";
pub const TEXT_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub key: String,
    pub event_id: Option<i64>,
    pub quote_id: Option<i64>,
    pub name: String,
    pub location: String,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub participant_count: u32,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub status: StatusClassification,
    pub event_status: Option<WorkflowStatus>,
    pub quote_status: Option<WorkflowStatus>,
}

// Picks a field from the preferred side first, then the other.
struct Sides<'a> {
    preferred_quote: Option<&'a QuoteRecord>,
    event: Option<&'a EventRecord>,
    fallback_quote: Option<&'a QuoteRecord>,
}

impl<'a> Sides<'a> {
    fn of(row: &'a MergedRow) -> Self {
        let quote = row.quote.as_ref();
        let active = quote.filter(|q| q.status.is_active());
        Self {
            preferred_quote: active,
            event: row.event.as_ref(),
            fallback_quote: if active.is_some() { None } else { quote },
        }
    }

    fn pick<T>(
        &self,
        from_quote: impl Fn(&'a QuoteRecord) -> Option<T>,
        from_event: impl Fn(&'a EventRecord) -> Option<T>,
    ) -> Option<T> {
        self.preferred_quote
            .and_then(&from_quote)
            .or_else(|| self.event.and_then(&from_event))
            .or_else(|| self.fallback_quote.and_then(&from_quote))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn row_status(row: &MergedRow) -> WorkflowStatus {
    match (&row.quote, &row.event) {
        (Some(quote), _) if quote.status.is_known() => quote.status.clone(),
        (_, Some(event)) => event.status.clone(),
        (Some(quote), None) if quote.status != missing_quote_status() => quote.status.clone(),
        _ => WorkflowStatus::Draft,
    }
}

impl From<&MergedRow> for DashboardRow {
    fn from(row: &MergedRow) -> Self {
        let sides = Sides::of(row);
        let quote = row.quote.as_ref();

        Self {
            key: row.key.to_string(),
            event_id: row.event_id(),
            quote_id: quote.map(|q| q.id),
            name: sides
                .pick(|q| non_blank(&q.event_name), |e| non_blank(&e.name))
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            location: sides
                .pick(|q| non_blank(&q.location), |e| non_blank(&e.location))
                .unwrap_or_else(|| TEXT_PLACEHOLDER.to_string()),
            event_date: sides.pick(|q| q.event_date, |e| e.event_date),
            start_time: sides.pick(|q| q.start_time, |e| e.start_time),
            participant_count: sides
                .pick(|q| q.participant_count, |e| e.participant_count)
                .unwrap_or(0),
            price: quote.and_then(QuoteRecord::amount),
            currency: quote.and_then(|q| non_blank(&q.currency)),
            status: row_status(row).classification(),
            event_status: row.event.as_ref().map(|e| e.status.clone()),
            quote_status: quote.map(|q| q.status.clone()),
        }
    }
}
