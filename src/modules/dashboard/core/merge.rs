// Merge events and quote requests into one row per logical event.
//
// Purpose
// - Pair every quote with the event it references so the dashboard shows one line per event.
//
// Responsibilities
// - Seed rows from events keyed by event id, then fold quotes in by their event id.
// - Give quotes without an event id a row of their own, keyed by the quote id.
// - Keep insertion order: events first, then rows opened by unmatched quotes.
// - Never drop a record. A second quote for the same event becomes the row's quote and the
//   earlier one moves to `earlier_quotes`.
//
// Boundaries
// - Pure. Inputs are borrowed and cloned into fresh rows on every call.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::modules::dashboard::core::records::{EventRecord, QuoteRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RowKey {
    Event(i64),
    Quote(i64),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Event(id) => write!(f, "event:{id}"),
            RowKey::Quote(id) => write!(f, "quote:{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    pub key: RowKey,
    pub event: Option<EventRecord>,
    pub quote: Option<QuoteRecord>,
    pub earlier_quotes: Vec<QuoteRecord>,
}

impl MergedRow {
    fn from_event(event: EventRecord) -> Self {
        Self {
            key: RowKey::Event(event.id),
            event: Some(event),
            quote: None,
            earlier_quotes: Vec::new(),
        }
    }

    fn from_quote(key: RowKey, quote: QuoteRecord) -> Self {
        Self {
            key,
            event: None,
            quote: Some(quote),
            earlier_quotes: Vec::new(),
        }
    }

    fn attach_quote(&mut self, quote: QuoteRecord) {
        if let Some(previous) = self.quote.replace(quote) {
            self.earlier_quotes.push(previous);
        }
    }

    pub fn event_id(&self) -> Option<i64> {
        match self.key {
            RowKey::Event(id) => Some(id),
            RowKey::Quote(_) => None,
        }
    }
}

pub fn quote_key(quote: &QuoteRecord) -> RowKey {
    quote
        .event_id
        .map(RowKey::Event)
        .unwrap_or(RowKey::Quote(quote.id))
}

pub fn merge(events: &[EventRecord], quotes: &[QuoteRecord]) -> Vec<MergedRow> {
    let mut rows: Vec<MergedRow> = Vec::with_capacity(events.len() + quotes.len());
    let mut index: HashMap<RowKey, usize> = HashMap::with_capacity(rows.capacity());

    for event in events {
        let key = RowKey::Event(event.id);
        match index.get(&key) {
            Some(&position) => rows[position].event = Some(event.clone()),
            None => {
                index.insert(key, rows.len());
                rows.push(MergedRow::from_event(event.clone()));
            }
        }
    }

    for quote in quotes {
        let key = quote_key(quote);
        match index.get(&key) {
            Some(&position) => rows[position].attach_quote(quote.clone()),
            None => {
                index.insert(key, rows.len());
                rows.push(MergedRow::from_quote(key, quote.clone()));
            }
        }
    }

    rows
}
