// Records as reported by the event/quote backend.
//
// Purpose
// - Decode backend JSON (camelCase) into typed records at the system boundary.
// - Parse statuses into `WorkflowStatus` once, here, so nothing downstream re-matches strings.
//
// Responsibilities
// - Tolerate missing optional fields and unparsable dates, times, counts or amounts (they
//   decode to None) so one malformed record never fails the whole list.
// - Resolve the legacy price aliases of a quote to one amount.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::dashboard::core::status::{
    WorkflowStatus, deserialize_event_status, deserialize_quote_status, missing_event_status,
    missing_quote_status,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub participant_count: Option<u32>,
    #[serde(
        default = "missing_event_status",
        deserialize_with = "deserialize_event_status"
    )]
    pub status: WorkflowStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub participant_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub final_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub quote_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(
        default = "missing_quote_status",
        deserialize_with = "deserialize_quote_status"
    )]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_date_time")]
    pub approved_at: Option<NaiveDateTime>,
}

impl QuoteRecord {
    /// First non-null of the aliases the backend has used for the quoted amount.
    pub fn amount(&self) -> Option<Decimal> {
        self.final_price
            .or(self.quote_amount)
            .or(self.price)
            .or(self.total_price)
    }
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    Ok(optional_text(deserializer)?.as_deref().and_then(parse_date))
}

fn lenient_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
    Ok(optional_text(deserializer)?.as_deref().and_then(parse_time))
}

fn lenient_date_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    Ok(optional_text(deserializer)?
        .as_deref()
        .and_then(parse_date_time))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(optional_text(deserializer)?.as_deref().and_then(parse_count))
}

fn lenient_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    Ok(optional_text(deserializer)?.as_deref().and_then(parse_amount))
}

// Reads any JSON value so a wrongly typed field is consumed whole instead of failing the record.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_date_time(raw).map(|dt| dt.date()));
    if parsed.is_none() {
        tracing::debug!(value = raw, "ignoring unparsable date");
    }
    parsed
}

/// Whole, non-negative counts only; `"50"` and `50.0` are accepted, `-1` and `"many"` are not.
pub fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = raw.parse::<u32>().ok().or_else(|| {
        raw.parse::<Decimal>()
            .ok()
            .filter(|d| d.fract().is_zero())
            .and_then(|d| d.to_u32())
    });
    if parsed.is_none() {
        tracing::debug!(value = raw, "ignoring unparsable participant count");
    }
    parsed
}

pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .ok();
    if parsed.is_none() {
        tracing::debug!(value = raw, "ignoring unparsable amount");
    }
    parsed
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok();
    if parsed.is_none() {
        tracing::debug!(value = raw, "ignoring unparsable time");
    }
    parsed
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
