// Commands that change a quote or an event on the backend.
//
// Purpose
// - Express user intent independently of the transport (HTTP or GraphQL).
// - Serialize as the request bodies the backend expects (camelCase).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveQuote {
    pub final_price: Decimal,
    pub requested_workers: u32,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectQuote {
    pub reason: String,
}
