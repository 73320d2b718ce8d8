// Workflow status shared by events and quote requests.
//
// Purpose
// - Parse the historical spellings reported by the backend (mixed case, legacy lower-case,
//   hyphenated) into one closed enum, once, when a record is decoded.
// - Classify a status into a display group with a localized label and a CSS class.
//
// Boundaries
// - No input or output. Parsing and classification are total: unrecognised input becomes
//   `WorkflowStatus::Unknown` and keeps the raw text so it can still be displayed.
//
// Group priority (first match wins)
// - pending, approved, rejected, closed (completed or cancelled), draft, unknown.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// What an absent, blank or literal `null` status resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingStatus {
    /// Events are drafts until the backend says otherwise.
    Draft,
    /// Generic contexts (quote requests) surface the gap instead of guessing.
    Unknown,
}

pub const UNKNOWN_STATUS_CODE: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkflowStatus {
    Draft,
    Submitted,
    QuotePending,
    PendingApproval,
    SentToManager,
    ManagerReview,
    PendingClientFinal,
    Approved,
    Confirmed,
    ClientApproved,
    Active,
    Published,
    Rejected,
    Cancelled,
    Completed,
    Closed,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGroup {
    Pending,
    Approved,
    Rejected,
    Closed,
    Draft,
    Unknown,
}

impl StatusGroup {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusGroup::Pending => "status-pending",
            StatusGroup::Approved => "status-approved",
            StatusGroup::Rejected => "status-rejected",
            StatusGroup::Closed => "status-completed",
            StatusGroup::Draft => "status-draft",
            StatusGroup::Unknown => "status-unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusClassification {
    pub code: String,
    pub group: StatusGroup,
    pub label: String,
    pub css_class: String,
}

impl WorkflowStatus {
    pub fn parse(raw: Option<&str>, missing: MissingStatus) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if is_missing(trimmed) {
            return match missing {
                MissingStatus::Draft => WorkflowStatus::Draft,
                MissingStatus::Unknown => WorkflowStatus::Unknown(UNKNOWN_STATUS_CODE.to_string()),
            };
        }
        Self::from_code(&normalize(trimmed))
            .unwrap_or_else(|| WorkflowStatus::Unknown(trimmed.to_string()))
    }

    fn from_code(code: &str) -> Option<Self> {
        let status = match code {
            "DRAFT" => WorkflowStatus::Draft,
            "SUBMITTED" => WorkflowStatus::Submitted,
            "QUOTE_PENDING" => WorkflowStatus::QuotePending,
            "PENDING" | "PENDING_APPROVAL" => WorkflowStatus::PendingApproval,
            "SENT_TO_MANAGER" => WorkflowStatus::SentToManager,
            "MANAGER_REVIEW" => WorkflowStatus::ManagerReview,
            "PENDING_CLIENT_FINAL" => WorkflowStatus::PendingClientFinal,
            "APPROVED" => WorkflowStatus::Approved,
            "CONFIRMED" => WorkflowStatus::Confirmed,
            "CLIENT_APPROVED" => WorkflowStatus::ClientApproved,
            "ACTIVE" => WorkflowStatus::Active,
            "PUBLISHED" => WorkflowStatus::Published,
            "REJECTED" | "DECLINED" => WorkflowStatus::Rejected,
            "CANCELLED" | "CANCELED" => WorkflowStatus::Cancelled,
            "COMPLETED" | "FINISHED" => WorkflowStatus::Completed,
            "CLOSED" => WorkflowStatus::Closed,
            _ => return None,
        };
        Some(status)
    }

    /// Canonical serialization. `Unknown` round-trips its raw text.
    pub fn code(&self) -> &str {
        match self {
            WorkflowStatus::Draft => "DRAFT",
            WorkflowStatus::Submitted => "SUBMITTED",
            WorkflowStatus::QuotePending => "QUOTE_PENDING",
            WorkflowStatus::PendingApproval => "PENDING_APPROVAL",
            WorkflowStatus::SentToManager => "SENT_TO_MANAGER",
            WorkflowStatus::ManagerReview => "MANAGER_REVIEW",
            WorkflowStatus::PendingClientFinal => "PENDING_CLIENT_FINAL",
            WorkflowStatus::Approved => "APPROVED",
            WorkflowStatus::Confirmed => "CONFIRMED",
            WorkflowStatus::ClientApproved => "CLIENT_APPROVED",
            WorkflowStatus::Active => "ACTIVE",
            WorkflowStatus::Published => "PUBLISHED",
            WorkflowStatus::Rejected => "REJECTED",
            WorkflowStatus::Cancelled => "CANCELLED",
            WorkflowStatus::Completed => "COMPLETED",
            WorkflowStatus::Closed => "CLOSED",
            WorkflowStatus::Unknown(raw) => raw,
        }
    }

    pub fn group(&self) -> StatusGroup {
        match self {
            WorkflowStatus::Submitted
            | WorkflowStatus::QuotePending
            | WorkflowStatus::PendingApproval
            | WorkflowStatus::SentToManager
            | WorkflowStatus::ManagerReview
            | WorkflowStatus::PendingClientFinal => StatusGroup::Pending,
            WorkflowStatus::Approved
            | WorkflowStatus::Confirmed
            | WorkflowStatus::ClientApproved
            | WorkflowStatus::Active
            | WorkflowStatus::Published => StatusGroup::Approved,
            WorkflowStatus::Rejected => StatusGroup::Rejected,
            WorkflowStatus::Cancelled | WorkflowStatus::Completed | WorkflowStatus::Closed => {
                StatusGroup::Closed
            }
            WorkflowStatus::Draft => StatusGroup::Draft,
            WorkflowStatus::Unknown(_) => StatusGroup::Unknown,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WorkflowStatus::Draft => "טיוטה",
            WorkflowStatus::Submitted => "ממתין לאישור",
            WorkflowStatus::QuotePending => "ממתין להצעת מחיר",
            WorkflowStatus::PendingApproval => "ממתין לאישור",
            WorkflowStatus::SentToManager => "נשלח למנהל",
            WorkflowStatus::ManagerReview => "בבדיקת מנהל",
            WorkflowStatus::PendingClientFinal => "ממתין לאישור סופי של הלקוח",
            WorkflowStatus::Approved => "אושר",
            WorkflowStatus::Confirmed => "מאושר",
            WorkflowStatus::ClientApproved => "אושר על ידי הלקוח",
            WorkflowStatus::Active => "פעיל",
            WorkflowStatus::Published => "פורסם",
            WorkflowStatus::Rejected => "נדחה",
            WorkflowStatus::Cancelled => "בוטל",
            WorkflowStatus::Completed => "הושלם",
            WorkflowStatus::Closed => "נסגר",
            WorkflowStatus::Unknown(raw) => raw,
        }
    }

    /// Pending and approved quotes are still in play; their fields describe the event best.
    pub fn is_active(&self) -> bool {
        matches!(self.group(), StatusGroup::Pending | StatusGroup::Approved)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WorkflowStatus::Unknown(_))
    }

    pub fn classification(&self) -> StatusClassification {
        let group = self.group();
        StatusClassification {
            code: self.code().to_string(),
            group,
            label: self.label().to_string(),
            css_class: group.css_class().to_string(),
        }
    }
}

pub fn classify(raw: Option<&str>, missing: MissingStatus) -> StatusClassification {
    WorkflowStatus::parse(raw, missing).classification()
}

fn is_missing(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("undefined")
}

fn normalize(trimmed: &str) -> String {
    trimmed
        .chars()
        .map(|c| match c {
            '-' => '_',
            c if c.is_whitespace() => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for WorkflowStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for WorkflowStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = raw_status(deserializer)?;
        Ok(WorkflowStatus::parse(raw.as_deref(), MissingStatus::Unknown))
    }
}

// Backend payloads are loosely typed: a status may arrive as a string, a number or null.
fn raw_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

pub fn deserialize_event_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<WorkflowStatus, D::Error> {
    let raw = raw_status(deserializer)?;
    Ok(WorkflowStatus::parse(raw.as_deref(), MissingStatus::Draft))
}

pub fn deserialize_quote_status<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<WorkflowStatus, D::Error> {
    let raw = raw_status(deserializer)?;
    Ok(WorkflowStatus::parse(raw.as_deref(), MissingStatus::Unknown))
}

pub fn missing_event_status() -> WorkflowStatus {
    WorkflowStatus::Draft
}

pub fn missing_quote_status() -> WorkflowStatus {
    WorkflowStatus::Unknown(UNKNOWN_STATUS_CODE.to_string())
}
