// Dashboard filters, free-text search and summary counts.
//
// Purpose
// - Decide whether a merged row belongs under the selected status tab.
//
// Rules
// - `all` always matches.
// - Other tabs match when either the event status or the quote status falls in the tab's
//   groups. Event and quote can drift apart while the workflow moves, so both sides count.
// - A side that is absent never matches.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::modules::dashboard::core::merge::MergedRow;
use crate::modules::dashboard::core::row_view::DashboardRow;
use crate::modules::dashboard::core::status::{StatusGroup, WorkflowStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardFilter {
    #[default]
    All,
    Pending,
    Approved,
    Completed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown dashboard filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for DashboardFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(DashboardFilter::All),
            "pending" => Ok(DashboardFilter::Pending),
            "approved" => Ok(DashboardFilter::Approved),
            "completed" => Ok(DashboardFilter::Completed),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

impl DashboardFilter {
    fn admits(self, status: &WorkflowStatus) -> bool {
        match self {
            DashboardFilter::All => true,
            DashboardFilter::Pending => status.group() == StatusGroup::Pending,
            DashboardFilter::Approved => status.group() == StatusGroup::Approved,
            DashboardFilter::Completed => {
                matches!(status.group(), StatusGroup::Closed | StatusGroup::Rejected)
            }
        }
    }
}

pub fn matches_filter(row: &MergedRow, filter: DashboardFilter) -> bool {
    if filter == DashboardFilter::All {
        return true;
    }
    let event_side = row.event.as_ref().is_some_and(|e| filter.admits(&e.status));
    let quote_side = row.quote.as_ref().is_some_and(|q| filter.admits(&q.status));
    event_side || quote_side
}

/// Case-insensitive substring match over name, location and status. Blank queries match.
pub fn matches_search(row: &DashboardRow, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        row.name.as_str(),
        row.location.as_str(),
        row.status.label.as_str(),
        row.status.code.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub completed: usize,
}

impl DashboardSummary {
    pub fn of(rows: &[MergedRow]) -> Self {
        let count = |filter| rows.iter().filter(|row| matches_filter(row, filter)).count();
        Self {
            total: rows.len(),
            pending: count(DashboardFilter::Pending),
            approved: count(DashboardFilter::Approved),
            completed: count(DashboardFilter::Completed),
        }
    }
}
