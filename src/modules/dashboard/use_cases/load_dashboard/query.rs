use serde::Serialize;

use crate::modules::dashboard::core::filter::{DashboardFilter, DashboardSummary};
use crate::modules::dashboard::core::row_view::DashboardRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub filter: DashboardFilter,
    pub search: Option<String>,
}

/// One of the two backend listings the dashboard is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardSource {
    Events,
    QuoteRequests,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub rows: Vec<DashboardRow>,
    /// Counts over every merged row, before filter and search.
    pub summary: DashboardSummary,
    pub degraded_sources: Vec<DashboardSource>,
}
