use async_graphql::{Context, Enum, ErrorExtensions, Object, Result as GqlResult, SimpleObject};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::modules::dashboard::core::filter::{DashboardFilter, DashboardSummary};
use crate::modules::dashboard::core::row_view::DashboardRow;
use crate::modules::dashboard::core::status::StatusClassification;
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::modules::dashboard::use_cases::load_dashboard::query::{
    DashboardQuery, DashboardSource, DashboardView,
};
use crate::shared::core::primitives::BearerToken;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlDashboardFilter {
    All,
    Pending,
    Approved,
    Completed,
}

impl From<GqlDashboardFilter> for DashboardFilter {
    fn from(v: GqlDashboardFilter) -> Self {
        match v {
            GqlDashboardFilter::All => DashboardFilter::All,
            GqlDashboardFilter::Pending => DashboardFilter::Pending,
            GqlDashboardFilter::Approved => DashboardFilter::Approved,
            GqlDashboardFilter::Completed => DashboardFilter::Completed,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlDashboardSource {
    Events,
    QuoteRequests,
}

impl From<DashboardSource> for GqlDashboardSource {
    fn from(v: DashboardSource) -> Self {
        match v {
            DashboardSource::Events => GqlDashboardSource::Events,
            DashboardSource::QuoteRequests => GqlDashboardSource::QuoteRequests,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStatus {
    pub code: String,
    pub label: String,
    pub css_class: String,
}

impl From<StatusClassification> for GqlStatus {
    fn from(v: StatusClassification) -> Self {
        Self {
            code: v.code,
            label: v.label,
            css_class: v.css_class,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboardRow {
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
    pub status: GqlStatus,
    pub event_status: Option<String>,
    pub quote_status: Option<String>,
}

impl From<DashboardRow> for GqlDashboardRow {
    fn from(v: DashboardRow) -> Self {
        Self {
            key: v.key,
            event_id: v.event_id,
            quote_id: v.quote_id,
            name: v.name,
            location: v.location,
            event_date: v.event_date,
            start_time: v.start_time,
            participant_count: v.participant_count,
            price: v.price,
            currency: v.currency,
            status: v.status.into(),
            event_status: v.event_status.map(|s| s.code().to_string()),
            quote_status: v.quote_status.map(|s| s.code().to_string()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboardSummary {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub completed: u64,
}

impl From<DashboardSummary> for GqlDashboardSummary {
    fn from(v: DashboardSummary) -> Self {
        Self {
            total: v.total as u64,
            pending: v.pending as u64,
            approved: v.approved as u64,
            completed: v.completed as u64,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboardView {
    pub rows: Vec<GqlDashboardRow>,
    pub summary: GqlDashboardSummary,
    pub degraded_sources: Vec<GqlDashboardSource>,
}

impl From<DashboardView> for GqlDashboardView {
    fn from(v: DashboardView) -> Self {
        Self {
            rows: v.rows.into_iter().map(Into::into).collect(),
            summary: v.summary.into(),
            degraded_sources: v.degraded_sources.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn dashboard(
        &self,
        context: &Context<'_>,
        filter: Option<GqlDashboardFilter>,
        search: Option<String>,
    ) -> GqlResult<GqlDashboardView> {
        let state = context.data_unchecked::<AppState>();
        let token = context
            .data_opt::<BearerToken>()
            .ok_or_else(|| ApplicationError::MissingToken.extend())?;
        let query = DashboardQuery {
            filter: filter.map(Into::into).unwrap_or_default(),
            search,
        };
        let view = state
            .load_dashboard
            .handle(token, &query)
            .await
            .map_err(|e| e.extend())?;
        Ok(view.into())
    }
}
