use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::modules::dashboard::core::filter::DashboardFilter;
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::modules::dashboard::use_cases::load_dashboard::query::{DashboardQuery, DashboardView};
use crate::shell::responses::bearer_token;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DashboardParams {
    pub filter: Option<String>,
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardView>, ApplicationError> {
    let token = bearer_token(&headers)?;
    let filter = match params.filter.as_deref() {
        Some(raw) => raw.parse::<DashboardFilter>()?,
        None => DashboardFilter::All,
    };
    let query = DashboardQuery {
        filter,
        search: params.search,
    };
    let view = state.load_dashboard.handle(&token, &query).await?;
    Ok(Json(view))
}
