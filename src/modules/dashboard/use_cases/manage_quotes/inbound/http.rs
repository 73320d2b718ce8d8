use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::shell::responses::bearer_token;
use crate::shell::state::AppState;

fn respond(result: Result<(), ApplicationError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i64>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(t) => t,
        Err(e) => return e.into_response(),
    };
    respond(state.manage_quotes.delete_event(&token, event_id).await)
}

pub async fn approve_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quote_id): Path<i64>,
    body: Result<Json<ApproveQuote>, JsonRejection>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(t) => t,
        Err(e) => return e.into_response(),
    };
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.manage_quotes.approve_quote(&token, quote_id, command).await)
}

pub async fn reject_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quote_id): Path<i64>,
    body: Result<Json<RejectQuote>, JsonRejection>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(t) => t,
        Err(e) => return e.into_response(),
    };
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.manage_quotes.reject_quote(&token, quote_id, command).await)
}

pub async fn send_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quote_id): Path<i64>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(t) => t,
        Err(e) => return e.into_response(),
    };
    respond(state.manage_quotes.send_quote(&token, quote_id).await)
}
