use axum::{
    Extension, Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::dashboard::use_cases::load_dashboard::inbound::http as load_http;
use crate::modules::dashboard::use_cases::manage_quotes::inbound::http as manage_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(load_http::handle))
        .route("/events/{id}", delete(manage_http::delete_event))
        .route("/quotes/{id}/approve", put(manage_http::approve_quote))
        .route("/quotes/{id}/reject", put(manage_http::reject_quote))
        .route("/quotes/{id}/send", post(manage_http::send_quote))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
