use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod crud;

pub const EMPLOYEES_PATH: &str = "/api/employees";
pub const STUDENTS_PATH: &str = "/api/students";
pub const CUSTOMERS_PATH: &str = "/api/v1/customer";

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Health plus one CRUD router per resource, wrapped in CORS and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(crud::crud_router(EMPLOYEES_PATH, state.employees))
        .merge(crud::crud_router(STUDENTS_PATH, state.students))
        .merge(crud::crud_router(CUSTOMERS_PATH, state.customers))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
