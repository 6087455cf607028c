//! HTTP surface for other agents: `POST /submit` runs a single-site scout job.

pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

pub use dtos::{ScoutRequest, ScoutResponse, ScoutResponseClient};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/submit", post(handlers::submit))
        .route("/healthz", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
