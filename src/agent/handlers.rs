use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::agent::dtos::{HealthResponse, ScoutRequest, ScoutResponse};
use crate::app_state::AppState;
use crate::scout::{Scout, ScoutError, ScoutJob};

#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ScoutRequest>, JsonRejection>,
) -> (StatusCode, Json<ScoutResponse>) {
    // Unreadable bodies still get a reply the caller can parse.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected scout request body");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ScoutResponse::failure("", rejection.body_text(), Utc::now())),
            );
        }
    };
    info!(url = %request.url, "incoming scout request");
    let (status, response) = process_request(&state.scout, request).await;
    (status, Json(response))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

/// Map one request onto a single-subject job and the outcome back onto a reply.
pub async fn process_request(
    scout: &Scout,
    request: ScoutRequest,
) -> (StatusCode, ScoutResponse) {
    let now = Utc::now();
    if let Err(reason) = request.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ScoutResponse::failure(&request.url, reason, now),
        );
    }

    let job = ScoutJob::for_url(format!("scout-{}", now.timestamp()), request.url.clone());
    match scout.run(job).await {
        Ok(outcome) => (StatusCode::OK, ScoutResponse::success(&outcome.pack)),
        Err(e) => {
            error!(error = %e, "scout request failed");
            let status = match &e {
                ScoutError::MissingSubject => StatusCode::UNPROCESSABLE_ENTITY,
                ScoutError::Retrieval { .. } => StatusCode::BAD_GATEWAY,
                ScoutError::Setup(_) | ScoutError::Storage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, ScoutResponse::failure(&request.url, e.to_string(), now))
        }
    }
}
