pub mod model;

use crate::AppState;
use crate::auth::validate_bearer;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use model::ListParams;
use serde_json::json;

pub fn animals_router() -> Router<AppState> {
    Router::new().route("/animals", get(list_animals_handler))
}

// the whole per-request pipeline: auth, connection check, pagination, query.
// every failure maps to a fixed generic body; detail stays in the logs.
async fn list_animals_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    if !request_is_authenticated(&state, &headers) {
        return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    if let Err(e) = state.repo.ping().await {
        tracing::error!("database unavailable: {e:#}");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    }

    let (limit, offset) = params.resolve();

    match state.repo.list_animals(limit, offset).await {
        Ok(animals) => (StatusCode::OK, Json(animals)).into_response(),
        Err(e) => {
            tracing::error!("animal listing failed: {e:#}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

// shared fallback: anything that isn't GET /animals. the token is checked
// before routing, so an unauthenticated request is 401 even off-route
pub async fn not_found_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !request_is_authenticated(&state, &headers) {
        return error_response(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn request_is_authenticated(state: &AppState, headers: &HeaderMap) -> bool {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    validate_bearer(auth_header, state.config.jwt_secret.as_bytes())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
