use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use log;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use super::{AppState, read_content};
use crate::api::models::{ErrorResponse, ReloadResponse};

pub async fn admin_reload(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new("Unauthorized"))).into_response();
    }

    log::info!("Admin triggered content reload");
    match read_content(&state, |state| state.loader.reload()).await {
        Ok(records) => {
            log::info!("Content reload finished with {} records", records);
            Json(ReloadResponse { records }).into_response()
        }
        Err(status) => (status, Json(ErrorResponse::new("Content reload failed"))).into_response(),
    }
}

fn is_authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(token) = state.config.server.admin_token.as_deref() else {
        return false;
    };
    let presented = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));
    presented.is_some_and(|presented| tokens_match(presented, token))
}

/// Compares without short-circuiting on the first differing byte
fn tokens_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
