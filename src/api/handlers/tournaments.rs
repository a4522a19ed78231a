use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{AppState, read_content};
use crate::api::models::{ErrorResponse, TournamentListResponse};
use crate::content::normalize;
use crate::domain::TournamentRecord;

pub async fn list_tournaments(State(state): State<Arc<AppState>>) -> Response {
    let listing = read_content(&state, |state| {
        to_list(state, &state.loader.tournaments_or_fallback())
    })
    .await;
    into_json(listing)
}

pub async fn list_active_tournaments(State(state): State<Arc<AppState>>) -> Response {
    let listing = read_content(&state, |state| {
        to_list(state, &state.loader.active_or_fallback())
    })
    .await;
    into_json(listing)
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let page = read_content(&state, move |state| {
        state
            .loader
            .find_or_fallback(&slug)
            .map(|record| normalize(&record, &state.site.contact))
    })
    .await;

    match page {
        Ok(Some(page)) => Json(page).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Tournament not found")),
        )
            .into_response(),
        Err(status) => internal_error(status),
    }
}

fn to_list(state: &AppState, records: &[TournamentRecord]) -> TournamentListResponse {
    let pages = records
        .iter()
        .map(|record| normalize(record, &state.site.contact))
        .collect();
    TournamentListResponse::new(pages)
}

fn into_json(listing: Result<TournamentListResponse, StatusCode>) -> Response {
    match listing {
        Ok(listing) => Json(listing).into_response(),
        Err(status) => internal_error(status),
    }
}

fn internal_error(status: StatusCode) -> Response {
    (status, Json(ErrorResponse::new("Failed to read tournament content"))).into_response()
}
