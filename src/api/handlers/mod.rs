use axum::http::StatusCode;
use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::content::{ContentLoader, SiteSettings};

pub mod admin;
pub mod tournaments;

pub struct AppState {
    pub loader: ContentLoader,
    pub site: SiteSettings,
    pub config: AppConfig,
}

/// Runs `read` on the blocking pool, since a stale loader snapshot is rebuilt
/// from disk
pub(crate) async fn read_content<R, F>(state: &Arc<AppState>, read: F) -> Result<R, StatusCode>
where
    F: FnOnce(&AppState) -> R + Send + 'static,
    R: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || read(&state))
        .await
        .map_err(|e| {
            log::error!("Content read task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
