use serde::Serialize;

use crate::content::TournamentPage;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListResponse {
    pub items: Vec<TournamentPage>,
    pub total: usize,
}

impl TournamentListResponse {
    pub fn new(items: Vec<TournamentPage>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub records: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
