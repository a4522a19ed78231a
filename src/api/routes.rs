use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{tournaments::{list_tournaments, list_active_tournaments, get_tournament}, admin::admin_reload, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tournaments", get(list_tournaments))
        .route("/api/tournaments/active", get(list_active_tournaments))
        .route("/api/tournaments/:slug", get(get_tournament))
        .route("/api/admin/reload", post(admin_reload))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::content::{ContentLoader, MemorySource, SiteSettings};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    const OPEN_2025: &str = "---
slug: open-2025
title: City Open 2025
status: published
registrationOpen: true
dateStart: 2025-09-06
dateEnd: 2025-09-07
registrationDeadline: 2025-08-30
heroImage: /images/open-2025.jpg
rounds: 7
sections:
  - name: U-10
    entryFee: \"₹500\"
  - name: Open
---
";

    fn state(source: MemorySource, admin_token: Option<&str>) -> Arc<AppState> {
        let mut config = AppConfig::new();
        config.server.admin_token = admin_token.map(str::to_string);
        Arc::new(AppState {
            loader: ContentLoader::new(source),
            site: SiteSettings::default(),
            config,
        })
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_tournament_detail_is_normalized() {
        let router = create_router(state(MemorySource::new().with_file("open.md", OPEN_2025), None));

        let (status, body) = get_json(router, "/api/tournaments/open-2025").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "open-2025");
        assert_eq!(body["images"].as_array().unwrap().len(), 3);
        assert_eq!(body["sections"][0]["notes"], "₹500");
        assert_eq!(body["sections"][1]["notes"], "fee/notes to be announced");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let router = create_router(state(MemorySource::new().with_file("open.md", OPEN_2025), None));
        let (status, body) = get_json(router, "/api/tournaments/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Tournament not found");
    }

    #[tokio::test]
    async fn test_empty_store_lists_fallback() {
        let router = create_router(state(MemorySource::new(), None));
        let (status, body) = get_json(router, "/api/tournaments").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["total"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_reload_requires_configured_token() {
        let request = |auth: Option<&str>| {
            let builder = Request::builder().method("POST").uri("/api/admin/reload");
            let builder = match auth {
                Some(value) => builder.header("Authorization", value),
                None => builder,
            };
            builder.body(Body::empty()).unwrap()
        };

        let unconfigured = create_router(state(MemorySource::new(), None));
        let response = unconfigured.oneshot(request(Some("Bearer anything"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let source = MemorySource::new().with_file("open.md", OPEN_2025);
        let router = create_router(state(source, Some("s3cret")));
        let response = router.clone().oneshot(request(Some("Bearer wrong"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router.oneshot(request(Some("Bearer s3cret"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["records"], 1);
    }
}
