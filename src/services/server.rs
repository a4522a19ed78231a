use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::routes::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::content::{ContentLoader, SiteSettings};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let loader = ContentLoader::from_settings(&self.config.content);
        let records = loader.reload();
        info!(
            "Serving {} tournament records ({} files) from {}",
            records,
            loader.list_content_files().len(),
            self.config.content.tournaments_path().display()
        );

        let state = Arc::new(AppState {
            loader,
            site: SiteSettings::load_or_default(&self.config.content.settings_path()),
            config: self.config.clone(),
        });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
