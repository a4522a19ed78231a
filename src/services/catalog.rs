use crate::config::settings::AppConfig;
use crate::content::{ContentLoader, SiteSettings, TournamentPage, normalize};

/// Read-only view of the tournament pages the site would render
pub struct CatalogService {
    loader: ContentLoader,
    site: SiteSettings,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(
            ContentLoader::from_settings(&config.content),
            SiteSettings::load_or_default(&config.content.settings_path()),
        )
    }

    pub fn with_parts(loader: ContentLoader, site: SiteSettings) -> Self {
        Self { loader, site }
    }

    pub fn list(&self, active_only: bool) -> Vec<TournamentPage> {
        let records = if active_only {
            self.loader.active_or_fallback()
        } else {
            self.loader.tournaments_or_fallback()
        };
        records
            .iter()
            .map(|record| normalize(record, &self.site.contact))
            .collect()
    }

    pub fn show(&self, slug: &str) -> Option<TournamentPage> {
        self.loader
            .find_or_fallback(slug)
            .map(|record| normalize(&record, &self.site.contact))
    }
}
