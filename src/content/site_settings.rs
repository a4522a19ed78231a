use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::DefaultContact;

/// Site-wide values from the content store's `settings.yml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub contact: DefaultContact,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Knights Chess Academy".to_string(),
            contact: DefaultContact::default(),
        }
    }
}

impl SiteSettings {
    /// Loads settings, keeping the built-in defaults when the file is absent or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            warn!("Ignoring settings file {}: {:#}", path.display(), e);
            Self::default()
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).context("Failed to read settings file")?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).context("Failed to parse settings file")
    }
}
