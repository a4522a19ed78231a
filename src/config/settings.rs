use log::warn;
use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "KNIGHTS_ACADEMY_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Root of the content store; holds `settings.yml`
    pub root: PathBuf,
    /// Directory (relative to `root`) with one Markdown file per tournament
    pub tournaments_dir: String,
    /// Snapshot lifetime. `None` keeps a snapshot until an explicit reload.
    pub refresh_secs: Option<u64>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            tournaments_dir: "tournaments".to_string(),
            refresh_secs: Some(60),
        }
    }
}

impl ContentSettings {
    pub fn tournaments_path(&self) -> PathBuf {
        self.root.join(&self.tournaments_dir)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yml")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_size_mb: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { max_size_mb: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
    pub endpoint: String,
    pub user_agent: String,
    /// Left unset, the transport default applies
    pub timeout_secs: Option<u64>,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8888/api/tournament-registration".to_string(),
            user_agent: "KnightsAcademy/1.0".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
    /// Bearer token for `/api/admin/*`; admin routes are refused while unset
    pub admin_token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            admin_token: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub content: ContentSettings,
    pub uploads: UploadSettings,
    pub submission: SubmissionSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the YAML file named by `KNIGHTS_ACADEMY_CONFIG`, falling back to defaults.
    pub fn load() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                warn!("Failed to read config {}: {:#}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml(
            r#"
uploads:
  max_size_mb: 10
submission:
  endpoint: "https://forms.example.org/register"
"#,
        )
        .unwrap();

        assert_eq!(config.uploads.max_size_mb, 10);
        assert_eq!(config.submission.endpoint, "https://forms.example.org/register");
        assert_eq!(config.submission.timeout_secs, None);
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.content.tournaments_path(),
            PathBuf::from("content").join("tournaments")
        );
    }
}
