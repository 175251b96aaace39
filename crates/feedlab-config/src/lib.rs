//! Configuration management and loading for feedlab.

use anyhow::Context;
use feedlab_logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides [`FeedlabConfig::database`].
pub const DATABASE_ENV: &str = "FEEDLAB_DATABASE";

/// Configuration format types supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Main feedlab configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedlabConfig {
    /// SQLite database holding the posts table
    #[serde(default = "default_database")]
    pub database: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database() -> PathBuf {
    PathBuf::from("feed.db")
}

impl Default for FeedlabConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FeedlabConfig {
    /// Apply `FEEDLAB_DATABASE` if it is set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_database_override(std::env::var(DATABASE_ENV).ok())
    }

    fn with_database_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            self.database = PathBuf::from(path);
        }
        self
    }
}

/// Load configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<FeedlabConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;

    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON config: {}", e)),
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse YAML config: {}", e)),
    }
}

/// Save configuration to a file
pub fn save_config(config: &FeedlabConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON config: {}", e))?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize YAML config: {}", e))?,
    };

    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}
