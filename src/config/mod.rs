use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::store::{DEFAULT_DOCUMENT_KEY, DEFAULT_SESSION_KEY};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the backing files live in
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage key the document is persisted under
    #[serde(default = "default_document_key")]
    pub document_key: String,
    /// Storage key the session is persisted under
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            document_key: default_document_key(),
            session_key: default_session_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_document_key() -> String {
    DEFAULT_DOCUMENT_KEY.to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| "Failed to parse configuration file")?;
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
