use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    DEFAULT_BANNER_URL, DEFAULT_CATALOG_PATH, DEFAULT_CONFIG_PATH, DEFAULT_NOTES_PATH,
    DEFAULT_PAGE_TITLE, DEFAULT_PLACEHOLDER_URL, DEFAULT_TAGLINE, ENV_CATALOG_PATH, ENV_HOST,
    ENV_NOTES_PATH, ENV_PORT,
};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub images: ImageConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub catalog_path: PathBuf,
    pub notes_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            notes_path: PathBuf::from(DEFAULT_NOTES_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CatalogError::Config(format!("invalid bind address '{}:{}': {}", self.host, self.port, e)))
    }
}

/// Image fallbacks: per-category placeholders, then one generic placeholder
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub default_placeholder: String,
    pub placeholders: HashMap<String, String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_placeholder: DEFAULT_PLACEHOLDER_URL.to_string(),
            placeholders: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub tagline: String,
    pub banner_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            banner_url: DEFAULT_BANNER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: "pasta_paradise.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: 9898,
        }
    }
}

impl Config {
    /// Load configuration, then apply environment overrides.
    ///
    /// An explicit path must exist. Without one, `pasta.toml` is used when present
    /// and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Environment values win over file values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            self.data.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_NOTES_PATH) {
            self.data.notes_path = PathBuf::from(path);
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| CatalogError::Config(format!("{} must be a port number, got '{}'", ENV_PORT, port)))?;
        }
        Ok(())
    }
}
