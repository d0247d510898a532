//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file at the default location is not an error; the service
//! starts on defaults. A config file named explicitly must exist, and a
//! malformed one stops startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 5780;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_PORT: &str = "EXPLORE_PORT";
pub const ENV_BIND_ADDRESS: &str = "EXPLORE_BIND";
pub const ENV_CATALOG: &str = "EXPLORE_CATALOG";
pub const ENV_THUMBNAIL_BASE: &str = "EXPLORE_THUMBNAIL_BASE";
pub const ENV_LOG_LEVEL: &str = "EXPLORE_LOG_LEVEL";

/// Bootstrap configuration read from TOML
///
/// Every field is optional; absent fields fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Interface to bind (e.g. "127.0.0.1" or "0.0.0.0")
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Catalog JSON to use instead of the embedded one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Thumbnail host prefix
    #[serde(default)]
    pub thumbnail_base_url: Option<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl TomlConfig {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like `load`, but a missing file yields `None`
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

/// Platform config file location (`<config dir>/project-explore/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("project-explore").join("config.toml"))
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub thumbnail_base_url: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub bind_address: String,
    /// `None` means the embedded catalog
    pub catalog_path: Option<PathBuf>,
    /// `None` means the resolver's default host
    pub thumbnail_base_url: Option<String>,
    pub logging: LoggingConfig,
    /// TOML file the values came from, if any
    pub config_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Resolve configuration from CLI, environment, TOML and defaults
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let (toml, config_file) = match &cli.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                (TomlConfig::load(path)?, Some(path.clone()))
            }
            None => match default_config_path() {
                Some(path) => match TomlConfig::load_optional(&path)? {
                    Some(config) => (config, Some(path)),
                    None => {
                        info!("No config file at {}, using defaults", path.display());
                        (TomlConfig::default(), None)
                    }
                },
                None => {
                    warn!("Could not determine config directory, using defaults");
                    (TomlConfig::default(), None)
                }
            },
        };

        Ok(Self::merge(cli, toml, config_file))
    }

    /// Apply the priority order to already-loaded sources
    pub fn merge(cli: &CliOverrides, toml: TomlConfig, config_file: Option<PathBuf>) -> Self {
        let port = cli
            .port
            .or_else(env_port)
            .or(toml.port)
            .unwrap_or(DEFAULT_PORT);

        let bind_address = cli
            .bind_address
            .clone()
            .or_else(|| env_string(ENV_BIND_ADDRESS))
            .or(toml.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let catalog_path = cli
            .catalog_path
            .clone()
            .or_else(|| env_string(ENV_CATALOG).map(PathBuf::from))
            .or(toml.catalog_path);

        let thumbnail_base_url = cli
            .thumbnail_base_url
            .clone()
            .or_else(|| env_string(ENV_THUMBNAIL_BASE))
            .or(toml.thumbnail_base_url);

        let level = cli
            .log_level
            .clone()
            .or_else(|| env_string(ENV_LOG_LEVEL))
            .unwrap_or(toml.logging.level);

        Self {
            port,
            bind_address,
            catalog_path,
            thumbnail_base_url,
            logging: LoggingConfig {
                level,
                file: toml.logging.file,
            },
            config_file,
        }
    }

    /// `host:port` for the listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_port() -> Option<u16> {
    let raw = env_string(ENV_PORT)?;
    match raw.trim().parse() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!("Ignoring invalid {}='{}'", ENV_PORT, raw);
            None
        }
    }
}
