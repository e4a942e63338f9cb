//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file in the platform config directory
//! 4. Compiled defaults (fallback)
//!
//! A missing or unreadable config file degrades to defaults with a
//! warning; it never aborts startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5780;

/// Environment variable naming the config file
pub const ENV_CONFIG_FILE: &str = "EVENTHUB_CONFIG";

/// Environment variable naming the catalog data directory
pub const ENV_DATA_DIR: &str = "EVENTHUB_DATA_DIR";

/// Top-level shape of the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// `[server]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// `[catalog]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Directory holding `voting_events.json` / `ticketing_events.json`;
    /// absent means the embedded datasets
    pub data_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse a config file's contents
    pub fn parse(toml_text: &str) -> Result<Self> {
        toml::from_str(toml_text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// Resolve the config file path: CLI argument, then `EVENTHUB_CONFIG`,
/// then `<config dir>/eventhub/config.toml` for the platform.
pub fn resolve_config_file(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(ENV_CONFIG_FILE) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("eventhub").join("config.toml"))
}

/// Load the config file, degrading to defaults when it is missing or
/// unreadable
pub fn load_config(cli_arg: Option<&Path>) -> TomlConfig {
    let Some(path) = resolve_config_file(cli_arg) else {
        return TomlConfig::default();
    };
    if !path.exists() {
        return TomlConfig::default();
    }
    match TomlConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Resolve the catalog data directory: CLI argument, then
/// `EVENTHUB_DATA_DIR`, then the config file. `None` selects the
/// embedded datasets.
pub fn resolve_data_dir(cli_arg: Option<&Path>, config: &TomlConfig) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(ENV_DATA_DIR) {
        return Some(PathBuf::from(path));
    }
    config.catalog.data_dir.clone()
}
