//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\barcode-collector\config.toml
//! - macOS: ~/Library/Application Support/barcode-collector/config.toml
//! - Linux: ~/.config/barcode-collector/config.toml
//!
//! Every field defaults to the values the collector has always used
//! (rock CDs with a barcode, 100 per page, 1000 barcodes, 1.2s between
//! requests), so an absent config file reproduces the stock behaviour.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default MusicBrainz web service root
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// User agent string - MusicBrainz requires an identifying one
pub const DEFAULT_USER_AGENT: &str = concat!(
    "BarcodeCollector/",
    env!("CARGO_PKG_VERSION"),
    " ( https://github.com/barcode-collector )"
);

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to ask the catalog for, and how
    pub search: SearchConfig,

    /// How long to keep paging and where to write the result
    pub collection: CollectionConfig,
}

/// Catalog search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Web service root (the `/release/` endpoint is appended)
    pub base_url: String,

    /// Identifying User-Agent header sent with every request
    pub user_agent: String,

    /// Results per page (MusicBrainz caps this at 100)
    pub page_size: u32,

    /// Genre tag predicate (empty = any)
    pub tag: String,

    /// Medium format predicate (empty = any)
    pub format: String,

    /// Only match releases that have a barcode
    pub require_barcode: bool,

    /// Per-request timeout in seconds (unset = library default, no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_size: 100,
            tag: "rock".to_string(),
            format: "CD".to_string(),
            require_barcode: true,
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Collection loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Number of unique barcodes to collect
    pub target: usize,

    /// Stop paging once the offset passes this without reaching the target
    pub max_offset: u32,

    /// Delay after each successful page (rate limit is ~1 req/sec)
    pub page_delay_ms: u64,

    /// Delay after a failed request
    pub error_delay_ms: u64,

    /// Re-request a page that failed transiently (false = skip it at once)
    pub retry_failed_page: bool,

    /// Attempts per page before skipping it (only with `retry_failed_page`)
    pub max_page_attempts: u32,

    /// Directory the `barcodes_<target>.txt` file is written to
    pub output_dir: PathBuf,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            target: 1000,
            max_offset: 2000,
            page_delay_ms: 1200,
            error_delay_ms: 2000,
            retry_failed_page: true,
            max_page_attempts: 3,
            output_dir: PathBuf::from("."),
        }
    }
}

impl CollectionConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn error_delay(&self) -> Duration {
        Duration::from_millis(self.error_delay_ms)
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("barcode-collector"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to an explicit path
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = to_toml(config)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Serialize to pretty TOML
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::Serialize)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
