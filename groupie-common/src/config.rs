//! Bootstrap configuration loading
//!
//! Config file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. `GROUPIE_CONFIG` environment variable
//! 3. `<os config dir>/groupie/config.toml`
//! 4. Compiled defaults (fallback)
//!
//! A missing config file is not an error: compiled defaults are used. A config
//! file that exists but cannot be parsed is fatal.

use crate::models::ResourceKind;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "GROUPIE_CONFIG";

const DEFAULT_API_BASE: &str = "https://groupietrackers.herokuapp.com/api";

/// Bootstrap configuration loaded from TOML file
///
/// Read once at startup; the process must restart to pick up changes.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Listening address
    ///
    /// Default: 0.0.0.0:8443
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Upstream API endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP server limits
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api: ApiConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Which collections are fetched at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadProfile {
    /// All four collections
    Full,
    /// Artists only; locations, dates and relations stay empty
    ArtistsOnly,
}

impl LoadProfile {
    /// Resource kinds fetched under this profile, in load order
    pub fn kinds(&self) -> &'static [ResourceKind] {
        match self {
            LoadProfile::Full => &ResourceKind::ALL,
            LoadProfile::ArtistsOnly => &[ResourceKind::Artists],
        }
    }
}

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_artists_url")]
    pub artists_url: String,
    #[serde(default = "default_locations_url")]
    pub locations_url: String,
    #[serde(default = "default_dates_url")]
    pub dates_url: String,
    #[serde(default = "default_relations_url")]
    pub relations_url: String,
    #[serde(default = "default_profile")]
    pub profile: LoadProfile,
    /// Per-fetch timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            artists_url: default_artists_url(),
            locations_url: default_locations_url(),
            dates_url: default_dates_url(),
            relations_url: default_relations_url(),
            profile: default_profile(),
            request_timeout_secs: default_api_timeout(),
        }
    }
}

impl ApiConfig {
    /// The four endpoint URLs handed to the loader
    pub fn urls(&self) -> ResourceUrls {
        ResourceUrls {
            artists: self.artists_url.clone(),
            locations: self.locations_url.clone(),
            dates: self.dates_url.clone(),
            relations: self.relations_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// One URL per resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrls {
    pub artists: String,
    pub locations: String,
    pub dates: String,
    pub relations: String,
}

impl ResourceUrls {
    pub fn get(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Artists => &self.artists,
            ResourceKind::Locations => &self.locations,
            ResourceKind::Dates => &self.dates,
            ResourceKind::Relations => &self.relations,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Upper bound on handling a single request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8443".to_string()
}

fn default_artists_url() -> String {
    format!("{}/artists", DEFAULT_API_BASE)
}

fn default_locations_url() -> String {
    format!("{}/locations", DEFAULT_API_BASE)
}

fn default_dates_url() -> String {
    format!("{}/dates", DEFAULT_API_BASE)
}

fn default_relations_url() -> String {
    format!("{}/relation", DEFAULT_API_BASE)
}

fn default_profile() -> LoadProfile {
    LoadProfile::Full
}

fn default_api_timeout() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, falling back to compiled defaults when the
    /// path is absent or the file does not exist
    ///
    /// Logs nothing; callers report the source once logging is up.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    fn validate(&self) -> Result<()> {
        if self.bind_addr.trim().is_empty() {
            return Err(Error::Config("bind_addr must not be empty".to_string()));
        }
        for kind in self.api.profile.kinds() {
            if self.api.urls().get(*kind).trim().is_empty() {
                return Err(Error::Config(format!("{} URL must not be empty", kind)));
            }
        }
        if self.server.request_timeout_secs == 0 {
            return Err(Error::Config(
                "server.request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve which config file to read
///
/// Returns `None` when neither an override nor the default file exists.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config directory
    default_config_path().filter(|p| p.exists())
}

/// `<os config dir>/groupie/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("groupie").join("config.toml"))
}
