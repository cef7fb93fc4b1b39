//! Configuration loading and resolution
//!
//! Every setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error; the service starts on defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Dashboard origin during local development
pub const DEV_DASHBOARD_URL: &str = "http://localhost:3000";

/// Dashboard deployment used in production mode
pub const PRODUCTION_DASHBOARD_URL: &str = "https://thriving-halva-3ab02a.netlify.app";

/// Default update period, in seconds
pub const DEFAULT_TICK_SECS: u64 = 15;

/// Raw contents of `config.toml`; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub production: Option<bool>,
    pub dashboard_url: Option<String>,
    pub allowed_origins: Option<Vec<String>>,
    pub tick_interval_secs: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub spotify: SpotifyToml,
}

/// `[logging]` table
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
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

fn default_log_level() -> String {
    "info".to_string()
}

/// `[spotify]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyToml {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Music service application credentials (opaque to the rest of the service)
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl std::fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub port: u16,
    pub production: bool,
    /// Where OAuth callbacks send the browser back to
    pub dashboard_url: String,
    /// CORS allow-list
    pub allowed_origins: Vec<String>,
    /// Update source period
    pub tick_interval: Duration,
    pub log_level: String,
    pub spotify: SpotifyConfig,
}

impl BoardConfig {
    /// Resolve the configuration from CLI overrides, process environment and TOML
    pub fn resolve(cli: &CliOverrides, toml: TomlConfig) -> Result<Self> {
        Self::resolve_with(cli, toml, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with<F>(cli: &CliOverrides, toml: TomlConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let port = match (cli.port, lookup("PORT")) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {}", raw)))?,
            (None, None) => toml.port.unwrap_or(DEFAULT_PORT),
        };

        let production = match lookup("MOODBOARD_ENV") {
            Some(mode) => mode.trim().eq_ignore_ascii_case("production"),
            None => toml.production.unwrap_or(false),
        };

        let dashboard_url = lookup("DASHBOARD_URL")
            .or(non_blank(toml.dashboard_url))
            .unwrap_or_else(|| {
                if production {
                    PRODUCTION_DASHBOARD_URL.to_string()
                } else {
                    DEV_DASHBOARD_URL.to_string()
                }
            });

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => toml
                .allowed_origins
                .unwrap_or_else(|| default_origins(&dashboard_url)),
        };

        let tick_secs = match lookup("MOODBOARD_TICK_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("MOODBOARD_TICK_SECS is not a number: {}", raw))
            })?,
            None => toml.tick_interval_secs.unwrap_or(DEFAULT_TICK_SECS),
        };
        if tick_secs == 0 {
            return Err(Error::Config("Update period must be at least 1 second".to_string()));
        }

        let spotify = SpotifyConfig {
            client_id: lookup("SPOTIFY_CLIENT_ID")
                .or(non_blank(toml.spotify.client_id))
                .unwrap_or_default(),
            client_secret: lookup("SPOTIFY_CLIENT_SECRET")
                .or(non_blank(toml.spotify.client_secret))
                .unwrap_or_default(),
            redirect_uri: lookup("SPOTIFY_REDIRECT_URI")
                .or(non_blank(toml.spotify.redirect_uri))
                .unwrap_or_default(),
        };

        Ok(Self {
            port,
            production,
            dashboard_url,
            allowed_origins,
            tick_interval: Duration::from_secs(tick_secs),
            log_level: toml.logging.level,
            spotify,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_origins(dashboard_url: &str) -> Vec<String> {
    let mut origins = vec![dashboard_url.trim_end_matches('/').to_string()];
    if origins[0] != DEV_DASHBOARD_URL {
        origins.push(DEV_DASHBOARD_URL.to_string());
    }
    origins
}

/// Default configuration file path for the platform
///
/// `<config_dir>/moodboard/config.toml` (e.g. `~/.config/moodboard/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moodboard").join("config.toml"))
}

/// Load the TOML config file at `path`
///
/// `Ok(None)` when no path is known or the file does not exist, so a missing
/// file never stops startup. An unreadable or malformed file is an error.
pub fn load_toml_config(path: Option<&Path>) -> Result<Option<TomlConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}
