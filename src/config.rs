//! Application configuration
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. TOML file at `$SNACKBAR_CONFIG` or `~/.config/snackbar-api/config.toml`
//! 3. Environment: `SERVER_PORT`, `DATABASE_URL`, `LOG_LEVEL`, `SWAGGER_ENABLE`
//! 4. CLI flags (applied by the binary)
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [database]
//! url = "sqlite://./snackbar.db?mode=rwc"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::interfaces::RouterOptions;
use crate::shared::InfraError;

pub const CONFIG_ENV: &str = "SNACKBAR_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for cleanup once shutdown starts
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
            min_connections: db.min_connections,
            connect_timeout_secs: db.connect_timeout_secs,
        }
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(s: &DatabaseSettings) -> Self {
        DatabaseConfig {
            url: s.url.clone(),
            max_connections: s.max_connections,
            min_connections: s.min_connections,
            connect_timeout_secs: s.connect_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `snackbar_api=debug,sea_orm=warn`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub swagger_enabled: bool,
    pub cors_permissive: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            swagger_enabled: true,
            cors_permissive: true,
        }
    }
}

impl From<&ApiConfig> for RouterOptions {
    fn from(c: &ApiConfig) -> Self {
        RouterOptions {
            swagger_enabled: c.swagger_enabled,
            cors_permissive: c.cors_permissive,
        }
    }
}

impl AppConfig {
    /// Reads `path` and applies environment overrides. A missing file yields
    /// the defaults; an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
                .map_err(|e| InfraError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_toml(content: &str) -> Result<Self, InfraError> {
        toml::from_str(content).map_err(|e| InfraError::Config(e.to_string()))
    }

    /// Overlays the recognised environment variables read through `lookup`.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| InfraError::Config(format!("SERVER_PORT is not a port: {port}")))?;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.url = url;
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|l| !l.is_empty()) {
            self.logging.level = level;
        }
        if let Some(flag) = lookup("SWAGGER_ENABLE") {
            self.api.swagger_enabled = parse_flag(&flag).ok_or_else(|| {
                InfraError::Config(format!("SWAGGER_ENABLE is not a boolean: {flag}"))
            })?;
        }
        Ok(self)
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::from(&self.database)
    }

    pub fn router_options(&self) -> RouterOptions {
        RouterOptions::from(&self.api)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `$SNACKBAR_CONFIG` if set, otherwise `~/.config/snackbar-api/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snackbar-api")
        .join("config.toml")
}
