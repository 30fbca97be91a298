//! # Configuration
//!
//! Layered application settings, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. the file named by `TOUR_RATINGS_CONFIG` (optional)
//! 4. environment variables prefixed `TOUR_RATINGS__`, e.g.
//!    `TOUR_RATINGS__SERVER__PORT=9000`
//!
//! A `.env` file is loaded into the environment before the layers are read.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable naming an extra configuration file.
pub const CONFIG_FILE_ENV: &str = "TOUR_RATINGS_CONFIG";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "TOUR_RATINGS";

const DEFAULT_FILE: &str = "config/default";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Rating and catalog storage.
    pub database: DatabaseConfig,
    /// Catalog seed data.
    pub seed: SeedConfig,
    /// Remote guest and room services.
    pub services: ServicesConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage settings. Without a URL the service keeps everything in memory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: Option<String>,
    /// Pool size.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

/// Seed settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON file with `packages` and `tours` loaded at startup.
    pub file: Option<String>,
}

/// Remote service settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Base URL of the guest service.
    pub guest_url: String,
    /// Base URL of the room service.
    pub room_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            guest_url: "http://localhost:8800".to_string(),
            room_url: "http://localhost:8900".to_string(),
            timeout_ms: 2000,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then reads every configuration layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let extra = std::env::var(CONFIG_FILE_ENV).ok();
        Self::from_sources(extra.as_deref(), environment())
    }

    fn from_sources(extra_file: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::with_name(DEFAULT_FILE).required(false));
        if let Some(path) = extra_file {
            builder = builder.add_source(File::with_name(path).required(true));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
