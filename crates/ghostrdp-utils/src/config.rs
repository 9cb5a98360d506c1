//! # ghost-rdp Config Module
//! This module provides the configuration framework shared by the ghost-rdp crates.
//!
//! # Variable Naming Convention
//!
//! - Struct fields use snake_case (e.g., `database`, `bind_address`)
//! - Environment variables use SCREAMING_SNAKE_CASE and are prefixed with "GHOSTRDP__"
//!   (e.g., `GHOSTRDP__DATABASE__URL`)
//! - Configuration file keys use snake_case (e.g., `database.url`, `gateway.address`)
//!
//! # Configuration Overriding
//!
//! Values are loaded in the following order (later sources take precedence):
//!
//! 1. Default values from the embedded `default.toml` file
//! 2. Values from an optional external configuration file (if provided)
//! 3. Environment variables
//!
//! # Available Environment Variables
//!
//! - `GHOSTRDP__DATABASE__URL`: SQLite database path, or `:memory:`
//!   Default: "ghostrdp.db"
//!
//! - `GHOSTRDP__DATABASE__POOL_SIZE`: Maximum pooled connections
//!   Default: 5
//!
//! - `GHOSTRDP__LOG__LEVEL`: Log level ("trace", "debug", "info", "warn", "error")
//!   Default: "info"
//!
//! - `GHOSTRDP__SERVER__BIND_ADDRESS`: Listen address for the HTTP API
//!   Default: "0.0.0.0:5000"
//!
//! - `GHOSTRDP__GATEWAY__ADDRESS`: Gateway address written into connection profiles
//!   Default: "localhost"
//!
//! - `GHOSTRDP__GATEWAY__REMOTE_API_URL`: URL probed by the setup status endpoint
//!   Default: unset
//!
//! - `GHOSTRDP__GATEWAY__SECRET_KEY`: Signing secret (loaded, not used by any endpoint)
//!   Default: unset
//!
//! - `GHOSTRDP__GATEWAY__PEER_DELETE_POLICY`: "orphan" or "cascade"
//!   Default: "orphan"
//!
//! - `GHOSTRDP__AUDIT__RETENTION_DAYS`: Prune audit entries older than this at startup
//!   Default: unset (keep everything)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

// Include the default settings file as a string constant
const DEFAULT_SETTINGS: &str = include_str!("../default.toml");

/// Represents the main settings structure for the application
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Database configuration
    pub database: Database,
    /// Logging configuration
    pub log: Log,
    /// HTTP server configuration
    pub server: Server,
    /// Gateway-facing configuration
    pub gateway: Gateway,
    /// Audit log configuration
    #[serde(default)]
    pub audit: Audit,
    /// CORS configuration
    pub cors: Cors,
}

/// Represents the database configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Database {
    /// SQLite database path (or ":memory:")
    pub url: String,
    /// Maximum number of pooled connections
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// How long a connection waits on a locked database before failing
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_pool_size() -> u32 {
    5
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

/// Represents the logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,
    /// Log format: "text" for human-readable, "json" for structured JSON
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Represents the HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    /// Address the API listens on
    pub bind_address: String,
}

/// What happens to VPN peers when their server is deleted.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeerDeletePolicy {
    /// Peers are left in place and point at a server that no longer exists.
    #[default]
    Orphan,
    /// Peers are removed together with their server.
    Cascade,
}

/// Represents the gateway configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Gateway {
    /// Gateway address written into generated connection profiles
    pub address: String,
    /// Remote API probed by the setup status endpoint
    pub remote_api_url: Option<String>,
    /// Timeout for the reachability probe in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Signing secret. Loaded so deployments can provide it; no endpoint reads it yet.
    pub secret_key: Option<String>,
    /// Peer handling when a VPN server is deleted
    #[serde(default)]
    pub peer_delete_policy: PeerDeletePolicy,
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

impl Gateway {
    /// Remote API URL, treating an empty value as unset
    pub fn remote_api_url(&self) -> Option<&str> {
        self.remote_api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Probe timeout as a `Duration`
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

/// Represents the audit log configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Audit {
    /// Entries older than this many days are pruned at startup
    pub retention_days: Option<i64>,
}

/// Represents the CORS configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Cors {
    /// Allowed origins for CORS requests. "*" allows every origin.
    pub allowed_origins: Vec<String>,
    /// Max age for preflight cache in seconds
    pub max_age_seconds: u64,
}

impl Cors {
    /// Whether every origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Settings {
    /// Creates a new `Settings` instance
    ///
    /// # Arguments
    ///
    /// * `file` - An optional path to a configuration file
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the `Settings` instance or a `ConfigError`
    pub fn new(file: Option<String>) -> Result<Self, ConfigError> {
        // Start with default settings from the embedded TOML file
        let mut s = Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, config::FileFormat::Toml));

        // If a configuration file is provided, add it as a source
        s = match file {
            Some(x) => s.add_source(File::with_name(x.as_str())),
            None => s,
        };

        // Environment variables win, prefixed with "GHOSTRDP" and using "__" as a separator
        s = s.add_source(Environment::with_prefix("GHOSTRDP").separator("__"));

        s.build()?.try_deserialize()
    }
}
