//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use poker_league::leaderboard::DEFAULT_TOP_N;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Path to the persisted JSON document
    pub data_file: PathBuf,
    /// User ids permitted to perform admin operations
    pub admin_ids: HashSet<i64>,
    /// Number of leaderboard entries served
    pub leaderboard_size: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `data_file_override` - Optional document path override (from CLI args)
    /// * `admins_override` - Optional comma-separated admin id list override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a configured value does not parse
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        data_file_override: Option<PathBuf>,
        admins_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:3000"
                    .parse()
                    .expect("Default bind address is valid")
            });

        let data_file = data_file_override
            .or_else(|| std::env::var("DATA_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("data.json"));

        let admins_raw = admins_override
            .or_else(|| std::env::var("ADMIN_IDS").ok())
            .unwrap_or_default();
        let admin_ids = parse_admin_ids(&admins_raw)?;

        let leaderboard_size = parse_env_or("LEADERBOARD_SIZE", DEFAULT_TOP_N);

        Ok(ServerConfig {
            bind,
            data_file,
            admin_ids,
            leaderboard_size,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard_size == 0 {
            return Err(ConfigError::Invalid {
                var: "LEADERBOARD_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "DATA_FILE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a comma-separated admin id list ("12345, 67890").
fn parse_admin_ids(raw: &str) -> Result<HashSet<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ConfigError::Invalid {
                var: "ADMIN_IDS".to_string(),
                reason: format!("'{s}' is not a valid user id"),
            })
        })
        .collect()
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
