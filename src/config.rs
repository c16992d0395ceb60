//! Application configuration management.
//!
//! Configuration is read from environment variables with `envy`, after an
//! optional `.env` file has been loaded.

use chrono::FixedOffset;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `WEBHOOK_SECRET` (optional): shared HMAC-SHA256 key; when set, inbound
///   messages must carry a matching `X-Signature` header
/// - `UTC_OFFSET_MINUTES` (optional): offset used to show history timestamps,
///   defaults to 420 (Asia/Jakarta)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub webhook_secret: Option<String>,

    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

fn default_port() -> u16 {
    8080
}

fn default_utc_offset_minutes() -> i32 {
    7 * 60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: default_port(),
            webhook_secret: None,
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("UTC_OFFSET_MINUTES out of range: {0}")]
    InvalidOffset(i32),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed into its expected type,
    /// or if the UTC offset is not strictly within ±24h.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Does nothing if there is no .env file
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()?;
        config.utc_offset()?;
        Ok(config)
    }

    /// Fixed offset for rendering local times.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_is_jakarta() {
        let offset = Config::default().utc_offset().unwrap();
        assert_eq!(offset.local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        let config = Config {
            utc_offset_minutes: 24 * 60,
            ..Config::default()
        };
        assert!(matches!(
            config.utc_offset(),
            Err(ConfigError::InvalidOffset(1440))
        ));
    }
}
