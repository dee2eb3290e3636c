use std::env;

use auth::TokenPolicy;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// Storage settings. Without a `url` the service runs on the in-memory store.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_minutes")]
    pub access_token_minutes: i64,
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: i64,
}

impl JwtConfig {
    pub const MIN_SECRET_BYTES: usize = 32;
    pub const MAX_ACCESS_TOKEN_MINUTES: i64 = 24 * 60;
    pub const MAX_REFRESH_TOKEN_DAYS: i64 = 365;

    pub fn token_policy(&self) -> TokenPolicy {
        TokenPolicy::new(
            Duration::minutes(self.access_token_minutes),
            Duration::days(self.refresh_token_days),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < Self::MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                Self::MIN_SECRET_BYTES
            )));
        }
        if !(1..=Self::MAX_ACCESS_TOKEN_MINUTES).contains(&self.access_token_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.access_token_minutes must be between 1 and {}",
                Self::MAX_ACCESS_TOKEN_MINUTES
            )));
        }
        if !(1..=Self::MAX_REFRESH_TOKEN_DAYS).contains(&self.refresh_token_days) {
            return Err(ConfigError::Message(format!(
                "jwt.refresh_token_days must be between 1 and {}",
                Self::MAX_REFRESH_TOKEN_DAYS
            )));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_access_token_minutes() -> i64 {
    TokenPolicy::DEFAULT_ACCESS_MINUTES
}

fn default_refresh_token_days() -> i64 {
    TokenPolicy::DEFAULT_REFRESH_DAYS
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// * `ConfigError` - Missing keys, bad types, or a signing secret under 32 bytes
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.jwt.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        let config: Config = ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.jwt.validate()?;
        Ok(config)
    }

    #[test]
    fn test_defaults_apply() {
        let config = parse(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            "#,
        )
        .unwrap();

        assert!(config.database.url.is_none());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.jwt.access_token_minutes, 30);
        assert_eq!(config.jwt.refresh_token_days, 7);
        assert_eq!(config.jwt.token_policy(), TokenPolicy::default());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let result = parse(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = "too-short"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_token_lifetimes_are_bounded() {
        for (minutes, days) in [(0, 7), (30, 0), (1441, 7), (30, 366), (30, 100_000_000)] {
            let result = parse(&format!(
                r#"
                [server]
                http_port = 8000

                [jwt]
                secret = "0123456789abcdef0123456789abcdef"
                access_token_minutes = {minutes}
                refresh_token_days = {days}
                "#
            ));

            assert!(result.is_err(), "{minutes} minutes / {days} days accepted");
        }

        let config = parse(
            r#"
            [server]
            http_port = 8000

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            access_token_minutes = 1440
            refresh_token_days = 365
            "#,
        )
        .unwrap();
        assert_eq!(config.jwt.token_policy().refresh_ttl, Duration::days(365));
    }
}
