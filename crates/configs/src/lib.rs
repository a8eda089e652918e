//! # configs
//!
//! Layered runtime settings for food-board.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `config/default.toml`, then `config/{FOOD_BOARD_ENV}.toml` (both optional)
//! 3. `FOOD_BOARD__SECTION__KEY` environment variables (a `.env` file is read first)
//! 4. `DATABASE_URL`, as a shortcut for `database.url`

use std::env;

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const ENV_PREFIX: &str = "FOOD_BOARD";
const PROFILE_VAR: &str = "FOOD_BOARD_ENV";
const DEFAULT_PROFILE: &str = "local";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// Absent means listings are kept in process memory.
    pub url: Option<SecretString>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info,sqlx=warn`. `RUST_LOG` overrides it.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub body_limit_bytes: usize,
    pub cors_allow_any_origin: bool,
}

impl Settings {
    /// Loads settings from every source.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }

        let profile = env::var(PROFILE_VAR).unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
        Self::build(&profile, Self::environment(), env::var("DATABASE_URL").ok())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn build(
        profile: &str,
        environment: Environment,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.run_migrations", true)?
            .set_default("log.filter", "info")?
            .set_default("log.format", "json")?
            .set_default("http.body_limit_bytes", 16_384_i64)?
            .set_default("http.cors_allow_any_origin", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            .add_source(environment)
            .set_override_option("database.url", database_url)?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.max_connections",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.http.body_limit_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "http.body_limit_bytes",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::environment().source(Some(source))
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let settings = Settings::build("test", environment(&[]), None).unwrap();

        assert_eq!(settings.server.bind_address(), "0.0.0.0:8080");
        assert!(settings.database.url.is_none());
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.http.body_limit_bytes, 16_384);
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let settings = Settings::build(
            "test",
            environment(&[
                ("FOOD_BOARD__SERVER__PORT", "3000"),
                ("FOOD_BOARD__LOG__FORMAT", "pretty"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.log.format, LogFormat::Pretty);
    }

    #[test]
    fn database_url_shortcut_wins() {
        let settings = Settings::build(
            "test",
            environment(&[("FOOD_BOARD__DATABASE__URL", "postgres://env/db")]),
            Some("postgres://shortcut/db".to_string()),
        )
        .unwrap();

        let url = settings.database.url.unwrap();
        assert_eq!(url.expose_secret(), "postgres://shortcut/db");
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = Settings::build(
            "test",
            environment(&[("FOOD_BOARD__DATABASE__MAX_CONNECTIONS", "0")]),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "database.max_connections", .. }));
    }

    #[test]
    fn secret_url_is_redacted_in_debug_output() {
        let settings = Settings::build(
            "test",
            environment(&[]),
            Some("postgres://user:hunter2@db/board".to_string()),
        )
        .unwrap();

        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
