use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} must be a valid number, got {value:?}")]
    Invalid { key: &'static str, value: String },
}

// Главная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки базы данных
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, so tests don't
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                host: or("HOST", "0.0.0.0"),
                port: parse("PORT", or("PORT", "3000"))?,
                environment: or("ENVIRONMENT", "development"),
                rust_log: or("RUST_LOG", "reservation_i18n=debug,tower_http=debug"),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                pool_size: parse("DB_POOL_SIZE", or("DB_POOL_SIZE", "10"))?,
            },
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/app")])).unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 3000);
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.database.url, "postgres://localhost/app");
        assert_eq!(config.database.pool_size, 10);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/app"),
            ("PORT", "8080"),
            ("DB_POOL_SIZE", "32"),
            ("RUST_LOG", "info"),
        ]))
        .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.pool_size, 32);
        assert_eq!(config.app.rust_log, "info");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn garbage_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/app"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        match err {
            ConfigError::Invalid { key, value } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
