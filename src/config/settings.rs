//! Process settings read from the environment.

use super::limits::{YearLimits, DEFAULT_CREATE_MIN_YEAR, DEFAULT_UPDATE_MIN_YEAR};
use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use std::str::FromStr;

const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Connection parameters for the store. `url` wins over the individual parts when set.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url)
                .map_err(|e| ConfigError::DatabaseUrl(e.to_string()));
        }
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if !self.password.is_empty() {
            opts = opts.password(&self.password);
        }
        Ok(opts)
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub database: DatabaseSettings,
    pub years: YearLimits,
}

impl Settings {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read settings from process environment variables.
    ///
    /// | Variable                  | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `3000`      |
    /// | `BODY_LIMIT_BYTES`        | `1048576`   |
    /// | `DATABASE_URL`            | unset       |
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `5432`      |
    /// | `DB_USER`                 | `postgres`  |
    /// | `DB_PASSWORD`             | empty       |
    /// | `DB_NAME`                 | `movies`    |
    /// | `DB_MAX_CONNECTIONS`      | `5`         |
    /// | `MIN_RELEASE_YEAR_CREATE` | `1850`      |
    /// | `MIN_RELEASE_YEAR_UPDATE` | `1888`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let text = |key: &str, default: &str| {
            vars.get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseSettings {
            url: vars.get("DATABASE_URL").filter(|s| !s.trim().is_empty()).cloned(),
            host: text("DB_HOST", "localhost"),
            port: parse_var(&vars, "DB_PORT", 5432)?,
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", ""),
            name: text("DB_NAME", "movies"),
            max_connections: parse_var(&vars, "DB_MAX_CONNECTIONS", 5)?,
        };

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_var(&vars, "PORT", 3000)?,
            body_limit: parse_var(&vars, "BODY_LIMIT_BYTES", DEFAULT_BODY_LIMIT)?,
            database,
            years: YearLimits {
                create_min: parse_var(&vars, "MIN_RELEASE_YEAR_CREATE", DEFAULT_CREATE_MIN_YEAR)?,
                update_min: parse_var(&vars, "MIN_RELEASE_YEAR_UPDATE", DEFAULT_UPDATE_MIN_YEAR)?,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
