use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_ORIGINS: &str =
    "http://localhost:3000,https://rails-react-recipe-finder-frontend.onrender.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let origins: String = try_load("CORS_ORIGINS", DEFAULT_ORIGINS)?;

        Ok(Self {
            port: try_load("RUST_PORT", DEFAULT_PORT)?,
            allowed_origins: parse_origins("CORS_ORIGINS", &origins)?,
            catalog_path: var("RECIPES_CATALOG").map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            allowed_origins: DEFAULT_ORIGINS
                .split(',')
                .map(HeaderValue::from_static)
                .collect(),
            catalog_path: None,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}

/// Splits a comma-separated origin list. Browsers never send a trailing slash
/// in `Origin`, so one is stripped here. Origins must be listed explicitly.
pub fn parse_origins(key: &'static str, raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "wildcard not supported".to_string(),
                });
            }

            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                key,
                reason: format!("{origin}: {e}"),
            })
        })
        .collect()
}
