use crate::services::intent::default_genres;
use axum::http::HeaderValue;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("CHAT_GENRES must name at least one genre")]
    NoGenres,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub port: u16,
    pub allowed_origin: HeaderValue,
    pub catalog_base_url: String,
    pub catalog_timeout: Duration,
    /// Recommendation vocabulary, lowercased, in match priority order.
    pub genres: Vec<String>,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let origin = lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin =
            HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::InvalidValue {
                key: "ALLOWED_ORIGIN",
                value: origin.clone(),
            })?;

        let catalog_base_url =
            lookup("CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());

        let timeout_secs = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CATALOG_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => DEFAULT_CATALOG_TIMEOUT_SECS,
        };

        let genres = match lookup("CHAT_GENRES") {
            Some(list) => parse_genres(&list)?,
            None => default_genres(),
        };

        Ok(Self {
            port,
            allowed_origin,
            catalog_base_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            genres,
        })
    }
}

fn parse_genres(list: &str) -> Result<Vec<String>, ConfigError> {
    let genres: Vec<String> = list
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect();

    if genres.is_empty() {
        return Err(ConfigError::NoGenres);
    }
    Ok(genres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ChatConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ChatConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.catalog_base_url, "https://openlibrary.org");
        assert_eq!(config.catalog_timeout, Duration::from_secs(5));
        assert_eq!(config.genres, default_genres());
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("ALLOWED_ORIGIN", "https://books.example.com"),
            ("CATALOG_BASE_URL", "http://localhost:4010"),
            ("CATALOG_TIMEOUT_SECS", "2"),
            ("CHAT_GENRES", " Poetry, ,Fantasy "),
        ])
        .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.allowed_origin, "https://books.example.com");
        assert_eq!(config.catalog_base_url, "http://localhost:4010");
        assert_eq!(config.catalog_timeout, Duration::from_secs(2));
        assert_eq!(config.genres, vec!["poetry".to_string(), "fantasy".to_string()]);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("CATALOG_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidValue {
                key: "CATALOG_TIMEOUT_SECS",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("ALLOWED_ORIGIN", "http://bad\norigin")]),
            Err(ConfigError::InvalidValue {
                key: "ALLOWED_ORIGIN",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("CHAT_GENRES", " , ")]),
            Err(ConfigError::NoGenres)
        ));
    }
}
