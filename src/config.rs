use std::env;

use reqwest::Url;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<SecretString>,
    pub sanitize_descriptions: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("QUIZ_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:4000/api".to_string()),
            api_token: env::var("QUIZ_API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
            sanitize_descriptions: env::var("SANITIZE_DESCRIPTIONS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Checks that the API base URL is an absolute http(s) URL.
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            AppError::ConfigError(format!(
                "QUIZ_API_BASE_URL '{}' is not a valid URL: {}",
                self.api_base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::ConfigError(format!(
                "QUIZ_API_BASE_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.scheme() == "http" && self.api_token.is_some() {
            log::warn!("QUIZ_API_TOKEN is sent over plain http to {}", url);
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:4000/api".to_string(),
            api_token: None,
            sanitize_descriptions: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert_eq!(config.api_base_url, "http://127.0.0.1:4000/api");
        assert!(config.sanitize_descriptions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = Config::test_config();
        config.api_base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));

        config.api_base_url = "ftp://example.com/api".to_string();
        assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
