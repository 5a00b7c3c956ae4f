use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Where the access token is kept between invocations
    pub token_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("SEA_CATERING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        validate_base_url(&api_base_url)?;

        let token_file = match env::var("SEA_CATERING_TOKEN_FILE") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_token_file()?,
        };

        let config = Config {
            api_base_url,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            token_file,
        };

        Ok(config)
    }

    /// Replaces the backend URL, e.g. from a command-line flag
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();
        validate_base_url(&url)?;
        self.api_base_url = url;
        Ok(self)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn validate_base_url(url: &str) -> AppResult<()> {
    reqwest::Url::parse(url)
        .map(|_| ())
        .map_err(|e| AppError::Config(format!("Invalid API URL '{}': {}", url, e)))
}

fn default_token_file() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("sea-catering").join("token"))
        .ok_or_else(|| {
            AppError::Config(
                "No config directory found; set SEA_CATERING_TOKEN_FILE".to_string(),
            )
        })
}
