//! Service config: source URL, port, logging, collaborator. Loaded from env.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Messages API queried when `SOURCE_URL` is unset.
pub const DEFAULT_SOURCE_URL: &str =
    "https://november7-730026606190.europe-west1.run.app/messages/";

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SOURCE_URL must not be empty")]
    EmptySourceUrl,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Runtime configuration. Each field names its environment variable.
#[derive(Debug, Clone)]
pub struct Config {
    /// SOURCE_URL
    pub source_url: String,
    /// PORT
    pub port: u16,
    /// LOG_FILE; unset logs to stdout only
    pub log_file: Option<PathBuf>,
    /// LLM_API_URL
    pub llm_api_url: String,
    /// LLM_API_KEY; unset or empty runs without a collaborator
    pub llm_api_key: Option<String>,
    /// LLM_MODEL
    pub llm_model: String,
}

impl Config {
    /// Load from environment variables, falling back to the defaults above.
    pub fn load() -> Result<Self, ConfigError> {
        let source_url =
            env::var("SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let log_file = env::var("LOG_FILE").ok().map(PathBuf::from);
        let llm_api_url =
            env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let llm_api_key = env::var("LLM_API_KEY").ok().filter(|key| !key.is_empty());
        let llm_model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            source_url,
            port,
            log_file,
            llm_api_url,
            llm_api_key,
            llm_model,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_url.trim().is_empty() {
            return Err(ConfigError::EmptySourceUrl);
        }
        Ok(())
    }
}
