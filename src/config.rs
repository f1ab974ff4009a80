// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CorpusError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Corpus root, e.g. `http://localhost:8080/blacklab-server/corpus/`
    pub base_url: String,
    /// Per-request timeout, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_window")]
    pub window: usize,
}

/// Offsets advance by `stride` while each page asks for `page_limit` hits.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaginationConfig {
    #[serde(default = "default_stride")]
    pub stride: usize,
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_window() -> usize {
    5
}

fn default_stride() -> usize {
    20
}

fn default_page_limit() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            stride: default_stride(),
            page_limit: default_page_limit(),
        }
    }
}

impl ServerConfig {
    /// The `hits` endpoint below the configured corpus root.
    pub fn hits_endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/hits", base)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CORPUS_HITS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://localhost:8080/blacklab-server/corpus/".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            search: SearchConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.server.base_url)
            .map_err(|e| CorpusError::Config(e.to_string()))?;

        if self.pagination.stride == 0 {
            return Err(CorpusError::Config(
                "pagination.stride must be greater than 0".to_string(),
            ));
        }

        if self.pagination.page_limit == 0 {
            return Err(CorpusError::Config(
                "pagination.page_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
