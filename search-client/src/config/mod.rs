//! Application configuration.
//!
//! Settings come from environment variables, optionally loaded from a `.env`
//! file by the binary before `AppConfig::from_env` runs.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::AppError;

/// Default search engine URL.
const DEFAULT_ELASTICSEARCH_URL: &str = "http://127.0.0.1:9200";

/// Default shard count for an index created at startup.
const DEFAULT_SHARDS: u32 = 1;

/// Default replica count for an index created at startup.
const DEFAULT_REPLICAS: u32 = 1;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!("Unknown LOG_FORMAT: {}", other))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Search engine URL.
    pub elasticsearch_url: String,
    /// Index to make sure exists at startup, if any.
    pub index: Option<String>,
    /// JSON mapping file used when the startup index has to be created.
    pub mapping_path: Option<PathBuf>,
    /// Shard count used when no mapping file is given.
    pub shards: u32,
    /// Replica count used when no mapping file is given.
    pub replicas: u32,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_URL`: search engine URL (default: http://127.0.0.1:9200)
    /// - `SEARCH_INDEX`: index ensured at startup (optional)
    /// - `SEARCH_INDEX_MAPPING`: path to a JSON create-index body (optional)
    /// - `SEARCH_INDEX_SHARDS` / `SEARCH_INDEX_REPLICAS`: defaults 1 / 1
    /// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let elasticsearch_url =
            non_empty("ELASTICSEARCH_URL").unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string());
        let index = non_empty("SEARCH_INDEX");
        let mapping_path = non_empty("SEARCH_INDEX_MAPPING").map(PathBuf::from);
        let shards = parse_or(
            "SEARCH_INDEX_SHARDS",
            non_empty("SEARCH_INDEX_SHARDS"),
            DEFAULT_SHARDS,
        )?;
        let replicas = parse_or(
            "SEARCH_INDEX_REPLICAS",
            non_empty("SEARCH_INDEX_REPLICAS"),
            DEFAULT_REPLICAS,
        )?;
        let log_format = match non_empty("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            elasticsearch_url,
            index,
            mapping_path,
            shards,
            replicas,
            log_format,
        })
    }
}

fn parse_or(key: &str, value: Option<String>, default: u32) -> Result<u32, AppError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {}: {} ({})", key, v, e))),
        None => Ok(default),
    }
}
