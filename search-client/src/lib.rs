//! # Search Client
//!
//! Entry point and configuration for applications using the search client.
//!
//! This crate reads configuration from the environment, sets up logging, and
//! constructs the single engine handle that the rest of the application
//! receives explicitly.

pub mod config;
pub mod logging;

pub use config::{AppConfig, Dependencies, LogFormat};

use thiserror::Error;

/// Errors that can occur during startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_client_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
