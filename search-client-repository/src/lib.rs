//! # Search Client Repository
//!
//! This crate provides the `SearchEngineClient` trait, a concrete
//! implementation for OpenSearch/Elasticsearch, the query builders that
//! render request bodies, and the `SearchClient` facade application code uses.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use client::SearchClient;
pub use config::SearchClientConfig;
pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::{IndexConfig, OpenSearchClient};
