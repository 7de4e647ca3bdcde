//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using the OpenSearch client, which also speaks to Elasticsearch 7.x.

mod client;
mod index_config;
pub mod queries;

pub use client::OpenSearchClient;
pub use index_config::IndexConfig;
