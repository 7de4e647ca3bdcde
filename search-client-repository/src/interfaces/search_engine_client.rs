//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use search_client_shared::{GetResult, IndexCreated, SearchRequest, SearchResponse};

/// Abstract interface for search engine operations.
///
/// Each method maps to exactly one remote request. Implementations must not
/// retry, batch, or reshape the caller's input, and must hand back the
/// engine's error or result unchanged.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so a single handle can be shared
/// behind an `Arc` across async tasks.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the index exists
    /// * `Ok(false)` - If the engine reports it missing
    /// * `Err(SearchError)` - If the request fails
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index with the given settings/mappings body.
    ///
    /// # Arguments
    ///
    /// * `index` - The index name
    /// * `body` - Create-index body (`settings`, `mappings`), sent as-is. `None`
    ///   sends no body and the engine applies its default settings.
    async fn create_index(
        &self,
        index: &str,
        body: Option<&Value>,
    ) -> Result<IndexCreated, SearchError>;

    /// Index a single document under the given id.
    ///
    /// If a document with the same id already exists, it will be replaced.
    async fn index_document(&self, index: &str, id: &str, document: &Value)
        -> Result<(), SearchError>;

    /// Fetch a single document by id.
    ///
    /// A missing document is reported by the engine with a 404 and is
    /// surfaced as `SearchError::ResponseError`.
    async fn get_document(&self, index: &str, id: &str) -> Result<GetResult, SearchError>;

    /// Merge `partial` into an existing document.
    async fn update_document(&self, index: &str, id: &str, partial: &Value)
        -> Result<(), SearchError>;

    /// Execute a search against one index.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = SearchRequest::new(Query::term("user", "olivere")).paginate(0, 10);
    /// let response = client.search("twitter", &request).await?;
    /// println!("Found {:?} results", response.total());
    /// ```
    async fn search(&self, index: &str, request: &SearchRequest)
        -> Result<SearchResponse, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster status is green or yellow
    /// * `Ok(false)` - If the cluster status is red
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
