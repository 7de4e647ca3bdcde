//! Search client facade.
//!
//! This module provides the convenience operations application code calls:
//! index checks and creation, document writes and reads, and term, range and
//! highlighted searches. Every operation builds exactly one request for the
//! injected engine and returns its result or error untouched.

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::SearchClientConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::IndexConfig;
use search_client_shared::{GetResult, IndexCreated, Query, SearchRequest, SearchResponse};

/// The main client for interacting with the search engine.
///
/// The engine handle is injected rather than held in a global, so tests can
/// substitute a fake backend and callers decide the handle's lifetime.
#[derive(Clone)]
pub struct SearchClient {
    engine: Arc<dyn SearchEngineClient>,
    config: SearchClientConfig,
}

impl SearchClient {
    /// Create a new SearchClient with default configuration.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            engine,
            config: SearchClientConfig::default(),
        }
    }

    /// Create a new SearchClient with custom configuration.
    pub fn with_config(engine: Arc<dyn SearchEngineClient>, config: SearchClientConfig) -> Self {
        Self { engine, config }
    }

    /// Check whether an index exists.
    pub async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        self.engine.index_exists(index).await
    }

    /// Create an index.
    /// Input: index name, mapping as a JSON string (`settings`/`mappings`)
    /// Output: Result<IndexCreated, SearchError>
    ///
    /// An empty or blank mapping sends the request without a body, so the
    /// engine creates the index with its default settings.
    pub async fn create_index(
        &self,
        index: &str,
        mapping: &str,
    ) -> Result<IndexCreated, SearchError> {
        if mapping.trim().is_empty() {
            return self.engine.create_index(index, None).await;
        }

        let body: Value = serde_json::from_str(mapping)?;
        self.engine.create_index(index, Some(&body)).await
    }

    /// Create an index from typed settings.
    pub async fn create_index_with_config(
        &self,
        index: &str,
        config: &IndexConfig,
    ) -> Result<IndexCreated, SearchError> {
        self.engine
            .create_index(index, Some(&config.to_body()))
            .await
    }

    /// Index a single document under `id`, replacing any existing document.
    pub async fn index_document<T>(
        &self,
        index: &str,
        id: impl Display,
        document: &T,
    ) -> Result<(), SearchError>
    where
        T: Serialize + ?Sized,
    {
        let document = serde_json::to_value(document)?;
        self.engine
            .index_document(index, &id.to_string(), &document)
            .await
    }

    /// Fetch a document by id.
    pub async fn get_document(
        &self,
        index: &str,
        id: impl Display,
    ) -> Result<GetResult, SearchError> {
        self.engine.get_document(index, &id.to_string()).await
    }

    /// Merge the fields of `partial` into the document stored under `id`.
    pub async fn update_document<T>(
        &self,
        index: &str,
        id: impl Display,
        partial: &T,
    ) -> Result<(), SearchError>
    where
        T: Serialize + ?Sized,
    {
        let partial = serde_json::to_value(partial)?;
        self.engine
            .update_document(index, &id.to_string(), &partial)
            .await
    }

    /// Exact-match search. `field` should be a keyword field, not analyzed text.
    /// Input: index, field, value, offset, limit
    /// Output: Result<SearchResponse, SearchError>
    pub async fn term_query(
        &self,
        index: &str,
        field: &str,
        value: impl Into<Value>,
        offset: usize,
        limit: usize,
    ) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest::new(Query::term(field, value)).paginate(offset, limit);
        self.engine.search(index, &request).await
    }

    /// Exact-match search against several values; a document matches if the
    /// field holds any of them.
    pub async fn terms_query<I, V>(
        &self,
        index: &str,
        field: &str,
        offset: usize,
        limit: usize,
        values: I,
    ) -> Result<SearchResponse, SearchError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let request = SearchRequest::new(Query::terms(field, values)).paginate(offset, limit);
        self.engine.search(index, &request).await
    }

    /// Search for values between `gte` and `lte`, both inclusive.
    pub async fn range_query(
        &self,
        index: &str,
        field: &str,
        offset: usize,
        limit: usize,
        gte: impl Into<Value>,
        lte: impl Into<Value>,
    ) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest::new(Query::range(field, gte, lte)).paginate(offset, limit);
        self.engine.search(index, &request).await
    }

    /// Full-text match on `field`, with matched fragments wrapped in the
    /// configured highlight tags.
    ///
    /// By default the highlighted field is `field` itself. Callers that always
    /// want fragments from one fixed field (e.g. `message`, whatever is being
    /// matched) should configure `HighlightOptions::default().on_field("message")`.
    pub async fn search_with_highlight(
        &self,
        index: &str,
        field: &str,
        text: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchResponse, SearchError> {
        let request = SearchRequest::new(Query::matching(field, text))
            .paginate(offset, limit)
            .with_highlight(self.config.highlight.clone());
        self.engine.search(index, &request).await
    }

    /// Run an arbitrary prepared request.
    pub async fn search(
        &self,
        index: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        self.engine.search(index, request).await
    }

    /// Check if the search engine is reachable and healthy.
    pub async fn health_check(&self) -> Result<bool, SearchError> {
        self.engine.health_check().await
    }
}
