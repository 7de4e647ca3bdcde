//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    GetParts, IndexParts, OpenSearch, SearchParts, UpdateParts,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries::build_search_body;
use search_client_shared::{GetResult, IndexCreated, SearchRequest, SearchResponse};

/// OpenSearch client implementation.
///
/// Holds one connection to a single node. Sniffing is never enabled; the
/// configured URL is the only node the client talks to.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://127.0.0.1:9200").await?;
/// let exists = client.index_exists("twitter").await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    pretty: bool,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The server URL (e.g., "http://127.0.0.1:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or transport setup fails
    pub async fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self {
            client,
            pretty: true,
        })
    }

    /// Ask the engine to pretty-print search responses. Enabled by default.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Pass successful responses through; turn anything else into `ResponseError`
    /// carrying the raw body.
    async fn ensure_success(response: Response, operation: &str) -> Result<Response, SearchError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(operation = operation, status = %status, body = %body, "Request failed");
        Err(SearchError::response(status.as_u16(), body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SearchError> {
        response
            .json::<T>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        // HEAD has no body; 404 is the "missing" answer, anything else non-2xx is an error
        if response.status_code().as_u16() == 404 {
            debug!(index = %index, "Index does not exist");
            return Ok(false);
        }

        Self::ensure_success(response, "index_exists").await?;
        debug!(index = %index, "Index exists");
        Ok(true)
    }

    async fn create_index(
        &self,
        index: &str,
        body: Option<&Value>,
    ) -> Result<IndexCreated, SearchError> {
        let indices = self.client.indices();
        let create = indices.create(IndicesCreateParts::Index(index));

        let response = match body {
            Some(body) => create.body(body).send().await,
            None => create.send().await,
        }
        .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::ensure_success(response, "create_index").await?;
        let created: IndexCreated = Self::decode(response).await?;

        info!(index = %created.index, acknowledged = created.acknowledged, "Created index");
        Ok(created)
    }

    #[instrument(skip(self, document))]
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), SearchError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        Self::ensure_success(response, "index_document").await?;

        debug!("Document indexed");
        Ok(())
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<GetResult, SearchError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::ensure_success(response, "get_document").await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, partial))]
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        partial: &Value,
    ) -> Result<(), SearchError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(json!({ "doc": partial }))
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        Self::ensure_success(response, "update_document").await?;

        debug!("Document updated");
        Ok(())
    }

    #[instrument(
        skip(self, request),
        fields(offset = request.pagination.offset, limit = request.pagination.limit)
    )]
    async fn search(
        &self,
        index: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        let body = build_search_body(request);

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .pretty(self.pretty)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::ensure_success(response, "search").await?;
        let result: SearchResponse = Self::decode(response).await?;

        debug!(took = result.took, hits = result.hits.hits.len(), "Search completed");
        Ok(result)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        let response = Self::ensure_success(response, "health_check").await?;
        let body: Value = Self::decode(response).await?;

        let status = body["status"].as_str().unwrap_or("red");
        debug!(status = %status, "Cluster health");
        Ok(is_healthy_status(status))
    }
}

/// Green and yellow clusters can serve reads and writes.
fn is_healthy_status(status: &str) -> bool {
    matches!(status, "green" | "yellow")
}
