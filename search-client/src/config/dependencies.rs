//! Dependency initialization and wiring.

use std::fs;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::AppError;
use search_client_repository::{IndexConfig, OpenSearchClient, SearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The search client, wrapping the one engine handle for this process.
    pub search: SearchClient,
}

impl Dependencies {
    /// Connect to the search engine described by `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the client can't be built or the cluster is unreachable or red
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        info!(elasticsearch_url = %config.elasticsearch_url, "Initializing dependencies");

        let engine = OpenSearchClient::new(&config.elasticsearch_url)
            .await
            .map_err(|e| AppError::config(format!("Failed to create search client: {}", e)))?;

        let deps = Self::from_engine(Arc::new(engine));

        let healthy = deps
            .search
            .health_check()
            .await
            .map_err(|e| AppError::config(format!("Search engine health check failed: {}", e)))?;

        if !healthy {
            return Err(AppError::config("Search cluster is unhealthy"));
        }

        info!("Search engine connection verified");

        Ok(deps)
    }

    /// Wire dependencies around an already constructed engine.
    pub fn from_engine(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            search: SearchClient::new(engine),
        }
    }

    /// Create the configured startup index if it doesn't exist yet.
    ///
    /// Uses the mapping file when one is configured, otherwise an index with the
    /// configured shard and replica counts and dynamic mappings.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the index was created
    /// * `Ok(false)` - If no index is configured or it already existed
    pub async fn ensure_index(&self, config: &AppConfig) -> Result<bool, AppError> {
        let Some(index) = config.index.as_deref() else {
            return Ok(false);
        };

        if self.search.index_exists(index).await? {
            info!(index = %index, "Index already exists");
            return Ok(false);
        }

        let created = match &config.mapping_path {
            Some(path) => {
                let mapping = fs::read_to_string(path)?;
                self.search.create_index(index, &mapping).await?
            }
            None => {
                let index_config = IndexConfig::new(config.shards, config.replicas);
                self.search
                    .create_index_with_config(index, &index_config)
                    .await?
            }
        };

        info!(index = %created.index, acknowledged = created.acknowledged, "Index created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use search_client_repository::SearchError;
    use search_client_shared::{GetResult, IndexCreated, SearchRequest, SearchResponse};
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tokio::sync::Mutex;

    /// Stub engine tracking which indices exist.
    struct StubEngine {
        existing: Vec<String>,
        created: Mutex<Vec<(String, Value)>>,
    }

    impl StubEngine {
        fn with_indices(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(|s| s.to_string()).collect(),
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for StubEngine {
        async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
            Ok(self.existing.iter().any(|i| i == index))
        }

        async fn create_index(
            &self,
            index: &str,
            body: Option<&Value>,
        ) -> Result<IndexCreated, SearchError> {
            self.created
                .lock()
                .await
                .push((index.to_string(), body.cloned().unwrap_or_default()));
            Ok(IndexCreated {
                acknowledged: true,
                shards_acknowledged: true,
                index: index.to_string(),
            })
        }

        async fn index_document(&self, _: &str, _: &str, _: &Value) -> Result<(), SearchError> {
            unimplemented!()
        }

        async fn get_document(&self, _: &str, _: &str) -> Result<GetResult, SearchError> {
            unimplemented!()
        }

        async fn update_document(&self, _: &str, _: &str, _: &Value) -> Result<(), SearchError> {
            unimplemented!()
        }

        async fn search(&self, _: &str, _: &SearchRequest) -> Result<SearchResponse, SearchError> {
            unimplemented!()
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn config_for(index: Option<&str>) -> AppConfig {
        AppConfig {
            elasticsearch_url: "http://127.0.0.1:9200".to_string(),
            index: index.map(str::to_string),
            mapping_path: None,
            shards: 2,
            replicas: 0,
            log_format: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_ensure_index_without_configured_index() {
        let engine = Arc::new(StubEngine::with_indices(&[]));
        let deps = Dependencies::from_engine(engine.clone());

        assert!(!deps.ensure_index(&config_for(None)).await.unwrap());
        assert!(engine.created.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_ensure_index_skips_existing() {
        let engine = Arc::new(StubEngine::with_indices(&["twitter"]));
        let deps = Dependencies::from_engine(engine.clone());

        assert!(!deps.ensure_index(&config_for(Some("twitter"))).await.unwrap());
        assert!(engine.created.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_ensure_index_creates_from_settings() {
        let engine = Arc::new(StubEngine::with_indices(&[]));
        let deps = Dependencies::from_engine(engine.clone());

        assert!(deps.ensure_index(&config_for(Some("twitter"))).await.unwrap());

        let created = engine.created.lock().await;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, "twitter");
        assert_eq!(created[0].1["settings"]["number_of_shards"], 2);
        assert_eq!(created[0].1["settings"]["number_of_replicas"], 0);
    }

    #[tokio::test]
    async fn test_ensure_index_creates_from_mapping_file() {
        let path = std::env::temp_dir().join(format!(
            "search-client-mapping-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"mappings":{"properties":{"user":{"type":"keyword"}}}}"#).unwrap();

        let engine = Arc::new(StubEngine::with_indices(&[]));
        let deps = Dependencies::from_engine(engine.clone());
        let mut config = config_for(Some("twitter"));
        config.mapping_path = Some(path.clone());

        let result = deps.ensure_index(&config).await;
        fs::remove_file(&path).ok();

        assert!(result.unwrap());
        let created = engine.created.lock().await;
        assert_eq!(
            created[0].1,
            json!({ "mappings": { "properties": { "user": { "type": "keyword" } } } })
        );
    }

    #[tokio::test]
    async fn test_ensure_index_missing_mapping_file() {
        let engine = Arc::new(StubEngine::with_indices(&[]));
        let deps = Dependencies::from_engine(engine);
        let mut config = config_for(Some("twitter"));
        config.mapping_path = Some(PathBuf::from("/nonexistent/search-client/mapping.json"));

        let result = deps.ensure_index(&config).await;

        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
