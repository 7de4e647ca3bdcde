//! Response envelopes returned by the search engine.
//!
//! Only the envelope is typed. Document bodies (`_source`) and highlight
//! fragments are kept as they came back from the server.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a create-index request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexCreated {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
    pub index: String,
}

/// Result of fetching a single document by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetResult {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version", default)]
    pub version: Option<i64>,
    #[serde(rename = "_seq_no", default)]
    pub seq_no: Option<i64>,
    #[serde(rename = "_primary_term", default)]
    pub primary_term: Option<i64>,
    pub found: bool,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

impl GetResult {
    /// Deserialize the document body into a caller type.
    ///
    /// Returns `None` when the document has no source.
    pub fn source_as<T: serde::de::DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.source.clone().map(serde_json::from_value)
    }
}

/// Result of a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Milliseconds the engine spent executing the search.
    pub took: u64,
    pub timed_out: bool,
    pub hits: Hits,
}

impl SearchResponse {
    /// Total number of matching documents, when the engine reported it.
    pub fn total(&self) -> Option<u64> {
        self.hits.total.as_ref().map(|t| t.value)
    }
}

/// The `hits` section of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

/// Total hit count and whether it is exact (`eq`) or a lower bound (`gte`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    pub relation: String,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
    /// Highlighted fragments keyed by field name.
    #[serde(default)]
    pub highlight: Option<HashMap<String, Vec<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_search_response() {
        let body = json!({
            "took": 3,
            "timed_out": false,
            "_shards": { "total": 1, "successful": 1, "skipped": 0, "failed": 0 },
            "hits": {
                "total": { "value": 1, "relation": "eq" },
                "max_score": 1.2,
                "hits": [
                    {
                        "_index": "twitter",
                        "_type": "_doc",
                        "_id": "1",
                        "_score": 1.2,
                        "_source": { "user": "olivere", "message": "Take Five" },
                        "highlight": { "message": ["<span color='red'>Five</span>"] }
                    }
                ]
            }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.took, 3);
        assert_eq!(response.total(), Some(1));
        let hit = &response.hits.hits[0];
        assert_eq!(hit.id, "1");
        assert_eq!(hit.source.as_ref().unwrap()["user"], "olivere");
        assert_eq!(
            hit.highlight.as_ref().unwrap()["message"],
            vec!["<span color='red'>Five</span>".to_string()]
        );
    }

    #[test]
    fn test_decode_search_response_without_total() {
        let body = json!({
            "took": 1,
            "timed_out": false,
            "hits": { "max_score": null, "hits": [] }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();

        assert!(response.total().is_none());
        assert!(response.hits.hits.is_empty());
    }

    #[test]
    fn test_decode_get_result() {
        let body = json!({
            "_index": "twitter",
            "_id": "42",
            "_version": 2,
            "_seq_no": 5,
            "_primary_term": 1,
            "found": true,
            "_source": { "user": "olivere", "retweets": 3 }
        });

        let result: GetResult = serde_json::from_value(body).unwrap();

        assert!(result.found);
        assert_eq!(result.version, Some(2));

        #[derive(Deserialize)]
        struct Tweet {
            user: String,
            retweets: u32,
        }
        let tweet: Tweet = result.source_as().unwrap().unwrap();
        assert_eq!(tweet.user, "olivere");
        assert_eq!(tweet.retweets, 3);
    }

    #[test]
    fn test_decode_index_created() {
        let body = json!({
            "acknowledged": true,
            "shards_acknowledged": true,
            "index": "twitter"
        });

        let created: IndexCreated = serde_json::from_value(body).unwrap();

        assert!(created.acknowledged);
        assert_eq!(created.index, "twitter");
    }
}
