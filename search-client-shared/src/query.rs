//! Query descriptions.
//!
//! These types describe a search request in terms the caller cares about
//! (field, value, bounds, offset, limit). Rendering them into the remote
//! query DSL is the repository crate's job.

use serde_json::Value;

/// Default opening tag wrapped around highlighted fragments.
pub const DEFAULT_PRE_TAG: &str = "<span color='red'>";

/// Default closing tag wrapped around highlighted fragments.
pub const DEFAULT_POST_TAG: &str = "</span>";

/// A single query clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Exact match against a non-analyzed (keyword) field.
    Term { field: String, value: Value },
    /// Exact match against any of several values.
    Terms { field: String, values: Vec<Value> },
    /// Values within an inclusive range. A `None` bound is left open.
    Range {
        field: String,
        gte: Option<Value>,
        lte: Option<Value>,
    },
    /// Analyzed full-text match.
    Match { field: String, text: String },
}

impl Query {
    /// Create a term query.
    pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a terms query from any iterable of values.
    pub fn terms<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Terms {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a range query with both bounds inclusive.
    pub fn range(field: impl Into<String>, gte: impl Into<Value>, lte: impl Into<Value>) -> Self {
        Self::Range {
            field: field.into(),
            gte: Some(gte.into()),
            lte: Some(lte.into()),
        }
    }

    /// Create a match query.
    pub fn matching(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Match {
            field: field.into(),
            text: text.into(),
        }
    }

    /// The field this clause targets.
    pub fn field(&self) -> &str {
        match self {
            Self::Term { field, .. }
            | Self::Terms { field, .. }
            | Self::Range { field, .. }
            | Self::Match { field, .. } => field,
        }
    }
}

/// Offset/limit pagination, mapped to `from`/`size` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of hits to skip.
    pub offset: usize,
    /// Maximum number of hits to return.
    pub limit: usize,
}

impl Pagination {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

/// Highlighting options for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Field to highlight. `None` highlights the field the query targets.
    pub field: Option<String>,
    /// Tags inserted before each highlighted fragment.
    pub pre_tags: Vec<String>,
    /// Tags inserted after each highlighted fragment.
    pub post_tags: Vec<String>,
}

impl HighlightOptions {
    /// Highlight a specific field instead of the queried one.
    pub fn on_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Replace the wrapping tags.
    pub fn with_tags(mut self, pre: impl Into<String>, post: impl Into<String>) -> Self {
        self.pre_tags = vec![pre.into()];
        self.post_tags = vec![post.into()];
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            field: None,
            pre_tags: vec![DEFAULT_PRE_TAG.to_string()],
            post_tags: vec![DEFAULT_POST_TAG.to_string()],
        }
    }
}

/// A complete search request against one index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: Query,
    pub pagination: Pagination,
    pub highlight: Option<HighlightOptions>,
}

impl SearchRequest {
    /// Create a request with default pagination and no highlighting.
    pub fn new(query: Query) -> Self {
        Self {
            query,
            pagination: Pagination::default(),
            highlight: None,
        }
    }

    /// Set the offset and limit.
    pub fn paginate(mut self, offset: usize, limit: usize) -> Self {
        self.pagination = Pagination::new(offset, limit);
        self
    }

    /// Enable highlighting.
    pub fn with_highlight(mut self, highlight: HighlightOptions) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_collects_values() {
        let query = Query::terms("tag", ["a", "b", "c"]);

        match query {
            Query::Terms { field, values } => {
                assert_eq!(field, "tag");
                assert_eq!(values, vec![json!("a"), json!("b"), json!("c")]);
            }
            other => panic!("unexpected query: {:?}", other),
        }
    }

    #[test]
    fn test_range_sets_both_bounds() {
        let query = Query::range("age", 18, 30);

        assert_eq!(
            query,
            Query::Range {
                field: "age".to_string(),
                gte: Some(json!(18)),
                lte: Some(json!(30)),
            }
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(Query::term("user", "olivere").field(), "user");
        assert_eq!(Query::matching("message", "hello").field(), "message");
    }

    #[test]
    fn test_highlight_defaults() {
        let highlight = HighlightOptions::default();

        assert!(highlight.field.is_none());
        assert_eq!(highlight.pre_tags, vec!["<span color='red'>"]);
        assert_eq!(highlight.post_tags, vec!["</span>"]);
    }

    #[test]
    fn test_search_request_builder() {
        let request = SearchRequest::new(Query::term("user", "olivere"))
            .paginate(20, 5)
            .with_highlight(HighlightOptions::default().on_field("message"));

        assert_eq!(request.pagination, Pagination::new(20, 5));
        assert_eq!(
            request.highlight.and_then(|h| h.field),
            Some("message".to_string())
        );
    }
}
