//! OpenSearch query builders.
//!
//! This module renders `SearchRequest` values into query-DSL JSON. Field
//! names and values are copied into the body unchanged.

use serde_json::{json, Map, Value};

use search_client_shared::{HighlightOptions, Query, SearchRequest};

/// Build the full `_search` body for a request.
///
/// The body carries:
/// - `query` rendered from the request's clause
/// - `from`/`size` from the request's offset/limit
/// - `highlight` when highlighting was requested
pub fn build_search_body(request: &SearchRequest) -> Value {
    let mut body = json!({
        "query": build_query(&request.query),
        "from": request.pagination.offset,
        "size": request.pagination.limit
    });

    if let Some(highlight) = &request.highlight {
        body["highlight"] = build_highlight(highlight, request.query.field());
    }

    body
}

/// Render a single query clause.
pub fn build_query(query: &Query) -> Value {
    match query {
        Query::Term { field, value } => build_term_query(field, value),
        Query::Terms { field, values } => build_terms_query(field, values),
        Query::Range { field, gte, lte } => build_range_query(field, gte.as_ref(), lte.as_ref()),
        Query::Match { field, text } => build_match_query(field, text),
    }
}

/// Exact match on a keyword field.
fn build_term_query(field: &str, value: &Value) -> Value {
    json!({ "term": { field: value } })
}

/// Exact match on any of several values.
fn build_terms_query(field: &str, values: &[Value]) -> Value {
    json!({ "terms": { field: values } })
}

/// Inclusive range. Missing bounds are left out so the range stays open on that side.
fn build_range_query(field: &str, gte: Option<&Value>, lte: Option<&Value>) -> Value {
    let mut bounds = Map::new();
    if let Some(gte) = gte {
        bounds.insert("gte".to_string(), gte.clone());
    }
    if let Some(lte) = lte {
        bounds.insert("lte".to_string(), lte.clone());
    }

    json!({ "range": { field: bounds } })
}

/// Analyzed full-text match.
fn build_match_query(field: &str, text: &str) -> Value {
    json!({ "match": { field: { "query": text } } })
}

/// Build the highlight section.
///
/// Falls back to `query_field` when the options don't name a field.
fn build_highlight(options: &HighlightOptions, query_field: &str) -> Value {
    let field = options.field.as_deref().unwrap_or(query_field);

    json!({
        "pre_tags": options.pre_tags,
        "post_tags": options.post_tags,
        "fields": { field: {} }
    })
}
