//! # Search Client Shared
//!
//! Plain data types shared between the search client crates: query
//! descriptions handed to the engine, and the response envelopes it returns.

mod query;
mod response;

pub use query::{HighlightOptions, Pagination, Query, SearchRequest};
pub use response::{GetResult, Hit, Hits, IndexCreated, SearchResponse, TotalHits};
