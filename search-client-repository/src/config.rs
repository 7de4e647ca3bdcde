//! Configuration types for the SearchClient.

use search_client_shared::HighlightOptions;

/// Configuration for the SearchClient.
#[derive(Debug, Clone, Default)]
pub struct SearchClientConfig {
    /// Highlight options used by `search_with_highlight`.
    pub highlight: HighlightOptions,
}

impl SearchClientConfig {
    /// Create a config with custom highlight options.
    pub fn with_highlight(highlight: HighlightOptions) -> Self {
        Self { highlight }
    }
}
