/// Configuration constants for the application
pub mod config {
    use std::time::Duration;

    /// Title search endpoint of the Open Library catalog
    pub const SEARCH_ENDPOINT: &str = "https://openlibrary.org/search.json";

    /// Cover image service, `{id}` is replaced by the record's cover identifier
    pub const COVER_URL_TEMPLATE: &str = "https://covers.openlibrary.org/b/id/{id}-M.jpg";

    /// Image shown when a record carries no cover identifier
    pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/200x300?text=No+Cover";

    /// Quiet period after the last keystroke before auto-search fires
    pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(550);

    /// `limit` parameter sent to the catalog
    pub const SERVER_LIMIT: usize = 30;

    /// Maximum number of cards shown in the grid
    pub const MAX_RESULTS: usize = 24;

    /// HTTP request timeout
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub const NO_RESULTS_MESSAGE: &str = "No books found. Try another search.";
    pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
    pub const UNKNOWN_AUTHOR: &str = "Unknown author";
}

/// Runtime-tunable search settings, defaulting to the constants in [`config`]
pub mod settings {
    use super::config::*;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    pub struct SearchConfig {
        pub endpoint: String,
        pub debounce_delay: Duration,
        pub server_limit: usize,
        pub max_results: usize,
        pub request_timeout: Duration,
        /// Drop responses that arrive after a newer request was issued.
        /// Off by default: the last response to resolve wins.
        pub discard_stale_responses: bool,
    }

    impl Default for SearchConfig {
        fn default() -> Self {
            Self {
                endpoint: SEARCH_ENDPOINT.to_string(),
                debounce_delay: DEBOUNCE_DELAY,
                server_limit: SERVER_LIMIT,
                max_results: MAX_RESULTS,
                request_timeout: REQUEST_TIMEOUT,
                discard_stale_responses: false,
            }
        }
    }
}

/// Utility functions for building display strings
pub mod format_utils {
    use super::config::COVER_URL_TEMPLATE;

    /// Build the medium-size cover URL for a cover identifier
    pub fn cover_url(cover_id: i64) -> String {
        COVER_URL_TEMPLATE.replace("{id}", &cover_id.to_string())
    }

    /// Join author names with ", ", returning `None` when there is nothing to show
    pub fn join_authors(names: &[String]) -> Option<String> {
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            None
        } else {
            Some(names.join(", "))
        }
    }
}

pub use settings::SearchConfig;
