use std::time::Duration;

use dioxus::logger::tracing;

use super::state::SearchState;
use crate::catalog::{CatalogClient, CatalogRecord, CatalogResult};
use crate::utils::SearchConfig;

/// Handed out each time the query changes. Only the newest ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    pub delay: Duration,
}

/// One catalog request the host must run and report back through
/// [`SearchController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub limit: usize,
}

impl SearchRequest {
    pub async fn execute<C: CatalogClient + ?Sized>(
        &self,
        client: &C,
    ) -> CatalogResult<Vec<CatalogRecord>> {
        client.search(&self.query, self.limit).await
    }
}

/// Turns typed text into at most one debounced catalog request and folds the
/// responses into [`SearchState`]. Performs no I/O and owns no timers: the host
/// sleeps on tickets and runs requests.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    config: SearchConfig,
    query: String,
    state: SearchState,
    generation: u64,
    last_seq: u64,
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Raw input, untrimmed, as shown in the text field
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Store the raw input. Returns whether it changed.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.query {
            return false;
        }
        self.query = text;
        true
    }

    /// Re-arm the debounce: every ticket issued before this one is void.
    pub fn on_query_change(&mut self) -> DebounceTicket {
        self.generation += 1;
        tracing::debug!("debounce armed (generation {})", self.generation);
        DebounceTicket {
            generation: self.generation,
            delay: self.config.debounce_delay,
        }
    }

    /// Called when a ticket's delay elapses.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchRequest> {
        if ticket.generation != self.generation {
            tracing::debug!("debounce generation {} superseded", ticket.generation);
            return None;
        }
        let query = self.query.trim().to_string();
        self.search(&query)
    }

    /// Explicit submit (button or Enter), bypassing the debounce.
    pub fn search_immediately(&mut self) -> Option<SearchRequest> {
        let query = self.query.trim().to_string();
        self.search(&query)
    }

    pub fn search(&mut self, q: &str) -> Option<SearchRequest> {
        if q.is_empty() {
            self.state.reset();
            if self.config.discard_stale_responses {
                // Anything still in flight answers a query that is gone
                self.last_seq += 1;
                self.state.loading = false;
            }
            return None;
        }

        self.state.begin();
        self.last_seq += 1;
        tracing::info!("searching catalog for {:?} (request {})", q, self.last_seq);

        Some(SearchRequest {
            seq: self.last_seq,
            query: q.to_string(),
            limit: self.config.server_limit,
        })
    }

    /// Apply the outcome of a request issued by [`search`](Self::search).
    pub fn complete(
        &mut self,
        request: &SearchRequest,
        outcome: CatalogResult<Vec<CatalogRecord>>,
    ) {
        if self.config.discard_stale_responses && request.seq != self.last_seq {
            tracing::debug!(
                "dropping response to request {} (latest is {})",
                request.seq,
                self.last_seq
            );
            return;
        }

        match outcome {
            Ok(records) => {
                tracing::info!("{:?}: {} records", request.query, records.len());
                self.state.succeed(records, self.config.max_results);
            }
            Err(err) => {
                tracing::error!("search for {:?} failed: {}", request.query, err);
                self.state.fail(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use futures::future::BoxFuture;
    use proptest::prelude::*;
    use std::sync::Mutex;

    /// Scripted catalog that records every title it is asked for
    struct MockCatalog {
        reply: CatalogResult<Vec<CatalogRecord>>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl MockCatalog {
        fn with_docs(n: usize) -> Self {
            let docs = (0..n)
                .map(|i| CatalogRecord {
                    title: format!("Harry Potter {i}"),
                    key: Some(format!("/works/OL{i}W")),
                    ..Default::default()
                })
                .collect();
            Self {
                reply: Ok(docs),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(CatalogError::Network("connection refused".into())),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CatalogClient for MockCatalog {
        fn search<'a>(&'a self, title: &'a str, limit: usize)
            -> BoxFuture<'a, CatalogResult<Vec<CatalogRecord>>> {
            self.calls.lock().unwrap().push((title.to_string(), limit));
            Box::pin(futures::future::ready(self.reply.clone()))
        }
    }

    async fn run(controller: &mut SearchController, catalog: &MockCatalog, request: SearchRequest) {
        let outcome = request.execute(catalog).await;
        controller.complete(&request, outcome);
    }

    fn typed(controller: &mut SearchController, text: &str) -> DebounceTicket {
        controller.set_query(text);
        controller.on_query_change()
    }

    #[tokio::test]
    async fn test_harry_potter_is_capped_at_24() {
        let catalog = MockCatalog::with_docs(30);
        let mut controller = SearchController::default();

        let ticket = typed(&mut controller, "Harry Potter");
        let request = controller.fire(ticket).unwrap();
        assert!(controller.state().loading);

        run(&mut controller, &catalog, request).await;

        let state = controller.state();
        assert_eq!(state.results.len(), 24);
        assert_eq!(state.results[0].title, "Harry Potter 0");
        assert_eq!(state.error, "");
        assert!(!state.loading);
        assert_eq!(catalog.calls(), vec![("Harry Potter".to_string(), 30)]);
    }

    #[tokio::test]
    async fn test_no_matches_reports_no_books() {
        let catalog = MockCatalog::with_docs(0);
        let mut controller = SearchController::default();

        let ticket = typed(&mut controller, "zzzzzznotabook");
        let request = controller.fire(ticket).unwrap();
        run(&mut controller, &catalog, request).await;

        assert!(controller.state().results.is_empty());
        assert_eq!(controller.state().error, "No books found. Try another search.");
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn test_network_failure_reports_network_error() {
        let catalog = MockCatalog::failing();
        let mut controller = SearchController::default();
        controller.set_query("Dune");

        let request = controller.search_immediately().unwrap();
        run(&mut controller, &catalog, request).await;

        assert_eq!(controller.state().error, "Network error. Please try again.");
        assert!(!controller.state().loading);
    }

    #[test]
    fn test_query_is_trimmed_before_search() {
        let mut controller = SearchController::default();
        controller.set_query("  Pride and Prejudice \n");
        assert_eq!(controller.query(), "  Pride and Prejudice \n");

        let request = controller.search_immediately().unwrap();
        assert_eq!(request.query, "Pride and Prejudice");
        assert_eq!(request.limit, 30);
    }

    #[test]
    fn test_set_query_reports_change() {
        let mut controller = SearchController::default();
        assert!(controller.set_query("a"));
        assert!(!controller.set_query("a"));
        assert!(!controller.state().loading);
    }

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut controller = SearchController::default();
        let tickets: Vec<DebounceTicket> = ["H", "Ha", "Har", "Harry"]
            .into_iter()
            .map(|text| typed(&mut controller, text))
            .collect();

        let requests: Vec<SearchRequest> = tickets
            .into_iter()
            .filter_map(|ticket| controller.fire(ticket))
            .collect();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "Harry");
    }

    #[test]
    fn test_ticket_carries_configured_delay() {
        let mut controller = SearchController::new(SearchConfig {
            debounce_delay: Duration::from_millis(10),
            ..SearchConfig::default()
        });
        assert_eq!(controller.on_query_change().delay, Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_clearing_query_resets_without_request() {
        let catalog = MockCatalog::with_docs(5);
        let mut controller = SearchController::default();

        let ticket = typed(&mut controller, "Emma");
        let request = controller.fire(ticket).unwrap();
        run(&mut controller, &catalog, request).await;
        assert_eq!(controller.state().results.len(), 5);

        let ticket = typed(&mut controller, "");
        assert!(controller.fire(ticket).is_none());
        assert!(controller.state().results.is_empty());
        assert_eq!(controller.state().error, "");
        assert_eq!(catalog.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_last_response_wins_by_default() {
        let slow = MockCatalog::with_docs(2);
        let fast = MockCatalog::with_docs(7);
        let mut controller = SearchController::default();

        controller.set_query("first");
        let earlier = controller.search_immediately().unwrap();
        controller.set_query("second");
        let later = controller.search_immediately().unwrap();

        controller.complete(&later, fast.search(&later.query, later.limit).await);
        controller.complete(&earlier, slow.search(&earlier.query, earlier.limit).await);

        assert_eq!(controller.state().results.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_responses_can_be_discarded() {
        let slow = MockCatalog::with_docs(2);
        let fast = MockCatalog::with_docs(7);
        let mut controller = SearchController::new(SearchConfig {
            discard_stale_responses: true,
            ..SearchConfig::default()
        });

        controller.set_query("first");
        let earlier = controller.search_immediately().unwrap();
        controller.set_query("second");
        let later = controller.search_immediately().unwrap();

        controller.complete(&later, fast.search(&later.query, later.limit).await);
        controller.complete(&earlier, slow.search(&earlier.query, earlier.limit).await);

        assert_eq!(controller.state().results.len(), 7);
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn test_clearing_query_discards_in_flight_response() {
        let catalog = MockCatalog::with_docs(1);
        let mut controller = SearchController::new(SearchConfig {
            discard_stale_responses: true,
            ..SearchConfig::default()
        });

        controller.set_query("Emma");
        let emma = controller.search_immediately().unwrap();

        let ticket = typed(&mut controller, "");
        assert!(controller.fire(ticket).is_none());
        assert!(!controller.state().loading);

        run(&mut controller, &catalog, emma).await;

        assert!(controller.state().results.is_empty());
        assert_eq!(controller.state().error, "");
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn test_clearing_query_keeps_last_response_by_default() {
        let catalog = MockCatalog::with_docs(1);
        let mut controller = SearchController::default();

        controller.set_query("Emma");
        let emma = controller.search_immediately().unwrap();
        let ticket = typed(&mut controller, "");
        assert!(controller.fire(ticket).is_none());

        run(&mut controller, &catalog, emma).await;

        assert_eq!(controller.state().results.len(), 1);
    }

    proptest! {
        #[test]
        fn blank_queries_never_issue_requests(query in "[ \t\n\r]{0,12}") {
            let mut controller = SearchController::default();
            let ticket = typed(&mut controller, &query);

            prop_assert!(controller.fire(ticket).is_none());
            prop_assert!(controller.search_immediately().is_none());
            prop_assert!(controller.state().results.is_empty());
            prop_assert_eq!(controller.state().error.as_str(), "");
            prop_assert!(!controller.state().loading);
        }
    }
}
