use crate::catalog::CatalogRecord;
use crate::utils::config::NO_RESULTS_MESSAGE;

/// What the results area shows. Only [`SearchController`](super::SearchController) mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<CatalogRecord>,
    pub loading: bool,
    /// Empty when there is nothing to report
    pub error: String,
}

impl SearchState {
    /// Back to "no search": no results, no error.
    pub fn reset(&mut self) {
        self.results.clear();
        self.error.clear();
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Keep the first `cap` records in service order, or report that nothing matched.
    pub fn succeed(&mut self, mut records: Vec<CatalogRecord>, cap: usize) {
        if records.is_empty() {
            self.results.clear();
            self.error = NO_RESULTS_MESSAGE.to_string();
        } else {
            records.truncate(cap);
            self.results = records;
            self.error.clear();
        }
        self.loading = false;
    }

    /// Results are dropped so an error is never shown next to stale cards.
    pub fn fail(&mut self, message: &str) {
        self.results.clear();
        self.error = message.to_string();
        self.loading = false;
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
