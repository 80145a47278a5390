//! Debounced title search: the state a results screen renders from, the
//! controller that drives it, and the cancel-and-replace debouncer.

pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::{DebounceTicket, SearchController, SearchRequest};
pub use debounce::{Cancel, Debouncer};
pub use state::SearchState;
