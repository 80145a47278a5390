//! Shared presentational components: the search bar, the loading spinner and
//! the result card.

mod book_card;
pub use book_card::{list_key, BookCard};

mod loader;
pub use loader::Loader;

mod search_input;
pub use search_input::SearchInput;
