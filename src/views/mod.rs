//! The views module contains the stateful screens of the app.

mod book_finder;
pub use book_finder::BookFinder;
