// Book catalog wire types and HTTP client
pub mod client;
pub mod error;
pub mod record;

pub use client::*;
pub use error::*;
pub use record::*;
