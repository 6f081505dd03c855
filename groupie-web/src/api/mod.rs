//! HTTP handlers for groupie-web

pub mod guard;
pub mod pages;
pub mod query;

pub use guard::{error_pages, panic_response};
pub use pages::{artist_by_path, artist_by_query, concerts, index, internal_error, not_found};
