//! # Groupie Common Library
//!
//! Shared code for the Groupie Tracker services including:
//! - Upstream record types (artists, locations, dates, relations)
//! - Resource kind naming used in logs and errors
//! - Bootstrap configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Artist, ArtistId, Date, Indexed, Location, Relation, ResourceKind};
