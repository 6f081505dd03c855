//! Page rendering
//!
//! Handlers hand one template and one data value to a [`Renderer`] and get
//! back the response body. Rendering failures are reported as [`RenderError`]
//! so they map to 500 rather than to a lookup outcome.

mod html;

pub use html::{escape_html, HtmlRenderer};

use crate::lookup::ArtistDetails;
use groupie_common::{Artist, Relation};
use thiserror::Error;

/// Page templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Index,
    Artist,
    Concerts,
    Error,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Index => "index.html",
            Template::Artist => "artist.html",
            Template::Concerts => "concerts.html",
            Template::Error => "error.html",
        }
    }
}

/// Data value passed to a template
#[derive(Debug, Clone, Copy)]
pub enum PageData<'a> {
    Index(&'a [Artist]),
    Artist(ArtistDetails<'a>),
    Concerts {
        /// Artist sharing the relation's id, if loaded
        artist: Option<&'a Artist>,
        relation: &'a Relation,
    },
    Error {
        status: u16,
        message: &'a str,
    },
}

impl PageData<'_> {
    fn kind(&self) -> &'static str {
        match self {
            PageData::Index(_) => "index",
            PageData::Artist(_) => "artist",
            PageData::Concerts { .. } => "concerts",
            PageData::Error { .. } => "error",
        }
    }
}

/// Render errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template missing, malformed, or given the wrong kind of data
    #[error("Template error ({template}): {message}")]
    Template {
        template: &'static str,
        message: String,
    },

    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Rendering collaborator
pub trait Renderer: Send + Sync {
    fn render(&self, template: Template, data: &PageData<'_>) -> Result<String, RenderError>;
}
