//! Upstream record types
//!
//! Field names follow the upstream JSON (camelCase). The locations, dates and
//! relation resources wrap their records in an `{"index": [...]}` object while
//! the artists resource is a bare array.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier shared by all four resource kinds
pub type ArtistId = u32;

/// One of the four upstream collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl ResourceKind {
    /// All kinds in load order
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Artists,
        ResourceKind::Locations,
        ResourceKind::Dates,
        ResourceKind::Relations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Artists => "artists",
            ResourceKind::Locations => "locations",
            ResourceKind::Dates => "dates",
            ResourceKind::Relations => "relations",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artist or band
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Member names in upstream order
    #[serde(default)]
    pub members: Vec<String>,
    /// Year the band was formed
    pub creation_date: i32,
    /// First album release date, kept verbatim (upstream uses DD-MM-YYYY)
    pub first_album: String,
    /// Upstream URL of this artist's location record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    /// Upstream URL of this artist's date record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concert_dates: Option<String>,
    /// Upstream URL of this artist's relation record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<String>,
}

/// Concert locations for one artist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Upstream URL of the matching date record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
}

/// Concert dates for one artist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Date {
    pub id: ArtistId,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Concert schedule for one artist: location name -> dates played there
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: ArtistId,
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// `{"index": [...]}` wrapper used by the locations, dates and relation resources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Indexed<T> {
    pub index: Vec<T>,
}

impl<T> Indexed<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.index
    }
}
