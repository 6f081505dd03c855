//! In-memory data store
//!
//! Immutable snapshot of the four upstream collections, built once by the
//! loader and shared read-only with every request handler. Each non-artist
//! collection is keyed by the shared identifier so joins are map lookups.

use groupie_common::{Artist, ArtistId, Date, Location, Relation, ResourceKind};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::warn;

/// Loaded upstream data
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    /// Artists in upstream order (index page order)
    pub(crate) artists: Vec<Artist>,
    /// Artist id -> position in `artists`
    pub(crate) artist_index: HashMap<ArtistId, usize>,
    pub(crate) locations: HashMap<ArtistId, Location>,
    pub(crate) dates: HashMap<ArtistId, Date>,
    pub(crate) relations: HashMap<ArtistId, Relation>,
}

impl DataStore {
    /// Build the snapshot and its identifier indices
    ///
    /// If an identifier repeats within one collection the first record wins.
    pub fn new(
        artists: Vec<Artist>,
        locations: Vec<Location>,
        dates: Vec<Date>,
        relations: Vec<Relation>,
    ) -> Self {
        let mut artist_index = HashMap::with_capacity(artists.len());
        for (position, artist) in artists.iter().enumerate() {
            match artist_index.entry(artist.id) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => warn_duplicate(ResourceKind::Artists, artist.id),
            }
        }

        Self {
            artists,
            artist_index,
            locations: index_by_id(ResourceKind::Locations, locations, |l| l.id),
            dates: index_by_id(ResourceKind::Dates, dates, |d| d.id),
            relations: index_by_id(ResourceKind::Relations, relations, |r| r.id),
        }
    }

    /// Snapshot holding only artists
    pub fn artists_only(artists: Vec<Artist>) -> Self {
        Self::new(artists, Vec::new(), Vec::new(), Vec::new())
    }

    /// All artists in upstream order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Number of records held for `kind`
    pub fn count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Artists => self.artists.len(),
            ResourceKind::Locations => self.locations.len(),
            ResourceKind::Dates => self.dates.len(),
            ResourceKind::Relations => self.relations.len(),
        }
    }
}

fn index_by_id<T>(
    kind: ResourceKind,
    records: Vec<T>,
    id_of: impl Fn(&T) -> ArtistId,
) -> HashMap<ArtistId, T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        match index.entry(id_of(&record)) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(slot) => warn_duplicate(kind, *slot.key()),
        }
    }
    index
}

fn warn_duplicate(kind: ResourceKind, id: ArtistId) {
    warn!(resource = %kind, id, "Duplicate identifier in upstream data, keeping first record");
}
