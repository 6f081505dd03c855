//! Lookup and join over the data store
//!
//! Callers validate identifiers before calling; lookups only answer whether a
//! record with that identifier exists. Absence is `None`, never a sentinel
//! record, so an upstream identifier of 0 is looked up like any other.

use crate::store::DataStore;
use groupie_common::{Artist, ArtistId, Date, Location, Relation};

/// An artist joined with its tour records
#[derive(Debug, Clone, Copy)]
pub struct ArtistDetails<'a> {
    pub artist: &'a Artist,
    pub locations: Option<&'a Location>,
    pub dates: Option<&'a Date>,
    pub relation: Option<&'a Relation>,
}

impl DataStore {
    pub fn find_artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artist_index
            .get(&id)
            .and_then(|&position| self.artists.get(position))
    }

    pub fn find_locations(&self, id: ArtistId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn find_dates(&self, id: ArtistId) -> Option<&Date> {
        self.dates.get(&id)
    }

    /// Concert schedule (relation record) for `id`
    pub fn find_concerts(&self, id: ArtistId) -> Option<&Relation> {
        self.relations.get(&id)
    }

    /// Artist plus whatever location, date and relation records share its id
    ///
    /// Missing tour records are not an error; only a missing artist is.
    pub fn find_artist_details(&self, id: ArtistId) -> Option<ArtistDetails<'_>> {
        let artist = self.find_artist(id)?;
        Some(ArtistDetails {
            artist,
            locations: self.find_locations(id),
            dates: self.find_dates(id),
            relation: self.find_concerts(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn artist(id: ArtistId, name: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            image: String::new(),
            members: vec!["A".to_string(), "B".to_string()],
            creation_date: 1990,
            first_album: "1991-01-01".to_string(),
            locations: None,
            concert_dates: None,
            relations: None,
        }
    }

    fn relation(id: ArtistId, place: &str, date: &str) -> Relation {
        let mut dates_locations = BTreeMap::new();
        dates_locations.insert(place.to_string(), vec![date.to_string()]);
        Relation { id, dates_locations }
    }

    fn sample_store() -> DataStore {
        DataStore::new(
            vec![artist(1, "X"), artist(2, "Y"), artist(7, "Z")],
            vec![Location {
                id: 1,
                locations: vec!["London".to_string()],
                dates: None,
            }],
            vec![Date {
                id: 1,
                dates: vec!["2024-01-01".to_string()],
            }],
            vec![relation(1, "London", "2024-01-01"), relation(7, "Paris", "2020-02-02")],
        )
    }

    #[test]
    fn test_find_artist_returns_matching_record() {
        let store = sample_store();
        for (id, name) in [(1, "X"), (2, "Y"), (7, "Z")] {
            let found = store.find_artist(id).expect("artist should exist");
            assert_eq!(found.id, id);
            assert_eq!(found.name, name);
        }
    }

    #[test]
    fn test_find_artist_absent_ids() {
        let store = sample_store();
        for id in [0, 3, 6, 8, 999, ArtistId::MAX] {
            assert!(store.find_artist(id).is_none(), "id {} should be absent", id);
        }
    }

    #[test]
    fn test_find_concerts() {
        let store = sample_store();
        let concerts = store.find_concerts(1).unwrap();
        assert_eq!(concerts.dates_locations["London"], vec!["2024-01-01"]);
        assert!(store.find_concerts(2).is_none());
    }

    #[test]
    fn test_zero_identifier_is_a_real_key() {
        let store = DataStore::new(vec![], vec![], vec![], vec![relation(0, "Oslo", "2019-09-09")]);
        assert!(store.find_concerts(0).is_some());
        assert!(store.find_concerts(1).is_none());
    }

    #[test]
    fn test_details_join_all_kinds() {
        let store = sample_store();
        let details = store.find_artist_details(1).unwrap();
        assert_eq!(details.artist.name, "X");
        assert_eq!(details.locations.unwrap().locations, vec!["London"]);
        assert_eq!(details.dates.unwrap().dates, vec!["2024-01-01"]);
        assert!(details.relation.is_some());
    }

    #[test]
    fn test_details_tolerate_missing_tour_records() {
        let store = sample_store();
        let details = store.find_artist_details(2).unwrap();
        assert!(details.locations.is_none());
        assert!(details.dates.is_none());
        assert!(details.relation.is_none());

        let details = store.find_artist_details(7).unwrap();
        assert!(details.relation.is_some());
        assert!(details.locations.is_none());
    }

    #[test]
    fn test_details_for_unknown_artist() {
        // Relation 7 exists but a relation alone does not make an artist
        let store = DataStore::new(vec![], vec![], vec![], vec![relation(7, "Paris", "x")]);
        assert!(store.find_artist_details(7).is_none());
    }
}
