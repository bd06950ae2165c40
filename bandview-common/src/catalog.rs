//! In-memory artist catalog
//!
//! Built once at startup from the four upstream collections, then
//! shared read-only for the life of the process.

use std::collections::HashMap;

use crate::filter::Criteria;
use crate::model::{Artist, ArtistRecord, DatesRecord, LocationsRecord, RelationRecord};

/// Ordered, immutable collection of joined artists
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<Artist>,
}

impl Catalog {
    /// Join the four upstream collections into one catalog.
    ///
    /// Every input artist yields exactly one entry, in input order.
    /// Artists with no matching locations, dates, or relation row get
    /// empty fields rather than being dropped.
    pub fn build(
        artists: Vec<ArtistRecord>,
        locations: Vec<LocationsRecord>,
        dates: Vec<DatesRecord>,
        relations: Vec<RelationRecord>,
    ) -> Self {
        let mut locations_by_id: HashMap<u32, Vec<String>> = HashMap::new();
        for row in locations {
            locations_by_id.insert(row.id, row.locations);
        }

        let mut dates_by_id: HashMap<u32, Vec<String>> = HashMap::new();
        for row in dates {
            dates_by_id.insert(row.id, row.dates);
        }

        let artists = artists
            .into_iter()
            .map(|a| {
                // First id match wins should the upstream index ever
                // hold duplicates.
                let dates_by_location = relations
                    .iter()
                    .find(|r| r.id == a.id)
                    .map(|r| r.dates_locations.clone())
                    .unwrap_or_default();

                Artist {
                    id: a.id,
                    name: a.name,
                    members: a.members,
                    creation_year: a.creation_date,
                    first_album_date: a.first_album,
                    relations_url: a.relations,
                    image_url: a.image,
                    locations: locations_by_id.get(&a.id).cloned().unwrap_or_default(),
                    dates: dates_by_id.get(&a.id).cloned().unwrap_or_default(),
                    dates_by_location,
                }
            })
            .collect();

        Self { artists }
    }

    /// Wrap an already-joined artist list
    pub fn from_artists(artists: Vec<Artist>) -> Self {
        Self { artists }
    }

    /// All artists in upstream order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Look up an artist by id
    pub fn find(&self, id: u32) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    /// Look up by the raw id string from a request; the string must
    /// parse as the artist's integer id.
    pub fn find_by_param(&self, raw: &str) -> Option<&Artist> {
        raw.parse().ok().and_then(|id| self.find(id))
    }

    /// Artists satisfying every supplied criterion, in catalog order
    pub fn filter(&self, criteria: &Criteria) -> Vec<&Artist> {
        let predicates = criteria.predicates();
        self.artists
            .iter()
            .filter(|a| predicates.iter().all(|p| p(a)))
            .collect()
    }
}
