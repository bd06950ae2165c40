//! Upstream wire records and the joined artist model
//!
//! The wire structs mirror the upstream music-group API payloads field
//! for field; `Artist` is the joined record the rest of the system
//! works with, serialized under the documented export names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One artist as served by the upstream `/artists` collection
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    pub id: u32,
    /// Artist image URL, passed through unused
    pub image: String,
    pub name: String,
    /// Member names in upstream order
    pub members: Vec<String>,
    #[serde(rename = "creationDate")]
    pub creation_date: i64,
    /// Free-form first album date, e.g. "14-07-1973"
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    /// URL of this artist's relation row, passed through unused
    pub relations: String,
}

/// One row of the upstream `/locations` index
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsRecord {
    pub id: u32,
    pub locations: Vec<String>,
}

/// One row of the upstream `/dates` index
#[derive(Debug, Clone, Deserialize)]
pub struct DatesRecord {
    pub id: u32,
    pub dates: Vec<String>,
}

/// One row of the upstream `/relation` index
#[derive(Debug, Clone, Deserialize)]
pub struct RelationRecord {
    pub id: u32,
    #[serde(rename = "datesLocations")]
    pub dates_locations: HashMap<String, Vec<String>>,
}

/// Envelope for the index-wrapped upstream collections
#[derive(Debug, Clone, Deserialize)]
pub struct Index<T> {
    pub index: Vec<T>,
}

/// An artist joined with its locations, concert dates, and
/// date-by-location relation data
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub id: u32,
    pub name: String,
    pub members: Vec<String>,
    #[serde(rename = "creationYear")]
    pub creation_year: i64,
    #[serde(rename = "firstAlbumDate")]
    pub first_album_date: String,
    #[serde(rename = "relationsURL")]
    pub relations_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Tour locations as supplied upstream (order and duplicates kept)
    pub locations: Vec<String>,
    /// Concert dates, opaque display strings
    pub dates: Vec<String>,
    #[serde(rename = "datesByLocation")]
    pub dates_by_location: HashMap<String, Vec<String>>,
}
