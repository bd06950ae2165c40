//! Filter criteria over the artist catalog
//!
//! Each criterion is an independent predicate; a query keeps the
//! artists that satisfy every supplied criterion. Numeric inputs parse
//! leniently: a malformed value counts as zero rather than an error.

use std::collections::HashSet;

use crate::model::Artist;

/// Boxed per-criterion predicate
pub type Predicate<'a> = Box<dyn Fn(&Artist) -> bool + 'a>;

/// Optional filter criteria; unset fields are not applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Case-insensitive substring of the artist name
    pub name_contains: Option<String>,
    pub creation_year_min: Option<i64>,
    pub creation_year_max: Option<i64>,
    pub first_album_year_min: Option<i64>,
    pub first_album_year_max: Option<i64>,
    /// Accepted member counts; empty means the criterion is off
    pub member_counts: HashSet<i64>,
    /// Case-insensitive substring of any tour location
    pub location_contains: Option<String>,
}

impl Criteria {
    /// Build criteria from an unordered bag of query parameters.
    ///
    /// Recognized names: `search`, `creation_min`, `creation_max`,
    /// `album_min`, `album_max`, `members` (repeatable), `location`.
    /// Empty values leave the criterion unset; unknown names are
    /// ignored.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        for (name, value) in params {
            if value.is_empty() {
                continue;
            }
            match name {
                "search" => criteria.name_contains = Some(value.to_string()),
                "creation_min" => criteria.creation_year_min = Some(lenient_int(value)),
                "creation_max" => criteria.creation_year_max = Some(lenient_int(value)),
                "album_min" => criteria.first_album_year_min = Some(lenient_int(value)),
                "album_max" => criteria.first_album_year_max = Some(lenient_int(value)),
                "members" => {
                    criteria.member_counts.insert(lenient_int(value));
                }
                "location" => criteria.location_contains = Some(value.to_string()),
                _ => {}
            }
        }
        criteria
    }

    /// One predicate per supplied criterion; their conjunction is the
    /// whole query.
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates: Vec<Predicate<'_>> = Vec::new();

        if let Some(needle) = &self.name_contains {
            let needle = needle.to_lowercase();
            predicates.push(Box::new(move |a: &Artist| {
                a.name.to_lowercase().contains(&needle)
            }));
        }

        if let Some(min) = self.creation_year_min {
            predicates.push(Box::new(move |a: &Artist| a.creation_year >= min));
        }

        if let Some(max) = self.creation_year_max {
            predicates.push(Box::new(move |a: &Artist| a.creation_year <= max));
        }

        if let Some(min) = self.first_album_year_min {
            predicates.push(Box::new(move |a: &Artist| {
                first_album_year(&a.first_album_date) >= min
            }));
        }

        if let Some(max) = self.first_album_year_max {
            predicates.push(Box::new(move |a: &Artist| {
                first_album_year(&a.first_album_date) <= max
            }));
        }

        if !self.member_counts.is_empty() {
            predicates.push(Box::new(|a: &Artist| {
                self.member_counts.contains(&(a.members.len() as i64))
            }));
        }

        if let Some(needle) = &self.location_contains {
            let needle = needle.to_lowercase();
            predicates.push(Box::new(move |a: &Artist| {
                a.locations
                    .iter()
                    .any(|l| l.to_lowercase().contains(&needle))
            }));
        }

        predicates
    }

    /// True when this artist satisfies every supplied criterion
    pub fn matches(&self, artist: &Artist) -> bool {
        self.predicates().iter().all(|p| p(artist))
    }
}

/// Parse the leading integer of a string, defaulting to zero.
///
/// Mirrors `sscanf("%d")`: optional leading whitespace, optional sign,
/// then a digit run. Anything else yields 0.
pub fn lenient_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let run: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    run.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// Year encoded by the first four characters of a first-album date.
///
/// Strings shorter than four characters interpret as year 0.
pub fn first_album_year(date: &str) -> i64 {
    let prefix: String = date.chars().take(4).collect();
    if prefix.chars().count() < 4 {
        return 0;
    }
    lenient_int(&prefix)
}
