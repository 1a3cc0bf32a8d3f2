// crates/geobound-core/src/countries/mod.rs

//! # Country Reference Data
//!
//! The embedded ISO 3166-1 table and the default [`CountryLookup`]
//! implementation built on top of it.

use crate::text::fold_key;
use crate::traits::CountryLookup;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

mod data;
pub mod search;

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    /// Canonical display name, e.g. "Bolivia, Plurinational State of".
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    /// Everyday name where it differs from `name`, e.g. "Bolivia".
    pub common_name: Option<&'static str>,
}

impl Country {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    pub fn alpha3(&self) -> &'static str {
        self.alpha3
    }

    /// `name`, then `official_name`, then `common_name` when present.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.name), self.official_name, self.common_name]
            .into_iter()
            .flatten()
    }

    /// Every value an exact lookup may match: both codes, the numeric code
    /// and all names.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> {
        [self.alpha2, self.alpha3, self.numeric]
            .into_iter()
            .chain(self.names())
    }
}

struct Index {
    alpha2: HashMap<&'static str, usize>,
    alpha3: HashMap<&'static str, usize>,
    /// Folded identifier -> row. First row wins on collisions.
    exact: HashMap<String, usize>,
}

// Built once per process; the table is immutable.
static INDEX: Lazy<Index> = Lazy::new(|| {
    let mut index = Index {
        alpha2: HashMap::with_capacity(data::COUNTRIES.len()),
        alpha3: HashMap::with_capacity(data::COUNTRIES.len()),
        exact: HashMap::new(),
    };
    for (i, c) in data::COUNTRIES.iter().enumerate() {
        index.alpha2.insert(c.alpha2, i);
        index.alpha3.insert(c.alpha3, i);
        for id in c.identifiers() {
            index.exact.entry(fold_key(id)).or_insert(i);
        }
    }
    index
});

/// The embedded ISO 3166-1 directory.
///
/// ```rust
/// use geobound_core::countries::IsoDirectory;
/// use geobound_core::traits::CountryLookup;
///
/// let iso = IsoDirectory::new();
/// assert_eq!(iso.find_by_code("de").map(|c| c.alpha3), Some("DEU"));
/// assert_eq!(iso.lookup("Vietnam").map(|c| c.alpha3), Some("VNM"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDirectory;

impl IsoDirectory {
    pub fn new() -> Self {
        Self
    }

    pub fn len(&self) -> usize {
        data::COUNTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        data::COUNTRIES.is_empty()
    }
}

impl CountryLookup for IsoDirectory {
    fn countries(&self) -> &[Country] {
        &data::COUNTRIES
    }

    fn find_by_alpha2(&self, alpha2: &str) -> Option<&Country> {
        let key = alpha2.trim().to_ascii_uppercase();
        INDEX.alpha2.get(key.as_str()).map(|&i| &data::COUNTRIES[i])
    }

    fn find_by_alpha3(&self, alpha3: &str) -> Option<&Country> {
        let key = alpha3.trim().to_ascii_uppercase();
        INDEX.alpha3.get(key.as_str()).map(|&i| &data::COUNTRIES[i])
    }

    fn lookup(&self, query: &str) -> Option<&Country> {
        INDEX
            .exact
            .get(&fold_key(query))
            .map(|&i| &data::COUNTRIES[i])
    }
}
