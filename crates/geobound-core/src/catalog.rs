// crates/geobound-core/src/catalog.rs
use crate::boundary::BoundaryRecord;

/// Country name -> [`BoundaryRecord`], in insertion order.
///
/// Keys are the names exactly as the caller passed them. Inserting an
/// existing key replaces its record but keeps the original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryCatalog {
    entries: Vec<(String, BoundaryRecord)>,
}

impl BoundaryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous record stored under `name`, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        record: BoundaryRecord,
    ) -> Option<BoundaryRecord> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, record)),
            None => {
                self.entries.push((name, record));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&BoundaryRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundaryRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Feature count summed over all records.
    pub fn total_features(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.len()).sum()
    }
}

impl IntoIterator for BoundaryCatalog {
    type Item = (String, BoundaryRecord);
    type IntoIter = std::vec::IntoIter<(String, BoundaryRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, BoundaryRecord)> for BoundaryCatalog {
    fn from_iter<I: IntoIterator<Item = (K, BoundaryRecord)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (k, r) in iter {
            catalog.insert(k, r);
        }
        catalog
    }
}
