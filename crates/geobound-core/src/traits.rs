// crates/geobound-core/src/traits.rs
use crate::countries::{search, Country};
use crate::error::LookupError;
use crate::text::fold_key;

/// The country reference database used by the resolver.
///
/// Only [`CountryLookup::countries`] is required; the remaining methods have
/// linear-scan defaults that are fine for ~250 rows. [`IsoDirectory`] overrides
/// the exact lookups with hash indexes.
///
/// [`IsoDirectory`]: crate::countries::IsoDirectory
pub trait CountryLookup {
    /// All known countries.
    fn countries(&self) -> &[Country];

    /// Find a country by alpha-2 code, case-insensitive (e.g. "DE", "us").
    fn find_by_alpha2(&self, alpha2: &str) -> Option<&Country> {
        self.countries()
            .iter()
            .find(|c| c.alpha2.eq_ignore_ascii_case(alpha2))
    }

    /// Find a country by alpha-3 code, case-insensitive (e.g. "DEU", "usa").
    fn find_by_alpha3(&self, alpha3: &str) -> Option<&Country> {
        self.countries()
            .iter()
            .find(|c| c.alpha3.eq_ignore_ascii_case(alpha3))
    }

    /// Try alpha-2 first, then alpha-3.
    fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.find_by_alpha2(code)
            .or_else(|| self.find_by_alpha3(code))
    }

    /// Exact lookup on any identifying field: codes, numeric code, name,
    /// official name or common name (accent and case-insensitive).
    fn lookup(&self, query: &str) -> Option<&Country> {
        let q = fold_key(query);
        if q.is_empty() {
            return None;
        }
        self.countries()
            .iter()
            .find(|c| c.identifiers().any(|v| fold_key(v) == q))
    }

    /// Ranked approximate search. See [`search::rank`] for the scoring rules.
    fn search_fuzzy(&self, query: &str) -> Result<Vec<&Country>, LookupError> {
        if query.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        if let Some(exact) = self.lookup(query) {
            return Ok(vec![exact]);
        }
        let ranked = search::rank(self.countries(), query);
        if ranked.is_empty() {
            return Err(LookupError::NoMatch(query.trim().to_owned()));
        }
        Ok(ranked)
    }
}
