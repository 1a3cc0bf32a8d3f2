// crates/geobound-core/src/countries/search.rs
use super::Country;
use crate::text::fold_key;
use std::collections::HashMap;

/// Lowest score a partial match can earn.
pub const MIN_PARTIAL_SCORE: u32 = 5;
/// Score of a partial match at position 0.
pub const MAX_PARTIAL_SCORE: u32 = 30;

/// Score of a partial match at byte `position` of a folded name.
///
/// Earlier matches rank higher: `max(5, 30 - 2 * position)`.
pub fn partial_score(position: usize) -> u32 {
    let penalty = u32::try_from(position.saturating_mul(2)).unwrap_or(u32::MAX);
    MAX_PARTIAL_SCORE
        .saturating_sub(penalty)
        .max(MIN_PARTIAL_SCORE)
}

/// Rank countries whose names contain `query` (folded).
///
/// Per country only the first matching name field counts, in the order
/// `name`, `official_name`, `common_name`. Results are sorted by score
/// (descending), ties broken by alpha-2 code. An empty query ranks nothing.
///
/// ```rust
/// use geobound_core::countries::{search, IsoDirectory};
/// use geobound_core::traits::CountryLookup;
///
/// let iso = IsoDirectory::new();
/// let hits = search::rank(iso.countries(), "guinea");
/// assert_eq!(hits[0].alpha2, "GN"); // "Guinea" before "Equatorial Guinea"
/// ```
pub fn rank<'a>(countries: &'a [Country], query: &str) -> Vec<&'a Country> {
    let q = fold_key(query);
    if q.is_empty() {
        return Vec::new();
    }

    let mut scores: HashMap<&'static str, (u32, &'a Country)> = HashMap::new();
    for c in countries {
        let hit = c.names().find_map(|n| fold_key(n).find(&q));
        if let Some(position) = hit {
            let entry = scores.entry(c.alpha2).or_insert((0, c));
            entry.0 += partial_score(position);
        }
    }

    let mut ranked: Vec<(u32, &'a Country)> = scores.into_values().collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.alpha2.cmp(b.1.alpha2)));
    ranked.into_iter().map(|(_, c)| c).collect()
}
