// crates/geobound-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d’Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use geobound_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("  Åland Islands "), "aland islands");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_typographic_apostrophe() {
        assert_eq!(fold_key("Côte d’Ivoire"), "cote d'ivoire");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(fold_key("   "), "");
    }
}
