// crates/geobound-core/src/resolver.rs
use crate::code::CountryCode;
use crate::countries::{Country, IsoDirectory};
use crate::error::{LookupError, ResolveError};
use crate::log::LogSink;
use crate::traits::CountryLookup;

/// Converts between country display names and ISO 3166-1 codes.
///
/// The `Option` returning methods never fail loudly: a miss is reported
/// through the injected [`LogSink`] at error level and collapses to `None`.
/// The `try_*` variants return the typed reason and log nothing.
///
/// ```rust
/// use geobound_core::log::NullSink;
/// use geobound_core::CodeResolver;
///
/// let resolver = CodeResolver::new(&NullSink);
/// let code = resolver.name_to_code("Canada").unwrap();
/// assert_eq!(code.as_str(), "CAN");
/// assert_eq!(resolver.code_to_name("ca"), Some("Canada"));
/// assert_eq!(resolver.code_to_name("us"), resolver.code_to_name("USA"));
/// ```
pub struct CodeResolver<'a, L: CountryLookup = IsoDirectory> {
    lookup: L,
    sink: &'a dyn LogSink,
}

impl<'a> CodeResolver<'a, IsoDirectory> {
    /// Resolver backed by the embedded ISO 3166-1 table.
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self::with_lookup(IsoDirectory::new(), sink)
    }
}

impl<'a, L: CountryLookup> CodeResolver<'a, L> {
    pub fn with_lookup(lookup: L, sink: &'a dyn LogSink) -> Self {
        Self { lookup, sink }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Best fuzzy match for `name`.
    pub fn try_resolve_name(&self, name: &str) -> Result<&Country, ResolveError> {
        let hits = self
            .lookup
            .search_fuzzy(name)
            .map_err(|source| not_resolved(name, source))?;
        hits.into_iter()
            .next()
            .ok_or_else(|| not_resolved(name, LookupError::NoMatch(name.trim().to_owned())))
    }

    /// The alpha-3 code of the best fuzzy match for `name`.
    pub fn try_name_to_code(&self, name: &str) -> Result<CountryCode, ResolveError> {
        let country = self.try_resolve_name(name)?;
        CountryCode::parse(country.alpha3)
            .map_err(|_| not_resolved(name, LookupError::NoMatch(name.trim().to_owned())))
    }

    pub fn name_to_code(&self, name: &str) -> Option<CountryCode> {
        match self.try_name_to_code(name) {
            Ok(code) => Some(code),
            Err(e) => {
                self.sink.error(&name_failure(name, &e));
                None
            }
        }
    }

    /// Display name for an alpha-2 or alpha-3 code. Input is trimmed and
    /// upper-cased; the alpha-2 form is tried first.
    pub fn try_code_to_name(&self, code: &str) -> Result<&'static str, ResolveError> {
        let normalized = code.trim().to_ascii_uppercase();
        self.lookup
            .find_by_alpha2(&normalized)
            .or_else(|| self.lookup.find_by_alpha3(&normalized))
            .map(|c| c.name)
            .ok_or(ResolveError::CodeNotResolved { code: normalized })
    }

    pub fn code_to_name(&self, code: &str) -> Option<&'static str> {
        match self.try_code_to_name(code) {
            Ok(name) => Some(name),
            Err(e) => {
                self.sink.error(&format!(
                    "An error occurred while looking up country name: {e}"
                ));
                None
            }
        }
    }
}

/// Error log line for a name that did not resolve. Names the country once.
pub(crate) fn name_failure(name: &str, error: &ResolveError) -> String {
    match error {
        ResolveError::NameNotResolved { source, .. } => {
            let reason = match source {
                LookupError::NoMatch(_) => "no matching country".to_owned(),
                other => other.to_string(),
            };
            format!("An error occurred while looking up ISO code for '{name}': {reason}")
        }
        other => format!("An error occurred while looking up ISO code: {other}"),
    }
}

fn not_resolved(name: &str, source: LookupError) -> ResolveError {
    ResolveError::NameNotResolved {
        name: name.to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemorySink;

    #[test]
    fn name_to_code_for_known_names() {
        let sink = MemorySink::new();
        let r = CodeResolver::new(&sink);
        for (name, code) in [
            ("Canada", "CAN"),
            ("United States", "USA"),
            ("germany", "DEU"),
            ("Viet Nam", "VNM"),
            ("Bolivia", "BOL"),
            ("Cote d'Ivoire", "CIV"),
            ("Curacao", "CUW"),
            ("Russia", "RUS"),
        ] {
            let got = r.name_to_code(name).map(String::from);
            assert_eq!(got.as_deref(), Some(code), "{name}");
        }
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn misses_are_logged_as_errors() {
        let sink = MemorySink::new();
        let r = CodeResolver::new(&sink);
        assert_eq!(r.name_to_code(""), None);
        assert_eq!(r.name_to_code("Nowhereland"), None);
        assert_eq!(sink.errors().len(), 2);
        assert_eq!(
            sink.errors()[1],
            "An error occurred while looking up ISO code for 'Nowhereland': \
             no matching country"
        );
    }

    #[test]
    fn typed_reasons() {
        let r = CodeResolver::new(&crate::log::NullSink);
        assert_eq!(
            r.try_name_to_code("   "),
            Err(ResolveError::NameNotResolved {
                name: "   ".into(),
                source: LookupError::EmptyQuery,
            })
        );
        assert_eq!(
            r.try_code_to_name(" zz "),
            Err(ResolveError::CodeNotResolved { code: "ZZ".into() })
        );
    }

    #[test]
    fn round_trips_through_code() {
        let sink = MemorySink::new();
        let r = CodeResolver::new(&sink);
        let code = r.name_to_code("Canada").unwrap();
        assert_eq!(r.code_to_name(code.as_str()), Some("Canada"));
    }

    #[test]
    fn code_to_name_failures_go_through_the_sink() {
        let sink = MemorySink::new();
        let r = CodeResolver::new(&sink);
        assert_eq!(r.code_to_name("XYZ"), None);
        assert_eq!(r.code_to_name(""), None);
        assert_eq!(sink.errors().len(), 2);
        assert_eq!(sink.errors()[0].matches("XYZ").count(), 1);
    }
}
