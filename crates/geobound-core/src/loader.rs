// crates/geobound-core/src/loader.rs

//! # Cache Loader
//!
//! Turns a list of country names into a [`BoundaryCatalog`] by resolving
//! each name to its ISO 3166-1 alpha-3 code and reading the matching cache
//! file. Every country passes three gates in order:
//!
//! 1. the name resolves to a code,
//! 2. the cache file exists,
//! 3. the reader parses it.
//!
//! Failing any gate skips that country only. The batch itself never fails.

use crate::boundary::BoundaryRecord;
use crate::cache::{cache_file_path, DEFAULT_BASE_FOLDER, DEFAULT_RELEASE_TYPE};
use crate::catalog::BoundaryCatalog;
use crate::code::CountryCode;
use crate::countries::IsoDirectory;
use crate::error::{ReadError, ResolveError};
use crate::log::{LogSink, TracingSink};
use crate::reader::{BoundaryReader, GeoJsonReader};
use crate::resolver::{name_failure, CodeResolver};
use crate::traits::CountryLookup;
use std::path::PathBuf;
use thiserror::Error;

/// Which cache entries to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Administrative level, 0 = whole country.
    pub adm_level: u8,
    /// Dataset tag embedded verbatim in the file name, e.g. `gbOpen`.
    pub release_type: String,
    pub base_folder: PathBuf,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            adm_level: 0,
            release_type: DEFAULT_RELEASE_TYPE.to_owned(),
            base_folder: PathBuf::from(DEFAULT_BASE_FOLDER),
        }
    }
}

impl LoadOptions {
    /// Defaults with a different cache directory.
    pub fn new(base_folder: impl Into<PathBuf>) -> Self {
        Self {
            base_folder: base_folder.into(),
            ..Self::default()
        }
    }

    pub fn adm_level(mut self, level: u8) -> Self {
        self.adm_level = level;
        self
    }

    pub fn release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = release_type.into();
        self
    }

    pub fn base_folder(mut self, base_folder: impl Into<PathBuf>) -> Self {
        self.base_folder = base_folder.into();
        self
    }

    /// Expected cache path for `code` under these options.
    pub fn cache_path(&self, code: &CountryCode) -> PathBuf {
        cache_file_path(&self.base_folder, code, self.adm_level, &self.release_type)
    }
}

/// Why a country is missing from the catalog.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    NameNotResolved(ResolveError),

    #[error("cache file not found at {}", path.display())]
    CacheMiss { path: PathBuf },

    #[error("failed to read {}: {error}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        error: ReadError,
    },
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(BoundaryRecord),
    Skipped(SkipReason),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn record(&self) -> Option<&BoundaryRecord> {
        match self {
            Self::Loaded(r) => Some(r),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Loaded(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// Per-name outcome of one load, in input order.
#[derive(Debug)]
pub struct LoadReport {
    outcomes: Vec<(String, LoadOutcome)>,
}

impl LoadReport {
    pub fn outcomes(&self) -> &[(String, LoadOutcome)] {
        &self.outcomes
    }

    /// Outcome of the last occurrence of `name`.
    pub fn outcome(&self, name: &str) -> Option<&LoadOutcome> {
        self.outcomes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o)
    }

    pub fn loaded(&self) -> impl Iterator<Item = (&str, &BoundaryRecord)> {
        self.outcomes
            .iter()
            .filter_map(|(n, o)| o.record().map(|r| (n.as_str(), r)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes
            .iter()
            .filter_map(|(n, o)| o.skip_reason().map(|s| (n.as_str(), s)))
    }

    /// `true` when no name was skipped.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_loaded())
    }

    pub fn into_catalog(self) -> BoundaryCatalog {
        self.outcomes
            .into_iter()
            .filter_map(|(name, outcome)| match outcome {
                LoadOutcome::Loaded(record) => Some((name, record)),
                LoadOutcome::Skipped(_) => None,
            })
            .collect()
    }
}

/// Loads cached boundary files for lists of country names.
///
/// ```no_run
/// use geobound_core::log::TracingSink;
/// use geobound_core::{CacheLoader, LoadOptions};
///
/// let loader = CacheLoader::new(&TracingSink);
/// let catalog = loader.load_boundaries(["Canada", "Mexico"], &LoadOptions::default());
/// for (name, record) in catalog.iter() {
///     println!("{name}: {} features", record.len());
/// }
/// ```
pub struct CacheLoader<'a, L: CountryLookup = IsoDirectory, R: BoundaryReader = GeoJsonReader> {
    resolver: CodeResolver<'a, L>,
    reader: R,
    sink: &'a dyn LogSink,
}

impl<'a> CacheLoader<'a> {
    /// Loader with the embedded ISO table and the GeoJSON reader.
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self::with_parts(CodeResolver::new(sink), GeoJsonReader, sink)
    }
}

impl<'a, L: CountryLookup, R: BoundaryReader> CacheLoader<'a, L, R> {
    pub fn with_parts(resolver: CodeResolver<'a, L>, reader: R, sink: &'a dyn LogSink) -> Self {
        Self {
            resolver,
            reader,
            sink,
        }
    }

    pub fn resolver(&self) -> &CodeResolver<'a, L> {
        &self.resolver
    }

    /// Expected cache path for `name`, or `None` when it does not resolve.
    pub fn expected_path(&self, name: &str, options: &LoadOptions) -> Option<PathBuf> {
        self.resolver
            .name_to_code(name)
            .map(|code| options.cache_path(&code))
    }

    /// Loads every name that passes all gates; the rest are logged and left out.
    pub fn load_boundaries<I>(&self, country_names: I, options: &LoadOptions) -> BoundaryCatalog
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.load_report(country_names, options).into_catalog()
    }

    /// Like [`CacheLoader::load_boundaries`] but keeps the skip reasons.
    pub fn load_report<I>(&self, country_names: I, options: &LoadOptions) -> LoadReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let level = options.adm_level;
        self.sink.info(&format!(
            "--- Loading boundaries (ADM{level}, {}) from {} ---",
            options.release_type,
            options.base_folder.display()
        ));

        let outcomes = country_names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_owned(), self.load_one(name, options))
            })
            .collect();
        let report = LoadReport { outcomes };

        self.log_summary(&report, level);
        report
    }

    fn load_one(&self, name: &str, options: &LoadOptions) -> LoadOutcome {
        let level = options.adm_level;

        let code = match self.resolver.try_name_to_code(name) {
            Ok(code) => code,
            Err(e) => {
                self.sink.error(&name_failure(name, &e));
                self.sink.info(&format!(
                    "Could not find ISO code for '{name}'. Skipping this country."
                ));
                return LoadOutcome::Skipped(SkipReason::NameNotResolved(e));
            }
        };

        let path = options.cache_path(&code);
        if !path.exists() {
            self.sink.info(&format!(
                "Cache file not found for '{name}' (ADM{level}) at {}. \
                 Run the boundary fetch step to download and save the data first.",
                path.display()
            ));
            return LoadOutcome::Skipped(SkipReason::CacheMiss { path });
        }

        self.sink.info(&format!(
            "Loading boundary data for '{name}' (ADM{level}) from: {}",
            path.display()
        ));
        match self.reader.read(&path) {
            Ok(record) => {
                self.sink.info(&format!(
                    "Successfully loaded {name} (ADM{level}) with {} features.",
                    record.len()
                ));
                LoadOutcome::Loaded(record)
            }
            Err(error) => {
                self.sink.error(&format!(
                    "Error loading boundaries for {name} (ADM{level}) \
                     from file {}: {error}. Skipping.",
                    path.display()
                ));
                LoadOutcome::Skipped(SkipReason::ReadFailure { path, error })
            }
        }
    }

    fn log_summary(&self, report: &LoadReport, level: u8) {
        self.sink.info("--- Contents of the boundary catalog ---");
        let mut any = false;
        for (name, record) in report.loaded() {
            any = true;
            self.sink.info(&format!(
                "'{name}': {} features for ADM{level}.",
                record.len()
            ));
        }
        if !any {
            self.sink
                .info("The catalog is empty. No boundary data could be loaded.");
        }
    }
}

/// One-shot load with the default resolver, reader and [`TracingSink`].
pub fn load_boundaries<I>(country_names: I, options: &LoadOptions) -> BoundaryCatalog
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    CacheLoader::new(&TracingSink).load_boundaries(country_names, options)
}
