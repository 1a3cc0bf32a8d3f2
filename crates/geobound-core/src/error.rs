// crates/geobound-core/src/error.rs

//! Error types.
//!
//! Each collaborator seam has its own small enum so callers can match on the
//! failure category instead of inspecting strings:
//!
//! - [`CodeError`]: a string is not a syntactically valid country code.
//! - [`LookupError`]: the reference database found nothing.
//! - [`ResolveError`]: a name or code could not be resolved.
//! - [`ReadError`]: a boundary file could not be read or parsed.
//!
//! [`Error`] wraps them for the APIs that do propagate (directory scans, CLI).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Syntax errors for [`CountryCode`](crate::code::CountryCode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("country code is empty")]
    Empty,

    #[error("country code '{0}' must be 2 or 3 letters long")]
    Length(String),

    #[error("country code '{0}' contains non-alphabetic characters")]
    NonAlphabetic(String),
}

/// Failures reported by a [`CountryLookup`](crate::traits::CountryLookup).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("empty search query")]
    EmptyQuery,

    #[error("no country matches '{0}'")]
    NoMatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("could not resolve country name '{name}': {source}")]
    NameNotResolved {
        name: String,
        #[source]
        source: LookupError,
    },

    #[error("'{code}' is neither a known ISO 3166-1 alpha-2 nor alpha-3 code")]
    CodeNotResolved { code: String },
}

/// Failures reported by a [`BoundaryReader`](crate::reader::BoundaryReader).
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
