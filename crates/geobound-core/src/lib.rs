// crates/geobound-core/src/lib.rs

//! # geobound-core
//!
//! Maps country names to cached administrative boundary files.
//!
//! - [`CodeResolver`] converts between country names and ISO 3166-1 codes
//!   using an embedded reference table with accent-insensitive fuzzy search.
//! - [`CacheLoader`] resolves a list of names, finds the matching
//!   `<ISO3>_ADM<level>_<release>.geojson` files under a cache folder and
//!   reads them into [`BoundaryRecord`]s, collected in a [`BoundaryCatalog`].
//!
//! Loading is best-effort: a country that cannot be resolved, is not cached
//! or fails to parse is skipped and reported through the injected
//! [`log::LogSink`]. [`CacheLoader::load_report`] exposes the skip reasons.
//!
//! ```no_run
//! use geobound_core::prelude::*;
//!
//! let options = LoadOptions::new("geoboundaries_output").adm_level(0);
//! let catalog = load_boundaries(["Canada", "Nowhereland"], &options);
//! assert!(!catalog.contains("Nowhereland"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod boundary;
pub mod cache;
pub mod catalog;
pub mod code;
pub mod countries;
pub mod error;
pub mod loader;
pub mod log;
pub mod prelude;
pub mod reader;
pub mod resolver;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::boundary::{BBox, BoundaryFeature, BoundaryRecord};
pub use crate::cache::{cache_file_path, scan_cache_dir, CachedBoundary};
pub use crate::catalog::BoundaryCatalog;
pub use crate::code::CountryCode;
pub use crate::countries::{Country, IsoDirectory};
pub use crate::error::{CodeError, Error, LookupError, ReadError, ResolveError, Result};
pub use crate::loader::{
    load_boundaries, CacheLoader, LoadOptions, LoadOutcome, LoadReport, SkipReason,
};
pub use crate::reader::{read_boundary_file, BoundaryReader, GeoJsonReader};
pub use crate::resolver::CodeResolver;
