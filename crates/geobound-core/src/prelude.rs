// crates/geobound-core/src/prelude.rs
//! Convenient imports: `use geobound_core::prelude::*;`

pub use crate::boundary::{BoundaryFeature, BoundaryRecord};
pub use crate::catalog::BoundaryCatalog;
pub use crate::code::CountryCode;
pub use crate::countries::{Country, IsoDirectory};
pub use crate::error::{Error, Result};
pub use crate::loader::{load_boundaries, CacheLoader, LoadOptions, LoadOutcome, SkipReason};
pub use crate::log::{LogSink, MemorySink, TracingSink};
pub use crate::reader::{BoundaryReader, GeoJsonReader};
pub use crate::resolver::CodeResolver;
pub use crate::traits::CountryLookup;
