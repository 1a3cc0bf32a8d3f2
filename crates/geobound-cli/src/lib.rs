//! geobound-cli
//! ============
//!
//! Command-line interface for the `geobound-core` crate.
//!
//! The binary (`geobound`) is the deliverable; this library target only
//! carries the documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install --path crates/geobound-cli
//! geobound --help
//! geobound code "Côte d'Ivoire"
//! geobound --dir geoboundaries_output load Canada Mexico --level 1
//! ```
//!
//! The cache folder defaults to `geoboundaries_output` and can also be set
//! with the `GEOBOUND_DIR` environment variable.
//!
//! For programmatic access use [`geobound-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
