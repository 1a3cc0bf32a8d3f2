// crates/geobound-core/src/cache.rs

//! # Cache Layout
//!
//! Boundary files are cached flat under one base folder, one file per
//! (country, administrative level, release type):
//!
//! ```text
//! <base>/<ISO3>_ADM<level>_<release_type>.geojson
//! ```
//!
//! The loader only ever reads these paths.

use crate::code::CountryCode;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CACHE_EXTENSION: &str = "geojson";
pub const DEFAULT_RELEASE_TYPE: &str = "gbOpen";
pub const DEFAULT_BASE_FOLDER: &str = "geoboundaries_output";

/// File name for one cache entry, e.g. `CAN_ADM0_gbOpen.geojson`.
pub fn cache_file_name(code: &CountryCode, adm_level: u8, release_type: &str) -> String {
    format!("{code}_ADM{adm_level}_{release_type}.{CACHE_EXTENSION}")
}

/// Full expected path of a cache entry under `base_folder`.
///
/// ```rust
/// use geobound_core::cache::cache_file_path;
/// use geobound_core::CountryCode;
/// use std::path::Path;
///
/// let code: CountryCode = "CAN".parse().unwrap();
/// let path = cache_file_path("cache", &code, 1, "gbOpen");
/// assert_eq!(path, Path::new("cache").join("CAN_ADM1_gbOpen.geojson"));
/// ```
pub fn cache_file_path(
    base_folder: impl AsRef<Path>,
    code: &CountryCode,
    adm_level: u8,
    release_type: &str,
) -> PathBuf {
    base_folder
        .as_ref()
        .join(cache_file_name(code, adm_level, release_type))
}

/// A cache file found on disk, decoded from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedBoundary {
    pub code: CountryCode,
    pub adm_level: u8,
    pub release_type: String,
    pub path: PathBuf,
}

impl CachedBoundary {
    /// Decodes a cache file name. Returns `None` for names that do not follow
    /// the `<CODE>_ADM<level>_<release>.geojson` convention.
    pub fn parse_file_name(file_name: &str) -> Option<(CountryCode, u8, String)> {
        let stem = file_name.strip_suffix(&format!(".{CACHE_EXTENSION}"))?;
        let (code, rest) = stem.split_once('_')?;
        let (level, release) = rest.split_once('_')?;
        let level = level.strip_prefix("ADM")?;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }
        if level.is_empty() || !level.bytes().all(|b| b.is_ascii_digit()) || release.is_empty() {
            return None;
        }
        Some((code.parse().ok()?, level.parse().ok()?, release.to_owned()))
    }

    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let (code, adm_level, release_type) = Self::parse_file_name(name)?;
        Some(Self {
            code,
            adm_level,
            release_type,
            path,
        })
    }
}

/// Lists the cache entries under `base_folder`, sorted by code, level and
/// release type. Files with other names are ignored.
pub fn scan_cache_dir(base_folder: impl AsRef<Path>) -> Result<Vec<CachedBoundary>> {
    let base = base_folder.as_ref();
    let io_err = |source| Error::Io {
        path: base.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in fs::read_dir(base).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_file() {
            continue;
        }
        if let Some(cached) = CachedBoundary::from_path(entry.path()) {
            out.push(cached);
        }
    }
    out.sort_by(|a, b| {
        a.code
            .cmp(&b.code)
            .then(a.adm_level.cmp(&b.adm_level))
            .then_with(|| a.release_type.cmp(&b.release_type))
    });
    Ok(out)
}
