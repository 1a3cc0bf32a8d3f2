// crates/geobound-core/src/reader/mod.rs

//! # Boundary Readers
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! GeoJSON parser.

use crate::boundary::BoundaryRecord;
use crate::error::{Error, ReadError, Result};
use geojson::{GeoJson, JsonValue};
use std::path::Path;

pub mod common_io;

/// Turns a cache file into a [`BoundaryRecord`].
pub trait BoundaryReader {
    fn read(&self, path: &Path) -> std::result::Result<BoundaryRecord, ReadError>;
}

impl<R: BoundaryReader + ?Sized> BoundaryReader for &R {
    fn read(&self, path: &Path) -> std::result::Result<BoundaryRecord, ReadError> {
        (**self).read(path)
    }
}

/// Default reader: plain or gzip-compressed GeoJSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonReader;

impl BoundaryReader for GeoJsonReader {
    fn read(&self, path: &Path) -> std::result::Result<BoundaryRecord, ReadError> {
        let stream = common_io::open_stream(path)?;
        let value: JsonValue = serde_json::from_reader(stream)?;
        let doc = GeoJson::try_from(value)?;
        Ok(BoundaryRecord::from_geojson(doc).with_source(path))
    }
}

/// Reads one boundary file with [`GeoJsonReader`].
///
/// ```no_run
/// let record = geobound_core::read_boundary_file("geoboundaries_output/CAN_ADM0_gbOpen.geojson")?;
/// println!("{} features", record.len());
/// # Ok::<(), geobound_core::Error>(())
/// ```
pub fn read_boundary_file(path: impl AsRef<Path>) -> Result<BoundaryRecord> {
    let path = path.as_ref();
    GeoJsonReader.read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content).unwrap();
        f
    }

    #[test]
    fn reads_feature_collection() {
        let f = write_tmp(
            br#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"shapeName":"Canada"},
                 "geometry":{"type":"Point","coordinates":[-100.0,60.0]}}]}"#,
        );
        let rec = GeoJsonReader.read(f.path()).unwrap();
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.features()[0].property_str("shapeName"), Some("Canada"));
        assert_eq!(rec.source(), Some(f.path()));
    }

    #[test]
    fn classifies_failures() {
        let missing = GeoJsonReader.read(Path::new("/definitely/not/here.geojson"));
        assert!(matches!(missing, Err(ReadError::Io(_))));

        let not_json = write_tmp(b"this is not json");
        assert!(matches!(
            GeoJsonReader.read(not_json.path()),
            Err(ReadError::Json(_))
        ));

        let not_geojson = write_tmp(br#"{"type":"Banana"}"#);
        assert!(matches!(
            GeoJsonReader.read(not_geojson.path()),
            Err(ReadError::GeoJson(_))
        ));
    }

    #[test]
    fn wraps_errors_with_path() {
        let err = read_boundary_file("/definitely/not/here.geojson").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("here.geojson"));
    }
}
