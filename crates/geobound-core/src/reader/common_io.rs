// crates/geobound-core/src/reader/common_io.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::bufread::GzDecoder;

/// GZIP member header magic.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the content
/// starts with the gzip magic bytes. Returns a generic Reader so the caller
/// doesn't care about the compression.
pub fn open_stream(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    wrap_stream(BufReader::new(file))
}

pub(crate) fn wrap_stream<R: BufRead + 'static>(mut reader: R) -> io::Result<Box<dyn Read>> {
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    #[cfg(feature = "compact")]
    {
        if gzipped {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    #[cfg(not(feature = "compact"))]
    {
        if gzipped {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "gzip-compressed input requires the `compact` feature",
            ));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_input_passes_through() {
        let mut out = String::new();
        wrap_stream(Cursor::new(b"{}".to_vec()))
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "{}");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_input_is_decoded() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(br#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        let bytes = enc.finish().unwrap();

        let mut out = String::new();
        wrap_stream(Cursor::new(bytes))
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert!(out.starts_with(r#"{"type":"FeatureCollection""#));
    }
}
