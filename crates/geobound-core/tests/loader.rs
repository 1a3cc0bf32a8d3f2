use geobound_core::log::{MemorySink, NullSink};
use geobound_core::prelude::*;
use geobound_core::{LoadReport, ReadError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CANADA_ADM0: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"shapeName": "Canada", "shapeISO": "CAN", "shapeGroup": "CAN", "shapeType": "ADM0"},
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[-141.0, 60.0], [-52.6, 47.5], [-82.5, 41.7], [-123.0, 49.0], [-141.0, 60.0]]],
          [[[-63.0, 46.5], [-62.0, 46.5], [-62.0, 46.0], [-63.0, 46.5]]]
        ]
      }
    }
  ]
}"#;

const MEXICO_ADM1: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"shapeName": "Sonora", "shapeISO": "MX-SON"},
     "geometry": {"type": "Polygon", "coordinates": [[[-115.0, 32.5], [-108.5, 31.3], [-109.0, 26.3], [-115.0, 32.5]]]}},
    {"type": "Feature", "properties": {"shapeName": "Yucatán", "shapeISO": "MX-YUC"},
     "geometry": {"type": "Polygon", "coordinates": [[[-90.4, 21.6], [-87.5, 21.5], [-89.2, 19.6], [-90.4, 21.6]]]}}
  ]
}"#;

fn cache_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("CAN_ADM0_gbOpen.geojson"), CANADA_ADM0).unwrap();
    fs::write(dir.path().join("MEX_ADM1_gbOpen.geojson"), MEXICO_ADM1).unwrap();
    dir
}

fn report(dir: &Path, names: &[&str], options: LoadOptions) -> (LoadReport, MemorySink) {
    let sink = MemorySink::new();
    let report = CacheLoader::new(&sink).load_report(names.iter(), &options.base_folder(dir));
    (report, sink)
}

#[test]
fn loads_a_cached_country() {
    let dir = cache_dir();
    let catalog =
        CacheLoader::new(&NullSink).load_boundaries(["Canada"], &LoadOptions::new(dir.path()));

    assert_eq!(catalog.len(), 1);
    let keys: Vec<_> = catalog.keys().collect();
    assert_eq!(keys, vec!["Canada"]);

    let canada = catalog.get("Canada").unwrap();
    assert!(!canada.is_empty());
    assert_eq!(canada.features()[0].property_str("shapeISO"), Some("CAN"));
    assert_eq!(canada.geometry_kinds().get("MultiPolygon"), Some(&1));
    assert_eq!(
        canada.source(),
        Some(dir.path().join("CAN_ADM0_gbOpen.geojson").as_path())
    );
}

#[test]
fn unresolvable_name_gives_empty_catalog() {
    let dir = cache_dir();
    let (report, sink) = report(dir.path(), &["Nowhereland"], LoadOptions::default());

    assert!(!report.is_complete());
    assert!(matches!(
        report.outcome("Nowhereland").and_then(LoadOutcome::skip_reason),
        Some(SkipReason::NameNotResolved(_))
    ));
    assert!(sink
        .infos()
        .iter()
        .any(|l| l.contains("Could not find ISO code for 'Nowhereland'")));
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].matches("Nowhereland").count(), 1);
    assert!(errors[0].ends_with("no matching country"));
    assert!(report.into_catalog().is_empty());
}

#[test]
fn missing_file_is_a_cache_miss() {
    let dir = TempDir::new().unwrap();
    let (report, sink) = report(dir.path(), &["Canada"], LoadOptions::default());

    let expected: PathBuf = dir.path().join("CAN_ADM0_gbOpen.geojson");
    match report.outcome("Canada").and_then(LoadOutcome::skip_reason) {
        Some(SkipReason::CacheMiss { path }) => assert_eq!(path, &expected),
        other => panic!("expected cache miss, got {other:?}"),
    }
    assert!(sink.errors().is_empty());
    assert!(sink
        .infos()
        .iter()
        .any(|l| l.contains("The catalog is empty")));
    assert!(report.into_catalog().is_empty());
}

#[test]
fn level_and_release_select_the_file() {
    let dir = cache_dir();

    let (adm0, _) = report(dir.path(), &["Mexico"], LoadOptions::default());
    assert!(matches!(
        adm0.outcome("Mexico").and_then(LoadOutcome::skip_reason),
        Some(SkipReason::CacheMiss { .. })
    ));

    let (adm1, _) = report(dir.path(), &["Mexico"], LoadOptions::default().adm_level(1));
    assert_eq!(adm1.loaded().count(), 1);
    assert_eq!(
        adm1.outcome("Mexico")
            .and_then(LoadOutcome::record)
            .map(BoundaryRecord::len),
        Some(2)
    );

    let (other_release, _) = report(
        dir.path(),
        &["Mexico"],
        LoadOptions::default().adm_level(1).release_type("gbHumanitarian"),
    );
    assert_eq!(other_release.loaded().count(), 0);
}

#[test]
fn empty_input_gives_empty_catalog() {
    let dir = cache_dir();
    let names: Vec<String> = Vec::new();
    let catalog =
        CacheLoader::new(&NullSink).load_boundaries(names, &LoadOptions::new(dir.path()));
    assert!(catalog.is_empty());
}

#[test]
fn mixed_batch_keeps_input_order_and_skips_failures() {
    let dir = cache_dir();
    let (report, sink) = report(
        dir.path(),
        &["Mexico", "Atlantis", "Canada", "France"],
        LoadOptions::default().adm_level(1),
    );
    assert_eq!(report.loaded().map(|(n, _)| n).collect::<Vec<_>>(), vec!["Mexico"]);
    assert_eq!(
        report.skipped().map(|(n, _)| n).collect::<Vec<_>>(),
        vec!["Atlantis", "Canada", "France"]
    );
    // Only the name lookup failure is an error; cache misses are informational.
    assert_eq!(sink.errors().len(), 1);
}

#[test]
fn catalog_follows_input_order() {
    let dir = cache_dir();
    fs::write(dir.path().join("MEX_ADM0_gbOpen.geojson"), MEXICO_ADM1).unwrap();
    let catalog = CacheLoader::new(&NullSink)
        .load_boundaries(["Mexico", "Canada"], &LoadOptions::new(dir.path()));
    assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["Mexico", "Canada"]);
    assert_eq!(catalog.total_features(), 3);
}

#[test]
fn corrupt_file_is_a_read_failure() {
    let dir = cache_dir();
    fs::write(dir.path().join("PER_ADM0_gbOpen.geojson"), "{ not json").unwrap();

    let (report, sink) = report(dir.path(), &["Peru", "Canada"], LoadOptions::default());
    match report.outcome("Peru").and_then(LoadOutcome::skip_reason) {
        Some(SkipReason::ReadFailure { error, .. }) => {
            assert!(matches!(error, ReadError::Json(_)))
        }
        other => panic!("expected read failure, got {other:?}"),
    }
    assert_eq!(sink.errors().len(), 1);
    assert!(sink.errors()[0].contains("Peru"));
    assert_eq!(report.into_catalog().keys().collect::<Vec<_>>(), vec!["Canada"]);
}

#[test]
fn duplicate_names_produce_one_entry() {
    let dir = cache_dir();
    fs::write(dir.path().join("MEX_ADM0_gbOpen.geojson"), MEXICO_ADM1).unwrap();
    let catalog = CacheLoader::new(&NullSink).load_boundaries(
        ["Canada", "Mexico", "Canada"],
        &LoadOptions::new(dir.path()),
    );
    assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["Canada", "Mexico"]);
}

#[test]
fn keys_are_the_names_as_given() {
    let dir = cache_dir();
    let catalog = CacheLoader::new(&NullSink).load_boundaries(
        ["canada", "CAN"],
        &LoadOptions::new(dir.path()),
    );
    assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["canada", "CAN"]);
    assert_eq!(catalog.get("canada"), catalog.get("CAN"));
}

#[test]
fn loading_is_idempotent() {
    let dir = cache_dir();
    let options = LoadOptions::new(dir.path()).adm_level(1);
    let loader = CacheLoader::new(&NullSink);
    let first = loader.load_boundaries(["Mexico", "Canada"], &options);
    let second = loader.load_boundaries(["Mexico", "Canada"], &options);
    assert_eq!(first, second);
    assert_eq!(first.keys().collect::<Vec<_>>(), vec!["Mexico"]);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_cache_files_load_like_plain_ones() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let plain = cache_dir();
    let gz = TempDir::new().unwrap();
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(CANADA_ADM0.as_bytes()).unwrap();
    fs::write(gz.path().join("CAN_ADM0_gbOpen.geojson"), enc.finish().unwrap()).unwrap();

    let loader = CacheLoader::new(&NullSink);
    let a = loader.load_boundaries(["Canada"], &LoadOptions::new(plain.path()));
    let b = loader.load_boundaries(["Canada"], &LoadOptions::new(gz.path()));
    let features = |c: &BoundaryCatalog| c.get("Canada").map(|r| r.features().to_vec());
    assert!(features(&a).is_some());
    assert_eq!(features(&a), features(&b));
}

#[test]
fn custom_reader_and_lookup_plug_in() {
    use geobound_core::Country;
    use std::cell::RefCell;

    static ATLANTIS: [Country; 1] = [Country {
        alpha2: "XA",
        alpha3: "XAT",
        numeric: "999",
        name: "Atlantis",
        official_name: Some("Sunken Kingdom of Atlantis"),
        common_name: None,
    }];

    struct Legends;
    impl CountryLookup for Legends {
        fn countries(&self) -> &[Country] {
            &ATLANTIS
        }
    }

    #[derive(Default)]
    struct Recording(RefCell<Vec<PathBuf>>);
    impl BoundaryReader for Recording {
        fn read(&self, path: &Path) -> std::result::Result<BoundaryRecord, ReadError> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(BoundaryRecord::default())
        }
    }

    let dir = TempDir::new().unwrap();
    fs::File::create(dir.path().join("XAT_ADM2_legend.geojson"))
        .and_then(|mut f| f.write_all(b"ignored"))
        .unwrap();

    let sink = MemorySink::new();
    let reader = Recording::default();
    let loader =
        CacheLoader::with_parts(CodeResolver::with_lookup(Legends, &sink), &reader, &sink);
    let options = LoadOptions::new(dir.path()).adm_level(2).release_type("legend");

    let catalog = loader.load_boundaries(["sunken"], &options);
    assert!(catalog.contains("sunken"));
    assert_eq!(
        reader.0.borrow().as_slice(),
        &[dir.path().join("XAT_ADM2_legend.geojson")]
    );
}
