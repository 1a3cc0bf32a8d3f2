use geobound_core::log::{MemorySink, NullSink};
use geobound_core::prelude::*;
use geobound_core::{scan_cache_dir, Error, LookupError};
use std::fs;
use tempfile::TempDir;

#[test]
fn valid_names_map_to_alpha3() {
    let resolver = CodeResolver::new(&NullSink);
    for (name, code) in [
        ("Canada", "CAN"),
        ("Mexico", "MEX"),
        ("Brazil", "BRA"),
        ("Japan", "JPN"),
        ("South Africa", "ZAF"),
        ("  new zealand  ", "NZL"),
    ] {
        let got = resolver.name_to_code(name);
        assert_eq!(got.as_ref().map(CountryCode::as_str), Some(code), "{name}");
    }
}

#[test]
fn empty_and_garbage_names_are_absent() {
    let sink = MemorySink::new();
    let resolver = CodeResolver::new(&sink);
    for name in ["", "   ", "Nowhereland", "qqqzzz"] {
        assert!(resolver.name_to_code(name).is_none(), "{name:?}");
    }
    assert_eq!(sink.errors().len(), 4);
}

#[test]
fn code_round_trip() {
    let resolver = CodeResolver::new(&NullSink);
    let code = resolver.name_to_code("Canada").unwrap();
    assert_eq!(resolver.code_to_name(code.as_str()), Some("Canada"));
}

#[test]
fn alpha2_and_alpha3_agree_regardless_of_case() {
    let resolver = CodeResolver::new(&NullSink);
    let lower = resolver.code_to_name("us");
    assert!(lower.is_some());
    assert_eq!(lower, resolver.code_to_name("USA"));
    assert_eq!(lower, resolver.code_to_name("US"));
}

#[test]
fn accents_and_case_are_ignored() {
    let resolver = CodeResolver::new(&NullSink);
    for (name, code) in [
        ("Cote d'Ivoire", "CIV"),
        ("Côte d'Ivoire", "CIV"),
        ("Curacao", "CUW"),
        ("CURAÇAO", "CUW"),
        ("reunion", "REU"),
    ] {
        let got = resolver.try_name_to_code(name).map(String::from);
        assert_eq!(got.as_deref(), Ok(code), "{name}");
    }
}

#[test]
fn partial_names_pick_the_best_ranked_country() {
    let directory = IsoDirectory::new();
    let hits = directory.search_fuzzy("korea").unwrap();
    let codes: Vec<_> = hits.iter().map(|c| c.alpha2()).collect();
    assert_eq!(codes, vec!["KP", "KR"]);

    assert!(matches!(
        directory.search_fuzzy(" "),
        Err(LookupError::EmptyQuery)
    ));
    assert!(matches!(
        directory.search_fuzzy("xyzzy"),
        Err(LookupError::NoMatch(_))
    ));
}

#[test]
fn subdivision_names_do_not_resolve() {
    let sink = MemorySink::new();
    let resolver = CodeResolver::new(&sink);
    assert!(resolver.name_to_code("Bavaria").is_none());
    assert_eq!(sink.errors().len(), 1);
}

#[test]
fn scan_lists_only_cache_files() {
    let dir = TempDir::new().unwrap();
    for name in [
        "MEX_ADM1_gbOpen.geojson",
        "CAN_ADM0_gbOpen.geojson",
        "CAN_ADM0_gbHumanitarian.geojson",
        "notes.txt",
        "can_adm0_gbopen.geojson",
    ] {
        fs::write(dir.path().join(name), "{}").unwrap();
    }
    fs::create_dir(dir.path().join("USA_ADM0_gbOpen.geojson")).unwrap();

    let found = scan_cache_dir(dir.path()).unwrap();
    let summary: Vec<_> = found
        .iter()
        .map(|c| (c.code.as_str(), c.adm_level, c.release_type.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("CAN", 0, "gbHumanitarian"),
            ("CAN", 0, "gbOpen"),
            ("MEX", 1, "gbOpen"),
        ]
    );
    assert_eq!(found[1].path, dir.path().join("CAN_ADM0_gbOpen.geojson"));
}

#[test]
fn scanning_a_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("not-there");
    match scan_cache_dir(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Error::Io, got {other:?}"),
    }
}
