//! Basic usage example for geobound-rs
//!
//! This example demonstrates how to:
//! - Resolve country names to ISO codes and back
//! - Rank partial name matches
//! - Load cached boundary files into a catalog
//!
//! Run with: cargo run --example basic_usage

use geobound_rs::prelude::*;
use std::fs;
use tempfile::TempDir;

const CANADA: &str = r#"{
  "type": "FeatureCollection",
  "features": [{
    "type": "Feature",
    "properties": {"shapeName": "Canada", "shapeISO": "CAN", "shapeType": "ADM0"},
    "geometry": {"type": "Polygon",
                 "coordinates": [[[-141.0, 60.0], [-52.6, 47.5], [-82.5, 41.7], [-141.0, 60.0]]]}
  }]
}"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();
    println!("=== geobound-rs Basic Usage Example ===\n");

    let sink = TracingSink;
    let resolver = CodeResolver::new(&sink);

    // Example 1: name -> code
    println!("--- Example 1: Resolve names ---");
    for name in ["Canada", "côte d'ivoire", "Bolivia", "Nowhereland"] {
        match resolver.name_to_code(name) {
            Some(code) => println!("{name:>16} -> {code}"),
            None => println!("{name:>16} -> (not found)"),
        }
    }
    println!();

    // Example 2: code -> name
    println!("--- Example 2: Resolve codes ---");
    for code in ["ca", "USA", "kor"] {
        println!("{code:>4} -> {:?}", resolver.code_to_name(code));
    }
    println!();

    // Example 3: ranked partial matches
    println!("--- Example 3: Fuzzy search ---");
    for c in resolver.lookup().search_fuzzy("guinea")? {
        println!("- {} ({})", c.name(), c.alpha3());
    }
    println!();

    // Example 4: load from a cache folder
    println!("--- Example 4: Load cached boundaries ---");
    let cache = TempDir::new()?;
    fs::write(cache.path().join("CAN_ADM0_gbOpen.geojson"), CANADA)?;

    let options = LoadOptions::new(cache.path());
    let catalog = load_boundaries(["Canada", "Mexico"], &options);
    for (name, record) in catalog.iter() {
        println!(
            "{name}: {} features, columns {:?}, bbox {:?}",
            record.len(),
            record.columns(),
            record.bbox()
        );
    }
    println!("Loaded {} of 2 countries", catalog.len());

    Ok(())
}
