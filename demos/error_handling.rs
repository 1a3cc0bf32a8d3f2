//! Error handling example for geobound-rs
//!
//! Shows the typed errors behind the best-effort API:
//! - `try_*` resolver methods return `ResolveError`
//! - `CacheLoader::load_report` keeps a `SkipReason` per name
//! - `read_boundary_file` returns the crate-level `Error`
//!
//! Run with: cargo run --example error_handling

use geobound_rs::log::MemorySink;
use geobound_rs::prelude::*;
use geobound_rs::read_boundary_file;
use std::fs;
use tempfile::TempDir;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== geobound-rs Error Handling Example ===\n");

    // Captured instead of printed so the example output stays readable.
    let sink = MemorySink::new();
    let resolver = CodeResolver::new(&sink);

    println!("--- Example 1: Typed resolver errors ---");
    for name in ["", "Nowhereland"] {
        if let Err(e) = resolver.try_name_to_code(name) {
            println!("{name:?}: {e}");
        }
    }
    if let Err(e) = resolver.try_code_to_name("zz") {
        println!("\"zz\": {e}");
    }
    println!();

    println!("--- Example 2: Skip reasons ---");
    let cache = TempDir::new()?;
    fs::write(cache.path().join("PER_ADM0_gbOpen.geojson"), "{ truncated")?;

    let loader = CacheLoader::new(&sink);
    let report = loader.load_report(
        ["Peru", "Chile", "Atlantis"],
        &LoadOptions::new(cache.path()),
    );
    for (name, reason) in report.skipped() {
        let kind = match reason {
            SkipReason::NameNotResolved(_) => "unknown name",
            SkipReason::CacheMiss { .. } => "not cached",
            SkipReason::ReadFailure { .. } => "unreadable",
        };
        println!("{name}: {kind} ({reason})");
    }
    println!("complete: {}", report.is_complete());
    println!();

    println!("--- Example 3: Reading a single file ---");
    match read_boundary_file(cache.path().join("PER_ADM0_gbOpen.geojson")) {
        Ok(record) => println!("{} features", record.len()),
        Err(e) => println!("error: {e}"),
    }
    println!();

    println!("--- Captured log lines ---");
    for line in sink.lines() {
        println!("[{:?}] {}", line.level, line.message);
    }

    Ok(())
}
