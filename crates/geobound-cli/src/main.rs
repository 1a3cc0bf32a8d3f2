//! geobound — Command-line interface for geobound-core
//!
//! Resolves country names to ISO 3166-1 codes and loads cached
//! administrative boundary files from a local folder.
//!
//! Usage examples
//! --------------
//!
//! - Resolve a name or a code
//!   $ geobound code "cote d'ivoire"
//!   $ geobound name us
//!
//! - Show where a boundary file is expected
//!   $ geobound --dir cache path Mexico --level 1
//!
//! - List what is cached, then load some of it
//!   $ geobound cached
//!   $ geobound load Canada Mexico --json
//!
//! Logging goes to stderr. `RUST_LOG` takes precedence over `--log-level`.
mod args;

use crate::args::{CliArgs, Commands, LevelArgs};
use anyhow::Context;
use clap::Parser;
use geobound_core::log::TracingSink;
use geobound_core::prelude::*;
use geobound_core::{read_boundary_file, scan_cache_dir, BBox, LoadReport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct RecordSummary<'a> {
    name: &'a str,
    source: Option<&'a Path>,
    features: usize,
    columns: Vec<&'a str>,
    geometry_kinds: BTreeMap<&'static str, usize>,
    bbox: Option<BBox>,
}

impl<'a> RecordSummary<'a> {
    fn new(name: &'a str, record: &'a BoundaryRecord) -> Self {
        Self {
            name,
            source: record.source(),
            features: record.len(),
            columns: record.columns(),
            geometry_kinds: record.geometry_kinds(),
            bbox: record.bbox(),
        }
    }

    fn print(&self) {
        println!("{}: {} features", self.name, self.features);
        if let Some(source) = self.source {
            println!("  Source: {}", source.display());
        }
        println!("  Columns: {}", self.columns.join(", "));
        let kinds: Vec<_> = self
            .geometry_kinds
            .iter()
            .map(|(k, n)| format!("{k} x{n}"))
            .collect();
        println!("  Geometry: {}", kinds.join(", "));
        if let Some(b) = self.bbox {
            println!(
                "  BBox: [{:.4}, {:.4}, {:.4}, {:.4}]",
                b.min_x, b.min_y, b.max_x, b.max_y
            );
        }
    }
}

#[derive(Debug, Serialize)]
struct SkipSummary<'a> {
    name: &'a str,
    reason: String,
}

#[derive(Debug, Serialize)]
struct LoadSummary<'a> {
    adm_level: u8,
    release_type: &'a str,
    base_folder: &'a Path,
    loaded: Vec<RecordSummary<'a>>,
    skipped: Vec<SkipSummary<'a>>,
}

impl<'a> LoadSummary<'a> {
    fn new(options: &'a LoadOptions, report: &'a LoadReport) -> Self {
        Self {
            adm_level: options.adm_level,
            release_type: &options.release_type,
            base_folder: &options.base_folder,
            loaded: report
                .loaded()
                .map(|(name, record)| RecordSummary::new(name, record))
                .collect(),
            skipped: report
                .skipped()
                .map(|(name, reason)| SkipSummary {
                    name,
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_options(dir: PathBuf, level: LevelArgs) -> LoadOptions {
    LoadOptions::new(dir)
        .adm_level(level.level)
        .release_type(level.release)
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    let sink = TracingSink;
    let resolver = CodeResolver::new(&sink);

    match args.command {
        Commands::Code { name } => match resolver.name_to_code(&name) {
            Some(code) => println!("{code}"),
            None => eprintln!("No ISO code found for: {name}"),
        },

        Commands::Name { code } => match resolver.code_to_name(&code) {
            Some(name) => println!("{name}"),
            None => eprintln!("No country found for code: {code}"),
        },

        Commands::Search { query } => match resolver.lookup().search_fuzzy(&query) {
            Ok(hits) => {
                for c in hits {
                    println!("{} ({}, {})", c.name(), c.alpha2(), c.alpha3());
                }
            }
            Err(e) => eprintln!("{e}"),
        },

        Commands::Countries => {
            for c in resolver.lookup().countries() {
                println!("{} {} {} {}", c.alpha2, c.alpha3, c.numeric, c.name);
            }
        }

        Commands::Path { name, level } => {
            let options = load_options(args.dir, level);
            let loader = CacheLoader::new(&sink);
            match loader.expected_path(&name, &options) {
                Some(path) => {
                    let state = if path.exists() { "cached" } else { "missing" };
                    println!("{} ({state})", path.display());
                }
                None => eprintln!("No ISO code found for: {name}"),
            }
        }

        Commands::Cached => {
            let entries = scan_cache_dir(&args.dir)
                .with_context(|| format!("scanning cache folder {}", args.dir.display()))?;
            if entries.is_empty() {
                println!("No cache files in {}", args.dir.display());
            }
            for e in entries {
                let name = resolver
                    .lookup()
                    .find_by_alpha3(e.code.as_str())
                    .map_or("?", |c| c.name);
                println!(
                    "{} ADM{} {:<16} {}",
                    e.code, e.adm_level, e.release_type, name
                );
            }
        }

        Commands::Load { names, level, json } => {
            let options = load_options(args.dir, level);
            let report = CacheLoader::new(&sink).load_report(&names, &options);
            tracing::debug!(
                loaded = report.loaded().count(),
                skipped = report.skipped().count(),
                "load finished"
            );
            let summary = LoadSummary::new(&options, &report);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for record in &summary.loaded {
                    record.print();
                }
                for skip in &summary.skipped {
                    println!("{}: skipped ({})", skip.name, skip.reason);
                }
            }
        }

        Commands::Inspect { file } => {
            let record = read_boundary_file(&file)?;
            let name = file.display().to_string();
            RecordSummary::new(&name, &record).print();
        }
    }

    Ok(())
}
