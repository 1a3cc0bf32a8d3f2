use clap::{Args, Parser, Subcommand};
use geobound_core::cache::{DEFAULT_BASE_FOLDER, DEFAULT_RELEASE_TYPE};
use std::path::PathBuf;

/// CLI arguments for geobound
#[derive(Debug, Parser)]
#[command(
    name = "geobound",
    version,
    about = "Resolve country names to ISO codes and load cached boundary files"
)]
pub struct CliArgs {
    /// Folder holding the cached `<ISO3>_ADM<level>_<release>.geojson` files
    #[arg(
        short = 'd',
        long = "dir",
        global = true,
        env = "GEOBOUND_DIR",
        default_value = DEFAULT_BASE_FOLDER
    )]
    pub dir: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. info, warn, geobound=debug)
    #[arg(long = "log-level", global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which cache entry a command refers to.
#[derive(Debug, Clone, Args)]
pub struct LevelArgs {
    /// Administrative level (0 = whole country)
    #[arg(short = 'l', long = "level", default_value_t = 0)]
    pub level: u8,

    /// Release type embedded in the file name
    #[arg(short = 'r', long = "release", default_value = DEFAULT_RELEASE_TYPE)]
    pub release: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the ISO3 code for a country name
    Code {
        /// Country name, accents and case ignored (e.g. "cote d'ivoire")
        name: String,
    },

    /// Print the display name for an ISO2 or ISO3 code
    Name {
        /// ISO2 or ISO3 code (e.g. ca, USA)
        code: String,
    },

    /// List countries matching a query, best match first
    Search {
        /// Full or partial country name
        query: String,
    },

    /// List the ISO 3166-1 reference table
    Countries,

    /// Print the expected cache path for a country
    Path {
        name: String,

        #[command(flatten)]
        level: LevelArgs,
    },

    /// List cache files found in the cache folder
    Cached,

    /// Load boundaries for one or more countries and summarize them
    Load {
        /// Country names
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        level: LevelArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a single GeoJSON file
    Inspect {
        /// Path to a plain or gzip-compressed GeoJSON file
        file: PathBuf,
    },
}
