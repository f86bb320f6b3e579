//! IPL Loader CLI
//!
//! CSV → MessagePack+LZ4 dataset cache builder, plus query subcommands that
//! print the JSON API responses.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use ipl_core::api::{MatchFilterRequest, PlayerRequest, TeamRequest};
#[cfg(feature = "cli")]
use ipl_core::{config::DATASET_SCHEMA_VERSION, DataPaths, RecordStore};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ipl_loader")]
#[command(about = "Build the IPL dataset cache and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where query subcommands read records from. Unset flags fall back to the
/// `IPL_*` environment variables.
#[cfg(feature = "cli")]
#[derive(Args)]
struct DataSource {
    /// Dataset cache (MsgPack+LZ4) to query
    #[arg(long, conflicts_with_all = ["matches", "deliveries"])]
    cache: Option<PathBuf>,

    /// Match sheet CSV; bypasses the cache
    #[arg(long)]
    matches: Option<PathBuf>,

    /// Ball-by-ball CSV; bypasses the cache
    #[arg(long)]
    deliveries: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build the dataset cache from the two CSV sheets
    Build {
        /// Match sheet CSV (defaults to IPL_MATCHES_CSV)
        #[arg(long)]
        matches: Option<PathBuf>,

        /// Ball-by-ball CSV (defaults to IPL_DELIVERIES_CSV)
        #[arg(long)]
        deliveries: Option<PathBuf>,

        /// Output MsgPack+LZ4 file path (defaults to IPL_DATASET_CACHE)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = DATASET_SCHEMA_VERSION)]
        schema_version: String,

        /// Verify cache after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Check a cache file against a SHA256 checksum
    Verify {
        /// Cache file path
        #[arg(long)]
        cache: PathBuf,

        /// Expected checksum (hex)
        #[arg(long)]
        checksum: String,
    },

    /// Matches for the selected seasons and teams ("All" selects everything)
    Matches {
        #[command(flatten)]
        source: DataSource,

        /// Season label; repeat for several
        #[arg(long = "season")]
        seasons: Vec<String>,

        /// Team name; repeat for several
        #[arg(long = "team")]
        teams: Vec<String>,
    },

    /// Per-season batting table for one player
    Batting {
        #[command(flatten)]
        source: DataSource,

        #[arg(long)]
        player: String,
    },

    /// Per-season bowling table for one player
    Bowling {
        #[command(flatten)]
        source: DataSource,

        #[arg(long)]
        player: String,
    },

    /// Season-by-opponent record for one team
    HeadToHead {
        #[command(flatten)]
        source: DataSource,

        #[arg(long)]
        team: String,
    },

    /// Distinct seasons, teams and players for building pickers
    Catalog {
        #[command(flatten)]
        source: DataSource,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            matches,
            deliveries,
            out,
            schema_version,
            verify,
            metadata,
        } => {
            let defaults = DataPaths::from_env();
            let matches = matches.unwrap_or(defaults.matches_csv);
            let deliveries = deliveries.unwrap_or(defaults.deliveries_csv);
            let out = out.unwrap_or(defaults.dataset_cache);

            println!("🔨 Building dataset cache from CSV...");
            println!("   Matches:    {}", matches.display());
            println!("   Deliveries: {}", deliveries.display());
            println!("   Output:     {}", out.display());
            println!("   Schema:     {}", schema_version);

            let meta = ipl_loader::build_cache(&matches, &deliveries, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_cache_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Verify { cache, checksum } => {
            verify_cache_integrity(&cache, &checksum)?;
        }

        Commands::Matches { source, seasons, teams } => {
            let store = source.open()?;
            let request = MatchFilterRequest {
                seasons: (!seasons.is_empty()).then_some(seasons),
                teams: (!teams.is_empty()).then_some(teams),
            };
            let request = serde_json::to_string(&request)?;
            print_response(&ipl_core::filter_matches_json(&request, &store));
        }

        Commands::Batting { source, player } => {
            let store = source.open()?;
            let request = serde_json::to_string(&PlayerRequest { player: Some(player) })?;
            print_response(&ipl_core::batting_summary_json(&request, &store));
        }

        Commands::Bowling { source, player } => {
            let store = source.open()?;
            let request = serde_json::to_string(&PlayerRequest { player: Some(player) })?;
            print_response(&ipl_core::bowling_summary_json(&request, &store));
        }

        Commands::HeadToHead { source, team } => {
            let store = source.open()?;
            let request = serde_json::to_string(&TeamRequest { team: Some(team) })?;
            print_response(&ipl_core::head_to_head_json(&request, &store));
        }

        Commands::Catalog { source } => {
            let store = source.open()?;
            print_response(&ipl_core::catalog_json(&store));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
impl DataSource {
    /// Explicit CSV flags win, then an explicit cache, then the environment:
    /// the cache if it exists on disk, otherwise the CSV pair.
    fn open(self) -> Result<RecordStore> {
        let defaults = DataPaths::from_env();

        if self.matches.is_some() || self.deliveries.is_some() {
            let matches = self.matches.unwrap_or(defaults.matches_csv);
            let deliveries = self.deliveries.unwrap_or(defaults.deliveries_csv);
            return ipl_loader::load_csv(&matches, &deliveries);
        }

        let cache = self.cache.unwrap_or(defaults.dataset_cache);
        if cache.exists() {
            return ipl_loader::load_cache(&cache);
        }

        tracing::info!("No dataset cache at {}, reading CSV sheets", cache.display());
        ipl_loader::load_csv(&defaults.matches_csv, &defaults.deliveries_csv)
    }
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn print_response(response_json: &str) {
    match serde_json::from_str::<serde_json::Value>(response_json)
        .and_then(|value| serde_json::to_string_pretty(&value))
    {
        Ok(pretty) => println!("{}", pretty),
        Err(_) => println!("{}", response_json),
    }
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &ipl_loader::CacheMetadata) {
    println!("\n✅ Cache built successfully!");
    println!("   Matches:         {}", meta.match_count);
    println!("   Deliveries:      {}", meta.delivery_count);
    println!(
        "   Original size:   {} bytes ({:.2} KB)",
        meta.original_size,
        meta.original_size as f64 / 1024.0
    );
    println!(
        "   Compressed size: {} bytes ({:.2} KB)",
        meta.compressed_size,
        meta.compressed_size as f64 / 1024.0
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_cache_integrity(cache_path: &std::path::Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying cache integrity...");
    let is_valid = ipl_loader::verify_cache(cache_path, checksum)?;

    if is_valid {
        println!("✅ Cache verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Cache verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &std::path::Path, meta: &ipl_loader::CacheMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ipl_loader CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
