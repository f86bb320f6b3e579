//! Dataset locations resolved from the environment.

use std::env;
use std::path::PathBuf;

/// Match-level CSV (one row per fixture).
pub const MATCHES_CSV_ENV: &str = "IPL_MATCHES_CSV";
/// Ball-by-ball CSV.
pub const DELIVERIES_CSV_ENV: &str = "IPL_DELIVERIES_CSV";
/// Prebuilt MessagePack+LZ4 dataset cache.
pub const DATASET_CACHE_ENV: &str = "IPL_DATASET_CACHE";

pub const DEFAULT_MATCHES_CSV: &str = "ipl-matches.csv";
pub const DEFAULT_DELIVERIES_CSV: &str = "IPL_all_balls_2008_2022.csv";
pub const DEFAULT_DATASET_CACHE_REL_PATH: &str = "data/exports/ipl_dataset.v1.msgpack.lz4";

/// Schema tag written into cache metadata.
pub const DATASET_SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub matches_csv: PathBuf,
    pub deliveries_csv: PathBuf,
    pub dataset_cache: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            matches_csv: PathBuf::from(DEFAULT_MATCHES_CSV),
            deliveries_csv: PathBuf::from(DEFAULT_DELIVERIES_CSV),
            dataset_cache: PathBuf::from(DEFAULT_DATASET_CACHE_REL_PATH),
        }
    }
}

impl DataPaths {
    /// Defaults overridden by any non-blank environment variable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let resolve = |name: &str, fallback: PathBuf| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or(fallback)
        };

        Self {
            matches_csv: resolve(MATCHES_CSV_ENV, defaults.matches_csv),
            deliveries_csv: resolve(DELIVERIES_CSV_ENV, defaults.deliveries_csv),
            dataset_cache: resolve(DATASET_CACHE_ENV, defaults.dataset_cache),
        }
    }
}
