//! IPL Loader Library
//!
//! CSV (matches + deliveries) → validated Dataset → MessagePack → LZ4 → SHA256
//! checksum. The resulting file is what `ipl_core::get_record_store` loads.

pub mod csv_ingest;

use anyhow::{Context, Result};
use ipl_core::store::{decode_dataset, encode_dataset, sha256_hex, RecordStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub use csv_ingest::{load_dataset, parse_deliveries_csv, parse_matches_csv, ParseStats};

/// Cache metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Schema version (e.g. "v1")
    pub schema_version: String,
    /// SHA256 of the compressed file (hex)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// MessagePack payload size (bytes)
    pub original_size: u64,
    /// Size on disk (bytes)
    pub compressed_size: u64,
    /// compressed / original
    pub compression_ratio: f64,
    pub match_count: usize,
    pub delivery_count: usize,
}

/// Build the dataset cache from the two CSV sheets.
///
/// The joined records are validated by constructing a [`RecordStore`] before
/// anything is written, so a cache on disk always satisfies the store
/// invariants.
pub fn build_cache(
    matches_csv: &Path,
    deliveries_csv: &Path,
    output_msgpack_lz4: &Path,
    schema_version: &str,
) -> Result<CacheMetadata> {
    let dataset = load_dataset(matches_csv, deliveries_csv)?;
    let store = RecordStore::from_dataset(dataset).context("Dataset failed validation")?;

    let encoded =
        encode_dataset(store.dataset()).context("Failed to serialize dataset to MessagePack")?;
    let original_size = encoded.msgpack_len as u64;
    let compressed_size = encoded.bytes.len() as u64;
    let checksum = sha256_hex(&encoded.bytes);

    if let Some(parent) = output_msgpack_lz4.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(output_msgpack_lz4, &encoded.bytes).with_context(|| {
        format!("Failed to write output file: {}", output_msgpack_lz4.display())
    })?;

    info!(
        "Wrote dataset cache {} ({} seasons, {} bytes)",
        output_msgpack_lz4.display(),
        store.season_count(),
        compressed_size
    );

    let compression_ratio =
        if original_size == 0 { 1.0 } else { compressed_size as f64 / original_size as f64 };

    Ok(CacheMetadata {
        schema_version: schema_version.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        original_size,
        compressed_size,
        compression_ratio,
        match_count: store.matches().len(),
        delivery_count: store.deliveries().len(),
    })
}

/// Check a cache file against an expected SHA256 checksum.
pub fn verify_cache(cache_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    Ok(sha256_hex(&bytes).eq_ignore_ascii_case(expected_checksum.trim()))
}

/// Decode a cache file into a ready-to-query store.
pub fn load_cache(cache_file: &Path) -> Result<RecordStore> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    let dataset = decode_dataset(&bytes).context("Failed to decode dataset cache")?;
    RecordStore::from_dataset(dataset).context("Cached dataset failed validation")
}

/// Load a store straight from the CSV sheets, skipping the cache.
pub fn load_csv(matches_csv: &Path, deliveries_csv: &Path) -> Result<RecordStore> {
    let dataset = load_dataset(matches_csv, deliveries_csv)?;
    RecordStore::from_dataset(dataset).context("Dataset failed validation")
}
