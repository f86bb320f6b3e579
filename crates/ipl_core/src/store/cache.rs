//! Dataset cache codec.
//!
//! Format: LZ4 (size-prepended) + MessagePack(serde) of [`Dataset`]. Only the raw
//! collections are stored; indices are rebuilt by [`RecordStore::from_dataset`].

use super::{Dataset, RecordStore};
use crate::config::DataPaths;
use crate::error::CacheError;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use once_cell::sync::OnceCell;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

static RECORD_STORE: OnceCell<RecordStore> = OnceCell::new();

/// Compressed cache bytes plus the size of the MessagePack payload inside them.
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    pub bytes: Vec<u8>,
    pub msgpack_len: usize,
}

pub fn encode_dataset(dataset: &Dataset) -> Result<EncodedDataset, CacheError> {
    let msgpack = rmp_serde::to_vec(dataset)?;
    Ok(EncodedDataset { bytes: compress_prepend_size(&msgpack), msgpack_len: msgpack.len() })
}

pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, CacheError> {
    // Plain MessagePack is accepted too, for caches written without compression.
    if let Ok(dataset) = rmp_serde::from_slice::<Dataset>(bytes) {
        return Ok(dataset);
    }

    let msgpack = decompress_size_prepended(bytes)?;
    Ok(rmp_serde::from_slice(&msgpack)?)
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn load_store_from_path(path: &Path) -> Result<RecordStore, CacheError> {
    let bytes = std::fs::read(path)?;
    debug!("Read dataset cache {} ({} bytes)", path.display(), bytes.len());
    let dataset = decode_dataset(&bytes)?;
    Ok(RecordStore::from_dataset(dataset)?)
}

/// Load (or return the already loaded) process-wide store from the path in
/// `IPL_DATASET_CACHE`, defaulting to `data/exports/ipl_dataset.v1.msgpack.lz4`.
pub fn get_record_store() -> Result<&'static RecordStore, CacheError> {
    RECORD_STORE.get_or_try_init(|| {
        let paths = DataPaths::from_env();
        info!("Loading dataset cache from {}", paths.dataset_cache.display());
        load_store_from_path(&paths.dataset_cache)
    })
}
