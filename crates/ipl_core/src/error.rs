use crate::models::MatchId;
use thiserror::Error;

/// Invariant violations detected while building a [`crate::store::RecordStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate match id: {0}")]
    DuplicateMatchId(MatchId),

    #[error("Delivery #{index} references unknown match {match_id}")]
    OrphanDelivery { index: usize, match_id: MatchId },

    #[error("Match {0} lists the same team on both sides")]
    SelfFixture(MatchId),

    #[error("Match {id}: winning team '{winner}' did not play in the fixture")]
    WinnerNotParticipant { id: MatchId, winner: String },
}

/// Failures decoding a serialized dataset cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error: {0}")]
    Decompression(#[from] lz4_flex::block::DecompressError),

    #[error("Invalid dataset: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
