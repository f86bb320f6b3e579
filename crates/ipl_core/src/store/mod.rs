//! # Record Store
//!
//! Immutable home of the two record collections. Construction validates the
//! cross-collection invariants and builds the season index exactly once; every
//! query afterwards borrows the store read-only.

pub mod cache;

use crate::error::{Result, StoreError};
use crate::models::{Delivery, Match, MatchId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

pub use cache::{
    decode_dataset, encode_dataset, get_record_store, load_store_from_path, sha256_hex,
    EncodedDataset,
};

/// The raw collections, in source order. This is what gets cached on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub matches: Vec<Match>,
    pub deliveries: Vec<Delivery>,
}

impl Dataset {
    pub fn new(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Self {
        Self { matches, deliveries }
    }
}

/// Positions of one season's records inside the store, in source order.
#[derive(Debug, Clone, Default)]
struct SeasonSlice {
    match_indices: Vec<usize>,
    delivery_indices: Vec<usize>,
}

/// Matches and deliveries plus the indices built at load time.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dataset: Dataset,
    match_index: FxHashMap<MatchId, usize>,
    seasons: BTreeMap<String, SeasonSlice>,
}

impl RecordStore {
    pub fn new(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Result<Self> {
        Self::from_dataset(Dataset::new(matches, deliveries))
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut match_index =
            FxHashMap::with_capacity_and_hasher(dataset.matches.len(), Default::default());
        let mut seasons: BTreeMap<String, SeasonSlice> = BTreeMap::new();

        for (idx, m) in dataset.matches.iter().enumerate() {
            if m.team1 == m.team2 {
                return Err(StoreError::SelfFixture(m.id));
            }
            if let Some(winner) = &m.winning_team {
                if !m.involves(winner) {
                    return Err(StoreError::WinnerNotParticipant {
                        id: m.id,
                        winner: winner.clone(),
                    });
                }
            }
            if match_index.insert(m.id, idx).is_some() {
                return Err(StoreError::DuplicateMatchId(m.id));
            }
            seasons
                .entry(m.season.clone())
                .or_default()
                .match_indices
                .push(idx);
        }

        for (idx, d) in dataset.deliveries.iter().enumerate() {
            let match_idx = *match_index
                .get(&d.match_id)
                .ok_or(StoreError::OrphanDelivery { index: idx, match_id: d.match_id })?;
            let season = &dataset.matches[match_idx].season;
            // Every match season was inserted above.
            if let Some(slice) = seasons.get_mut(season) {
                slice.delivery_indices.push(idx);
            }
        }

        info!(
            "Record store built: {} matches, {} deliveries, {} seasons",
            dataset.matches.len(),
            dataset.deliveries.len(),
            seasons.len()
        );

        Ok(Self { dataset, match_index, seasons })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn matches(&self) -> &[Match] {
        &self.dataset.matches
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.dataset.deliveries
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&Match> {
        self.match_index.get(&id).map(|&idx| &self.dataset.matches[idx])
    }

    /// Season of the match a delivery belongs to.
    pub fn season_of(&self, delivery: &Delivery) -> Option<&str> {
        self.match_by_id(delivery.match_id).map(|m| m.season.as_str())
    }

    /// Season labels in ascending order.
    pub fn season_labels(&self) -> impl Iterator<Item = &str> {
        self.seasons.keys().map(String::as_str)
    }

    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    /// Every season in ascending label order, including seasons without deliveries.
    pub fn seasons(&self) -> impl Iterator<Item = SeasonView<'_>> {
        self.seasons.iter().map(move |(label, slice)| SeasonView { label, slice, store: self })
    }

    pub fn season(&self, label: &str) -> Option<SeasonView<'_>> {
        self.seasons
            .get_key_value(label)
            .map(|(label, slice)| SeasonView { label, slice, store: self })
    }
}

/// Borrowed view of one season's records.
#[derive(Debug, Clone, Copy)]
pub struct SeasonView<'a> {
    label: &'a str,
    slice: &'a SeasonSlice,
    store: &'a RecordStore,
}

impl<'a> SeasonView<'a> {
    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn matches(&self) -> impl Iterator<Item = &'a Match> + 'a {
        let matches = &self.store.dataset.matches;
        let slice = self.slice;
        slice.match_indices.iter().map(move |&idx| &matches[idx])
    }

    pub fn deliveries(&self) -> impl Iterator<Item = &'a Delivery> + 'a {
        let deliveries = &self.store.dataset.deliveries;
        let slice = self.slice;
        slice.delivery_indices.iter().map(move |&idx| &deliveries[idx])
    }

    pub fn match_count(&self) -> usize {
        self.slice.match_indices.len()
    }

    pub fn delivery_count(&self) -> usize {
        self.slice.delivery_indices.len()
    }
}
