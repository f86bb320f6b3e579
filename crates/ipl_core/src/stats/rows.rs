//! Pieces shared by the per-season tables.

use crate::models::MatchId;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// Label shown in the season column of the totals row.
pub const ALL_SEASONS_LABEL: &str = "All Seasons";

/// Which slice of the dataset a table row summarizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowScope {
    Season(String),
    AllSeasons,
}

impl RowScope {
    pub fn season(&self) -> Option<&str> {
        match self {
            RowScope::Season(label) => Some(label),
            RowScope::AllSeasons => None,
        }
    }
}

impl fmt::Display for RowScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RowScope::Season(label) => write!(f, "{}", label),
            RowScope::AllSeasons => write!(f, "{}", ALL_SEASONS_LABEL),
        }
    }
}

impl Serialize for RowScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Distinct fixtures a player appeared in.
pub(crate) type MatchSet = FxHashSet<MatchId>;

pub(crate) fn count(set: &MatchSet) -> u32 {
    set.len() as u32
}

/// Largest present value; `None` only when every input is `None`.
pub(crate) fn max_present(values: impl IntoIterator<Item = Option<u32>>) -> Option<u32> {
    values.into_iter().flatten().max()
}
