//! # Statistics
//!
//! Aggregators over the record store, each keyed by a single player or team:
//!
//! - `batting` - per-season scoring profile and runs by venue
//! - `bowling` - per-season wickets, runs conceded, legal overs and wickets by venue
//! - `head_to_head` - fixtures and wins per (season, opponent)
//!
//! All of them are pure functions of `(&RecordStore, key)` and never fail; an
//! entity missing from the dataset produces zero-filled rows.

pub mod batting;
pub mod bowling;
pub mod head_to_head;
pub mod overs;
pub mod rows;

#[cfg(test)]
mod proptest_gen;

pub use batting::{batting_summary, BattingSummary, SeasonBattingRow};
pub use bowling::{bowling_summary, BowlingSummary, SeasonBowlingRow};
pub use head_to_head::{head_to_head, HeadToHeadRow};
pub use overs::LegalOvers;
pub use rows::{RowScope, ALL_SEASONS_LABEL};
