//! # ipl_core - Deterministic IPL Statistics Engine
//!
//! Aggregation engine over a ball-by-ball IPL dataset loaded once into an
//! immutable [`RecordStore`].
//!
//! ## Features
//! - Season/team match filtering with wildcard selections and absent-team advisories
//! - Per-season batting and bowling tables with an all-seasons totals row
//! - Team head-to-head records by season and opponent
//! - JSON API for easy integration with a dashboard front end

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod stats;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{
    batting_summary_json, bowling_summary_json, catalog_json, filter_matches_json,
    head_to_head_json, ApiError, ApiResponse,
};
pub use catalog::Catalog;
pub use config::DataPaths;
pub use error::{CacheError, Result, StoreError};
pub use filter::{filter_matches, MatchFilterResult};
pub use models::{Delivery, DismissalKind, Match, MatchId, Selection, WILDCARD_LABEL};
pub use stats::{
    batting_summary, bowling_summary, head_to_head, BattingSummary, BowlingSummary,
    HeadToHeadRow, LegalOvers, RowScope, SeasonBattingRow, SeasonBowlingRow,
};
pub use store::{get_record_store, Dataset, RecordStore, SeasonView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
