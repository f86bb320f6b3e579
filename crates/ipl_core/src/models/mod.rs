//! Record types shared by the store, the filter engine and the aggregators.

pub mod delivery;
pub mod match_record;
pub mod selection;

pub use delivery::{Delivery, DismissalKind};
pub use match_record::{Match, MatchId};
pub use selection::{Selection, WILDCARD_LABEL};
