//! # Head-to-Head
//!
//! Fixtures and wins for one team, grouped by season and opponent.

use crate::store::RecordStore;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadRow {
    pub season: String,
    pub opponent: String,
    pub total_matches: u32,
    /// No-result fixtures count toward `total_matches` only.
    pub total_wins: u32,
}

impl HeadToHeadRow {
    /// Whether the team beat this opponent at least once that season.
    pub fn has_win(&self) -> bool {
        self.total_wins > 0
    }
}

/// Head-to-head rows for `team`, sorted by season then opponent.
///
/// An unknown team yields no rows.
pub fn head_to_head(store: &RecordStore, team: &str) -> Vec<HeadToHeadRow> {
    let mut groups: BTreeMap<(&str, &str), (u32, u32)> = BTreeMap::new();

    for m in store.matches() {
        let Some(opponent) = m.opponent_of(team) else {
            continue;
        };
        let (matches, wins) = groups.entry((m.season.as_str(), opponent)).or_insert((0, 0));
        *matches += 1;
        if m.is_won_by(team) {
            *wins += 1;
        }
    }

    debug!("Head-to-head for {}: {} season/opponent groups", team, groups.len());

    groups
        .into_iter()
        .map(|((season, opponent), (total_matches, total_wins))| HeadToHeadRow {
            season: season.to_string(),
            opponent: opponent.to_string(),
            total_matches,
            total_wins,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DatasetBuilder;

    fn rivalry() -> RecordStore {
        DatasetBuilder::new()
            .fixture(1, "2022", "MI", "CSK", "Wankhede", Some("CSK"))
            .fixture(2, "2021", "CSK", "MI", "Chepauk", Some("MI"))
            .fixture(3, "2021", "RCB", "CSK", "Chinnaswamy", Some("CSK"))
            .fixture(4, "2021", "CSK", "MI", "Wankhede", Some("CSK"))
            .fixture(5, "2022", "RCB", "KKR", "Eden Gardens", Some("RCB"))
            .fixture(6, "2022", "CSK", "RCB", "Chepauk", None)
            .build()
    }

    #[test]
    fn groups_by_season_and_opponent_in_order() {
        let rows = head_to_head(&rivalry(), "CSK");

        let flat: Vec<(&str, &str, u32, u32)> = rows
            .iter()
            .map(|r| (r.season.as_str(), r.opponent.as_str(), r.total_matches, r.total_wins))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("2021", "MI", 2, 1),
                ("2021", "RCB", 1, 1),
                ("2022", "MI", 1, 1),
                ("2022", "RCB", 1, 0),
            ]
        );
    }

    #[test]
    fn no_result_counts_for_both_sides_but_wins_for_neither() {
        let store = rivalry();

        let csk = head_to_head(&store, "CSK");
        let rcb = head_to_head(&store, "RCB");

        let csk_row = csk.iter().find(|r| r.season == "2022" && r.opponent == "RCB").unwrap();
        let rcb_row = rcb.iter().find(|r| r.season == "2022" && r.opponent == "CSK").unwrap();

        assert_eq!((csk_row.total_matches, csk_row.total_wins), (1, 0));
        assert_eq!((rcb_row.total_matches, rcb_row.total_wins), (1, 0));
        assert!(!csk_row.has_win());
    }

    #[test]
    fn unknown_team_has_no_rows() {
        assert!(head_to_head(&rivalry(), "Kochi Tuskers").is_empty());
    }
}
