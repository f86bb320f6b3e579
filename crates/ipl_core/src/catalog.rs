//! Option lists for season, team and player pickers.

use crate::models::WILDCARD_LABEL;
use crate::store::RecordStore;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct match seasons in order of first appearance.
pub fn season_options(store: &RecordStore) -> Vec<String> {
    first_appearance(store.matches().iter().map(|m| m.season.as_str()))
}

/// Distinct teams: every `team1` in source order, then any team only seen as `team2`.
pub fn team_options(store: &RecordStore) -> Vec<String> {
    let matches = store.matches();
    first_appearance(
        matches
            .iter()
            .map(|m| m.team1.as_str())
            .chain(matches.iter().map(|m| m.team2.as_str())),
    )
}

/// Everyone named anywhere in the dataset, sorted.
pub fn player_options(store: &RecordStore) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    names.extend(store.matches().iter().filter_map(|m| m.player_of_match.as_deref()));
    for d in store.deliveries() {
        names.insert(&d.batter);
        names.insert(&d.bowler);
        names.insert(&d.non_striker);
    }
    names.into_iter().filter(|n| !n.is_empty()).map(str::to_string).collect()
}

pub fn batter_options(store: &RecordStore) -> Vec<String> {
    sorted_distinct(store.deliveries().iter().map(|d| d.batter.as_str()))
}

pub fn bowler_options(store: &RecordStore) -> Vec<String> {
    sorted_distinct(store.deliveries().iter().map(|d| d.bowler.as_str()))
}

/// Every picker's options in one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub seasons: Vec<String>,
    pub teams: Vec<String>,
    pub players: Vec<String>,
    pub batters: Vec<String>,
    pub bowlers: Vec<String>,
}

impl Catalog {
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            seasons: season_options(store),
            teams: team_options(store),
            players: player_options(store),
            batters: batter_options(store),
            bowlers: bowler_options(store),
        }
    }

    /// Prefix the multi-select lists (seasons, teams) with the wildcard entry.
    pub fn with_wildcard(mut self) -> Self {
        self.seasons.insert(0, WILDCARD_LABEL.to_string());
        self.teams.insert(0, WILDCARD_LABEL.to_string());
        self
    }
}

fn first_appearance<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    values.filter(|v| seen.insert(*v)).map(str::to_string).collect()
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DatasetBuilder;

    fn store() -> RecordStore {
        DatasetBuilder::new()
            .fixture(1, "2022", "GT", "RR", "Motera", Some("GT"))
            .fixture(2, "2021", "CSK", "KKR", "Dubai", Some("CSK"))
            .fixture(3, "2022", "RR", "LSG", "Eden Gardens", Some("RR"))
            .delivery(1, 0, 1, "Buttler", "Shami", |d| d.non_striker = "Jaiswal".into())
            .ball(2, 0, 1, "Gaikwad", "Narine")
            .build()
    }

    #[test]
    fn seasons_and_teams_keep_first_appearance_order() {
        let store = store();

        assert_eq!(season_options(&store), vec!["2022", "2021"]);
        assert_eq!(team_options(&store), vec!["GT", "CSK", "RR", "KKR", "LSG"]);
    }

    #[test]
    fn players_are_sorted_and_distinct() {
        let store = store();

        assert_eq!(
            player_options(&store),
            vec!["Buttler", "Gaikwad", "Jaiswal", "Narine", "Shami"]
        );
        assert_eq!(batter_options(&store), vec!["Buttler", "Gaikwad"]);
        assert_eq!(bowler_options(&store), vec!["Narine", "Shami"]);
    }

    #[test]
    fn wildcard_is_prepended_only_to_multi_selects() {
        let catalog = Catalog::from_store(&store()).with_wildcard();

        assert_eq!(catalog.seasons.first().map(String::as_str), Some(WILDCARD_LABEL));
        assert_eq!(catalog.teams.first().map(String::as_str), Some(WILDCARD_LABEL));
        assert!(!catalog.players.iter().any(|p| p == WILDCARD_LABEL));
    }
}
