//! Property-based checks for the aggregators over generated datasets.

use super::{batting_summary, bowling_summary, head_to_head, LegalOvers};
use crate::filter::filter_matches;
use crate::models::{Delivery, DismissalKind, Match, MatchId, Selection};
use crate::store::{Dataset, RecordStore};
use proptest::prelude::*;
use std::collections::BTreeMap;

const SEASONS: [&str; 3] = ["2020/21", "2021", "2022"];
const TEAMS: [&str; 4] = ["CSK", "MI", "RCB", "KKR"];
const PLAYERS: [&str; 5] = ["Dhoni", "Bumrah", "Kohli", "Narine", "Rashid"];
const VENUES: [&str; 3] = ["Wankhede", "Chepauk", "Eden Gardens"];
const KINDS: [&str; 8] =
    ["", "caught", "caught and bowled", "bowled", "lbw", "stumped", "run out", "hit wicket"];

pub fn match_strategy(id: u64) -> impl Strategy<Value = Match> {
    (0..SEASONS.len(), 0..TEAMS.len(), 1..TEAMS.len(), 0..VENUES.len(), 0u8..3).prop_map(
        move |(season, t1, offset, venue, outcome)| {
            let t2 = (t1 + offset) % TEAMS.len();
            let winner = match outcome {
                0 => Some(TEAMS[t1].to_string()),
                1 => Some(TEAMS[t2].to_string()),
                _ => None,
            };
            Match::new(id, SEASONS[season], TEAMS[t1], TEAMS[t2], VENUES[venue], winner)
        },
    )
}

#[derive(Debug, Clone)]
struct RawBall {
    match_idx: usize,
    over: u8,
    ball: u8,
    batter: usize,
    bowler: usize,
    runs: u8,
    extras: u8,
    kind: usize,
}

impl RawBall {
    fn into_delivery(self, matches: &[Match]) -> Delivery {
        let owner = &matches[self.match_idx];
        let mut d = Delivery::new(
            owner.id,
            self.over,
            self.ball,
            PLAYERS[self.batter],
            PLAYERS[self.bowler],
            owner.venue.clone(),
        );
        d.batting_run = self.runs;
        d.extras_run = self.extras;
        d.total_run = self.runs + self.extras;
        d.dismissal_kind = DismissalKind::from_label(KINDS[self.kind]);
        d.is_wicket_delivery = d.dismissal_kind.is_some();
        d
    }
}

fn raw_ball_strategy(match_count: usize) -> impl Strategy<Value = RawBall> {
    (
        0..match_count,
        0u8..20,
        1u8..=8,
        0..PLAYERS.len(),
        0..PLAYERS.len(),
        0u8..=6,
        0u8..=2,
        0..KINDS.len(),
    )
        .prop_map(|(match_idx, over, ball, batter, bowler, runs, extras, kind)| RawBall {
            match_idx,
            over,
            ball,
            batter,
            bowler,
            runs,
            extras,
            kind,
        })
}

pub fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    (1usize..8)
        .prop_flat_map(|match_count| {
            let matches: Vec<_> = (0..match_count).map(|i| match_strategy(i as u64 + 1)).collect();
            (matches, prop::collection::vec(raw_ball_strategy(match_count), 0..120))
        })
        .prop_map(|(matches, balls)| {
            let deliveries = balls.into_iter().map(|raw| raw.into_delivery(&matches)).collect();
            Dataset::new(matches, deliveries)
        })
}

fn store_from(dataset: Dataset) -> RecordStore {
    RecordStore::from_dataset(dataset).expect("generated dataset should be valid")
}

proptest! {
    #[test]
    fn batting_totals_agree_with_season_rows(dataset in dataset_strategy(), p in 0..PLAYERS.len()) {
        let store = store_from(dataset);
        let player = PLAYERS[p];
        let summary = batting_summary(&store, player);

        prop_assert_eq!(summary.per_season.len(), store.season_count());

        let runs: u32 = summary.per_season.iter().map(|r| r.total_runs).sum();
        prop_assert_eq!(runs, summary.all_seasons.total_runs);

        let highest = summary.per_season.iter().filter_map(|r| r.highest_innings_runs).max();
        prop_assert_eq!(highest, summary.all_seasons.highest_innings_runs);

        let by_venue: u32 = summary.venue_breakdown.values().sum();
        prop_assert_eq!(by_venue, summary.all_seasons.total_runs);

        // Brute force over raw deliveries.
        let mut per_match: BTreeMap<MatchId, u32> = BTreeMap::new();
        for d in store.deliveries().iter().filter(|d| d.batter == player) {
            *per_match.entry(d.match_id).or_insert(0) += u32::from(d.batting_run);
        }
        prop_assert_eq!(per_match.values().copied().max(), summary.all_seasons.highest_innings_runs);
    }

    #[test]
    fn bowling_overs_come_from_raw_ball_count(dataset in dataset_strategy(), p in 0..PLAYERS.len()) {
        let store = store_from(dataset);
        let player = PLAYERS[p];
        let summary = bowling_summary(&store, player);

        let legal = store
            .deliveries()
            .iter()
            .filter(|d| d.bowler == player && (1..=6).contains(&d.ball_number_in_over))
            .count() as u32;
        prop_assert_eq!(summary.all_seasons.legal_overs, LegalOvers::from_balls(legal));
        prop_assert_eq!(summary.all_seasons.legal_overs.to_string(), format!("{}.{}", legal / 6, legal % 6));

        for row in &summary.per_season {
            prop_assert_eq!(
                row.caught_count + row.lbw_count + row.stumped_count,
                row.total_wickets
            );
        }

        let wickets: u32 = summary.per_season.iter().map(|r| r.total_wickets).sum();
        prop_assert_eq!(wickets, summary.all_seasons.total_wickets);
        let by_venue: u32 = summary.venue_breakdown.values().sum();
        prop_assert_eq!(by_venue, summary.all_seasons.total_wickets);
    }

    #[test]
    fn head_to_head_wins_never_exceed_matches(dataset in dataset_strategy(), t in 0..TEAMS.len()) {
        let store = store_from(dataset);
        let rows = head_to_head(&store, TEAMS[t]);

        let mut matches = 0;
        let mut wins = 0;
        for row in &rows {
            prop_assert!(row.total_wins <= row.total_matches);
            matches += row.total_matches;
            wins += row.total_wins;
        }
        prop_assert!(wins <= matches);
    }

    #[test]
    fn head_to_head_regroups_to_fixture_counts(dataset in dataset_strategy(), t in 0..TEAMS.len()) {
        let store = store_from(dataset);
        let team = TEAMS[t];

        let mut by_opponent: BTreeMap<String, u32> = BTreeMap::new();
        for row in head_to_head(&store, team) {
            *by_opponent.entry(row.opponent).or_insert(0) += row.total_matches;
        }

        for opponent in TEAMS.iter().filter(|o| **o != team) {
            let fixtures = store
                .matches()
                .iter()
                .filter(|m| m.involves(team) && m.involves(opponent))
                .count() as u32;
            prop_assert_eq!(by_opponent.get(*opponent).copied().unwrap_or(0), fixtures);
        }
    }

    #[test]
    fn double_wildcard_filter_is_identity(dataset in dataset_strategy()) {
        let store = store_from(dataset);
        let result = filter_matches(&store, Some(&Selection::Wildcard), Some(&Selection::Wildcard));

        let rows: Vec<Match> = result.rows.into_iter().cloned().collect();
        prop_assert_eq!(rows.as_slice(), store.matches());
        prop_assert!(result.warning.is_none());
    }
}
