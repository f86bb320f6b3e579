//! # Batting Summary
//!
//! Per-season scoring profile for one batter plus a venue breakdown.

use super::rows::{count, max_present, MatchSet, RowScope};
use crate::models::MatchId;
use crate::store::{RecordStore, SeasonView};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One row of the batting table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonBattingRow {
    pub scope: RowScope,
    /// Fixtures where the player batted or bowled at least one ball.
    pub matches_played: u32,
    pub ones: u32,
    pub twos: u32,
    pub threes: u32,
    pub fours: u32,
    pub sixes: u32,
    /// Best single-match total; `None` when the player faced no ball.
    pub highest_innings_runs: Option<u32>,
    pub total_runs: u32,
}

impl SeasonBattingRow {
    pub fn empty(scope: RowScope) -> Self {
        Self {
            scope,
            matches_played: 0,
            ones: 0,
            twos: 0,
            threes: 0,
            fours: 0,
            sixes: 0,
            highest_innings_runs: None,
            total_runs: 0,
        }
    }

    fn record_shot(&mut self, runs: u8) {
        match runs {
            1 => self.ones += 1,
            2 => self.twos += 1,
            3 => self.threes += 1,
            4 => self.fours += 1,
            6 => self.sixes += 1,
            _ => {}
        }
        self.total_runs += u32::from(runs);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattingSummary {
    pub player: String,
    /// One row per season in the store, zero-filled where the player is absent.
    pub per_season: Vec<SeasonBattingRow>,
    pub all_seasons: SeasonBattingRow,
    /// Runs off the bat per venue, across all seasons.
    pub venue_breakdown: BTreeMap<String, u32>,
}

pub fn batting_summary(store: &RecordStore, player: &str) -> BattingSummary {
    let mut venue_breakdown = BTreeMap::new();
    let per_season: Vec<SeasonBattingRow> = store
        .seasons()
        .map(|season| season_row(season, player, &mut venue_breakdown))
        .collect();

    let all_seasons = totals_row(&per_season);

    debug!(
        "Batting summary for {}: {} runs over {} seasons",
        player,
        all_seasons.total_runs,
        per_season.len()
    );

    BattingSummary { player: player.to_string(), per_season, all_seasons, venue_breakdown }
}

fn season_row(
    season: SeasonView<'_>,
    player: &str,
    venue_breakdown: &mut BTreeMap<String, u32>,
) -> SeasonBattingRow {
    let mut row = SeasonBattingRow::empty(RowScope::Season(season.label().to_string()));
    let mut appearances = MatchSet::default();
    let mut innings_runs: FxHashMap<MatchId, u32> = FxHashMap::default();

    for ball in season.deliveries() {
        if !ball.involves_player(player) {
            continue;
        }
        appearances.insert(ball.match_id);

        if ball.batter != player {
            continue;
        }
        row.record_shot(ball.batting_run);
        *innings_runs.entry(ball.match_id).or_insert(0) += u32::from(ball.batting_run);
        *venue_breakdown.entry(ball.venue.clone()).or_insert(0) += u32::from(ball.batting_run);
    }

    row.matches_played = count(&appearances);
    row.highest_innings_runs = innings_runs.values().copied().max();
    row
}

fn totals_row(per_season: &[SeasonBattingRow]) -> SeasonBattingRow {
    let mut total = SeasonBattingRow::empty(RowScope::AllSeasons);
    for row in per_season {
        total.matches_played += row.matches_played;
        total.ones += row.ones;
        total.twos += row.twos;
        total.threes += row.threes;
        total.fours += row.fours;
        total.sixes += row.sixes;
        total.total_runs += row.total_runs;
    }
    total.highest_innings_runs = max_present(per_season.iter().map(|r| r.highest_innings_runs));
    total
}
