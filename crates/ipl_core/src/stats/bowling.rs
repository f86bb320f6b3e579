//! # Bowling Summary
//!
//! Per-season wicket profile, runs conceded and legal overs for one bowler.
//!
//! The caught bucket merges caught, caught-and-bowled and bowled dismissals. This
//! mirrors how the league dashboard has always categorised them even though a
//! bowled dismissal is not a catch; treat it as a known data-categorisation quirk.

use super::overs::LegalOvers;
use super::rows::{count, MatchSet, RowScope};
use crate::models::{Delivery, DismissalKind};
use crate::store::{RecordStore, SeasonView};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One row of the bowling table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonBowlingRow {
    pub scope: RowScope,
    /// Fixtures where the player batted or bowled at least one ball.
    pub matches_played: u32,
    /// Wickets credited to the bowler (caught, caught and bowled, bowled, lbw, stumped).
    pub total_wickets: u32,
    pub stumped_count: u32,
    /// Caught, caught and bowled, and bowled combined.
    pub caught_count: u32,
    pub lbw_count: u32,
    /// Every run conceded, extras included.
    pub runs_conceded: u32,
    pub legal_overs: LegalOvers,
}

impl SeasonBowlingRow {
    pub fn empty(scope: RowScope) -> Self {
        Self {
            scope,
            matches_played: 0,
            total_wickets: 0,
            stumped_count: 0,
            caught_count: 0,
            lbw_count: 0,
            runs_conceded: 0,
            legal_overs: LegalOvers::ZERO,
        }
    }

    fn record_wicket(&mut self, kind: &DismissalKind) {
        self.total_wickets += 1;
        match kind {
            DismissalKind::Stumped => self.stumped_count += 1,
            DismissalKind::Lbw => self.lbw_count += 1,
            DismissalKind::Caught | DismissalKind::CaughtAndBowled | DismissalKind::Bowled => {
                self.caught_count += 1
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowlingSummary {
    pub player: String,
    /// One row per season in the store, zero-filled where the player is absent.
    pub per_season: Vec<SeasonBowlingRow>,
    pub all_seasons: SeasonBowlingRow,
    /// Credited wickets per venue, across all seasons.
    pub venue_breakdown: BTreeMap<String, u32>,
}

pub fn bowling_summary(store: &RecordStore, player: &str) -> BowlingSummary {
    let mut venue_breakdown = BTreeMap::new();
    let per_season: Vec<SeasonBowlingRow> = store
        .seasons()
        .map(|season| season_row(season, player, &mut venue_breakdown))
        .collect();

    let mut all_seasons = totals_row(&per_season);
    // Over notation does not add across the dot, so the totals row counts raw balls again.
    all_seasons.legal_overs = LegalOvers::from_balls(count_legal_balls(store.deliveries(), player));

    debug!(
        "Bowling summary for {}: {} wickets in {} overs",
        player, all_seasons.total_wickets, all_seasons.legal_overs
    );

    BowlingSummary { player: player.to_string(), per_season, all_seasons, venue_breakdown }
}

fn season_row(
    season: SeasonView<'_>,
    player: &str,
    venue_breakdown: &mut BTreeMap<String, u32>,
) -> SeasonBowlingRow {
    let mut row = SeasonBowlingRow::empty(RowScope::Season(season.label().to_string()));
    let mut appearances = MatchSet::default();
    let mut legal_balls = 0u32;

    for ball in season.deliveries() {
        if !ball.involves_player(player) {
            continue;
        }
        appearances.insert(ball.match_id);

        if ball.bowler != player {
            continue;
        }
        row.runs_conceded += u32::from(ball.total_run);
        if ball.is_legal() {
            legal_balls += 1;
        }
        if let Some(kind) = ball.bowler_wicket() {
            row.record_wicket(kind);
            *venue_breakdown.entry(ball.venue.clone()).or_insert(0) += 1;
        }
    }

    row.matches_played = count(&appearances);
    row.legal_overs = LegalOvers::from_balls(legal_balls);
    row
}

fn totals_row(per_season: &[SeasonBowlingRow]) -> SeasonBowlingRow {
    let mut total = SeasonBowlingRow::empty(RowScope::AllSeasons);
    for row in per_season {
        total.matches_played += row.matches_played;
        total.total_wickets += row.total_wickets;
        total.stumped_count += row.stumped_count;
        total.caught_count += row.caught_count;
        total.lbw_count += row.lbw_count;
        total.runs_conceded += row.runs_conceded;
    }
    total
}

fn count_legal_balls<'a>(deliveries: impl IntoIterator<Item = &'a Delivery>, player: &str) -> u32 {
    deliveries
        .into_iter()
        .filter(|d| d.bowler == player && d.is_legal())
        .count() as u32
}
