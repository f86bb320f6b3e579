//! # Match Filter
//!
//! Season/team selection over the match table, with an advisory for selected
//! teams that never played in any selected season.

use crate::models::{Match, Selection};
use crate::store::RecordStore;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, warn};

/// Rows of the match table plus an optional advisory for the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchFilterResult<'a> {
    pub rows: Vec<&'a Match>,
    pub warning: Option<String>,
}

impl MatchFilterResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filter the store's matches by season and team selection.
///
/// An unset or empty selection on either side yields an empty result without a
/// warning. Rows keep the store's source order. The advisory never removes rows.
pub fn filter_matches<'a>(
    store: &'a RecordStore,
    seasons: Option<&Selection>,
    teams: Option<&Selection>,
) -> MatchFilterResult<'a> {
    let (seasons, teams) = match (seasons, teams) {
        (Some(s), Some(t)) if !s.is_empty() && !t.is_empty() => (s, t),
        _ => return MatchFilterResult::default(),
    };

    let rows: Vec<&Match> = if seasons.is_wildcard() && teams.is_wildcard() {
        store.matches().iter().collect()
    } else {
        store
            .matches()
            .iter()
            .filter(|m| seasons.contains(&m.season))
            .filter(|m| teams.contains(&m.team1) || teams.contains(&m.team2))
            .collect()
    };

    let warning = absent_team_warning(store, seasons, teams);
    if let Some(message) = &warning {
        warn!("{}", message);
    }

    debug!("Match filter selected {} of {} matches", rows.len(), store.matches().len());

    MatchFilterResult { rows, warning }
}

/// Advisory naming each selected team that played in none of the selected seasons.
fn absent_team_warning(
    store: &RecordStore,
    seasons: &Selection,
    teams: &Selection,
) -> Option<String> {
    let (Selection::Specific(season_labels), Selection::Specific(team_names)) = (seasons, teams)
    else {
        return None;
    };

    let mut played: FxHashSet<&str> = FxHashSet::default();
    for label in season_labels {
        if let Some(season) = store.season(label) {
            for m in season.matches() {
                played.insert(&m.team1);
                played.insert(&m.team2);
            }
        }
    }

    let absent: Vec<&str> = team_names
        .iter()
        .map(String::as_str)
        .filter(|team| !played.contains(team))
        .collect();

    if absent.is_empty() {
        None
    } else {
        Some(format!(
            "The following team(s) did not play in the selected season: {}.",
            absent.join(", ")
        ))
    }
}
