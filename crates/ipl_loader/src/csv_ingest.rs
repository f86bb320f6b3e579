//! IPL CSV → Dataset pipeline
//!
//! Reads the match sheet and the ball-by-ball sheet, then denormalizes each
//! delivery with its match's venue (left join on the match `ID`).
//!
//! `NA` and blank cells are treated as missing. Rows that fail to parse are
//! skipped, counted in [`ParseStats`] and logged.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use ipl_core::models::{Delivery, DismissalKind, Match, MatchId};
use ipl_core::store::Dataset;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Deliveries dropped because their match id is not in the match sheet.
    pub orphaned: u32,
}

/// One line of the match sheet. Unlisted columns (players, umpires) are ignored.
#[derive(Debug, Deserialize)]
struct MatchRow {
    #[serde(rename = "ID")]
    id: u64,
    #[serde(rename = "City", default)]
    city: Option<String>,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Season")]
    season: String,
    #[serde(rename = "MatchNumber", default)]
    match_number: Option<String>,
    #[serde(rename = "Team1")]
    team1: String,
    #[serde(rename = "Team2")]
    team2: String,
    #[serde(rename = "Venue")]
    venue: String,
    #[serde(rename = "TossWinner", default)]
    toss_winner: Option<String>,
    #[serde(rename = "TossDecision", default)]
    toss_decision: Option<String>,
    #[serde(rename = "SuperOver", default)]
    super_over: Option<String>,
    #[serde(rename = "WinningTeam", default)]
    winning_team: Option<String>,
    #[serde(rename = "WonBy", default)]
    won_by: Option<String>,
    #[serde(rename = "Margin", default)]
    margin: Option<String>,
    #[serde(rename = "method", default)]
    method: Option<String>,
    #[serde(rename = "Player_of_Match", default)]
    player_of_match: Option<String>,
}

impl MatchRow {
    fn into_match(self) -> Match {
        let mut m = Match::new(
            self.id,
            self.season.trim(),
            self.team1.trim(),
            self.team2.trim(),
            self.venue.trim(),
            clean(self.winning_team),
        );
        m.player_of_match = clean(self.player_of_match);
        m.city = clean(self.city);
        m.date = clean(self.date).and_then(|d| parse_date(&d));
        m.match_number = clean(self.match_number);
        m.toss_winner = clean(self.toss_winner);
        m.toss_decision = clean(self.toss_decision);
        m.super_over = clean(self.super_over).map(|v| v.eq_ignore_ascii_case("y"));
        m.won_by = clean(self.won_by);
        m.margin = clean(self.margin).and_then(|v| parse_margin(&v));
        m.method = clean(self.method);
        m
    }
}

/// One line of the ball-by-ball sheet, before the venue join.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRow {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(default)]
    pub innings: Option<u8>,
    pub overs: u8,
    pub ballnumber: u8,
    pub batter: String,
    pub bowler: String,
    #[serde(rename = "non-striker", default)]
    pub non_striker: Option<String>,
    #[serde(default)]
    pub extra_type: Option<String>,
    pub batsman_run: u8,
    #[serde(default)]
    pub extras_run: Option<u8>,
    pub total_run: u8,
    #[serde(rename = "isWicketDelivery")]
    pub is_wicket_delivery: u8,
    #[serde(default)]
    pub player_out: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub fielders_involved: Option<String>,
    #[serde(rename = "BattingTeam", default)]
    pub batting_team: Option<String>,
}

impl DeliveryRow {
    pub fn into_delivery(self, venue: String) -> Delivery {
        let mut d = Delivery::new(
            self.id,
            self.overs,
            self.ballnumber,
            self.batter.trim(),
            self.bowler.trim(),
            venue,
        );
        d.innings = self.innings.unwrap_or(1);
        d.non_striker = clean(self.non_striker).unwrap_or_default();
        d.batting_run = self.batsman_run;
        d.extras_run = self.extras_run.unwrap_or(0);
        d.total_run = self.total_run;
        d.extra_type = clean(self.extra_type);
        d.is_wicket_delivery = self.is_wicket_delivery != 0;
        d.player_out = clean(self.player_out);
        d.dismissal_kind = self.kind.as_deref().and_then(DismissalKind::from_label);
        d.fielders_involved = clean(self.fielders_involved);
        d.batting_team = clean(self.batting_team);
        d
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("na"))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Margins are whole numbers but pandas exports sometimes write them as `7.0`.
fn parse_margin(value: &str) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().filter(|m| *m >= 0.0).map(|m| m.round() as u32))
}

fn read_rows<T, R>(reader: R, sheet: &str) -> (Vec<T>, ParseStats)
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut stats = ParseStats::default();
    let mut rows = Vec::new();

    for result in csv_reader.deserialize::<T>() {
        stats.total_rows += 1;
        match result {
            Ok(row) => {
                rows.push(row);
                stats.parsed += 1;
            }
            Err(e) => {
                stats.failed += 1;
                warn!("{} line {} - CSV parse error: {}", sheet, stats.total_rows, e);
            }
        }
    }

    (rows, stats)
}

pub fn read_matches<R: Read>(reader: R) -> Result<(Vec<Match>, ParseStats)> {
    let (rows, stats) = read_rows::<MatchRow, _>(reader, "matches");
    if stats.parsed == 0 {
        anyhow::bail!("No valid matches parsed from CSV");
    }
    Ok((rows.into_iter().map(MatchRow::into_match).collect(), stats))
}

pub fn read_deliveries<R: Read>(reader: R) -> Result<(Vec<DeliveryRow>, ParseStats)> {
    let (rows, stats) = read_rows::<DeliveryRow, _>(reader, "deliveries");
    if stats.parsed == 0 {
        anyhow::bail!("No valid deliveries parsed from CSV");
    }
    Ok((rows, stats))
}

pub fn parse_matches_csv(csv_path: &Path) -> Result<(Vec<Match>, ParseStats)> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    read_matches(file).with_context(|| format!("Failed to parse {}", csv_path.display()))
}

pub fn parse_deliveries_csv(csv_path: &Path) -> Result<(Vec<DeliveryRow>, ParseStats)> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    read_deliveries(file).with_context(|| format!("Failed to parse {}", csv_path.display()))
}

/// Attach each delivery's venue from its match. Deliveries whose match is
/// missing are dropped and counted in `stats.orphaned`.
pub fn join_venues(
    matches: &[Match],
    rows: Vec<DeliveryRow>,
    stats: &mut ParseStats,
) -> Vec<Delivery> {
    let venues: FxHashMap<MatchId, &str> =
        matches.iter().map(|m| (m.id, m.venue.as_str())).collect();

    let mut deliveries = Vec::with_capacity(rows.len());
    for row in rows {
        match venues.get(&MatchId(row.id)) {
            Some(venue) => deliveries.push(row.into_delivery(venue.to_string())),
            None => {
                stats.orphaned += 1;
                warn!("Delivery references unknown match {}, skipping", row.id);
            }
        }
    }
    deliveries
}

/// Full pipeline: both sheets → joined [`Dataset`].
pub fn load_dataset(matches_csv: &Path, deliveries_csv: &Path) -> Result<Dataset> {
    let (matches, match_stats) = parse_matches_csv(matches_csv)?;
    info!(
        "Parsed {} matches (failed: {}, total rows: {})",
        match_stats.parsed, match_stats.failed, match_stats.total_rows
    );

    let (rows, mut ball_stats) = parse_deliveries_csv(deliveries_csv)?;
    let deliveries = join_venues(&matches, rows, &mut ball_stats);
    info!(
        "Parsed {} deliveries (failed: {}, orphaned: {}, total rows: {})",
        deliveries.len(),
        ball_stats.failed,
        ball_stats.orphaned,
        ball_stats.total_rows
    );

    Ok(Dataset::new(matches, deliveries))
}
