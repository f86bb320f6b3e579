use super::MatchId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest ball number inside an over that still counts as a legal delivery.
/// Larger numbers are extras re-bowled within the same over.
pub const LEGAL_BALLS_PER_OVER: u8 = 6;

/// Manner in which a batter was dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Caught,
    CaughtAndBowled,
    Bowled,
    Lbw,
    Stumped,
    RunOut,
    Retired,
    /// Any other dismissal (hit wicket, obstructing the field, ...), raw label kept.
    Other(String),
}

impl DismissalKind {
    /// Parse the dataset's `kind` column. `NA` and blank cells mean no dismissal.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("na") {
            return None;
        }

        let kind = match label.to_ascii_lowercase().as_str() {
            "caught" => DismissalKind::Caught,
            "caught and bowled" => DismissalKind::CaughtAndBowled,
            "bowled" => DismissalKind::Bowled,
            "lbw" => DismissalKind::Lbw,
            "stumped" => DismissalKind::Stumped,
            "run out" => DismissalKind::RunOut,
            "retired hurt" | "retired out" | "retired" => DismissalKind::Retired,
            _ => DismissalKind::Other(label.to_string()),
        };
        Some(kind)
    }

    /// Whether the wicket goes into the bowler's tally.
    ///
    /// Only caught, caught-and-bowled, bowled, lbw and stumped are credited; run-outs,
    /// retirements and every `Other` kind are not.
    pub fn is_credited_to_bowler(&self) -> bool {
        matches!(
            self,
            DismissalKind::Caught
                | DismissalKind::CaughtAndBowled
                | DismissalKind::Bowled
                | DismissalKind::Lbw
                | DismissalKind::Stumped
        )
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DismissalKind::Caught => write!(f, "caught"),
            DismissalKind::CaughtAndBowled => write!(f, "caught and bowled"),
            DismissalKind::Bowled => write!(f, "bowled"),
            DismissalKind::Lbw => write!(f, "lbw"),
            DismissalKind::Stumped => write!(f, "stumped"),
            DismissalKind::RunOut => write!(f, "run out"),
            DismissalKind::Retired => write!(f, "retired"),
            DismissalKind::Other(label) => write!(f, "{}", label),
        }
    }
}

/// One ball, denormalized with the venue of its match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub match_id: MatchId,
    #[serde(default)]
    pub innings: u8,
    pub over_number: u8,
    pub ball_number_in_over: u8,
    pub batter: String,
    pub bowler: String,
    pub non_striker: String,
    /// Runs off the bat (0-6).
    pub batting_run: u8,
    #[serde(default)]
    pub extras_run: u8,
    /// Runs conceded on this ball, extras included.
    pub total_run: u8,
    #[serde(default)]
    pub extra_type: Option<String>,
    pub is_wicket_delivery: bool,
    #[serde(default)]
    pub player_out: Option<String>,
    pub dismissal_kind: Option<DismissalKind>,
    #[serde(default)]
    pub fielders_involved: Option<String>,
    #[serde(default)]
    pub batting_team: Option<String>,
    pub venue: String,
}

impl Delivery {
    /// Legal ball with no runs and no wicket; callers fill in what they need.
    pub fn new(
        match_id: impl Into<MatchId>,
        over_number: u8,
        ball_number_in_over: u8,
        batter: impl Into<String>,
        bowler: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            innings: 1,
            over_number,
            ball_number_in_over,
            batter: batter.into(),
            bowler: bowler.into(),
            non_striker: String::new(),
            batting_run: 0,
            extras_run: 0,
            total_run: 0,
            extra_type: None,
            is_wicket_delivery: false,
            player_out: None,
            dismissal_kind: None,
            fielders_involved: None,
            batting_team: None,
            venue: venue.into(),
        }
    }

    /// Ball numbers 1..=6 count toward the over; re-bowled extras (7+) do not.
    pub fn is_legal(&self) -> bool {
        (1..=LEGAL_BALLS_PER_OVER).contains(&self.ball_number_in_over)
    }

    /// The dismissal on this ball, if it is a wicket the bowler is credited with.
    pub fn bowler_wicket(&self) -> Option<&DismissalKind> {
        if !self.is_wicket_delivery {
            return None;
        }
        self.dismissal_kind
            .as_ref()
            .filter(|kind| kind.is_credited_to_bowler())
    }

    pub fn involves_player(&self, player: &str) -> bool {
        self.batter == player || self.bowler == player
    }
}
