use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixture identifier as it appears in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MatchId {
    fn from(value: u64) -> Self {
        MatchId(value)
    }
}

/// One league fixture.
///
/// `winning_team` is `None` for a no-result (abandoned or washed out) fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub winning_team: Option<String>,
    #[serde(default)]
    pub player_of_match: Option<String>,

    // Descriptive columns carried through to the match table.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub match_number: Option<String>,
    #[serde(default)]
    pub toss_winner: Option<String>,
    #[serde(default)]
    pub toss_decision: Option<String>,
    #[serde(default)]
    pub super_over: Option<bool>,
    #[serde(default)]
    pub won_by: Option<String>,
    #[serde(default)]
    pub margin: Option<u32>,
    #[serde(default)]
    pub method: Option<String>,
}

impl Match {
    /// Minimal fixture with every descriptive column unset.
    pub fn new(
        id: impl Into<MatchId>,
        season: impl Into<String>,
        team1: impl Into<String>,
        team2: impl Into<String>,
        venue: impl Into<String>,
        winning_team: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            season: season.into(),
            team1: team1.into(),
            team2: team2.into(),
            venue: venue.into(),
            winning_team,
            player_of_match: None,
            city: None,
            date: None,
            match_number: None,
            toss_winner: None,
            toss_decision: None,
            super_over: None,
            won_by: None,
            margin: None,
            method: None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// The other side of the fixture, if `team` took part in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.team1 == team {
            Some(&self.team2)
        } else if self.team2 == team {
            Some(&self.team1)
        } else {
            None
        }
    }

    pub fn is_won_by(&self, team: &str) -> bool {
        self.winning_team.as_deref() == Some(team)
    }

    pub fn is_no_result(&self) -> bool {
        self.winning_team.is_none()
    }
}
