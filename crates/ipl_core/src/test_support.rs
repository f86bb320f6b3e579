//! Fixture builder shared by unit tests.

use crate::models::{Delivery, DismissalKind, Match};
use crate::store::{Dataset, RecordStore};

#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixture(
        mut self,
        id: u64,
        season: &str,
        team1: &str,
        team2: &str,
        venue: &str,
        winner: Option<&str>,
    ) -> Self {
        self.dataset
            .matches
            .push(Match::new(id, season, team1, team2, venue, winner.map(str::to_string)));
        self
    }

    /// Dot ball; venue copied from the fixture, which must already be added.
    pub fn ball(self, match_id: u64, over: u8, ball: u8, batter: &str, bowler: &str) -> Self {
        self.delivery(match_id, over, ball, batter, bowler, |_| {})
    }

    pub fn runs(
        self,
        match_id: u64,
        over: u8,
        ball: u8,
        batter: &str,
        bowler: &str,
        runs: u8,
    ) -> Self {
        self.delivery(match_id, over, ball, batter, bowler, |d| {
            d.batting_run = runs;
            d.total_run = runs;
        })
    }

    pub fn extra(
        self,
        match_id: u64,
        over: u8,
        ball: u8,
        batter: &str,
        bowler: &str,
        extras: u8,
    ) -> Self {
        self.delivery(match_id, over, ball, batter, bowler, |d| {
            d.extras_run = extras;
            d.total_run = extras;
            d.extra_type = Some("wides".to_string());
        })
    }

    pub fn wicket(
        self,
        match_id: u64,
        over: u8,
        ball: u8,
        batter: &str,
        bowler: &str,
        kind: &str,
    ) -> Self {
        let batter_out = batter.to_string();
        self.delivery(match_id, over, ball, batter, bowler, |d| {
            d.is_wicket_delivery = true;
            d.dismissal_kind = DismissalKind::from_label(kind);
            d.player_out = Some(batter_out);
        })
    }

    pub fn delivery(
        mut self,
        match_id: u64,
        over: u8,
        ball: u8,
        batter: &str,
        bowler: &str,
        customize: impl FnOnce(&mut Delivery),
    ) -> Self {
        let venue = self
            .dataset
            .matches
            .iter()
            .find(|m| m.id.0 == match_id)
            .map(|m| m.venue.clone())
            .unwrap_or_default();
        let mut delivery = Delivery::new(match_id, over, ball, batter, bowler, venue);
        customize(&mut delivery);
        self.dataset.deliveries.push(delivery);
        self
    }

    pub fn dataset(self) -> Dataset {
        self.dataset
    }

    pub fn build(self) -> RecordStore {
        RecordStore::from_dataset(self.dataset).expect("fixture dataset should be valid")
    }
}
