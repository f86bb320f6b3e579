use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

const BALLS_PER_OVER: u32 = 6;

/// Legal balls bowled, displayed in cricket over notation.
///
/// `11` balls render as `"1.5"`: one completed over and five balls, not 1.83 overs.
/// The notation is not a decimal, so totals must be formed by adding ball counts
/// (which `Add` does) rather than adding the rendered values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegalOvers {
    balls: u32,
}

impl LegalOvers {
    pub const ZERO: LegalOvers = LegalOvers { balls: 0 };

    pub fn from_balls(balls: u32) -> Self {
        Self { balls }
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    pub fn completed_overs(&self) -> u32 {
        self.balls / BALLS_PER_OVER
    }

    /// Balls bowled in the unfinished over.
    pub fn remaining_balls(&self) -> u32 {
        self.balls % BALLS_PER_OVER
    }
}

impl fmt::Display for LegalOvers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.completed_overs(), self.remaining_balls())
    }
}

impl Add for LegalOvers {
    type Output = LegalOvers;

    fn add(self, rhs: LegalOvers) -> LegalOvers {
        LegalOvers::from_balls(self.balls + rhs.balls)
    }
}

impl Sum for LegalOvers {
    fn sum<I: Iterator<Item = LegalOvers>>(iter: I) -> Self {
        iter.fold(LegalOvers::ZERO, Add::add)
    }
}

impl Serialize for LegalOvers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
