//! Picking the winning standard from a score table

use crate::model::standard::Standard;

/// Which end of the score range wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Smallest score wins (distances)
    Minimize,
    /// Largest score wins (similarities)
    Maximize,
}

impl Polarity {
    /// Whether `candidate` strictly beats `incumbent`
    ///
    /// A NaN incumbent loses to any number and a NaN candidate never wins.
    pub const fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        if incumbent.is_nan() {
            return !candidate.is_nan();
        }
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }
}

/// Score of one standard under one formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Standard that was scored
    pub standard: Standard,
    /// Distance or similarity value
    pub value: f64,
}

/// Return the standard with the extreme score
///
/// Only a strictly better score replaces the incumbent, so equal scores
/// resolve to whichever standard appears first in `scores`.
pub fn select(scores: &[Score], polarity: Polarity) -> Option<Standard> {
    scores
        .iter()
        .fold(None::<&Score>, |best, score| match best {
            Some(incumbent) if !polarity.prefers(score.value, incumbent.value) => Some(incumbent),
            _ => Some(score),
        })
        .map(|score| score.standard)
}
