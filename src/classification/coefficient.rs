//! Association coefficients derived from a contingency summary
//!
//! Higher values mean more similar standards.

use crate::model::contingency::ContingencySummary;
use num_traits::Float;
use std::fmt;

/// Fixed set of similarity coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    /// `a / (a + b + g + h)`
    RussellRao,
    /// `a / (a + g + h)`
    JaccardNeedham,
    /// `a / (2a + g + h)`
    Dice,
    /// `a / (a + 2(g + h))`
    SokalSneath,
}

impl Coefficient {
    /// Every coefficient in reporting order
    pub const ALL: [Self; 4] = [
        Self::RussellRao,
        Self::JaccardNeedham,
        Self::Dice,
        Self::SokalSneath,
    ];

    /// Human-readable coefficient name
    pub const fn name(self) -> &'static str {
        match self {
            Self::RussellRao => "Russell and Rao",
            Self::JaccardNeedham => "Jaccard and Needham",
            Self::Dice => "Dice",
            Self::SokalSneath => "Sokal and Sneath",
        }
    }

    /// Evaluate the coefficient on one summary
    pub fn similarity(self, summary: &ContingencySummary) -> f64 {
        match self {
            Self::RussellRao => russell_rao(summary),
            Self::JaccardNeedham => jaccard_needham(summary),
            Self::Dice => dice(summary),
            Self::SokalSneath => sokal_sneath(summary),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Divide, treating a denominator of exactly zero as one
///
/// A zero denominator yields the numerator itself rather than an error.
pub fn saturating_ratio<T: Float>(numerator: T, denominator: T) -> T {
    if denominator.is_zero() {
        numerator
    } else {
        numerator / denominator
    }
}

/// Share of co-present features among all features
pub fn russell_rao(summary: &ContingencySummary) -> f64 {
    saturating_ratio(summary.a, summary.total())
}

/// Share of co-present features, ignoring co-absent ones
pub fn jaccard_needham(summary: &ContingencySummary) -> f64 {
    saturating_ratio(summary.a, summary.total() - summary.b)
}

/// Co-present features weighted twice against mismatches
pub fn dice(summary: &ContingencySummary) -> f64 {
    saturating_ratio(summary.a, 2.0f64.mul_add(summary.a, summary.g + summary.h))
}

/// Mismatches weighted twice against co-present features
pub fn sokal_sneath(summary: &ContingencySummary) -> f64 {
    saturating_ratio(summary.a, 2.0f64.mul_add(summary.g + summary.h, summary.a))
}
