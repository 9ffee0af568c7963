//! Loan terms derived from a reputation score.
//!
//! Collateral ratio and interest rate are pure functions of the score
//! alone, never of the underlying metrics.

use serde::{Deserialize, Serialize};

use crate::reputation::score::{ReputationScore, ScoreBand};

/// Hard ceiling on the collateral requirement, reached by low scores.
pub const MAX_COLLATERAL_RATIO_PERCENT: f64 = 150.0;

/// Collateral ratio as a percentage of loan principal.
///
/// Piecewise linear and non-increasing in score: 50-70% for scores of 800
/// and above, 90-120% from 500, and 130% up to the 150% cap below that.
pub fn collateral_ratio_percent(score: ReputationScore) -> f64 {
    let s = f64::from(score.value());
    match score.value() {
        v if v >= 800 => 50.0 + (1000.0 - s) * 0.1,
        v if v >= 500 => 90.0 + (800.0 - s) * 0.1,
        _ => (130.0 + (500.0 - s) * 0.1).min(MAX_COLLATERAL_RATIO_PERCENT),
    }
}

/// Annual interest rate as a percentage. Step function of the score.
pub fn interest_rate_apr_percent(score: ReputationScore) -> u32 {
    match score.value() {
        v if v >= 800 => 5,
        v if v >= 500 => 10,
        _ => 15,
    }
}

/// Total repayment for a simple-interest loan over `duration_days`.
pub fn total_repayment(principal: f64, apr_percent: u32, duration_days: u32) -> f64 {
    let interest =
        principal * f64::from(apr_percent) * f64::from(duration_days) / (365.0 * 100.0);
    principal + interest
}

/// The borrowing terms one score entitles an account to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub score: ReputationScore,
    pub band: ScoreBand,
    pub collateral_ratio_percent: f64,
    pub interest_rate_apr_percent: u32,
}

impl LoanTerms {
    pub fn for_score(score: ReputationScore) -> Self {
        Self {
            score,
            band: score.band(),
            collateral_ratio_percent: collateral_ratio_percent(score),
            interest_rate_apr_percent: interest_rate_apr_percent(score),
        }
    }
}
