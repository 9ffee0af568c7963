//! Reputation Score Computation
//!
//! Maps verified social metrics to a bounded score in [0, 1000]. Four
//! weighted components (followers, engagement, account age, follower ratio)
//! are summed and capped. The computation is a pure total function: every
//! input combination produces a defined score, including a zero following
//! count, which is treated as the maximum ratio tier.
//!
//! This is the single canonical implementation; the API layer and any
//! display surface derive from it instead of re-deriving the weights.

use serde::{Deserialize, Deserializer, Serialize};

use crate::reputation::metrics::SocialMetrics;

/// Upper bound of the reputation scale.
pub const MAX_SCORE: u32 = 1000;

/// Bounded reputation score in [0, 1000].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReputationScore(u32);

// Deserialization clamps instead of deriving so stored values can never
// re-enter the system outside the valid range.
impl<'de> Deserialize<'de> for ReputationScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

impl ReputationScore {
    /// Compute the score for one set of verified metrics.
    ///
    /// Deterministic, constant-time, no I/O. Component weights:
    /// followers max 300, engagement max 400, account age max 200,
    /// follower/following ratio max 100.
    pub fn compute(metrics: SocialMetrics) -> Self {
        let total = follower_component(metrics.follower_count)
            + engagement_component(metrics.engagement_rate_bps)
            + account_age_component(metrics.account_age_days)
            + ratio_component(metrics.follower_count, metrics.following_count);

        Self(total.min(MAX_SCORE))
    }

    /// Clamp an arbitrary stored value back into the valid range.
    pub fn from_value(value: u32) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn band(self) -> ScoreBand {
        ScoreBand::of(self)
    }
}

/// Followers contribute up to 300 points.
fn follower_component(followers: u64) -> u32 {
    match followers {
        f if f >= 10_000 => 300,
        f if f >= 5_000 => 250,
        f if f >= 1_000 => 200,
        f => (f * 200 / 1_000) as u32,
    }
}

/// Engagement contributes up to 400 points. Input is basis points.
fn engagement_component(rate_bps: u64) -> u32 {
    match rate_bps {
        r if r >= 500 => 400,
        r if r >= 300 => 350,
        r if r >= 100 => 250,
        r => (r * 250 / 100) as u32,
    }
}

/// Account age contributes up to 200 points. Tiers at 1, 2, and 3 years.
fn account_age_component(age_days: u64) -> u32 {
    match age_days {
        d if d >= 1_095 => 200,
        d if d >= 730 => 180,
        d if d >= 365 => 150,
        d => (d * 150 / 365) as u32,
    }
}

/// Follower/following ratio contributes up to 100 points.
///
/// A zero following count means the ratio is unbounded, which counts as
/// the maximum tier. The intermediate product is widened so extreme
/// follower counts cannot overflow.
fn ratio_component(followers: u64, following: u64) -> u32 {
    if following == 0 {
        return 100;
    }

    let ratio = followers as u128 * 100 / following as u128;
    match ratio {
        r if r >= 500 => 100,
        r if r >= 200 => 80,
        _ => 60,
    }
}

/// Qualitative band for one score, used by display surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Insufficient,
}

impl ScoreBand {
    pub fn of(score: ReputationScore) -> Self {
        match score.value() {
            s if s >= 800 => Self::Excellent,
            s if s >= 600 => Self::Good,
            s if s >= 400 => Self::Fair,
            s if s >= 300 => Self::Poor,
            _ => Self::Insufficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(followers: u64, following: u64, rate_bps: u64, age_days: u64) -> u32 {
        ReputationScore::compute(SocialMetrics::new(followers, following, rate_bps, age_days))
            .value()
    }

    #[test]
    fn test_all_zero_metrics_score_from_ratio_tier_only() {
        // Zero following counts as the maximum ratio tier, so the floor
        // score for a blank account is 100, not 0.
        assert_eq!(score_of(0, 0, 0, 0), 100);
    }

    #[test]
    fn test_maximum_tier_metrics_reach_the_cap() {
        assert_eq!(score_of(10_000, 20, 500, 1_095), 1000);
    }

    #[test]
    fn test_sample_account_scores_730() {
        // 1500 followers -> 200, 250 bps -> 250, 730 days -> 180,
        // ratio 500 -> 100.
        assert_eq!(score_of(1_500, 300, 250, 730), 730);
    }

    #[test]
    fn test_score_never_exceeds_cap() {
        assert_eq!(score_of(u64::MAX, 1, u64::MAX, u64::MAX), 1000);
    }

    #[test]
    fn test_follower_tiers() {
        assert_eq!(follower_component(0), 0);
        assert_eq!(follower_component(500), 100);
        assert_eq!(follower_component(999), 199);
        assert_eq!(follower_component(1_000), 200);
        assert_eq!(follower_component(5_000), 250);
        assert_eq!(follower_component(10_000), 300);
    }

    #[test]
    fn test_engagement_tiers() {
        assert_eq!(engagement_component(0), 0);
        assert_eq!(engagement_component(99), 247);
        assert_eq!(engagement_component(100), 250);
        assert_eq!(engagement_component(300), 350);
        assert_eq!(engagement_component(500), 400);
    }

    #[test]
    fn test_account_age_tiers() {
        assert_eq!(account_age_component(0), 0);
        assert_eq!(account_age_component(364), 149);
        assert_eq!(account_age_component(365), 150);
        assert_eq!(account_age_component(730), 180);
        assert_eq!(account_age_component(1_095), 200);
    }

    #[test]
    fn test_ratio_tiers() {
        assert_eq!(ratio_component(0, 0), 100);
        assert_eq!(ratio_component(100, 0), 100);
        assert_eq!(ratio_component(500, 100), 100);
        assert_eq!(ratio_component(200, 100), 80);
        assert_eq!(ratio_component(100, 100), 60);
        assert_eq!(ratio_component(0, 100), 60);
    }

    #[test]
    fn test_ratio_survives_extreme_follower_counts() {
        assert_eq!(ratio_component(u64::MAX, 1), 100);
    }

    #[test]
    fn test_monotone_in_followers() {
        let mut last = 0;
        for followers in [0, 100, 999, 1_000, 4_999, 5_000, 9_999, 10_000, 50_000] {
            let score = score_of(followers, 10, 250, 730);
            assert!(score >= last, "score regressed at {followers} followers");
            last = score;
        }
    }

    #[test]
    fn test_monotone_in_engagement() {
        let mut last = 0;
        for rate in [0, 50, 99, 100, 299, 300, 499, 500, 2_000] {
            let score = score_of(1_500, 300, rate, 730);
            assert!(score >= last, "score regressed at {rate} bps");
            last = score;
        }
    }

    #[test]
    fn test_monotone_in_account_age() {
        let mut last = 0;
        for days in [0, 100, 364, 365, 729, 730, 1_094, 1_095, 4_000] {
            let score = score_of(1_500, 300, 250, days);
            assert!(score >= last, "score regressed at {days} days");
            last = score;
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let metrics = SocialMetrics::new(1_500, 300, 250, 730);
        assert_eq!(
            ReputationScore::compute(metrics),
            ReputationScore::compute(metrics)
        );
    }

    #[test]
    fn test_from_value_clamps() {
        assert_eq!(ReputationScore::from_value(5_000).value(), 1000);
        assert_eq!(ReputationScore::from_value(730).value(), 730);
    }

    #[test]
    fn test_deserialization_clamps_out_of_range_values() {
        let score: ReputationScore = serde_json::from_str("4000").unwrap();
        assert_eq!(score.value(), 1000);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ReputationScore::from_value(850).band(), ScoreBand::Excellent);
        assert_eq!(ReputationScore::from_value(800).band(), ScoreBand::Excellent);
        assert_eq!(ReputationScore::from_value(700).band(), ScoreBand::Good);
        assert_eq!(ReputationScore::from_value(450).band(), ScoreBand::Fair);
        assert_eq!(ReputationScore::from_value(320).band(), ScoreBand::Poor);
        assert_eq!(ReputationScore::from_value(100).band(), ScoreBand::Insufficient);
    }
}
