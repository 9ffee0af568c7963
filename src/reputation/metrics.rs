//! Verified social-account metrics.
//!
//! The attestation layer hands these to the scorer after extraction. All
//! fields are non-negative integers; engagement is carried in basis points
//! so the scorer never touches floating point.

use serde::{Deserialize, Serialize};

/// Metrics describing one verified social account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMetrics {
    /// Accounts following this user.
    pub follower_count: u64,

    /// Accounts this user follows.
    pub following_count: u64,

    /// Engagement rate in basis points (10000 = 100%).
    pub engagement_rate_bps: u64,

    /// Days since account creation.
    pub account_age_days: u64,
}

impl SocialMetrics {
    pub fn new(
        follower_count: u64,
        following_count: u64,
        engagement_rate_bps: u64,
        account_age_days: u64,
    ) -> Self {
        Self {
            follower_count,
            following_count,
            engagement_rate_bps,
            account_age_days,
        }
    }

    /// Build metrics from signed values at the untrusted-input boundary.
    ///
    /// Negative values are clamped to zero rather than rejected, so the
    /// scorer downstream stays total no matter what the caller sends.
    pub fn from_raw(
        follower_count: i64,
        following_count: i64,
        engagement_rate_bps: i64,
        account_age_days: i64,
    ) -> Self {
        Self {
            follower_count: clamp_non_negative(follower_count),
            following_count: clamp_non_negative(following_count),
            engagement_rate_bps: clamp_non_negative(engagement_rate_bps),
            account_age_days: clamp_non_negative(account_age_days),
        }
    }
}

fn clamp_non_negative(value: i64) -> u64 {
    value.max(0) as u64
}
