//! Social-metric extraction from accepted attestation proofs.
//!
//! Extraction is lenient by contract: a missing or malformed field costs
//! the proof that one metric (it falls back to a default), never the whole
//! request. The scorer downstream is total, so zeroed metrics simply
//! produce a floor score.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::attestation::proof::{count_from_value, AttestationProof, TweetStats};
use crate::reputation::SocialMetrics;

/// Fallback when the provider reports no account-creation date.
pub const DEFAULT_ACCOUNT_AGE_DAYS: u64 = 365;

/// Placeholder handle when the provider omits the account name.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// Metrics plus the account handle they were extracted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProfile {
    pub username: String,
    pub metrics: SocialMetrics,
}

/// Pull social metrics out of a proof's claim context.
///
/// Follower and following counts come from the provider's extracted
/// parameters. Engagement is computed from recent-post statistics when
/// present, otherwise zero. Account age comes from the creation timestamp
/// when present, otherwise [`DEFAULT_ACCOUNT_AGE_DAYS`].
pub fn extract_profile(proof: &AttestationProof, now: DateTime<Utc>) -> ExtractedProfile {
    let context = &proof.claim_data.context;
    let params = &context.extracted_parameters;

    let follower_count = param_count(params, "followers_count");
    let following_count = param_count(params, "friends_count");
    let username = param_str(params, "name").unwrap_or_else(|| UNKNOWN_USERNAME.to_string());

    let engagement_rate_bps = engagement_rate_bps(&context.recent_tweets);

    let account_age_days = context
        .created_at
        .as_deref()
        .and_then(|created| account_age_days(created, now))
        .unwrap_or(DEFAULT_ACCOUNT_AGE_DAYS);

    debug!(
        username = %username,
        follower_count,
        following_count,
        engagement_rate_bps,
        account_age_days,
        "Extracted social metrics from proof"
    );

    ExtractedProfile {
        username,
        metrics: SocialMetrics::new(
            follower_count,
            following_count,
            engagement_rate_bps,
            account_age_days,
        ),
    }
}

/// Engagement rate in basis points across a set of recent posts:
/// total interactions over total impressions. Zero impressions (or no
/// posts at all) yields zero rather than a division error.
pub fn engagement_rate_bps(tweets: &[TweetStats]) -> u64 {
    if tweets.is_empty() {
        return 0;
    }

    let mut interactions: u128 = 0;
    let mut impressions: u128 = 0;
    for tweet in tweets {
        interactions += u128::from(tweet.likes)
            + u128::from(tweet.retweets)
            + u128::from(tweet.replies);
        impressions += u128::from(tweet.impressions);
    }

    if impressions == 0 {
        return 0;
    }

    (interactions * 10_000 / impressions) as u64
}

/// Days between an RFC 3339 creation timestamp and `now`, floored at zero.
/// Returns `None` when the timestamp does not parse.
pub fn account_age_days(created_at: &str, now: DateTime<Utc>) -> Option<u64> {
    let created = DateTime::parse_from_rfc3339(created_at.trim()).ok()?;
    Some((now - created.with_timezone(&Utc)).num_days().max(0) as u64)
}

fn param_count(params: &HashMap<String, Value>, key: &str) -> u64 {
    params.get(key).map(count_from_value).unwrap_or(0)
}

fn param_str(params: &HashMap<String, Value>, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
