//! Reputation scoring for under-collateralized lending.
//!
//! The scorer is a pure total function over four verified social metrics;
//! loan terms derive from the score alone. The manager orchestrates the
//! verify-extract-score-store pipeline around it.
//!
//! ```text
//! ┌───────────────┐     ┌───────────────────┐     ┌────────────────┐
//! │ SocialMetrics │────►│ ReputationScore   │────►│ LoanTerms      │
//! │ (metrics.rs)  │     │ (score.rs, 0-1000)│     │ (terms.rs)     │
//! └───────────────┘     └───────────────────┘     └────────────────┘
//!                                ▲
//!                                │
//!                       ┌────────────────────┐
//!                       │ ReputationManager  │
//!                       │ (orchestrator)     │
//!                       └────────────────────┘
//! ```
//!
//! ## Score model
//!
//! - Followers: up to 300 points (tiers at 1k / 5k / 10k)
//! - Engagement: up to 400 points (basis points, tiers at 100 / 300 / 500)
//! - Account age: up to 200 points (tiers at 1 / 2 / 3 years)
//! - Follower/following ratio: up to 100 points; zero following counts
//!   as the top tier
//! - Sum capped at 1000

mod manager;
mod metrics;
mod score;
mod terms;

pub use manager::ReputationManager;
pub use metrics::SocialMetrics;
pub use score::{ReputationScore, ScoreBand, MAX_SCORE};
pub use terms::{
    collateral_ratio_percent, interest_rate_apr_percent, total_repayment, LoanTerms,
    MAX_COLLATERAL_RATIO_PERCENT,
};
