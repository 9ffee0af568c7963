//! Reputation API Endpoints
//!
//! Serves stored verification records by wallet address and offers a
//! stateless score preview so display surfaces never re-derive the
//! scoring weights themselves.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::reputation::{
    LoanTerms, ReputationManager, ReputationScore, ScoreBand, SocialMetrics,
};

/// API state for reputation endpoints
#[derive(Clone)]
pub struct ReputationApiState {
    pub manager: Arc<ReputationManager>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct ReputationResponse {
    pub address: String,
    pub username: String,
    pub verified: bool,
    pub verified_at: DateTime<Utc>,
    pub metrics: SocialMetrics,
    pub score: ReputationScore,
    pub band: ScoreBand,
    pub terms: LoanTerms,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Raw counts; negative values are clamped to zero, not rejected.
    pub follower_count: i64,
    pub following_count: i64,
    pub engagement_rate_bps: i64,
    pub account_age_days: i64,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub metrics: SocialMetrics,
    pub score: ReputationScore,
    pub band: ScoreBand,
    pub terms: LoanTerms,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub verified_accounts: usize,
}

// Endpoints

/// GET /api/reputation/{address} - Stored reputation for a wallet address
pub async fn get_reputation(
    State(state): State<ReputationApiState>,
    Path(address): Path<String>,
) -> Result<Json<ReputationResponse>, (StatusCode, String)> {
    let record = state.manager.reputation_for(&address).ok_or((
        StatusCode::NOT_FOUND,
        "No verified reputation data for this address".to_string(),
    ))?;

    Ok(Json(ReputationResponse {
        address: record.wallet_address.unwrap_or(address),
        username: record.username,
        verified: true,
        verified_at: record.verified_at,
        metrics: record.metrics,
        score: record.score,
        band: record.score.band(),
        terms: LoanTerms::for_score(record.score),
    }))
}

/// POST /api/reputation/preview - Score metrics without storing anything
pub async fn preview_score(
    State(_state): State<ReputationApiState>,
    Json(payload): Json<PreviewRequest>,
) -> Json<PreviewResponse> {
    let metrics = SocialMetrics::from_raw(
        payload.follower_count,
        payload.following_count,
        payload.engagement_rate_bps,
        payload.account_age_days,
    );
    let score = ReputationScore::compute(metrics);

    Json(PreviewResponse {
        metrics,
        score,
        band: score.band(),
        terms: LoanTerms::for_score(score),
    })
}

/// GET /api/reputation/stats - Overall verification stats
pub async fn get_stats(State(state): State<ReputationApiState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        verified_accounts: state.manager.record_count(),
    })
}

/// Create the reputation API router
pub fn create_reputation_router(state: ReputationApiState) -> Router {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/preview", post(preview_score))
        .route("/{address}", get(get_reputation))
        .with_state(state)
}
