//! Integration tests for the Reputation Oracle
//!
//! These tests verify end-to-end functionality of the oracle,
//! from proof callback through scoring and storage to the
//! reputation lookup endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use uncollateral_oracle::api::reputation::{
    get_reputation, get_stats, preview_score, PreviewRequest,
};
use uncollateral_oracle::api::ReputationApiState;
use uncollateral_oracle::{
    collateral_ratio_percent, interest_rate_apr_percent, AcceptAllVerifier, AttestationProof,
    MemoryStore, ProofVerifier, ReputationManager, ReputationScore, ScoreBand, SocialMetrics,
    VerifyError,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn test_manager() -> Arc<ReputationManager> {
    Arc::new(ReputationManager::new(
        Arc::new(MemoryStore::new()),
        Arc::new(AcceptAllVerifier),
    ))
}

/// Proof payload the way the attestation network posts it, with an
/// object-typed claim context.
fn proof_with_object_context(identifier: &str, address: &str) -> AttestationProof {
    serde_json::from_value(json!({
        "identifier": identifier,
        "context": { "userAddress": address },
        "claimData": {
            "provider": "twitter",
            "context": {
                "extractedParameters": {
                    "followers_count": "1500",
                    "friends_count": "300",
                    "name": "alice"
                },
                "recentTweets": [
                    { "likes": 20, "retweets": 3, "replies": 2, "impressions": 1000 }
                ]
            }
        }
    }))
    .unwrap()
}

/// Same payload with the claim context JSON-encoded as a string, the way
/// older SDK versions deliver it.
fn proof_with_string_context(identifier: &str, address: &str) -> AttestationProof {
    let context = json!({
        "userAddress": address,
        "extractedParameters": {
            "followers_count": "1500",
            "friends_count": "300",
            "name": "alice"
        }
    })
    .to_string();

    serde_json::from_value(json!({
        "identifier": identifier,
        "claimData": { "provider": "twitter", "context": context }
    }))
    .unwrap()
}

// ============================================================================
// End-to-End Verification Flow Tests
// ============================================================================

mod verification_flow {
    use super::*;

    #[test]
    fn test_callback_to_lookup_roundtrip() {
        let manager = test_manager();

        let record = manager
            .process_proof(&proof_with_object_context("0xproof", "0xDeadBeef"))
            .unwrap();

        // 1500 followers -> 200, 250 bps from tweets -> 250,
        // default age 365 -> 150, ratio 500 -> 100.
        assert_eq!(record.score.value(), 700);

        let found = manager.reputation_for("0xdeadbeef").unwrap();
        assert_eq!(found.proof_identifier, "0xproof");
        assert_eq!(found.username, "alice");
        assert_eq!(found.score, record.score);
    }

    #[test]
    fn test_string_context_proof_is_equivalent() {
        let manager = test_manager();
        let record = manager
            .process_proof(&proof_with_string_context("0xproof", "0xDeadBeef"))
            .unwrap();

        // No tweet stats in this variant, so engagement contributes 0.
        assert_eq!(record.score.value(), 450);
        assert_eq!(
            manager.reputation_for("0xDEADBEEF").unwrap().username,
            "alice"
        );
    }

    #[test]
    fn test_reverification_replaces_previous_record() {
        let manager = test_manager();
        manager
            .process_proof(&proof_with_string_context("0xfirst", "0xdeadbeef"))
            .unwrap();
        manager
            .process_proof(&proof_with_object_context("0xsecond", "0xdeadbeef"))
            .unwrap();

        let found = manager.reputation_for("0xdeadbeef").unwrap();
        assert_eq!(found.proof_identifier, "0xsecond");
        assert_eq!(found.score.value(), 700);
    }

    #[test]
    fn test_proof_without_identifier_is_rejected() {
        let manager = test_manager();
        let err = manager
            .process_proof(&AttestationProof::default())
            .unwrap_err();
        assert_eq!(err, VerifyError::MissingIdentifier);
        assert_eq!(manager.record_count(), 0);
    }

    #[test]
    fn test_proof_with_empty_claim_still_scores() {
        // A structurally-valid proof with no extractable metrics gets the
        // floor score (zero following counts as the top ratio tier, and
        // the account-age default contributes its tier).
        let manager = test_manager();
        let proof: AttestationProof =
            serde_json::from_value(json!({ "identifier": "0xbare" })).unwrap();

        let record = manager.process_proof(&proof).unwrap();
        assert_eq!(record.metrics, SocialMetrics::new(0, 0, 0, 365));
        assert_eq!(record.score.value(), 250);
        assert_eq!(record.wallet_address, None);
    }

    #[test]
    fn test_rejecting_verifier_blocks_storage() {
        struct RejectAll;
        impl ProofVerifier for RejectAll {
            fn verify(&self, _proof: &AttestationProof) -> Result<(), VerifyError> {
                Err(VerifyError::Rejected("signature mismatch".to_string()))
            }
        }

        let manager = ReputationManager::new(Arc::new(MemoryStore::new()), Arc::new(RejectAll));
        let err = manager
            .process_proof(&proof_with_object_context("0xproof", "0xdeadbeef"))
            .unwrap_err();
        assert!(matches!(err, VerifyError::Rejected(_)));
        assert_eq!(manager.record_count(), 0);
    }
}

// ============================================================================
// Reputation API Tests
// ============================================================================

mod reputation_api {
    use super::*;

    #[tokio::test]
    async fn test_lookup_endpoint_serves_terms_with_record() {
        let manager = test_manager();
        manager
            .process_proof(&proof_with_object_context("0xproof", "0xDeadBeef"))
            .unwrap();
        let state = ReputationApiState { manager };

        let response = get_reputation(State(state), Path("0xDeadBeef".to_string()))
            .await
            .unwrap();

        assert_eq!(response.0.score.value(), 700);
        assert_eq!(response.0.band, ScoreBand::Good);
        // collateral = 90 + (800 - 700) * 0.1
        assert!((response.0.terms.collateral_ratio_percent - 100.0).abs() < 1e-9);
        assert_eq!(response.0.terms.interest_rate_apr_percent, 10);
    }

    #[tokio::test]
    async fn test_stats_counts_verified_accounts() {
        let manager = test_manager();
        manager
            .process_proof(&proof_with_object_context("0xa", "0x1111"))
            .unwrap();
        manager
            .process_proof(&proof_with_object_context("0xb", "0x2222"))
            .unwrap();

        let response = get_stats(State(ReputationApiState { manager })).await;
        assert_eq!(response.0.verified_accounts, 2);
    }

    #[tokio::test]
    async fn test_preview_agrees_with_direct_computation() {
        let response = preview_score(
            State(ReputationApiState {
                manager: test_manager(),
            }),
            Json(PreviewRequest {
                follower_count: 10_000,
                following_count: 20,
                engagement_rate_bps: 500,
                account_age_days: 1_095,
            }),
        )
        .await;

        let direct = ReputationScore::compute(SocialMetrics::new(10_000, 20, 500, 1_095));
        assert_eq!(response.0.score, direct);
        assert_eq!(response.0.score.value(), 1000);
        assert!((response.0.terms.collateral_ratio_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(response.0.terms.interest_rate_apr_percent, 5);
    }
}

// ============================================================================
// Scoring Property Tests
// ============================================================================

mod scoring_properties {
    use super::*;

    #[test]
    fn test_score_is_bounded_for_arbitrary_inputs() {
        let cases = [
            (0, 0, 0, 0),
            (1, 1, 1, 1),
            (999, 1_000_000, 99, 364),
            (u64::MAX, 0, u64::MAX, u64::MAX),
            (u64::MAX, u64::MAX, 0, 0),
        ];
        for (followers, following, rate, age) in cases {
            let score =
                ReputationScore::compute(SocialMetrics::new(followers, following, rate, age));
            assert!(score.value() <= 1000, "score out of range for {followers}/{following}");
        }
    }

    #[test]
    fn test_derived_terms_are_non_increasing_in_score() {
        let mut last_ratio = f64::MAX;
        let mut last_apr = u32::MAX;
        for value in 0..=1000 {
            let score = ReputationScore::from_value(value);
            let ratio = collateral_ratio_percent(score);
            let apr = interest_rate_apr_percent(score);
            assert!(ratio <= last_ratio + 1e-9, "collateral rose at {value}");
            assert!(apr <= last_apr, "APR rose at {value}");
            last_ratio = ratio;
            last_apr = apr;
        }
    }

    #[test]
    fn test_boundary_scenarios() {
        // Blank account: only the zero-following ratio tier contributes.
        let blank = ReputationScore::compute(SocialMetrics::new(0, 0, 0, 0));
        assert_eq!(blank.value(), 100);
        assert!((collateral_ratio_percent(blank) - 150.0).abs() < f64::EPSILON);
        assert_eq!(interest_rate_apr_percent(blank), 15);

        // Every component at its cap.
        let maxed = ReputationScore::compute(SocialMetrics::new(10_000, 20, 500, 1_095));
        assert_eq!(maxed.value(), 1000);
        assert!((collateral_ratio_percent(maxed) - 50.0).abs() < f64::EPSILON);
        assert_eq!(interest_rate_apr_percent(maxed), 5);

        // The sample account from the product docs.
        let sample = ReputationScore::compute(SocialMetrics::new(1_500, 300, 250, 730));
        assert_eq!(sample.value(), 730);
        assert!((collateral_ratio_percent(sample) - 97.0).abs() < 1e-9);
        assert_eq!(interest_rate_apr_percent(sample), 10);
    }
}
