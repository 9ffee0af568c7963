//! Reputation Manager - Main Orchestrator
//!
//! Coordinates the callback flow: verify the proof, extract metrics,
//! compute the score, persist the record. Lookups re-serve stored
//! records; the score itself is never recomputed from storage.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::attestation::{extract_profile, AttestationProof, ProofVerifier, VerifyError};
use crate::reputation::score::ReputationScore;
use crate::store::{ReputationStore, VerificationRecord};

pub struct ReputationManager {
    store: Arc<dyn ReputationStore>,
    verifier: Arc<dyn ProofVerifier>,
}

impl ReputationManager {
    pub fn new(store: Arc<dyn ReputationStore>, verifier: Arc<dyn ProofVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Run one proof through the full pipeline and persist the outcome.
    pub fn process_proof(
        &self,
        proof: &AttestationProof,
    ) -> Result<VerificationRecord, VerifyError> {
        self.verifier.verify(proof)?;

        let profile = extract_profile(proof, Utc::now());
        let score = ReputationScore::compute(profile.metrics);

        let record = VerificationRecord {
            proof_identifier: proof.identifier.clone(),
            wallet_address: proof.wallet_address().map(str::to_lowercase),
            username: profile.username,
            metrics: profile.metrics,
            score,
            verified_at: Utc::now(),
        };

        self.store.put(record.clone());

        info!(
            identifier = %record.proof_identifier,
            username = %record.username,
            score = record.score.value(),
            "Proof verified and stored"
        );

        Ok(record)
    }

    /// Stored verification for a wallet address, if any.
    pub fn reputation_for(&self, address: &str) -> Option<VerificationRecord> {
        self.store.get_by_address(address)
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}
