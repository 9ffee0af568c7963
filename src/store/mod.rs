//! Verification record storage.
//!
//! Records live behind a keyed repository trait so the storage backend
//! can change without touching the callback flow. The only backend
//! shipped here is in-memory; durable storage is a deployment concern.

pub mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reputation::{ReputationScore, SocialMetrics};

/// One verified attestation and everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Identifier assigned by the attestation network.
    pub proof_identifier: String,

    /// Wallet address bound to the proof, lowercased. Absent when the
    /// verification flow never attached one.
    pub wallet_address: Option<String>,

    /// Social-account handle the metrics belong to.
    pub username: String,

    pub metrics: SocialMetrics,

    pub score: ReputationScore,

    pub verified_at: DateTime<Utc>,
}

/// Keyed repository for verification records.
pub trait ReputationStore: Send + Sync {
    /// Insert or replace the record for its proof identifier. When the
    /// record carries a wallet address, later lookups by that address
    /// resolve to this record (latest verification wins).
    fn put(&self, record: VerificationRecord);

    fn get_by_identifier(&self, identifier: &str) -> Option<VerificationRecord>;

    /// Case-insensitive wallet-address lookup.
    fn get_by_address(&self, address: &str) -> Option<VerificationRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
