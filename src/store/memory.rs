//! In-memory record store.
//!
//! Process-wide, no eviction. Suitable for the demo deployment this
//! oracle ships in; anything durable belongs behind the same trait.

use dashmap::DashMap;

use crate::store::{ReputationStore, VerificationRecord};

#[derive(Debug, Default)]
pub struct MemoryStore {
    /// proof identifier -> record
    records: DashMap<String, VerificationRecord>,

    /// lowercased wallet address -> proof identifier
    address_index: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReputationStore for MemoryStore {
    fn put(&self, record: VerificationRecord) {
        if let Some(address) = &record.wallet_address {
            self.address_index
                .insert(address.to_lowercase(), record.proof_identifier.clone());
        }
        self.records.insert(record.proof_identifier.clone(), record);
    }

    fn get_by_identifier(&self, identifier: &str) -> Option<VerificationRecord> {
        self.records.get(identifier).map(|r| r.value().clone())
    }

    fn get_by_address(&self, address: &str) -> Option<VerificationRecord> {
        let identifier = self.address_index.get(&address.to_lowercase())?;
        self.records.get(identifier.value()).map(|r| r.value().clone())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
