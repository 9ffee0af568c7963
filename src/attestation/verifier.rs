//! Proof acceptance seam.
//!
//! Structural validation lives here; cryptographic verification of the
//! attestation signatures sits behind the [`ProofVerifier`] trait. The
//! only implementation today accepts every structurally-valid proof.

use thiserror::Error;
use tracing::warn;

use crate::attestation::proof::AttestationProof;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("proof is missing an identifier")]
    MissingIdentifier,

    #[error("proof rejected: {0}")]
    Rejected(String),
}

/// Decides whether a proof is acceptable. Implementations must be cheap
/// to call and must not perform I/O on the request path.
pub trait ProofVerifier: Send + Sync {
    fn verify(&self, proof: &AttestationProof) -> Result<(), VerifyError>;
}

/// Checks the proof carries the fields every downstream step relies on.
pub fn validate_structure(proof: &AttestationProof) -> Result<(), VerifyError> {
    if proof.identifier.trim().is_empty() {
        return Err(VerifyError::MissingIdentifier);
    }
    Ok(())
}

/// Accepts every structurally-valid proof without checking signatures.
///
/// TODO: replace with attestor signature verification before this oracle
/// gates real collateral; until then every well-formed payload passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllVerifier;

impl ProofVerifier for AcceptAllVerifier {
    fn verify(&self, proof: &AttestationProof) -> Result<(), VerifyError> {
        validate_structure(proof)?;
        warn!(
            identifier = %proof.identifier,
            "Accepting proof without cryptographic verification"
        );
        Ok(())
    }
}
