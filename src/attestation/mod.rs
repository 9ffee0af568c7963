//! Attestation integration.
//!
//! Everything between the attestation network and the scorer:
//! session configs handed to the frontend, proof payload parsing,
//! metric extraction, and the acceptance seam.
//!
//! ```text
//! ┌──────────────┐   session config   ┌──────────────┐
//! │   Frontend   │◄───────────────────│  session.rs  │
//! └──────┬───────┘                    └──────────────┘
//!        │ verification flow
//!        ▼
//! ┌──────────────┐   proof callback   ┌──────────────┐
//! │ Attestation  │───────────────────►│  proof.rs    │
//! │   network    │                    │  verifier.rs │
//! └──────────────┘                    │  extract.rs  │
//!                                     └──────┬───────┘
//!                                            ▼
//!                                      SocialMetrics
//! ```

pub mod extract;
pub mod proof;
pub mod session;
pub mod verifier;

pub use extract::{extract_profile, ExtractedProfile, DEFAULT_ACCOUNT_AGE_DAYS};
pub use proof::{AttestationProof, ClaimData, ProofContext, TweetStats};
pub use session::{create_session, SessionConfig};
pub use verifier::{AcceptAllVerifier, ProofVerifier, VerifyError};
