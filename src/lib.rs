//! UnCollateral Reputation Oracle
//!
//! Backend service that turns verified social-account attestations into a
//! bounded reputation score and the loan terms that score entitles a
//! borrower to. The attestation network proves account metrics; this
//! oracle scores them and serves the result to the lending frontend.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs         - Crate root with re-exports
//! ├── main.rs        - Server entrypoint
//! ├── config.rs      - Configuration management
//! ├── reputation/    - Scoring core
//! │   ├── metrics.rs - Verified social metrics (input)
//! │   ├── score.rs   - Bounded 0-1000 score computation
//! │   ├── terms.rs   - Collateral ratio, APR, repayment
//! │   └── manager.rs - Verify-extract-score-store orchestrator
//! ├── attestation/   - Attestation network integration
//! │   ├── proof.rs   - Proof payload types
//! │   ├── extract.rs - Metric extraction
//! │   ├── session.rs - Session configs for the frontend
//! │   └── verifier.rs- Proof acceptance seam
//! ├── store/         - Verification record storage
//! │   └── memory.rs  - In-memory keyed store
//! └── api/           - HTTP API endpoints
//!     ├── attestation.rs - Session config + proof callback
//!     ├── reputation.rs  - Lookup, preview, stats
//!     ├── web.rs         - Service index + health
//!     └── middleware.rs  - Rate limiting, headers, logging
//! ```

pub mod api;
pub mod attestation;
pub mod config;
pub mod reputation;
pub mod store;

// Re-export main types for convenience
pub use config::OracleConfig;

pub use reputation::{
    collateral_ratio_percent, interest_rate_apr_percent, total_repayment, LoanTerms,
    ReputationManager, ReputationScore, ScoreBand, SocialMetrics, MAX_SCORE,
};

pub use attestation::{
    create_session, extract_profile, AcceptAllVerifier, AttestationProof, ExtractedProfile,
    ProofVerifier, SessionConfig, VerifyError,
};

pub use store::{MemoryStore, ReputationStore, VerificationRecord};

pub use api::{
    create_attestation_router, create_reputation_router, create_web_router,
    AttestationApiState, ReputationApiState, SecurityMiddlewareConfig, SecurityState,
};
