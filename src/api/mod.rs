//! HTTP API endpoints for the Reputation Oracle
//!
//! Provides REST APIs for:
//! - Attestation flow (session config, proof callback)
//! - Reputation lookup and score preview
//! - Human-readable endpoints (service index, health)
//! - Security middleware (rate limiting, headers, logging)

pub mod attestation;
pub mod middleware;
pub mod reputation;
pub mod web;

pub use attestation::{create_attestation_router, AttestationApiState};
pub use middleware::{
    body_size_middleware, logging_middleware, rate_limit_middleware,
    security_headers_middleware, RateLimiter, SecurityMiddlewareConfig, SecurityState,
};
pub use reputation::{create_reputation_router, ReputationApiState};
pub use web::create_web_router;
