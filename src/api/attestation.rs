//! Attestation API Endpoints
//!
//! The frontend fetches a session config here, runs the verification flow
//! against the attestation network, and the network posts the resulting
//! proof back to the callback endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::attestation::{create_session, AttestationProof, SessionConfig, VerifyError};
use crate::config::AttestationConfig;
use crate::reputation::ReputationManager;

/// API state for attestation endpoints
#[derive(Clone)]
pub struct AttestationApiState {
    pub credentials: Arc<AttestationConfig>,
    pub base_url: String,
    pub manager: Arc<ReputationManager>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: SessionConfig,
}

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub success: bool,
    pub message: String,
    pub score: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// Endpoints

/// GET /api/attestation/config - Session config for the frontend
pub async fn get_session_config(
    State(state): State<AttestationApiState>,
) -> Json<SessionResponse> {
    let session = create_session(&state.credentials, &state.base_url);

    info!(
        session_id = %session.session_id,
        callback_url = %session.callback_url,
        "Attestation session created"
    );

    Json(SessionResponse {
        success: true,
        session,
    })
}

/// POST /api/attestation/callback - Receive proofs from the attestation network
pub async fn proof_callback(
    State(state): State<AttestationApiState>,
    Json(proof): Json<AttestationProof>,
) -> Result<Json<CallbackResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.manager.process_proof(&proof) {
        Ok(record) => Ok(Json(CallbackResponse {
            success: true,
            message: "Proof verified successfully".to_string(),
            score: record.score.value(),
        })),
        Err(err @ VerifyError::MissingIdentifier) => {
            warn!("Invalid proof format: {err}");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid proof format".to_string(),
                    message: err.to_string(),
                }),
            ))
        }
        Err(err) => {
            warn!(identifier = %proof.identifier, "Proof verification failed: {err}");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Proof verification failed".to_string(),
                    message: err.to_string(),
                }),
            ))
        }
    }
}

/// Create the attestation API router
pub fn create_attestation_router(state: AttestationApiState) -> Router {
    Router::new()
        .route("/config", get(get_session_config))
        .route("/callback", post(proof_callback))
        .with_state(state)
}
