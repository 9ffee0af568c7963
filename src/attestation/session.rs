//! Verification-session configuration served to the frontend.
//!
//! The frontend needs enough to start a verification flow with the
//! attestation network: app id, provider id, a fresh session id, and the
//! callback URL proofs should be posted to. The app secret stays
//! server-side; the session carries only a digest binding it to the
//! credentials so the callback can be correlated with a session this
//! server actually issued.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::AttestationConfig;

/// Client-safe session descriptor. Serializing this must never expose
/// the app secret.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub app_id: String,
    pub provider_id: String,
    pub session_id: String,
    pub callback_url: String,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
    /// Hex SHA-256 over the session fields and the app secret.
    pub signature: String,
}

/// Build a fresh session for one verification attempt.
pub fn create_session(credentials: &AttestationConfig, base_url: &str) -> SessionConfig {
    let session_id = Uuid::new_v4().to_string();

    let mut nonce_bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = hex::encode(nonce_bytes);

    let callback_url = callback_url(base_url);
    let signature = sign_session(
        &credentials.app_id,
        &credentials.provider_id,
        &session_id,
        &nonce,
        &credentials.app_secret,
    );

    SessionConfig {
        app_id: credentials.app_id.clone(),
        provider_id: credentials.provider_id.clone(),
        session_id,
        callback_url,
        nonce,
        issued_at: Utc::now(),
        signature,
    }
}

/// Callback endpoint proofs are posted back to.
pub fn callback_url(base_url: &str) -> String {
    format!(
        "{}/api/attestation/callback",
        base_url.trim_end_matches('/')
    )
}

fn sign_session(
    app_id: &str,
    provider_id: &str,
    session_id: &str,
    nonce: &str,
    app_secret: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(app_id.as_bytes());
    hasher.update(b":");
    hasher.update(provider_id.as_bytes());
    hasher.update(b":");
    hasher.update(session_id.as_bytes());
    hasher.update(b":");
    hasher.update(nonce.as_bytes());
    hasher.update(b":");
    hasher.update(app_secret.as_bytes());
    hex::encode(hasher.finalize())
}
