//! Web API for human-readable endpoints
//!
//! Endpoints:
//!   GET /       -> Service index
//!   GET /health -> Health check

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ServiceIndex {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

pub async fn index() -> Json<ServiceIndex> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("config", "GET /api/attestation/config");
    endpoints.insert("callback", "POST /api/attestation/callback");
    endpoints.insert("reputation", "GET /api/reputation/{address}");
    endpoints.insert("preview", "POST /api/reputation/preview");
    endpoints.insert("stats", "GET /api/reputation/stats");
    endpoints.insert("health", "GET /health");

    Json(ServiceIndex {
        name: "UnCollateral Reputation Oracle",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

/// Create the router for the human-readable endpoints
pub fn create_web_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
