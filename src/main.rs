use anyhow::Result;
use axum::{http::HeaderValue, http::Method, middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use uncollateral_oracle::{
    api::{
        body_size_middleware, create_attestation_router, create_reputation_router,
        create_web_router, logging_middleware, rate_limit_middleware,
        security_headers_middleware, AttestationApiState, ReputationApiState,
        SecurityMiddlewareConfig, SecurityState,
    },
    AcceptAllVerifier, MemoryStore, OracleConfig, ReputationManager,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first - this validates credentials up front
    let config = Arc::new(OracleConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        eprintln!("Please check environment variables (UNCOLLATERAL_*).");
        e
    })?);

    init_logging(&config)?;

    info!("Starting UnCollateral Reputation Oracle");
    info!(
        "Rate limit: {}/min, Max body: {}KB, CORS: {}",
        config.security.rate_limit_per_minute,
        config.security.max_request_size / 1024,
        config.security.enable_cors
    );

    // Verification pipeline: accept-all verifier over an in-memory store.
    let manager = Arc::new(ReputationManager::new(
        Arc::new(MemoryStore::new()),
        Arc::new(AcceptAllVerifier),
    ));

    // Security middleware state
    let security_state = SecurityState::new(SecurityMiddlewareConfig {
        rate_limit_per_minute: config.security.rate_limit_per_minute,
        max_request_size: config.security.max_request_size,
        log_requests: config.logging.log_requests,
        sanitize_logs: config.logging.sanitize_logs,
        exempt_paths: vec!["/health".to_string(), "/".to_string()],
    });

    // Build the application with routes and security middleware
    let mut app = Router::new()
        // Attestation flow (session config + proof callback)
        .nest(
            "/api/attestation",
            create_attestation_router(AttestationApiState {
                credentials: Arc::new(config.attestation.clone()),
                base_url: config.server.base_url.clone(),
                manager: manager.clone(),
            }),
        )
        // Reputation lookup, preview, stats
        .nest(
            "/api/reputation",
            create_reputation_router(ReputationApiState {
                manager: manager.clone(),
            }),
        )
        // Service index + health check
        .merge(create_web_router())
        // Apply security middleware layers (order matters!)
        .layer(middleware::from_fn_with_state(
            security_state.clone(),
            body_size_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            security_state.clone(),
            rate_limit_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn_with_state(
            security_state.clone(),
            logging_middleware,
        ))
        .layer(TraceLayer::new_for_http());

    if config.security.enable_cors {
        let origin = config
            .security
            .allowed_origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("Invalid UNCOLLATERAL_FRONTEND_URL: {}", e))?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true),
        );
        info!("CORS enabled for origin {}", config.security.allowed_origin);
    }

    // Start the server on configured host/port
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))?;

    info!("Reputation oracle listening on {}", bind_addr);
    info!(
        "Proof callback URL: {}/api/attestation/callback",
        config.server.base_url.trim_end_matches('/')
    );

    // Serve with connect info for client IP extraction
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Initialize logging from configuration
fn init_logging(config: &OracleConfig) -> Result<()> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(if config.logging.log_requests {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set logging subscriber: {}", e))?;

    Ok(())
}
