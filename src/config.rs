use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the reputation oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Attestation network credentials
    pub attestation: AttestationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Public base URL used to build the proof callback link
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Rate limit per minute per IP on /api routes
    pub rate_limit_per_minute: u32,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
    /// Frontend origin allowed by CORS
    pub allowed_origin: String,
    /// Enable CORS handling
    pub enable_cors: bool,
}

/// Credentials for the attestation network. The secret never leaves the
/// process; session configs carry only a digest derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttestationConfig {
    /// Application id registered with the attestation network
    pub app_id: String,
    /// Application secret - MUST be from environment
    pub app_secret: String,
    /// Provider id for the social-account verification flow
    pub provider_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    pub level: String,
    /// Enable request/response logging
    pub log_requests: bool,
    /// Mask client IPs and identifiers in request logs
    pub sanitize_logs: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                base_url: "http://localhost:3000".to_string(),
            },
            security: SecurityConfig {
                rate_limit_per_minute: 60,
                max_request_size: 1024 * 1024, // 1MB
                allowed_origin: "http://localhost:5173".to_string(),
                enable_cors: true,
            },
            attestation: AttestationConfig {
                app_id: String::new(),     // MUST be configured
                app_secret: String::new(), // MUST be configured
                provider_id: String::new(), // MUST be configured
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                log_requests: true,
                sanitize_logs: true,
            },
        }
    }
}

impl OracleConfig {
    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("UNCOLLATERAL_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("UNCOLLATERAL_PORT") {
            config.server.port = port.parse().context("Invalid UNCOLLATERAL_PORT value")?;
        }

        if let Ok(base_url) = env::var("UNCOLLATERAL_BASE_URL") {
            config.server.base_url = base_url;
        }

        // Security configuration
        if let Ok(rate_limit) = env::var("UNCOLLATERAL_RATE_LIMIT_PER_MINUTE") {
            config.security.rate_limit_per_minute = rate_limit
                .parse()
                .context("Invalid UNCOLLATERAL_RATE_LIMIT_PER_MINUTE value")?;
        }

        if let Ok(max_size) = env::var("UNCOLLATERAL_MAX_REQUEST_SIZE") {
            config.security.max_request_size = max_size
                .parse()
                .context("Invalid UNCOLLATERAL_MAX_REQUEST_SIZE value")?;
        }

        if let Ok(origin) = env::var("UNCOLLATERAL_FRONTEND_URL") {
            config.security.allowed_origin = origin;
        }

        if let Ok(enable_cors) = env::var("UNCOLLATERAL_ENABLE_CORS") {
            config.security.enable_cors = enable_cors
                .parse()
                .context("Invalid UNCOLLATERAL_ENABLE_CORS value")?;
        }

        // Attestation credentials - required, no defaults
        config.attestation.app_id = env::var("UNCOLLATERAL_APP_ID")
            .context("UNCOLLATERAL_APP_ID environment variable is required")?;
        config.attestation.app_secret = env::var("UNCOLLATERAL_APP_SECRET")
            .context("UNCOLLATERAL_APP_SECRET environment variable is required")?;
        config.attestation.provider_id = env::var("UNCOLLATERAL_PROVIDER_ID")
            .context("UNCOLLATERAL_PROVIDER_ID environment variable is required")?;

        // Logging configuration
        if let Ok(level) = env::var("UNCOLLATERAL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(log_requests) = env::var("UNCOLLATERAL_LOG_REQUESTS") {
            config.logging.log_requests = log_requests
                .parse()
                .context("Invalid UNCOLLATERAL_LOG_REQUESTS value")?;
        }

        if let Ok(sanitize) = env::var("UNCOLLATERAL_SANITIZE_LOGS") {
            config.logging.sanitize_logs = sanitize
                .parse()
                .context("Invalid UNCOLLATERAL_SANITIZE_LOGS value")?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate security-relevant invariants before the server starts.
    pub fn validate(&self) -> Result<()> {
        if self.attestation.app_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Attestation app id must not be empty"));
        }

        if self.attestation.app_secret.trim().is_empty() {
            return Err(anyhow::anyhow!("Attestation app secret must not be empty"));
        }

        if self.attestation.provider_id.trim().is_empty() {
            return Err(anyhow::anyhow!("Attestation provider id must not be empty"));
        }

        if self.security.rate_limit_per_minute == 0 {
            return Err(anyhow::anyhow!("Rate limit must be greater than zero"));
        }

        if self.security.max_request_size == 0 {
            return Err(anyhow::anyhow!("Max request size must be greater than zero"));
        }

        Ok(())
    }
}
