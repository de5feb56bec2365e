//! Application configuration loaded from environment variables.
//!
//! The plan price table is part of the configuration and is injected into the
//! subscription service at startup, so tests can substitute alternate tables
//! without touching process-wide state.

use std::env;

/// Plan prices in minor currency units, snapped onto each subscription row at
/// purchase time. Changing the table never rewrites existing rows.
#[derive(Debug, Clone, Copy)]
pub struct PlanPricing {
    pub weekly: u32,
    pub monthly: u32,
}

impl Default for PlanPricing {
    fn default() -> Self {
        Self {
            weekly: 99,
            monthly: 199,
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT verification key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Plan price table
    pub pricing: PlanPricing,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            pricing: PlanPricing {
                weekly: parse_price("PLAN_PRICE_WEEKLY", PlanPricing::default().weekly)?,
                monthly: parse_price("PLAN_PRICE_MONTHLY", PlanPricing::default().monthly)?,
            },
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            pricing: PlanPricing::default(),
        }
    }
}

/// Read an optional price override, rejecting unparseable values rather than
/// silently falling back to the default.
fn parse_price(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(var)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Unparseable value for environment variable: {0}")]
    Invalid(&'static str),
}
