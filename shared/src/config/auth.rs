//! JWT verification configuration
//!
//! Token issuance is handled by the external authentication service;
//! this server only verifies bearer tokens, so the configuration is the
//! shared secret and expected algorithm parameters.

use serde::{Deserialize, Serialize};

/// Configuration for verifying incoming JWT bearer tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret shared with the token issuer
    pub secret: String,

    /// Expected token issuer claim, if enforced
    #[serde(default)]
    pub issuer: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-me"),
            issuer: None,
        }
    }
}

impl JwtConfig {
    /// Create a new configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: None,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-change-me".to_string());
        let issuer = std::env::var("JWT_ISSUER").ok();

        Self { secret, issuer }
    }
}
