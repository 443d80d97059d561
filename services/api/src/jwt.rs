//! Access token verification
//!
//! Tokens are issued upstream and signed with RS256. This service only holds
//! the public key and turns a valid access token into an [`Identity`].

use anyhow::{Context, Result};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::Identity;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Public key for verifying tokens (PEM)
    pub public_key: String,
    /// Clock skew tolerated on `exp`, in seconds
    pub leeway: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_PUBLIC_KEY`: public key (PEM format) or path to a PEM file
    /// - `JWT_LEEWAY_SECONDS`: tolerated clock skew (default: 0)
    pub fn from_env() -> Result<Self> {
        let public_key = std::env::var("JWT_PUBLIC_KEY")
            .context("JWT_PUBLIC_KEY environment variable not set")?;

        let public_key = if public_key.starts_with("-----BEGIN") {
            public_key
        } else {
            std::fs::read_to_string(&public_key)
                .with_context(|| format!("Failed to read public key file {}", public_key))?
                .trim()
                .to_string()
        };

        let leeway = parse_leeway(std::env::var("JWT_LEEWAY_SECONDS").ok())?;

        Ok(JwtConfig { public_key, leeway })
    }
}

fn parse_leeway(raw: Option<String>) -> Result<u64> {
    match raw {
        Some(raw) => raw.parse().with_context(|| {
            format!("JWT_LEEWAY_SECONDS must be a number of seconds, got {:?}", raw)
        }),
        None => Ok(0),
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Role authorities, e.g. `ROLE_USER`
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

/// Token type enum
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum TokenType {
    Access,
    Refresh,
}

/// Reasons a bearer token is refused
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("refresh tokens cannot be used for API access")]
    NotAnAccessToken,
}

/// Verifies access tokens against the configured public key
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(config: &JwtConfig) -> Result<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(config.public_key.as_bytes())
            .context("JWT_PUBLIC_KEY is not a valid RSA public key")?;
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Validate `token` and build the caller identity from its claims
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.token_type != TokenType::Access {
            return Err(TokenError::NotAnAccessToken);
        }

        Ok(Identity::new(claims.sub, claims.roles))
    }
}
