//! JWT access-token issuing and validation.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use orbx_domain::user::UserRole;

/// Default access-token lifetime in seconds (1 day).
pub const ACCESS_TOKEN_TTL: u64 = 86_400;

/// HMAC secret and token lifetime, built once from config and shared via state.
#[derive(Clone)]
pub struct JwtKeys {
    secret: Arc<str>,
    ttl_secs: u64,
}

impl JwtKeys {
    pub fn new(secret: impl Into<Arc<str>>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// User identity carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

/// Errors returned by [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `id` | custom | user id |
/// | `email` | custom | user email |
/// | `role` | custom | `"user"` or `"admin"` |
/// | `iat` | `iat` | issued at, seconds since epoch |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub iat: u64,
    pub exp: u64,
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign an HS256 token for `identity`, valid for the configured lifetime.
pub fn issue_token(
    identity: &TokenIdentity,
    keys: &JwtKeys,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let iat = now_secs();
    let exp = iat + keys.ttl_secs;
    let claims = JwtClaims {
        id: identity.id,
        email: identity.email.clone(),
        role: identity.role,
        iat,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(keys.secret.as_bytes()),
    )?;
    Ok(IssuedToken { token, exp })
}

/// Validate a bearer token, returning the identity it carries.
///
/// Validation: HS256, `exp` required and checked with the default 60s leeway.
pub fn validate_token(token: &str, keys: &JwtKeys) -> Result<TokenIdentity, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(keys.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(TokenIdentity {
        id: data.claims.id,
        email: data.claims.email,
        role: data.claims.role,
    })
}
