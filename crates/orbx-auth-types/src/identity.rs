//! Bearer-token identity extractor and the mutation policy.

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::request::Parts;
use serde::Deserialize;

use orbx_core::error::AppError;

use crate::token::{JwtKeys, TokenIdentity, validate_token};

/// Identity of the caller, taken from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 when the header is absent or not a bearer credential, and
/// with 403 when the token fails validation (bad signature, expired, malformed).
#[derive(Debug, Clone)]
pub struct BearerIdentity(pub TokenIdentity);

impl<S> FromRequestParts<S> for BearerIdentity
where
    JwtKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let keys = JwtKeys::from_ref(state);
        let token = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_owned());

        async move {
            let token =
                token.ok_or_else(|| AppError::Unauthorized("missing bearer token".to_owned()))?;
            let identity = validate_token(&token, &keys).map_err(|e| {
                tracing::debug!(error = %e, "bearer token rejected");
                AppError::Forbidden("invalid or expired token".to_owned())
            })?;
            Ok(Self(identity))
        }
    }
}

/// Who may call create/update/delete endpoints.
///
/// `Admin` requires the `admin` role claim. `Authenticated` accepts any valid
/// token regardless of role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPolicy {
    #[default]
    Admin,
    Authenticated,
}

impl MutationPolicy {
    pub fn authorize(self, identity: &TokenIdentity) -> Result<(), AppError> {
        match self {
            Self::Authenticated => Ok(()),
            Self::Admin if identity.role.is_admin() => Ok(()),
            Self::Admin => Err(AppError::Forbidden("admin role required".to_owned())),
        }
    }
}
