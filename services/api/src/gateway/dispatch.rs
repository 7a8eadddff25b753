//! Outcome → HTTP status and body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use orbx_core::error::AppError;

/// Result of a successful gateway operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    Created(T),
    Updated(T),
    Deleted,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Found(v) => Outcome::Found(f(v)),
            Self::Created(v) => Outcome::Created(f(v)),
            Self::Updated(v) => Outcome::Updated(f(v)),
            Self::Deleted => Outcome::Deleted,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Found(_) | Self::Updated(_) => StatusCode::OK,
            Self::Created(_) => StatusCode::CREATED,
            Self::Deleted => StatusCode::NO_CONTENT,
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Found(body) | Self::Created(body) | Self::Updated(body) => {
                (status, Json(body)).into_response()
            }
            Self::Deleted => status.into_response(),
        }
    }
}

/// Parse a path identifier. Only positive integers are valid.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation("invalid id"))
}
