pub mod auth;
pub mod city;
pub mod continent;
pub mod country;
pub mod external;
pub mod health;
pub mod stats;

use orbx_core::error::AppError;

/// Parse an optional numeric list filter such as `?continent=2`. Empty means absent.
pub(crate) fn parse_filter(raw: Option<String>, name: &str) -> Result<Option<i32>, AppError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("invalid {name} filter"))),
    }
}
