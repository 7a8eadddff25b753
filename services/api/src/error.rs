use orbx_core::error::AppError;

/// Persistence failure, tagged at the repository boundary.
///
/// Repositories never return raw driver errors; the gateway turns these tags
/// into client-facing outcomes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("record not found")]
    NotFound,
    #[error("foreign key constraint violated")]
    ReferenceViolation,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure of an outbound provider call.
#[derive(Debug, thiserror::Error)]
pub enum ExternalError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0} credential missing or rejected")]
    MissingCredential(&'static str),
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl From<ExternalError> for AppError {
    fn from(err: ExternalError) -> Self {
        match err {
            ExternalError::NotFound(_) => AppError::NotFound(err.to_string()),
            ExternalError::MissingCredential(_) => {
                AppError::Internal(anyhow::anyhow!(err.to_string()))
            }
            ExternalError::Upstream(e) => AppError::Internal(e.context("external provider")),
        }
    }
}
