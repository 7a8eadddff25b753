//! Persistence failure → client-facing error.

use orbx_core::error::AppError;
use orbx_domain::entity::EntityKind;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn writes(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

/// Classify a tagged store failure for `kind` under `op`.
///
/// A delete blocked by dependents is a conflict, never a not-found. Anything
/// unclassified becomes `Internal`, whose detail is only logged.
pub fn translate(kind: EntityKind, op: Operation, err: StoreError) -> AppError {
    match (op, err) {
        (op, StoreError::UniqueViolation) if op.writes() => AppError::Conflict(format!(
            "a {kind} with {} already exists",
            kind.unique_key()
        )),
        (Operation::Update | Operation::Delete, StoreError::NotFound) => {
            AppError::NotFound(format!("{kind} not found"))
        }
        (Operation::Delete, StoreError::ReferenceViolation) => {
            AppError::Conflict(format!("cannot delete {kind}: dependent entities exist"))
        }
        (op, StoreError::ReferenceViolation) if op.writes() => {
            AppError::NotFound("referenced parent does not exist".to_owned())
        }
        (op, StoreError::Other(e)) => {
            AppError::Internal(e.context(format!("{op:?} {kind}").to_lowercase()))
        }
        (op, err) => AppError::Internal(anyhow::anyhow!("unexpected {err} on {op:?} {kind}")),
    }
}
