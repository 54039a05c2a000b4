//! Identifier checks shared by create and update operations.

use crate::tasks::domain::{EntityKind, TaskDomainError};
use uuid::Uuid;

/// Rejects a create request that already carries an identifier.
pub(super) const fn ensure_unassigned(
    entity: EntityKind,
    id: Option<Uuid>,
) -> Result<(), TaskDomainError> {
    if id.is_some() {
        return Err(TaskDomainError::IdAssigned(entity));
    }
    Ok(())
}

/// Requires the payload identifier to be present and equal to the path one.
pub(super) fn ensure_matching_id(
    entity: EntityKind,
    path: Uuid,
    body: Option<Uuid>,
) -> Result<(), TaskDomainError> {
    let body_id = body.ok_or(TaskDomainError::MissingId(entity))?;
    if body_id != path {
        return Err(TaskDomainError::IdMismatch {
            entity,
            path,
            body: body_id,
        });
    }
    Ok(())
}
