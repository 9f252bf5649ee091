//! Ownership guard for mutating operations.
//!
//! Mutation of a question or comment is allowed only for its author.
//! The guard is a pure comparison composed by the caller after the
//! existence check, so the two failure modes stay distinct: a missing
//! entity is `NotFound`, a live entity owned by someone else is
//! `Forbidden`.

use uuid::Uuid;

use crate::error::ApiError;

/// Fail with `Forbidden` unless the requestor owns the entity
pub fn assert_owner(owner_id: Uuid, requestor_id: Uuid) -> Result<(), ApiError> {
    if owner_id == requestor_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}
