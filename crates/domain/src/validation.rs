// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Operation, TeamMember};

/// Validates that an operation's descriptive fields are present.
///
/// Identifier validity is enforced at construction time; this function
/// only checks the free-text fields.
///
/// # Errors
///
/// Returns an error if:
/// - The operation code is empty
/// - The operation name is empty
/// - The supervisor reference is present but blank
pub fn validate_operation_fields(operation: &Operation) -> Result<(), DomainError> {
    if operation.code.trim().is_empty() {
        return Err(DomainError::InvalidOperationField {
            field: "code",
            reason: String::from("Code cannot be empty"),
        });
    }

    if operation.name.trim().is_empty() {
        return Err(DomainError::InvalidOperationField {
            field: "name",
            reason: String::from("Name cannot be empty"),
        });
    }

    if operation
        .supervisor_ref
        .as_deref()
        .is_some_and(|s| s.trim().is_empty())
    {
        return Err(DomainError::InvalidOperationField {
            field: "supervisor_ref",
            reason: String::from("Supervisor reference cannot be blank when provided"),
        });
    }

    Ok(())
}

/// Validates a crew member before it is added to a roster.
///
/// # Errors
///
/// Returns an error if the person reference is empty.
pub fn validate_team_member(member: &TeamMember) -> Result<(), DomainError> {
    if member.person_ref.trim().is_empty() {
        return Err(DomainError::InvalidOperationField {
            field: "person_ref",
            reason: String::from("Person reference cannot be empty"),
        });
    }
    Ok(())
}
