// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use dive_ready::CoreError;
use dive_ready_domain::DomainError;
use dive_ready_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A uniqueness or consistency rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidOperationId(msg) => ApiError::InvalidInput {
            field: String::from("operation_id"),
            message: msg,
        },
        DomainError::InvalidCrewId(msg) => ApiError::InvalidInput {
            field: String::from("crew_id"),
            message: msg,
        },
        DomainError::InvalidSiteId(msg) => ApiError::InvalidInput {
            field: String::from("site_id"),
            message: msg,
        },
        DomainError::InvalidOperationField { field, reason } => ApiError::InvalidInput {
            field: field.to_string(),
            message: reason,
        },
        DomainError::InvalidLifecycleState(state) => ApiError::InvalidInput {
            field: String::from("state"),
            message: format!("Unknown lifecycle state '{state}'"),
        },
        DomainError::InvalidDocumentKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Unknown document kind '{kind}'. Expected HPT or ANEXO_BRAVO"),
        },
        DomainError::InvalidTeamRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown team role '{role}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        err @ DomainError::InconsistentValidationStatus { .. } => ApiError::InvalidInput {
            field: String::from("canExecute"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidInput(domain_err) => translate_domain_error(domain_err),
        CoreError::OperationNotFound(operation_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Operation"),
            message: format!("Operation '{operation_id}' does not exist"),
        },
        CoreError::CrewNotFound(crew_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Crew"),
            message: format!("Crew '{crew_id}' does not exist"),
        },
    }
}

/// Translates a persistence error raised by a write into an API error.
///
/// `resource` names what was being written and is used in messages.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource: &str) -> ApiError {
    match err {
        PersistenceError::AlreadyExists(msg) => ApiError::DomainRuleViolation {
            rule: format!("unique_{}", resource.to_lowercase().replace(' ', "_")),
            message: format!("{resource} already exists ({msg})"),
        },
        PersistenceError::ReferenceNotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Referenced record"),
            message: format!("{resource} refers to a site, crew or operation that does not exist ({msg})"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: resource.to_string(),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
