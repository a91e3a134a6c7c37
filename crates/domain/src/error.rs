// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operation identifier is empty or invalid.
    InvalidOperationId(String),
    /// Crew identifier is empty or invalid.
    InvalidCrewId(String),
    /// Site identifier is empty or invalid.
    InvalidSiteId(String),
    /// Operation code or name is empty.
    InvalidOperationField {
        /// The offending field.
        field: &'static str,
        /// Description of the validation error.
        reason: String,
    },
    /// Lifecycle state string is not recognized.
    InvalidLifecycleState(String),
    /// Safety document kind string is not recognized.
    InvalidDocumentKind(String),
    /// Team role string is not recognized.
    InvalidTeamRole(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A serialized validation status claims an executability verdict
    /// that does not match its five readiness fields.
    InconsistentValidationStatus {
        /// The verdict carried by the payload.
        claimed: bool,
        /// The verdict derived from the five fields.
        derived: bool,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperationId(msg) => write!(f, "Invalid operation id: {msg}"),
            Self::InvalidCrewId(msg) => write!(f, "Invalid crew id: {msg}"),
            Self::InvalidSiteId(msg) => write!(f, "Invalid site id: {msg}"),
            Self::InvalidOperationField { field, reason } => {
                write!(f, "Invalid operation {field}: {reason}")
            }
            Self::InvalidLifecycleState(state) => {
                write!(f, "Invalid lifecycle state: '{state}'")
            }
            Self::InvalidDocumentKind(kind) => write!(f, "Invalid document kind: '{kind}'"),
            Self::InvalidTeamRole(role) => write!(f, "Invalid team role: '{role}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InconsistentValidationStatus { claimed, derived } => {
                write!(
                    f,
                    "Inconsistent validation status: canExecute is {claimed} but the readiness fields imply {derived}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
