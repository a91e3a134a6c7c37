// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dive_ready_domain::{CrewId, DomainError, OperationId};

/// Failures reported by an [`OperationSource`](crate::OperationSource).
///
/// Neither variant ever escapes operation validation. `Unavailable` is
/// absorbed by the probe that asked, `Fatal` degrades the whole pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// A single datum could not be retrieved.
    #[error("Data unavailable: {0}")]
    Unavailable(String),
    /// The collaborator itself is unusable.
    #[error("Data source failure: {0}")]
    Fatal(String),
}

impl SourceError {
    /// Returns whether this failure should degrade the whole validation pass.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

/// Errors surfaced to callers of the readiness engine.
///
/// Only caller mistakes are reported. Data availability problems are
/// converted into conservative answers before they reach this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The caller passed a malformed identifier or value.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),
    /// The source confirmed that the operation does not exist.
    #[error("Operation '{0}' not found")]
    OperationNotFound(OperationId),
    /// The source confirmed that the crew does not exist.
    #[error("Crew '{0}' not found")]
    CrewNotFound(CrewId),
}
