// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::probes::{AssignmentProbe, DocumentStatusProbe};
use crate::source::OperationSource;
use dive_ready_domain::{OperationId, ValidationStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How a validation pass obtained its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOutcome {
    /// Every probe answered (possibly with conservative defaults).
    Verified,
    /// The source failed fatally; the status is the all-false fallback.
    Degraded,
}

/// One validation pass over an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPass {
    /// The validated operation.
    pub operation_id: OperationId,
    /// The merged readiness facts.
    pub status: ValidationStatus,
    /// Whether the facts were verified or substituted.
    pub outcome: PassOutcome,
}

impl ValidationPass {
    const fn degraded(operation_id: OperationId) -> Self {
        Self {
            operation_id,
            status: ValidationStatus::not_ready(),
            outcome: PassOutcome::Degraded,
        }
    }
}

/// Merges the document and assignment probes into a `ValidationStatus`.
pub struct CompletenessValidator<'a, S> {
    source: &'a S,
}

impl<'a, S: OperationSource> CompletenessValidator<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Validates one operation.
    ///
    /// The operation record is fetched first; the two probes then run
    /// concurrently. Any fatal source error, or an unreadable operation
    /// record, yields the all-false status with `PassOutcome::Degraded`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::OperationNotFound` if the source confirms the
    /// operation does not exist.
    pub async fn validate(&self, operation_id: &OperationId) -> Result<ValidationPass, CoreError> {
        let record = match self.source.fetch_operation(operation_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(CoreError::OperationNotFound(operation_id.clone())),
            Err(err) => {
                warn!(
                    operation_id = %operation_id,
                    error = %err,
                    "Operation record unavailable; degrading to not-ready status"
                );
                return Ok(ValidationPass::degraded(operation_id.clone()));
            }
        };

        let documents = DocumentStatusProbe::new(self.source);
        let assignments = AssignmentProbe::new(self.source);
        let (documents, assignments) =
            futures::join!(documents.probe(operation_id), assignments.probe(&record));

        match (documents, assignments) {
            (Ok(documents), Ok(assignments)) => {
                let status: ValidationStatus = ValidationStatus::new(
                    documents.hpt_ready,
                    documents.anexo_bravo_ready,
                    assignments.supervisor_asignado,
                    assignments.equipo_asignado,
                    assignments.sitio_asignado,
                );
                debug!(
                    operation_id = %operation_id,
                    can_execute = status.can_execute(),
                    "Operation validated"
                );
                Ok(ValidationPass {
                    operation_id: operation_id.clone(),
                    status,
                    outcome: PassOutcome::Verified,
                })
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(
                    operation_id = %operation_id,
                    error = %err,
                    "Fatal source error during validation; degrading to not-ready status"
                );
                Ok(ValidationPass::degraded(operation_id.clone()))
            }
        }
    }
}
