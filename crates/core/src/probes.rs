// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Readiness probes.
//!
//! Each probe answers a narrow question about an operation and maps every
//! missing or unreadable answer to "not ready". Only a fatal source error is
//! passed back up, so the validator can degrade the whole pass.

use crate::error::SourceError;
use crate::source::{DocumentSignature, OperationRecord, OperationSource};
use dive_ready_domain::{DocumentKind, OperationId};
use tracing::{debug, warn};

/// Sign-off state of both safety documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStatus {
    /// The hazard/task plan is signed.
    pub hpt_ready: bool,
    /// The safety annex is signed.
    pub anexo_bravo_ready: bool,
}

/// Assignment state of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentStatus {
    /// A supervisor is bound.
    pub supervisor_asignado: bool,
    /// A complete crew is bound.
    pub equipo_asignado: bool,
    /// A site is bound.
    pub sitio_asignado: bool,
}

/// Reads the signed state of the HPT and the Anexo Bravo.
pub struct DocumentStatusProbe<'a, S> {
    source: &'a S,
}

impl<'a, S: OperationSource> DocumentStatusProbe<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Probes both documents concurrently.
    ///
    /// # Errors
    ///
    /// Returns the source error only when it is fatal.
    pub async fn probe(&self, operation_id: &OperationId) -> Result<DocumentStatus, SourceError> {
        let (hazard_plan, safety_annex) = futures::join!(
            self.source.fetch_hazard_plan_status(operation_id),
            self.source.fetch_safety_annex_status(operation_id),
        );

        Ok(DocumentStatus {
            hpt_ready: signed_or_not_ready(hazard_plan, DocumentKind::HazardPlan, operation_id)?,
            anexo_bravo_ready: signed_or_not_ready(
                safety_annex,
                DocumentKind::SafetyAnnex,
                operation_id,
            )?,
        })
    }
}

fn signed_or_not_ready(
    result: Result<Option<DocumentSignature>, SourceError>,
    kind: DocumentKind,
    operation_id: &OperationId,
) -> Result<bool, SourceError> {
    match result {
        Ok(Some(signature)) => Ok(signature.signed),
        Ok(None) => {
            debug!(
                operation_id = %operation_id,
                document = kind.as_str(),
                "Safety document not found; treating as not ready"
            );
            Ok(false)
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            warn!(
                operation_id = %operation_id,
                document = kind.as_str(),
                error = %err,
                "Safety document status unavailable; treating as not ready"
            );
            Ok(false)
        }
    }
}

/// Reads whether a supervisor, a complete crew, and a site are bound.
pub struct AssignmentProbe<'a, S> {
    source: &'a S,
}

impl<'a, S: OperationSource> AssignmentProbe<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Probes the assignments recorded on `record`.
    ///
    /// Team completeness is only fetched when a crew is bound; an operation
    /// without a crew never has a complete team.
    ///
    /// # Errors
    ///
    /// Returns the source error only when it is fatal.
    pub async fn probe(&self, record: &OperationRecord) -> Result<AssignmentStatus, SourceError> {
        let equipo_asignado: bool = if record.crew_id.is_some() {
            match self
                .source
                .fetch_team_completeness(&record.operation_id)
                .await
            {
                Ok(complete) => complete,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(
                        operation_id = %record.operation_id,
                        error = %err,
                        "Team completeness unavailable; treating as not assigned"
                    );
                    false
                }
            }
        } else {
            false
        };

        Ok(AssignmentStatus {
            supervisor_asignado: record.has_supervisor(),
            equipo_asignado,
            sitio_asignado: record.site_id.is_some(),
        })
    }
}
