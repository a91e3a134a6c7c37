// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{AvailabilityCheck, CrewAvailabilityChecker};
use crate::error::CoreError;
use crate::source::OperationSource;
use crate::validator::{CompletenessValidator, ValidationPass};
use dive_ready_domain::{
    AlertSummary, CrewId, OperationId, ReadinessReport, ValidationStatus, alerts,
    build_readiness_report,
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::info;

/// Everything the presentation layer needs about one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationReadiness {
    /// The validation pass the facts below were derived from.
    pub pass: ValidationPass,
    /// Score, state, alert count, and execution gate.
    pub report: ReadinessReport,
    /// Alert count and missing-item labels.
    pub alerts: AlertSummary,
}

impl OperationReadiness {
    fn from_pass(pass: ValidationPass) -> Self {
        let report: ReadinessReport = build_readiness_report(&pass.status);
        let alerts: AlertSummary = alerts(&pass.status);
        Self {
            pass,
            report,
            alerts,
        }
    }
}

/// Stateless service boundary for readiness and availability questions.
///
/// The engine holds no cache. Callers decide when underlying data has
/// changed and ask again.
#[derive(Debug, Clone)]
pub struct ReadinessEngine<S> {
    source: S,
}

impl<S: OperationSource> ReadinessEngine<S> {
    /// Creates an engine reading from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Validates an operation and returns its readiness facts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` for a blank id and
    /// `CoreError::OperationNotFound` for an id the source does not know.
    /// Data retrieval failures never produce an error.
    pub async fn validate_operation(
        &self,
        operation_id: &str,
    ) -> Result<ValidationStatus, CoreError> {
        Ok(self.validate_operation_pass(operation_id).await?.status)
    }

    /// Validates an operation and reports whether the pass was degraded.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_operation`].
    pub async fn validate_operation_pass(
        &self,
        operation_id: &str,
    ) -> Result<ValidationPass, CoreError> {
        let operation_id: OperationId = OperationId::new(operation_id)?;
        info!(operation_id = %operation_id, "Validating operation");
        CompletenessValidator::new(&self.source)
            .validate(&operation_id)
            .await
    }

    /// Validates an operation and derives its report and alerts.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_operation`].
    pub async fn readiness(&self, operation_id: &str) -> Result<OperationReadiness, CoreError> {
        let pass: ValidationPass = self.validate_operation_pass(operation_id).await?;
        Ok(OperationReadiness::from_pass(pass))
    }

    /// Computes readiness for several operations concurrently.
    ///
    /// Results are returned in input order. A failure for one id does not
    /// affect the others.
    pub async fn readiness_batch(
        &self,
        operation_ids: &[String],
    ) -> Vec<(String, Result<OperationReadiness, CoreError>)> {
        info!(count = operation_ids.len(), "Recomputing readiness batch");
        let results = join_all(operation_ids.iter().map(|id| self.readiness(id))).await;
        operation_ids.iter().cloned().zip(results).collect()
    }

    /// Returns whether a crew is free on `date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` for a blank crew id and
    /// `CoreError::CrewNotFound` for a crew the source does not know.
    pub async fn check_crew_availability(
        &self,
        crew_id: &str,
        date: Date,
    ) -> Result<bool, CoreError> {
        let check: AvailabilityCheck = self.check_crew_availability_detailed(crew_id, date).await?;
        Ok(check.available)
    }

    /// Checks crew availability and reports whether the lookup failed.
    ///
    /// # Errors
    ///
    /// See [`Self::check_crew_availability`].
    pub async fn check_crew_availability_detailed(
        &self,
        crew_id: &str,
        date: Date,
    ) -> Result<AvailabilityCheck, CoreError> {
        let crew_id: CrewId = CrewId::new(crew_id)?;
        info!(crew_id = %crew_id, date = %date, "Checking crew availability");
        CrewAvailabilityChecker::new(&self.source)
            .check(&crew_id, date)
            .await
    }
}
