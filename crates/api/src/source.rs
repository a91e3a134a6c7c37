// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `OperationSource` backed by the `SQLite` store.

use std::sync::Arc;

use dive_ready::{DocumentSignature, OperationRecord, OperationSource, SourceError};
use dive_ready_domain::{CrewId, CrewRoster, DocumentKind, Operation, OperationId};
use dive_ready_persistence::{Persistence, PersistenceError};
use time::Date;
use tokio::sync::Mutex;
use tracing::debug;

/// Default number of divers a roster needs to count as complete.
pub const DEFAULT_MINIMUM_DIVERS: usize = 2;

/// Reads readiness facts from a shared [`Persistence`] handle.
///
/// Connection-level failures are reported as fatal; everything else is a
/// per-datum `Unavailable`.
#[derive(Debug, Clone)]
pub struct PersistenceSource {
    persistence: Arc<Mutex<Persistence>>,
    minimum_divers: usize,
}

impl PersistenceSource {
    /// Creates a source reading from `persistence`.
    ///
    /// `minimum_divers` feeds the roster completeness rule.
    #[must_use]
    pub const fn new(persistence: Arc<Mutex<Persistence>>, minimum_divers: usize) -> Self {
        Self {
            persistence,
            minimum_divers,
        }
    }

    /// Returns the roster rule's diver minimum.
    #[must_use]
    pub const fn minimum_divers(&self) -> usize {
        self.minimum_divers
    }

    async fn document(
        &self,
        operation_id: &OperationId,
        kind: DocumentKind,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        let mut persistence = self.persistence.lock().await;
        let document = persistence
            .get_safety_document(operation_id, kind)
            .map_err(to_source_error)?;
        Ok(document.map(|d| DocumentSignature { signed: d.signed }))
    }
}

fn to_source_error(err: PersistenceError) -> SourceError {
    if err.is_connection_failure() {
        SourceError::Fatal(err.to_string())
    } else {
        SourceError::Unavailable(err.to_string())
    }
}

impl OperationSource for PersistenceSource {
    async fn fetch_operation(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<OperationRecord>, SourceError> {
        let mut persistence = self.persistence.lock().await;
        let operation: Option<Operation> = persistence
            .get_operation(operation_id)
            .map_err(to_source_error)?;
        Ok(operation.as_ref().map(OperationRecord::from))
    }

    async fn fetch_hazard_plan_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        self.document(operation_id, DocumentKind::HazardPlan).await
    }

    async fn fetch_safety_annex_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        self.document(operation_id, DocumentKind::SafetyAnnex).await
    }

    async fn fetch_team_completeness(
        &self,
        operation_id: &OperationId,
    ) -> Result<bool, SourceError> {
        let mut persistence = self.persistence.lock().await;
        let crew_id: Option<CrewId> = persistence
            .get_operation(operation_id)
            .map_err(to_source_error)?
            .and_then(|operation| operation.crew_id);

        let Some(crew_id) = crew_id else {
            return Ok(false);
        };

        let roster: Option<CrewRoster> = persistence
            .get_crew_roster(&crew_id)
            .map_err(to_source_error)?;
        let complete: bool = roster.is_some_and(|r| r.is_complete(self.minimum_divers));

        debug!(
            operation_id = %operation_id,
            crew_id = %crew_id,
            minimum_divers = self.minimum_divers,
            complete,
            "Team completeness evaluated"
        );
        Ok(complete)
    }

    async fn fetch_crew_bookings(
        &self,
        crew_id: &CrewId,
    ) -> Result<Option<Vec<Date>>, SourceError> {
        let mut persistence = self.persistence.lock().await;
        if !persistence.crew_exists(crew_id).map_err(to_source_error)? {
            debug!(crew_id = %crew_id, "Crew not found");
            return Ok(None);
        }
        persistence
            .list_crew_booking_dates(crew_id)
            .map(Some)
            .map_err(to_source_error)
    }
}
