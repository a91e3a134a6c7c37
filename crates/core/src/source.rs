// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator interface consumed by the readiness engine.
//!
//! The engine never talks to storage directly. Everything it knows about an
//! operation or a crew arrives through an [`OperationSource`], which may be
//! backed by a database, an RPC client, or an in-memory fixture.

use crate::error::SourceError;
use dive_ready_domain::{CrewId, Operation, OperationId, SiteId};
use serde::{Deserialize, Serialize};
use std::future::Future;
use time::Date;

/// The assignment facts the engine reads from an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// The operation identifier.
    pub operation_id: OperationId,
    /// The assigned site, if any.
    pub site_id: Option<SiteId>,
    /// The assigned supervisor reference, if any.
    pub supervisor_ref: Option<String>,
    /// The assigned crew, if any.
    pub crew_id: Option<CrewId>,
}

impl OperationRecord {
    /// Returns whether a non-blank supervisor reference is bound.
    #[must_use]
    pub fn has_supervisor(&self) -> bool {
        self.supervisor_ref
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

impl From<&Operation> for OperationRecord {
    fn from(operation: &Operation) -> Self {
        Self {
            operation_id: operation.operation_id.clone(),
            site_id: operation.site_id.clone(),
            supervisor_ref: operation.supervisor_ref.clone(),
            crew_id: operation.crew_id.clone(),
        }
    }
}

/// Sign-off state of one safety document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSignature {
    /// Whether the document has been signed.
    pub signed: bool,
}

/// Read-only data access required by the readiness engine.
///
/// `Ok(None)` means the datum is confirmed absent. `Err` means it could not
/// be read at all.
pub trait OperationSource: Send + Sync {
    /// Fetches the assignment facts of an operation.
    fn fetch_operation(
        &self,
        operation_id: &OperationId,
    ) -> impl Future<Output = Result<Option<OperationRecord>, SourceError>> + Send;

    /// Fetches the hazard/task plan ("HPT") sign-off state.
    fn fetch_hazard_plan_status(
        &self,
        operation_id: &OperationId,
    ) -> impl Future<Output = Result<Option<DocumentSignature>, SourceError>> + Send;

    /// Fetches the safety annex ("Anexo Bravo") sign-off state.
    fn fetch_safety_annex_status(
        &self,
        operation_id: &OperationId,
    ) -> impl Future<Output = Result<Option<DocumentSignature>, SourceError>> + Send;

    /// Fetches whether the operation's crew satisfies the minimum roster rule.
    fn fetch_team_completeness(
        &self,
        operation_id: &OperationId,
    ) -> impl Future<Output = Result<bool, SourceError>> + Send;

    /// Fetches the days a crew is already booked.
    ///
    /// `Ok(None)` means the crew itself is unknown.
    fn fetch_crew_bookings(
        &self,
        crew_id: &CrewId,
    ) -> impl Future<Output = Result<Option<Vec<Date>>, SourceError>> + Send;
}
