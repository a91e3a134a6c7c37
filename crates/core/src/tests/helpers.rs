// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use dive_ready_domain::{CrewId, OperationId, SiteId};
use time::{Date, Month};

use crate::{DocumentSignature, OperationRecord, OperationSource, SourceError};

/// How an injected failure should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unavailable,
    Fatal,
}

impl FailureKind {
    fn to_error(self, what: &str) -> SourceError {
        match self {
            Self::Unavailable => SourceError::Unavailable(format!("{what} timed out")),
            Self::Fatal => SourceError::Fatal(format!("{what}: connection lost")),
        }
    }
}

/// Per-call failure injection switches.
#[derive(Debug, Default, Clone, Copy)]
pub struct Failures {
    pub operation: Option<FailureKind>,
    pub hazard_plan: Option<FailureKind>,
    pub safety_annex: Option<FailureKind>,
    pub team: Option<FailureKind>,
    pub bookings: Option<FailureKind>,
}

/// In-memory `OperationSource` fixture.
#[derive(Debug, Default)]
pub struct FakeSource {
    pub operations: HashMap<OperationId, OperationRecord>,
    pub hazard_plans: HashMap<OperationId, bool>,
    pub safety_annexes: HashMap<OperationId, bool>,
    pub complete_teams: HashSet<OperationId>,
    pub bookings: HashMap<CrewId, Vec<Date>>,
    pub failures: Failures,
    pub team_lookups: AtomicUsize,
}

impl FakeSource {
    /// Adds an operation with the given assignments.
    pub fn with_operation(
        mut self,
        id: &str,
        site: Option<&str>,
        supervisor: Option<&str>,
        crew: Option<&str>,
    ) -> Self {
        let operation_id = op_id(id);
        self.operations.insert(
            operation_id.clone(),
            OperationRecord {
                operation_id,
                site_id: site.map(|s| SiteId::new(s).unwrap()),
                supervisor_ref: supervisor.map(String::from),
                crew_id: crew.map(|c| CrewId::new(c).unwrap()),
            },
        );
        self
    }

    pub fn with_documents(mut self, id: &str, hazard_plan: bool, safety_annex: bool) -> Self {
        self.hazard_plans.insert(op_id(id), hazard_plan);
        self.safety_annexes.insert(op_id(id), safety_annex);
        self
    }

    pub fn with_complete_team(mut self, id: &str) -> Self {
        self.complete_teams.insert(op_id(id));
        self
    }

    /// Registers a crew with no bookings.
    pub fn with_crew(self, crew: &str) -> Self {
        self.with_bookings(crew, Vec::new())
    }

    pub fn with_bookings(mut self, crew: &str, dates: Vec<Date>) -> Self {
        self.bookings.insert(CrewId::new(crew).unwrap(), dates);
        self
    }

    pub fn failing(mut self, failures: Failures) -> Self {
        self.failures = failures;
        self
    }

    pub fn team_lookup_count(&self) -> usize {
        self.team_lookups.load(Ordering::SeqCst)
    }
}

impl OperationSource for FakeSource {
    async fn fetch_operation(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<OperationRecord>, SourceError> {
        if let Some(kind) = self.failures.operation {
            return Err(kind.to_error("operation lookup"));
        }
        Ok(self.operations.get(operation_id).cloned())
    }

    async fn fetch_hazard_plan_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        if let Some(kind) = self.failures.hazard_plan {
            return Err(kind.to_error("HPT lookup"));
        }
        Ok(self
            .hazard_plans
            .get(operation_id)
            .map(|signed| DocumentSignature { signed: *signed }))
    }

    async fn fetch_safety_annex_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        if let Some(kind) = self.failures.safety_annex {
            return Err(kind.to_error("Anexo Bravo lookup"));
        }
        Ok(self
            .safety_annexes
            .get(operation_id)
            .map(|signed| DocumentSignature { signed: *signed }))
    }

    async fn fetch_team_completeness(
        &self,
        operation_id: &OperationId,
    ) -> Result<bool, SourceError> {
        self.team_lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.failures.team {
            return Err(kind.to_error("team lookup"));
        }
        Ok(self.complete_teams.contains(operation_id))
    }

    async fn fetch_crew_bookings(
        &self,
        crew_id: &CrewId,
    ) -> Result<Option<Vec<Date>>, SourceError> {
        if let Some(kind) = self.failures.bookings {
            return Err(kind.to_error("booking lookup"));
        }
        Ok(self.bookings.get(crew_id).cloned())
    }
}

pub fn op_id(value: &str) -> OperationId {
    OperationId::new(value).unwrap()
}

pub fn day(d: u8) -> Date {
    Date::from_calendar_date(2026, Month::April, d).unwrap()
}

/// An operation with every readiness condition satisfied.
pub fn ready_source(id: &str) -> FakeSource {
    FakeSource::default()
        .with_operation(id, Some("SITE-1"), Some("SUP-1"), Some("C-1"))
        .with_documents(id, true, true)
        .with_complete_team(id)
}
