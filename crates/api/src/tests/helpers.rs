// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;

use dive_ready::{DocumentSignature, OperationRecord, OperationSource, ReadinessEngine, SourceError};
use dive_ready_domain::{CrewId, OperationId};
use dive_ready_persistence::Persistence;
use time::Date;
use tokio::sync::Mutex;

use crate::{
    AddCrewMemberRequest, CreateCrewRequest, CreateOperationRequest, CreateSiteRequest,
    DEFAULT_MINIMUM_DIVERS, PersistenceSource, RecordSafetyDocumentRequest, add_crew_member,
    create_crew, create_operation, create_site, record_safety_document,
};

pub struct TestContext {
    pub persistence: Arc<Mutex<Persistence>>,
    pub engine: ReadinessEngine<PersistenceSource>,
}

pub fn create_test_context() -> TestContext {
    let persistence = Arc::new(Mutex::new(Persistence::new_in_memory().unwrap()));
    let engine = ReadinessEngine::new(PersistenceSource::new(
        Arc::clone(&persistence),
        DEFAULT_MINIMUM_DIVERS,
    ));
    TestContext {
        persistence,
        engine,
    }
}

/// Reads everything from the store except crew bookings, which always fail.
pub struct BookingsOffline {
    inner: PersistenceSource,
}

impl BookingsOffline {
    pub fn new(persistence: &Arc<Mutex<Persistence>>) -> Self {
        Self {
            inner: PersistenceSource::new(Arc::clone(persistence), DEFAULT_MINIMUM_DIVERS),
        }
    }
}

impl OperationSource for BookingsOffline {
    async fn fetch_operation(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<OperationRecord>, SourceError> {
        self.inner.fetch_operation(operation_id).await
    }

    async fn fetch_hazard_plan_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        self.inner.fetch_hazard_plan_status(operation_id).await
    }

    async fn fetch_safety_annex_status(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<DocumentSignature>, SourceError> {
        self.inner.fetch_safety_annex_status(operation_id).await
    }

    async fn fetch_team_completeness(
        &self,
        operation_id: &OperationId,
    ) -> Result<bool, SourceError> {
        self.inner.fetch_team_completeness(operation_id).await
    }

    async fn fetch_crew_bookings(
        &self,
        _crew_id: &CrewId,
    ) -> Result<Option<Vec<Date>>, SourceError> {
        Err(SourceError::Unavailable(String::from("booking service offline")))
    }
}

pub fn create_operation_request(id: &str, code: &str) -> CreateOperationRequest {
    CreateOperationRequest {
        operation_id: id.to_string(),
        code: code.to_string(),
        name: format!("Inspección {code}"),
        start_date: String::from("2026-04-15"),
        site_id: None,
        supervisor_ref: None,
        crew_id: None,
    }
}

/// Registers site `SITE-1` and crew `C-1` with a supervisor and two divers.
pub fn seed_site_and_complete_crew(persistence: &mut Persistence) {
    create_site(
        persistence,
        &CreateSiteRequest {
            site_id: String::from("SITE-1"),
            name: String::from("Muelle Norte"),
        },
    )
    .unwrap();
    create_crew(
        persistence,
        &CreateCrewRequest {
            crew_id: String::from("C-1"),
            name: String::from("Cuadrilla Uno"),
        },
    )
    .unwrap();
    for (role, person) in [
        ("supervisor", "SUP-1"),
        ("lead_diver", "DIV-1"),
        ("assistant_diver", "DIV-2"),
    ] {
        add_crew_member(
            persistence,
            "C-1",
            &AddCrewMemberRequest {
                role: role.to_string(),
                person_ref: person.to_string(),
            },
        )
        .unwrap();
    }
}

/// Creates operation `id` with every readiness condition satisfied.
pub fn seed_ready_operation(persistence: &mut Persistence, id: &str, code: &str) {
    let mut request = create_operation_request(id, code);
    request.site_id = Some(String::from("SITE-1"));
    request.supervisor_ref = Some(String::from("SUP-1"));
    request.crew_id = Some(String::from("C-1"));
    create_operation(persistence, &request).unwrap();

    for kind in ["HPT", "ANEXO_BRAVO"] {
        record_safety_document(
            persistence,
            id,
            &RecordSafetyDocumentRequest {
                kind: kind.to_string(),
                signed: true,
            },
        )
        .unwrap();
    }
}
