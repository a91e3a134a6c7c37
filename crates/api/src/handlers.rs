// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations.
//!
//! Readiness reads go through a [`ReadinessEngine`] and never write. The
//! write operations take the store directly and validate their input
//! before touching it.

use dive_ready::{
    AvailabilityCheck, CoreError, OperationReadiness, OperationSource, ReadinessEngine,
    ValidationPass, alerts, build_readiness_report,
};
use dive_ready_domain::{
    CrewId, CrewRoster, DocumentKind, Operation, OperationId, SiteId, TeamMember, TeamRole,
    format_calendar_date, parse_calendar_date, validate_operation_fields, validate_team_member,
};
use dive_ready_persistence::Persistence;
use time::Date;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AddCrewMemberRequest, AddCrewMemberResponse, BatchReadinessEntry, BatchReadinessRequest,
    BatchReadinessResponse, BookCrewRequest, BookCrewResponse, BuildReportRequest,
    CreateCrewRequest, CreateCrewResponse, CreateOperationRequest, CreateOperationResponse,
    CreateSiteRequest, CreateSiteResponse, CrewAvailabilityResponse, ReadinessReportResponse,
    ReadinessResponse, RecordSafetyDocumentRequest, RecordSafetyDocumentResponse,
    ValidationResponse,
};

fn readiness_response(readiness: OperationReadiness) -> ReadinessResponse {
    ReadinessResponse {
        operation_id: readiness.pass.operation_id.value().to_string(),
        status: readiness.pass.status,
        report: readiness.report,
        missing: readiness.alerts.missing,
        outcome: readiness.pass.outcome,
    }
}

/// Validates an operation.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a blank id and
/// `ApiError::ResourceNotFound` for an unknown operation.
pub async fn get_validation<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    operation_id: &str,
) -> Result<ValidationResponse, ApiError> {
    let pass: ValidationPass = engine
        .validate_operation_pass(operation_id)
        .await
        .map_err(translate_core_error)?;

    Ok(ValidationResponse {
        operation_id: pass.operation_id.value().to_string(),
        status: pass.status,
        outcome: pass.outcome,
    })
}

/// Computes an operation's readiness report and missing items.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a blank id and
/// `ApiError::ResourceNotFound` for an unknown operation.
pub async fn get_readiness<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    operation_id: &str,
) -> Result<ReadinessResponse, ApiError> {
    let readiness: OperationReadiness = engine
        .readiness(operation_id)
        .await
        .map_err(translate_core_error)?;
    Ok(readiness_response(readiness))
}

/// Builds a report from a posted status without touching any store.
#[must_use]
pub fn build_report(request: &BuildReportRequest) -> ReadinessReportResponse {
    ReadinessReportResponse {
        report: build_readiness_report(&request.status),
        missing: alerts(&request.status).missing,
    }
}

fn batch_response(
    results: Vec<(String, Result<OperationReadiness, CoreError>)>,
) -> BatchReadinessResponse {
    BatchReadinessResponse {
        results: results
            .into_iter()
            .map(|(operation_id, result)| match result {
                Ok(readiness) => BatchReadinessEntry {
                    operation_id,
                    readiness: Some(readiness_response(readiness)),
                    error: None,
                },
                Err(err) => BatchReadinessEntry {
                    operation_id,
                    readiness: None,
                    error: Some(translate_core_error(err).to_string()),
                },
            })
            .collect(),
    }
}

/// Recomputes readiness for several operations.
///
/// Per-operation failures are reported in their entry; the batch itself
/// never fails.
pub async fn get_readiness_batch<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    request: &BatchReadinessRequest,
) -> BatchReadinessResponse {
    batch_response(engine.readiness_batch(&request.operation_ids).await)
}

/// Recomputes readiness for every stored operation, earliest start first.
///
/// # Errors
///
/// Returns an error if the operation ids cannot be listed.
pub async fn get_all_readiness<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    persistence: &Mutex<Persistence>,
) -> Result<BatchReadinessResponse, ApiError> {
    let operation_ids: Vec<String> = persistence
        .lock()
        .await
        .list_operation_ids()
        .map_err(|e| translate_persistence_error(e, "Operation"))?
        .iter()
        .map(|id| id.value().to_string())
        .collect();

    info!(count = operation_ids.len(), "Recomputing readiness for all operations");
    Ok(batch_response(engine.readiness_batch(&operation_ids).await))
}

/// Checks whether a crew is free on a day.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a blank crew id or a malformed date.
pub async fn check_crew_availability<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    crew_id: &str,
    date: &str,
) -> Result<CrewAvailabilityResponse, ApiError> {
    let date: Date = parse_calendar_date(date).map_err(translate_domain_error)?;
    let check: AvailabilityCheck = engine
        .check_crew_availability_detailed(crew_id, date)
        .await
        .map_err(translate_core_error)?;

    Ok(CrewAvailabilityResponse {
        crew_id: check.crew_id.value().to_string(),
        date: format_calendar_date(check.date),
        available: check.available,
        lookup_failed: check.lookup_failed,
    })
}

/// Registers a dive site.
///
/// # Errors
///
/// Returns an error if the id is blank or already taken.
pub fn create_site(
    persistence: &mut Persistence,
    request: &CreateSiteRequest,
) -> Result<CreateSiteResponse, ApiError> {
    let site_id: SiteId = SiteId::new(&request.site_id).map_err(translate_domain_error)?;
    persistence
        .create_site(&site_id, request.name.trim())
        .map_err(|e| translate_persistence_error(e, "Site"))?;

    info!(site_id = site_id.value(), "Site registered");
    Ok(CreateSiteResponse {
        site_id: site_id.value().to_string(),
        message: format!("Site '{}' registered", site_id.value()),
    })
}

/// Registers a crew with an empty roster.
///
/// # Errors
///
/// Returns an error if the id is blank or already taken.
pub fn create_crew(
    persistence: &mut Persistence,
    request: &CreateCrewRequest,
) -> Result<CreateCrewResponse, ApiError> {
    let crew_id: CrewId = CrewId::new(&request.crew_id).map_err(translate_domain_error)?;
    persistence
        .create_crew(&crew_id, request.name.trim())
        .map_err(|e| translate_persistence_error(e, "Crew"))?;

    info!(crew_id = %crew_id, "Crew registered");
    Ok(CreateCrewResponse {
        crew_id: crew_id.value().to_string(),
        message: format!("Crew '{crew_id}' registered"),
    })
}

/// Adds a member to a crew roster.
///
/// # Errors
///
/// Returns an error if the crew id, role or person reference is invalid,
/// or if the crew does not exist.
pub fn add_crew_member(
    persistence: &mut Persistence,
    crew_id: &str,
    request: &AddCrewMemberRequest,
) -> Result<AddCrewMemberResponse, ApiError> {
    let crew_id: CrewId = CrewId::new(crew_id).map_err(translate_domain_error)?;
    let role: TeamRole = request.role.parse().map_err(translate_domain_error)?;
    let member: TeamMember = TeamMember::new(role, request.person_ref.trim().to_string());
    validate_team_member(&member).map_err(translate_domain_error)?;

    if !persistence
        .crew_exists(&crew_id)
        .map_err(|e| translate_persistence_error(e, "Crew"))?
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Crew"),
            message: format!("Crew '{crew_id}' does not exist"),
        });
    }

    let member_id: i64 = persistence
        .add_crew_member(&crew_id, &member)
        .map_err(|e| translate_persistence_error(e, "Crew member"))?;
    let roster: CrewRoster = persistence
        .get_crew_roster(&crew_id)
        .map_err(|e| translate_persistence_error(e, "Crew"))?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Crew '{crew_id}' disappeared after adding a member"),
        })?;

    Ok(AddCrewMemberResponse {
        crew_id: crew_id.value().to_string(),
        member_id,
        roster_size: roster.members.len(),
        diver_count: roster.diver_count(),
        message: format!("Added {} to crew '{crew_id}'", role.as_str()),
    })
}

/// Creates an operation with its assignments.
///
/// # Errors
///
/// Returns an error if any field is invalid, the id or code is taken, or
/// a referenced site or crew does not exist.
pub fn create_operation(
    persistence: &mut Persistence,
    request: &CreateOperationRequest,
) -> Result<CreateOperationResponse, ApiError> {
    let operation_id: OperationId =
        OperationId::new(&request.operation_id).map_err(translate_domain_error)?;
    let start_date: Date = parse_calendar_date(&request.start_date).map_err(translate_domain_error)?;

    let mut operation: Operation = Operation::new(
        operation_id,
        request.code.trim().to_string(),
        request.name.trim().to_string(),
        start_date,
    );
    operation.site_id = request
        .site_id
        .as_deref()
        .map(SiteId::new)
        .transpose()
        .map_err(translate_domain_error)?;
    operation.supervisor_ref = request.supervisor_ref.clone();
    operation.crew_id = request
        .crew_id
        .as_deref()
        .map(CrewId::new)
        .transpose()
        .map_err(translate_domain_error)?;
    validate_operation_fields(&operation).map_err(translate_domain_error)?;

    persistence
        .create_operation(&operation)
        .map_err(|e| translate_persistence_error(e, "Operation"))?;

    info!(operation_id = %operation.operation_id, "Operation created");
    Ok(CreateOperationResponse {
        operation_id: operation.operation_id.value().to_string(),
        code: operation.code.clone(),
        start_date: format_calendar_date(operation.start_date),
        message: format!("Operation '{}' created", operation.code),
    })
}

/// Records the sign-off state of a safety document.
///
/// # Errors
///
/// Returns an error if the operation id or kind is invalid, or if the
/// operation does not exist.
pub fn record_safety_document(
    persistence: &mut Persistence,
    operation_id: &str,
    request: &RecordSafetyDocumentRequest,
) -> Result<RecordSafetyDocumentResponse, ApiError> {
    let operation_id: OperationId =
        OperationId::new(operation_id).map_err(translate_domain_error)?;
    let kind: DocumentKind = request.kind.parse().map_err(translate_domain_error)?;

    let document_id: i64 = persistence
        .record_safety_document(&operation_id, kind, request.signed)
        .map_err(|e| translate_persistence_error(e, "Safety document"))?;

    Ok(RecordSafetyDocumentResponse {
        document_id,
        operation_id: operation_id.value().to_string(),
        kind: kind.as_str().to_string(),
        signed: request.signed,
    })
}

/// Books a crew on a day.
///
/// Availability is checked through the engine before the write, without
/// holding the store lock. The booking is always written. A same-day
/// conflict, or a failure to look one up, is returned as a warning for the
/// operator.
///
/// # Errors
///
/// Returns an error if an id or the date is invalid, or if the crew or
/// operation does not exist.
pub async fn book_crew<S: OperationSource>(
    engine: &ReadinessEngine<S>,
    persistence: &Mutex<Persistence>,
    crew_id: &str,
    request: &BookCrewRequest,
) -> Result<BookCrewResponse, ApiError> {
    let crew_id: CrewId = CrewId::new(crew_id).map_err(translate_domain_error)?;
    let date: Date = parse_calendar_date(&request.date).map_err(translate_domain_error)?;
    let operation_id: Option<OperationId> = request
        .operation_id
        .as_deref()
        .map(OperationId::new)
        .transpose()
        .map_err(translate_domain_error)?;

    let check: AvailabilityCheck = engine
        .check_crew_availability_detailed(crew_id.value(), date)
        .await
        .map_err(translate_core_error)?;
    let warning: Option<String> = booking_warning(&check);

    let booking_id: i64 = persistence
        .lock()
        .await
        .record_crew_booking(&crew_id, date, operation_id.as_ref())
        .map_err(|e| translate_persistence_error(e, "Crew booking"))?;

    if check.conflicting_bookings > 0 {
        warn!(
            crew_id = %crew_id,
            date = %date,
            conflicting_bookings = check.conflicting_bookings,
            "Crew booked on a day it was already booked"
        );
    }

    Ok(BookCrewResponse {
        booking_id,
        crew_id: crew_id.value().to_string(),
        date: format_calendar_date(date),
        conflict: !check.available,
        conflicting_bookings: check.conflicting_bookings,
        warning,
    })
}

fn booking_warning(check: &AvailabilityCheck) -> Option<String> {
    if check.lookup_failed {
        Some(format!(
            "Could not check existing bookings for crew '{}'",
            check.crew_id
        ))
    } else if check.available {
        None
    } else {
        Some(format!(
            "Crew '{}' is already booked on {}",
            check.crew_id,
            format_calendar_date(check.date)
        ))
    }
}
