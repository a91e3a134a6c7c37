// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dive_ready::ReadinessEngine;
use dive_ready_domain::CrewId;
use dive_ready_persistence::Persistence;

use crate::tests::helpers::{
    BookingsOffline, create_operation_request, create_test_context, seed_site_and_complete_crew,
};
use crate::{
    AddCrewMemberRequest, ApiError, BookCrewRequest, RecordSafetyDocumentRequest,
    add_crew_member, book_crew, create_operation, record_safety_document,
};

fn seeded() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    seed_site_and_complete_crew(&mut persistence);
    persistence
}

#[test]
fn test_create_operation_normalizes_fields() {
    let mut persistence = seeded();
    let mut request = create_operation_request("  OP-1  ", "  INS-001 ");
    request.site_id = Some(String::from("SITE-1"));

    let response = create_operation(&mut persistence, &request).unwrap();

    assert_eq!(response.operation_id, "OP-1");
    assert_eq!(response.code, "INS-001");
    assert_eq!(response.start_date, "2026-04-15");
}

#[test]
fn test_create_operation_rejects_blank_code() {
    let mut persistence = seeded();
    let result = create_operation(&mut persistence, &create_operation_request("OP-1", " "));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "code"
    ));
}

#[test]
fn test_create_operation_rejects_bad_date() {
    let mut persistence = seeded();
    let mut request = create_operation_request("OP-1", "INS-001");
    request.start_date = String::from("2026-02-30");

    let result = create_operation(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_duplicate_operation_code_is_rule_violation() {
    let mut persistence = seeded();
    create_operation(&mut persistence, &create_operation_request("OP-1", "INS-001")).unwrap();

    let result = create_operation(&mut persistence, &create_operation_request("OP-2", "INS-001"));
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_operation_with_unknown_crew_is_not_found() {
    let mut persistence = seeded();
    let mut request = create_operation_request("OP-1", "INS-001");
    request.crew_id = Some(String::from("C-404"));

    let result = create_operation(&mut persistence, &request);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_unknown_document_kind_is_invalid_input() {
    let mut persistence = seeded();
    create_operation(&mut persistence, &create_operation_request("OP-1", "INS-001")).unwrap();

    let result = record_safety_document(
        &mut persistence,
        "OP-1",
        &RecordSafetyDocumentRequest {
            kind: String::from("PERMIT"),
            signed: true,
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "kind"
    ));
}

#[test]
fn test_add_member_reports_roster_counts() {
    let mut persistence = seeded();
    let response = add_crew_member(
        &mut persistence,
        "C-1",
        &AddCrewMemberRequest {
            role: String::from("surface_support"),
            person_ref: String::from("TEN-1"),
        },
    )
    .unwrap();

    assert_eq!(response.roster_size, 4);
    assert_eq!(response.diver_count, 2);
}

#[test]
fn test_add_member_to_unknown_crew_is_not_found() {
    let mut persistence = seeded();
    let result = add_crew_member(
        &mut persistence,
        "C-404",
        &AddCrewMemberRequest {
            role: String::from("lead_diver"),
            person_ref: String::from("DIV-9"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_add_member_rejects_unknown_role() {
    let mut persistence = seeded();
    let result = add_crew_member(
        &mut persistence,
        "C-1",
        &AddCrewMemberRequest {
            role: String::from("cook"),
            person_ref: String::from("X-1"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "role"
    ));
}

fn booking_on(date: &str) -> BookCrewRequest {
    BookCrewRequest {
        date: date.to_string(),
        operation_id: None,
    }
}

#[tokio::test]
async fn test_book_crew_warns_on_same_day_but_still_writes() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);
    let request = booking_on("2026-04-10");

    let first = book_crew(&ctx.engine, &ctx.persistence, "C-1", &request)
        .await
        .unwrap();
    let second = book_crew(&ctx.engine, &ctx.persistence, "C-1", &request)
        .await
        .unwrap();

    assert!(!first.conflict);
    assert_eq!(first.warning, None);
    assert!(second.conflict);
    assert_eq!(second.conflicting_bookings, 1);
    assert!(second.warning.unwrap().contains("already booked"));
    assert_ne!(first.booking_id, second.booking_id);
}

#[tokio::test]
async fn test_book_crew_adjacent_days_do_not_conflict() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);

    for date in ["2026-04-09", "2026-04-11", "2026-04-10"] {
        let response = book_crew(&ctx.engine, &ctx.persistence, "C-1", &booking_on(date))
            .await
            .unwrap();
        assert!(!response.conflict, "{date} should not conflict");
    }
}

#[tokio::test]
async fn test_book_unknown_crew_is_not_found() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);

    let result = book_crew(
        &ctx.engine,
        &ctx.persistence,
        "C-404",
        &booking_on("2026-04-10"),
    )
    .await;

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Crew"
    ));
    assert!(
        ctx.persistence
            .lock()
            .await
            .list_crew_booking_dates(&CrewId::new("C-404").unwrap())
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_book_crew_when_bookings_cannot_be_read() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);
    let engine = ReadinessEngine::new(BookingsOffline::new(&ctx.persistence));

    book_crew(&ctx.engine, &ctx.persistence, "C-1", &booking_on("2026-04-10"))
        .await
        .unwrap();
    let response = book_crew(&engine, &ctx.persistence, "C-1", &booking_on("2026-04-10"))
        .await
        .unwrap();

    assert!(!response.conflict);
    assert_eq!(response.conflicting_bookings, 0);
    assert!(response.warning.unwrap().contains("Could not check"));

    let dates = ctx
        .persistence
        .lock()
        .await
        .list_crew_booking_dates(&CrewId::new("C-1").unwrap())
        .unwrap();
    assert_eq!(dates.len(), 2);
}

#[test]
fn test_operation_request_optional_fields_default_to_none() {
    let request: crate::CreateOperationRequest = serde_json::from_value(serde_json::json!({
        "operation_id": "OP-9",
        "code": "INS-009",
        "name": "Inspección muelle",
        "start_date": "2026-04-20"
    }))
    .unwrap();

    assert_eq!(request.site_id, None);
    assert_eq!(request.supervisor_ref, None);
    assert_eq!(request.crew_id, None);

    let booking: BookCrewRequest =
        serde_json::from_value(serde_json::json!({ "date": "2026-04-20" })).unwrap();
    assert_eq!(booking.operation_id, None);
}
