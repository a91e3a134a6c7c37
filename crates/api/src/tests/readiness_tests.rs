// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dive_ready::PassOutcome;
use dive_ready_domain::{OperationState, ValidationStatus};

use crate::tests::helpers::{
    create_operation_request, create_test_context, seed_ready_operation,
    seed_site_and_complete_crew,
};
use crate::{
    ApiError, BatchReadinessRequest, BookCrewRequest, BuildReportRequest,
    RecordSafetyDocumentRequest, book_crew, build_report, check_crew_availability,
    create_operation, get_all_readiness, get_readiness, get_readiness_batch, get_validation,
    record_safety_document,
};

#[tokio::test]
async fn test_ready_operation_can_execute() {
    let ctx = create_test_context();
    {
        let mut persistence = ctx.persistence.lock().await;
        seed_site_and_complete_crew(&mut persistence);
        seed_ready_operation(&mut persistence, "OP-1", "INS-001");
    }

    let response = get_readiness(&ctx.engine, "OP-1").await.unwrap();

    assert_eq!(response.operation_id, "OP-1");
    assert_eq!(response.outcome, PassOutcome::Verified);
    assert_eq!(response.report.progress, 100);
    assert_eq!(response.report.state, OperationState::Preparation);
    assert!(response.report.can_execute);
    assert_eq!(response.report.alerts, 0);
    assert!(response.missing.is_empty());
}

#[tokio::test]
async fn test_bare_operation_is_planning() {
    let ctx = create_test_context();
    create_operation(
        &mut *ctx.persistence.lock().await,
        &create_operation_request("OP-1", "INS-001"),
    )
    .unwrap();

    let response = get_readiness(&ctx.engine, "OP-1").await.unwrap();

    assert_eq!(response.report.progress, 15);
    assert_eq!(response.report.state, OperationState::Planning);
    assert!(!response.report.can_execute);
    assert_eq!(response.report.alerts, 4);
    assert_eq!(
        response.missing,
        vec!["HPT", "Anexo Bravo", "Supervisor", "Equipo", "Sitio"]
    );
}

#[tokio::test]
async fn test_unsigned_annex_blocks_execution() {
    let ctx = create_test_context();
    {
        let mut persistence = ctx.persistence.lock().await;
        seed_site_and_complete_crew(&mut persistence);
        seed_ready_operation(&mut persistence, "OP-1", "INS-001");
        record_safety_document(
            &mut persistence,
            "OP-1",
            &RecordSafetyDocumentRequest {
                kind: String::from("ANEXO_BRAVO"),
                signed: false,
            },
        )
        .unwrap();
    }

    let response = get_validation(&ctx.engine, "OP-1").await.unwrap();

    assert!(response.status.hpt_ready());
    assert!(!response.status.anexo_bravo_ready());
    assert!(!response.status.can_execute());
}

#[tokio::test]
async fn test_incomplete_crew_is_not_assigned() {
    let ctx = create_test_context();
    {
        let mut persistence = ctx.persistence.lock().await;
        seed_site_and_complete_crew(&mut persistence);
        crate::create_crew(
            &mut persistence,
            &crate::CreateCrewRequest {
                crew_id: String::from("C-2"),
                name: String::from("Cuadrilla Dos"),
            },
        )
        .unwrap();
        let mut request = create_operation_request("OP-1", "INS-001");
        request.crew_id = Some(String::from("C-2"));
        create_operation(&mut persistence, &request).unwrap();
    }

    let response = get_validation(&ctx.engine, "OP-1").await.unwrap();
    assert!(!response.status.equipo_asignado());
}

#[tokio::test]
async fn test_unknown_operation_is_not_found() {
    let ctx = create_test_context();
    let result = get_readiness(&ctx.engine, "OP-404").await;

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[tokio::test]
async fn test_blank_operation_id_is_invalid_input() {
    let ctx = create_test_context();
    let result = get_validation(&ctx.engine, "   ").await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "operation_id"
    ));
}

#[test]
fn test_build_report_for_site_missing() {
    let response = build_report(&BuildReportRequest {
        status: ValidationStatus::new(true, true, true, true, false),
    });

    assert_eq!(response.report.progress, 85);
    assert_eq!(response.report.state, OperationState::Preparation);
    assert!(!response.report.can_execute);
    assert_eq!(response.report.alerts, 0);
    assert_eq!(response.missing, vec!["Sitio"]);
}

#[tokio::test]
async fn test_batch_reports_each_operation_in_order() {
    let ctx = create_test_context();
    {
        let mut persistence = ctx.persistence.lock().await;
        seed_site_and_complete_crew(&mut persistence);
        seed_ready_operation(&mut persistence, "OP-1", "INS-001");
        create_operation(
            &mut persistence,
            &create_operation_request("OP-2", "INS-002"),
        )
        .unwrap();
    }

    let response = get_readiness_batch(
        &ctx.engine,
        &BatchReadinessRequest {
            operation_ids: vec![
                String::from("OP-2"),
                String::from("OP-404"),
                String::from("OP-1"),
            ],
        },
    )
    .await;

    assert_eq!(response.results.len(), 3);
    assert_eq!(response.results[0].operation_id, "OP-2");
    assert_eq!(
        response.results[0].readiness.as_ref().unwrap().report.progress,
        15
    );
    assert!(response.results[1].readiness.is_none());
    assert!(response.results[1].error.is_some());
    assert!(
        response.results[2]
            .readiness
            .as_ref()
            .unwrap()
            .report
            .can_execute
    );
}

#[tokio::test]
async fn test_availability_reflects_bookings() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);
    book_crew(
        &ctx.engine,
        &ctx.persistence,
        "C-1",
        &BookCrewRequest {
            date: String::from("2026-04-10"),
            operation_id: None,
        },
    )
    .await
    .unwrap();

    let same_day = check_crew_availability(&ctx.engine, "C-1", "2026-04-10")
        .await
        .unwrap();
    let next_day = check_crew_availability(&ctx.engine, "C-1", "2026-04-11")
        .await
        .unwrap();

    assert!(!same_day.available);
    assert!(!same_day.lookup_failed);
    assert_eq!(same_day.date, "2026-04-10");
    assert!(next_day.available);
}

#[tokio::test]
async fn test_availability_rejects_malformed_date() {
    let ctx = create_test_context();
    let result = check_crew_availability(&ctx.engine, "C-1", "10/04/2026").await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[tokio::test]
async fn test_availability_of_unknown_crew_is_not_found() {
    let ctx = create_test_context();
    seed_site_and_complete_crew(&mut *ctx.persistence.lock().await);

    let result = check_crew_availability(&ctx.engine, "CREW-DOES-NOT-EXIST", "2026-04-10").await;

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Crew"
    ));
}

#[tokio::test]
async fn test_all_readiness_follows_start_date() {
    let ctx = create_test_context();
    {
        let mut persistence = ctx.persistence.lock().await;
        seed_site_and_complete_crew(&mut persistence);
        seed_ready_operation(&mut persistence, "OP-1", "INS-001");
        let mut early = create_operation_request("OP-0", "INS-000");
        early.start_date = String::from("2026-04-01");
        create_operation(&mut persistence, &early).unwrap();
    }

    let response = get_all_readiness(&ctx.engine, &ctx.persistence)
        .await
        .unwrap();

    let ids: Vec<&str> = response
        .results
        .iter()
        .map(|entry| entry.operation_id.as_str())
        .collect();
    assert_eq!(ids, vec!["OP-0", "OP-1"]);
    assert_eq!(
        response.results[0].readiness.as_ref().unwrap().report.progress,
        15
    );
    assert!(
        response.results[1]
            .readiness
            .as_ref()
            .unwrap()
            .report
            .can_execute
    );
}
