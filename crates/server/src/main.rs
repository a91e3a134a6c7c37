// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use dive_ready::ReadinessEngine;
use dive_ready_api::{
    AddCrewMemberRequest, AddCrewMemberResponse, ApiError, BatchReadinessRequest,
    BatchReadinessResponse, BookCrewRequest, BookCrewResponse, BuildReportRequest,
    CreateCrewRequest, CreateCrewResponse, CreateOperationRequest, CreateOperationResponse,
    CreateSiteRequest, CreateSiteResponse, CrewAvailabilityResponse, DEFAULT_MINIMUM_DIVERS,
    PersistenceSource, ReadinessReportResponse, ReadinessResponse, RecordSafetyDocumentRequest,
    RecordSafetyDocumentResponse, ValidationResponse, add_crew_member, book_crew, build_report,
    check_crew_availability, create_crew, create_operation, create_site, get_all_readiness,
    get_readiness, get_readiness_batch, get_validation, record_safety_document,
};
use dive_ready_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Dive Ready Server - HTTP server for dive operation readiness
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Minimum number of divers a crew needs to count as complete
    #[arg(long, default_value_t = DEFAULT_MINIMUM_DIVERS)]
    min_divers: usize,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The store, shared with the engine's source.
    persistence: Arc<Mutex<Persistence>>,
    /// The readiness engine reading from `persistence`.
    engine: ReadinessEngine<PersistenceSource>,
}

impl AppState {
    fn new(persistence: Persistence, minimum_divers: usize) -> Self {
        let persistence: Arc<Mutex<Persistence>> = Arc::new(Mutex::new(persistence));
        let source: PersistenceSource =
            PersistenceSource::new(Arc::clone(&persistence), minimum_divers);
        Self {
            persistence,
            engine: ReadinessEngine::new(source),
        }
    }
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AvailabilityQuery {
    /// The proposed day (`YYYY-MM-DD`).
    date: String,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for GET `/operations/{operation_id}/validation`.
async fn handle_get_validation(
    AxumState(app_state): AxumState<AppState>,
    Path(operation_id): Path<String>,
) -> Result<Json<ValidationResponse>, HttpError> {
    info!(operation_id = %operation_id, "Handling get_validation request");
    Ok(Json(get_validation(&app_state.engine, &operation_id).await?))
}

/// Handler for GET `/operations/{operation_id}/readiness`.
async fn handle_get_readiness(
    AxumState(app_state): AxumState<AppState>,
    Path(operation_id): Path<String>,
) -> Result<Json<ReadinessResponse>, HttpError> {
    info!(operation_id = %operation_id, "Handling get_readiness request");
    Ok(Json(get_readiness(&app_state.engine, &operation_id).await?))
}

/// Handler for POST `/operations/readiness`.
///
/// Recomputes several operations at once; per-operation failures are
/// reported inline.
async fn handle_readiness_batch(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<BatchReadinessRequest>, JsonRejection>,
) -> Result<Json<BatchReadinessResponse>, HttpError> {
    let Json(request) = payload?;
    info!(
        count = request.operation_ids.len(),
        "Handling readiness_batch request"
    );
    Ok(Json(get_readiness_batch(&app_state.engine, &request).await))
}

/// Handler for GET `/operations/readiness`.
async fn handle_all_readiness(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<BatchReadinessResponse>, HttpError> {
    info!("Handling all_readiness request");
    Ok(Json(
        get_all_readiness(&app_state.engine, &app_state.persistence).await?,
    ))
}

/// Handler for POST `/readiness/report`.
///
/// A status whose `canExecute` contradicts its fields is rejected here.
async fn handle_build_report(
    payload: Result<Json<BuildReportRequest>, JsonRejection>,
) -> Result<Json<ReadinessReportResponse>, HttpError> {
    let Json(request) = payload?;
    info!("Handling build_report request");
    Ok(Json(build_report(&request)))
}

/// Handler for POST `/sites`.
async fn handle_create_site(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateSiteRequest>, JsonRejection>,
) -> Result<Json<CreateSiteResponse>, HttpError> {
    let Json(request) = payload?;
    info!(site_id = %request.site_id, "Handling create_site request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(create_site(&mut persistence, &request)?))
}

/// Handler for POST `/crews`.
async fn handle_create_crew(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateCrewRequest>, JsonRejection>,
) -> Result<Json<CreateCrewResponse>, HttpError> {
    let Json(request) = payload?;
    info!(crew_id = %request.crew_id, "Handling create_crew request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(create_crew(&mut persistence, &request)?))
}

/// Handler for POST `/crews/{crew_id}/members`.
async fn handle_add_crew_member(
    AxumState(app_state): AxumState<AppState>,
    Path(crew_id): Path<String>,
    payload: Result<Json<AddCrewMemberRequest>, JsonRejection>,
) -> Result<Json<AddCrewMemberResponse>, HttpError> {
    let Json(request) = payload?;
    info!(crew_id = %crew_id, role = %request.role, "Handling add_crew_member request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(add_crew_member(&mut persistence, &crew_id, &request)?))
}

/// Handler for GET `/crews/{crew_id}/availability?date=YYYY-MM-DD`.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(crew_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<CrewAvailabilityResponse>, HttpError> {
    info!(crew_id = %crew_id, date = %query.date, "Handling check_availability request");
    Ok(Json(
        check_crew_availability(&app_state.engine, &crew_id, &query.date).await?,
    ))
}

/// Handler for POST `/crews/{crew_id}/bookings`.
///
/// Availability is checked before the store lock is taken. Conflicts never
/// block the booking; they come back as a warning.
async fn handle_book_crew(
    AxumState(app_state): AxumState<AppState>,
    Path(crew_id): Path<String>,
    payload: Result<Json<BookCrewRequest>, JsonRejection>,
) -> Result<Json<BookCrewResponse>, HttpError> {
    let Json(request) = payload?;
    info!(crew_id = %crew_id, date = %request.date, "Handling book_crew request");
    Ok(Json(
        book_crew(
            &app_state.engine,
            &app_state.persistence,
            &crew_id,
            &request,
        )
        .await?,
    ))
}

/// Handler for POST `/operations`.
async fn handle_create_operation(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateOperationRequest>, JsonRejection>,
) -> Result<Json<CreateOperationResponse>, HttpError> {
    let Json(request) = payload?;
    info!(
        operation_id = %request.operation_id,
        code = %request.code,
        "Handling create_operation request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(create_operation(&mut persistence, &request)?))
}

/// Handler for POST `/operations/{operation_id}/documents`.
async fn handle_record_document(
    AxumState(app_state): AxumState<AppState>,
    Path(operation_id): Path<String>,
    payload: Result<Json<RecordSafetyDocumentRequest>, JsonRejection>,
) -> Result<Json<RecordSafetyDocumentResponse>, HttpError> {
    let Json(request) = payload?;
    info!(
        operation_id = %operation_id,
        kind = %request.kind,
        signed = request.signed,
        "Handling record_document request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(record_safety_document(
        &mut persistence,
        &operation_id,
        &request,
    )?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/operations", post(handle_create_operation))
        .route(
            "/operations/readiness",
            get(handle_all_readiness).post(handle_readiness_batch),
        )
        .route(
            "/operations/{operation_id}/validation",
            get(handle_get_validation),
        )
        .route(
            "/operations/{operation_id}/readiness",
            get(handle_get_readiness),
        )
        .route(
            "/operations/{operation_id}/documents",
            post(handle_record_document),
        )
        .route("/readiness/report", post(handle_build_report))
        .route("/sites", post(handle_create_site))
        .route("/crews", post(handle_create_crew))
        .route("/crews/{crew_id}/members", post(handle_add_crew_member))
        .route(
            "/crews/{crew_id}/availability",
            get(handle_check_availability),
        )
        .route("/crews/{crew_id}/bookings", post(handle_book_crew))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Dive Ready Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    info!(min_divers = args.min_divers, "Crew completeness rule configured");
    let app: Router = build_router(AppState::new(persistence, args.min_divers));

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
