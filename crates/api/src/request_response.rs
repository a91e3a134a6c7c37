// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings.

use dive_ready::{PassOutcome, ReadinessReport, ValidationStatus};
use serde::{Deserialize, Serialize};

/// API response for a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// The validated operation.
    pub operation_id: String,
    /// The five readiness facts and the execution gate.
    pub status: ValidationStatus,
    /// Whether the facts were verified or substituted after a source failure.
    pub outcome: PassOutcome,
}

/// API response for an operation's readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// The operation.
    pub operation_id: String,
    /// The five readiness facts and the execution gate.
    pub status: ValidationStatus,
    /// Progress, state, alert count and execution gate.
    pub report: ReadinessReport,
    /// Labels of every unmet condition.
    pub missing: Vec<String>,
    /// Whether the facts were verified or substituted after a source failure.
    pub outcome: PassOutcome,
}

/// API request to build a report from a known status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReportRequest {
    /// The status to report on.
    pub status: ValidationStatus,
}

/// API response carrying a report built from a posted status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReportResponse {
    /// Progress, state, alert count and execution gate.
    pub report: ReadinessReport,
    /// Labels of every unmet condition.
    pub missing: Vec<String>,
}

/// API request to recompute readiness for several operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReadinessRequest {
    /// Operations to recompute, in the order results should be returned.
    pub operation_ids: Vec<String>,
}

/// One entry of a batch readiness response.
///
/// Exactly one of `readiness` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReadinessEntry {
    /// The requested operation id, as sent.
    pub operation_id: String,
    /// The readiness, if it could be computed.
    pub readiness: Option<ReadinessResponse>,
    /// Why readiness could not be computed.
    pub error: Option<String>,
}

/// API response for a batch readiness request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReadinessResponse {
    /// One entry per requested id, in request order.
    pub results: Vec<BatchReadinessEntry>,
}

/// API response for a crew availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAvailabilityResponse {
    /// The crew asked about.
    pub crew_id: String,
    /// The proposed day.
    pub date: String,
    /// Whether the crew has no booking on `date`.
    pub available: bool,
    /// Whether bookings could not be read and `available` is the default.
    pub lookup_failed: bool,
}

/// API request to register a dive site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSiteRequest {
    /// The site identifier.
    pub site_id: String,
    /// Display name.
    pub name: String,
}

/// API response for a successful site registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSiteResponse {
    /// The site identifier.
    pub site_id: String,
    /// A success message.
    pub message: String,
}

/// API request to register a crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCrewRequest {
    /// The crew identifier.
    pub crew_id: String,
    /// Display name.
    pub name: String,
}

/// API response for a successful crew registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCrewResponse {
    /// The crew identifier.
    pub crew_id: String,
    /// A success message.
    pub message: String,
}

/// API request to add a member to a crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCrewMemberRequest {
    /// One of `supervisor`, `lead_diver`, `assistant_diver`, `surface_support`.
    pub role: String,
    /// Reference to the person.
    pub person_ref: String,
}

/// API response after a member was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCrewMemberResponse {
    /// The crew.
    pub crew_id: String,
    /// The new member's id.
    pub member_id: i64,
    /// Members now on the roster.
    pub roster_size: usize,
    /// Divers now on the roster.
    pub diver_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to create an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperationRequest {
    /// The operation identifier.
    pub operation_id: String,
    /// Short business code, unique across operations.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Planned start date.
    pub start_date: String,
    /// Assigned site.
    #[serde(default)]
    pub site_id: Option<String>,
    /// Assigned supervisor reference.
    #[serde(default)]
    pub supervisor_ref: Option<String>,
    /// Assigned crew.
    #[serde(default)]
    pub crew_id: Option<String>,
}

/// API response for a successful operation creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOperationResponse {
    /// The operation identifier.
    pub operation_id: String,
    /// The operation code.
    pub code: String,
    /// The planned start date.
    pub start_date: String,
    /// A success message.
    pub message: String,
}

/// API request to record a safety document's sign-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSafetyDocumentRequest {
    /// `HPT` or `ANEXO_BRAVO`.
    pub kind: String,
    /// Whether the document is signed.
    pub signed: bool,
}

/// API response after a safety document was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSafetyDocumentResponse {
    /// The document id.
    pub document_id: i64,
    /// The owning operation.
    pub operation_id: String,
    /// The document kind.
    pub kind: String,
    /// Whether the document is signed.
    pub signed: bool,
}

/// API request to book a crew on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCrewRequest {
    /// The day to book.
    pub date: String,
    /// The operation the booking is for, if any.
    #[serde(default)]
    pub operation_id: Option<String>,
}

/// API response after a booking was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCrewResponse {
    /// The booking id.
    pub booking_id: i64,
    /// The booked crew.
    pub crew_id: String,
    /// The booked day.
    pub date: String,
    /// Whether the crew already had a booking on this day.
    pub conflict: bool,
    /// Number of pre-existing bookings on the same day.
    pub conflicting_bookings: usize,
    /// Operator-facing warning when a conflict was found or could not be checked.
    pub warning: Option<String>,
}
