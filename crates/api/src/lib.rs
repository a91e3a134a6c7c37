// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for dive operation readiness.
//!
//! Translates transport-neutral requests into engine calls and store
//! writes, and engine, domain and persistence errors into [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;
mod source;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    add_crew_member, book_crew, build_report, check_crew_availability, create_crew,
    create_operation, create_site, get_all_readiness, get_readiness, get_readiness_batch,
    get_validation, record_safety_document,
};
pub use request_response::{
    AddCrewMemberRequest, AddCrewMemberResponse, BatchReadinessEntry, BatchReadinessRequest,
    BatchReadinessResponse, BookCrewRequest, BookCrewResponse, BuildReportRequest,
    CreateCrewRequest, CreateCrewResponse, CreateOperationRequest, CreateOperationResponse,
    CreateSiteRequest, CreateSiteResponse, CrewAvailabilityResponse, ReadinessReportResponse,
    ReadinessResponse, RecordSafetyDocumentRequest, RecordSafetyDocumentResponse,
    ValidationResponse,
};
pub use source::{DEFAULT_MINIMUM_DIVERS, PersistenceSource};
