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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod crew_availability;
mod error;
mod readiness;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use crew_availability::{find_conflicting_bookings, is_crew_available};
pub use readiness::{
    AlertSummary, LABEL_HAZARD_PLAN, LABEL_SAFETY_ANNEX, LABEL_SITE, LABEL_SUPERVISOR, LABEL_TEAM,
    MAX_SCORE, PREPARATION_THRESHOLD, ReadinessReport, ValidationStatus, WEIGHT_HAZARD_PLAN,
    WEIGHT_OPERATION_EXISTS, WEIGHT_SAFETY_ANNEX, WEIGHT_SITE, WEIGHT_SUPERVISOR, WEIGHT_TEAM,
    alerts, build_readiness_report, classify, score,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    CrewBooking, CrewId, CrewRoster, DocumentKind, Operation, OperationId, OperationState,
    SafetyDocument, SiteId, TeamMember, TeamRole, format_calendar_date, parse_calendar_date,
};
pub use validation::{validate_operation_fields, validate_team_member};
