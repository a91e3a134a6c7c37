// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation readiness and crew availability engine.
//!
//! Given a diving operation, the engine decides how complete its
//! preparation is, which lifecycle state that implies, and whether
//! immersions may be created under it. It also answers whether a crew is
//! already booked on a given day.
//!
//! The engine reads through an [`OperationSource`] and never writes.

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

mod availability;
mod engine;
mod error;
mod probes;
mod source;
mod validator;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use availability::{AvailabilityCheck, CrewAvailabilityChecker};
pub use engine::{OperationReadiness, ReadinessEngine};
pub use error::{CoreError, SourceError};
pub use probes::{AssignmentProbe, AssignmentStatus, DocumentStatus, DocumentStatusProbe};
pub use source::{DocumentSignature, OperationRecord, OperationSource};
pub use validator::{CompletenessValidator, PassOutcome, ValidationPass};

// The pure readiness rules are part of the engine surface.
pub use dive_ready_domain::{
    AlertSummary, ReadinessReport, ValidationStatus, alerts, build_readiness_report, classify,
    score,
};
