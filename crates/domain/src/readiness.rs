// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation readiness evaluation.
//!
//! This module turns the five readiness facts of a diving operation into a
//! progress score, an alert summary, and a lifecycle classification.
//!
//! Readiness is **computed**, not stored. Every function here is a pure
//! function of a `ValidationStatus`.

use crate::error::DomainError;
use crate::types::OperationState;
use serde::{Deserialize, Serialize};

/// Base credit awarded to every validated operation.
pub const WEIGHT_OPERATION_EXISTS: u8 = 15;
/// Weight of an assigned dive site.
pub const WEIGHT_SITE: u8 = 15;
/// Weight of an assigned supervisor.
pub const WEIGHT_SUPERVISOR: u8 = 15;
/// Weight of a complete dive team.
pub const WEIGHT_TEAM: u8 = 15;
/// Weight of a signed hazard/task plan.
pub const WEIGHT_HAZARD_PLAN: u8 = 20;
/// Weight of a signed safety annex.
pub const WEIGHT_SAFETY_ANNEX: u8 = 20;

/// Score at or above which an operation is classified as `Preparation`.
pub const PREPARATION_THRESHOLD: u8 = 80;
/// Highest achievable score.
pub const MAX_SCORE: u8 = 100;

/// Missing-item label for the hazard/task plan.
pub const LABEL_HAZARD_PLAN: &str = "HPT";
/// Missing-item label for the safety annex.
pub const LABEL_SAFETY_ANNEX: &str = "Anexo Bravo";
/// Missing-item label for the supervisor.
pub const LABEL_SUPERVISOR: &str = "Supervisor";
/// Missing-item label for the dive team.
pub const LABEL_TEAM: &str = "Equipo";
/// Missing-item label for the dive site.
pub const LABEL_SITE: &str = "Sitio";

/// The result of one validation pass over an operation.
///
/// `can_execute` is always the logical AND of the five readiness fields.
/// The fields are private so no other combination can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawValidationStatus", into = "RawValidationStatus")]
pub struct ValidationStatus {
    hpt_ready: bool,
    anexo_bravo_ready: bool,
    supervisor_asignado: bool,
    equipo_asignado: bool,
    sitio_asignado: bool,
    can_execute: bool,
}

/// Wire shape of a `ValidationStatus`, checked on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValidationStatus {
    hpt_ready: bool,
    anexo_bravo_ready: bool,
    supervisor_asignado: bool,
    equipo_asignado: bool,
    sitio_asignado: bool,
    #[serde(default)]
    can_execute: Option<bool>,
}

impl TryFrom<RawValidationStatus> for ValidationStatus {
    type Error = DomainError;

    fn try_from(raw: RawValidationStatus) -> Result<Self, Self::Error> {
        let status: Self = Self::new(
            raw.hpt_ready,
            raw.anexo_bravo_ready,
            raw.supervisor_asignado,
            raw.equipo_asignado,
            raw.sitio_asignado,
        );
        match raw.can_execute {
            Some(claimed) if claimed != status.can_execute => {
                Err(DomainError::InconsistentValidationStatus {
                    claimed,
                    derived: status.can_execute,
                })
            }
            _ => Ok(status),
        }
    }
}

impl From<ValidationStatus> for RawValidationStatus {
    fn from(status: ValidationStatus) -> Self {
        Self {
            hpt_ready: status.hpt_ready,
            anexo_bravo_ready: status.anexo_bravo_ready,
            supervisor_asignado: status.supervisor_asignado,
            equipo_asignado: status.equipo_asignado,
            sitio_asignado: status.sitio_asignado,
            can_execute: Some(status.can_execute),
        }
    }
}

impl ValidationStatus {
    /// Creates a status from the five readiness facts.
    ///
    /// # Arguments
    ///
    /// * `hpt_ready` - The hazard/task plan is signed
    /// * `anexo_bravo_ready` - The safety annex is signed
    /// * `supervisor_asignado` - A supervisor is assigned
    /// * `equipo_asignado` - A complete dive team is assigned
    /// * `sitio_asignado` - A dive site is assigned
    #[must_use]
    pub const fn new(
        hpt_ready: bool,
        anexo_bravo_ready: bool,
        supervisor_asignado: bool,
        equipo_asignado: bool,
        sitio_asignado: bool,
    ) -> Self {
        Self {
            hpt_ready,
            anexo_bravo_ready,
            supervisor_asignado,
            equipo_asignado,
            sitio_asignado,
            can_execute: hpt_ready
                && anexo_bravo_ready
                && supervisor_asignado
                && equipo_asignado
                && sitio_asignado,
        }
    }

    /// The maximally conservative status: nothing is ready.
    #[must_use]
    pub const fn not_ready() -> Self {
        Self::new(false, false, false, false, false)
    }

    #[must_use]
    pub const fn hpt_ready(&self) -> bool {
        self.hpt_ready
    }

    #[must_use]
    pub const fn anexo_bravo_ready(&self) -> bool {
        self.anexo_bravo_ready
    }

    #[must_use]
    pub const fn supervisor_asignado(&self) -> bool {
        self.supervisor_asignado
    }

    #[must_use]
    pub const fn equipo_asignado(&self) -> bool {
        self.equipo_asignado
    }

    #[must_use]
    pub const fn sitio_asignado(&self) -> bool {
        self.sitio_asignado
    }

    /// Whether immersions may be created under this operation.
    #[must_use]
    pub const fn can_execute(&self) -> bool {
        self.can_execute
    }
}

/// Computes the weighted completeness score of a status.
///
/// The operation-exists base credit is always included, so the result
/// ranges from 15 (nothing ready) to 100 (everything ready).
#[must_use]
pub const fn score(status: &ValidationStatus) -> u8 {
    let mut total: u8 = WEIGHT_OPERATION_EXISTS;
    if status.sitio_asignado {
        total += WEIGHT_SITE;
    }
    if status.supervisor_asignado {
        total += WEIGHT_SUPERVISOR;
    }
    if status.equipo_asignado {
        total += WEIGHT_TEAM;
    }
    if status.hpt_ready {
        total += WEIGHT_HAZARD_PLAN;
    }
    if status.anexo_bravo_ready {
        total += WEIGHT_SAFETY_ANNEX;
    }
    total
}

/// Classifies an operation from its score and executability.
///
/// Only `Planning` or `Preparation` are ever returned.
#[must_use]
pub const fn classify(score: u8, can_execute: bool) -> OperationState {
    let ready_to_execute: bool = score >= MAX_SCORE && can_execute;
    if ready_to_execute || score >= PREPARATION_THRESHOLD {
        OperationState::Preparation
    } else {
        OperationState::Planning
    }
}

/// Outstanding items for an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    /// Alert badge count. Site is informational and never counted.
    pub count: usize,
    /// Labels of every unmet condition, site included.
    pub missing: Vec<String>,
}

/// Aggregates the missing items of a status.
#[must_use]
pub fn alerts(status: &ValidationStatus) -> AlertSummary {
    let counted: [(bool, &str); 4] = [
        (status.hpt_ready, LABEL_HAZARD_PLAN),
        (status.anexo_bravo_ready, LABEL_SAFETY_ANNEX),
        (status.supervisor_asignado, LABEL_SUPERVISOR),
        (status.equipo_asignado, LABEL_TEAM),
    ];

    let mut missing: Vec<String> = counted
        .iter()
        .filter(|(ready, _)| !ready)
        .map(|(_, label)| (*label).to_string())
        .collect();
    let count: usize = missing.len();

    if !status.sitio_asignado {
        missing.push(LABEL_SITE.to_string());
    }

    AlertSummary { count, missing }
}

/// Presentation-ready readiness facts for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Completeness score, 0 to 100.
    #[serde(rename = "progreso")]
    pub progress: u8,
    /// Lifecycle classification.
    #[serde(rename = "estado")]
    pub state: OperationState,
    /// Alert badge count.
    #[serde(rename = "alertas")]
    pub alerts: usize,
    /// Whether execution may proceed.
    #[serde(rename = "canExecute")]
    pub can_execute: bool,
}

/// Builds the readiness report for a status.
#[must_use]
pub fn build_readiness_report(status: &ValidationStatus) -> ReadinessReport {
    let progress: u8 = score(status);
    ReadinessReport {
        progress,
        state: classify(progress, status.can_execute),
        alerts: alerts(status).count,
        can_execute: status.can_execute,
    }
}
