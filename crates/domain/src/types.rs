// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Calendar date format used on the wire and in storage (`YYYY-MM-DD`).
const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_calendar_date(date: Date) -> String {
    // Only fails for years outside the four-digit range, which the parser never yields.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Represents the lifecycle state of a diving operation.
///
/// Only `Planning` and `Preparation` are derived from readiness. The later
/// states are advanced by immersion events outside the readiness engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OperationState {
    /// Initial state. Documents or assignments are still outstanding.
    #[default]
    Planning,
    /// Nearly or fully ready. Execution may be gated on `can_execute`.
    Preparation,
    /// Immersions in progress.
    Execution,
    /// Immersions finished, paperwork being closed.
    Finalization,
    /// Operation closed. Read-only.
    Completed,
}

impl FromStr for OperationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(Self::Planning),
            "Preparation" => Ok(Self::Preparation),
            "Execution" => Ok(Self::Execution),
            "Finalization" => Ok(Self::Finalization),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidLifecycleState(s.to_string())),
        }
    }
}

impl std::fmt::Display for OperationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OperationState {
    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Preparation => "Preparation",
            Self::Execution => "Execution",
            Self::Finalization => "Finalization",
            Self::Completed => "Completed",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Planning → Preparation
    /// - Preparation → Execution
    /// - Execution → Finalization
    /// - Finalization → Completed
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Planning, Self::Preparation)
                | (Self::Preparation, Self::Execution)
                | (Self::Execution, Self::Finalization)
                | (Self::Finalization, Self::Completed)
        )
    }

    /// Returns whether this state can be produced by readiness classification.
    #[must_use]
    pub const fn is_engine_state(&self) -> bool {
        matches!(self, Self::Planning | Self::Preparation)
    }
}

/// Identifier of a diving operation.
///
/// Identifiers are opaque, trimmed, and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperationId(String);

impl OperationId {
    /// Creates a new `OperationId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOperationId` if the value is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidOperationId(String::from(
                "Operation id cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OperationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<OperationId> for String {
    fn from(id: OperationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a crew ("cuadrilla").
///
/// The same identifier names the team assigned to an operation and the
/// owner of crew bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrewId(String);

impl CrewId {
    /// Creates a new `CrewId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCrewId` if the value is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCrewId(String::from(
                "Crew id cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CrewId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CrewId> for String {
    fn from(id: CrewId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CrewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a dive site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

impl SiteId {
    /// Creates a new `SiteId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSiteId` if the value is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSiteId(String::from(
                "Site id cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SiteId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SiteId> for String {
    fn from(id: SiteId) -> Self {
        id.0
    }
}

/// A planned diving job.
///
/// Operations are created outside the readiness engine and are never
/// mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// The operation identifier.
    pub operation_id: OperationId,
    /// Short business code (unique).
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Planned start date.
    pub start_date: Date,
    /// The dive site, if assigned.
    pub site_id: Option<SiteId>,
    /// Reference to the assigned supervisor, if any.
    pub supervisor_ref: Option<String>,
    /// The crew assigned as the operation's dive team, if any.
    pub crew_id: Option<CrewId>,
}

impl Operation {
    /// Creates a new `Operation` with no assignments.
    #[must_use]
    pub const fn new(
        operation_id: OperationId,
        code: String,
        name: String,
        start_date: Date,
    ) -> Self {
        Self {
            operation_id,
            code,
            name,
            start_date,
            site_id: None,
            supervisor_ref: None,
            crew_id: None,
        }
    }
}

/// The two safety documents that gate execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Hazard/task plan ("HPT").
    #[serde(rename = "HPT")]
    HazardPlan,
    /// Safety annex ("Anexo Bravo").
    #[serde(rename = "ANEXO_BRAVO")]
    SafetyAnnex,
}

impl DocumentKind {
    /// Converts this kind to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HazardPlan => "HPT",
            Self::SafetyAnnex => "ANEXO_BRAVO",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HPT" => Ok(Self::HazardPlan),
            "ANEXO_BRAVO" => Ok(Self::SafetyAnnex),
            _ => Err(DomainError::InvalidDocumentKind(s.to_string())),
        }
    }
}

/// A safety document attached to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyDocument {
    /// The document identifier.
    pub document_id: String,
    /// The owning operation.
    pub operation_id: OperationId,
    /// Which of the two gating documents this is.
    pub kind: DocumentKind,
    /// Whether the document has been signed off.
    pub signed: bool,
}

/// Role held by a member of a crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    /// Dive supervisor.
    Supervisor,
    /// Lead diver.
    LeadDiver,
    /// Assistant diver.
    AssistantDiver,
    /// Surface support (tender, compressor operator).
    SurfaceSupport,
}

impl TeamRole {
    /// Converts this role to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supervisor => "supervisor",
            Self::LeadDiver => "lead_diver",
            Self::AssistantDiver => "assistant_diver",
            Self::SurfaceSupport => "surface_support",
        }
    }

    /// Returns whether this member can act as the dive supervisor.
    #[must_use]
    pub const fn is_supervisor_capable(&self) -> bool {
        matches!(self, Self::Supervisor)
    }

    /// Returns whether this member counts toward the diver minimum.
    #[must_use]
    pub const fn is_diver(&self) -> bool {
        matches!(self, Self::LeadDiver | Self::AssistantDiver)
    }
}

impl FromStr for TeamRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supervisor" => Ok(Self::Supervisor),
            "lead_diver" => Ok(Self::LeadDiver),
            "assistant_diver" => Ok(Self::AssistantDiver),
            "surface_support" => Ok(Self::SurfaceSupport),
            _ => Err(DomainError::InvalidTeamRole(s.to_string())),
        }
    }
}

/// A person holding a role in a crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The role held.
    pub role: TeamRole,
    /// Reference to the person (personnel id or name).
    pub person_ref: String,
}

impl TeamMember {
    /// Creates a new `TeamMember`.
    #[must_use]
    pub const fn new(role: TeamRole, person_ref: String) -> Self {
        Self { role, person_ref }
    }
}

/// The roster of a crew. Member order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRoster {
    /// The crew this roster belongs to.
    pub crew_id: CrewId,
    /// The members of the crew.
    pub members: Vec<TeamMember>,
}

impl CrewRoster {
    /// Creates a new `CrewRoster`.
    #[must_use]
    pub const fn new(crew_id: CrewId, members: Vec<TeamMember>) -> Self {
        Self { crew_id, members }
    }

    /// Returns the number of members who count as divers.
    #[must_use]
    pub fn diver_count(&self) -> usize {
        self.members.iter().filter(|m| m.role.is_diver()).count()
    }

    /// Returns whether the roster is complete for execution.
    ///
    /// A roster is complete when it has at least one supervisor-capable
    /// member and at least `minimum_divers` divers.
    #[must_use]
    pub fn is_complete(&self, minimum_divers: usize) -> bool {
        let has_supervisor: bool = self
            .members
            .iter()
            .any(|m| m.role.is_supervisor_capable());
        has_supervisor && self.diver_count() >= minimum_divers
    }
}

/// An existing commitment of a crew on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewBooking {
    /// The booked crew.
    pub crew_id: CrewId,
    /// The booked day.
    pub date: Date,
}

impl CrewBooking {
    /// Creates a new `CrewBooking`.
    #[must_use]
    pub const fn new(crew_id: CrewId, date: Date) -> Self {
        Self { crew_id, date }
    }
}
