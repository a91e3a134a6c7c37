// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for dive operations.
//!
//! Stores the facts the readiness engine reads: operations and their
//! assignments, safety document sign-off, crew rosters and crew bookings.
//! Built on Diesel over `SQLite`.
//!
//! ## Storage
//!
//! - In-memory databases are shared-cache and uniquely named per instance,
//!   so tests never observe each other.
//! - File databases run in WAL mode.
//! - Foreign key enforcement is verified when a database is opened.
//! - Calendar dates are stored as `YYYY-MM-DD` text.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use dive_ready_domain::{
    CrewId, CrewRoster, DocumentKind, Operation, OperationId, SafetyDocument, SiteId, TeamMember,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::sqlite::StorageMode;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for operations, documents and crews.
pub struct Persistence {
    conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:dive_ready_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection =
            backend::sqlite::open_database(&shared_memory_url, StorageMode::Memory)?;
        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = backend::sqlite::open_database(path_str, StorageMode::File)?;
        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is still enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Registers a dive site.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the insert fails.
    pub fn create_site(&mut self, site_id: &SiteId, name: &str) -> Result<(), PersistenceError> {
        mutations::sites::create_site(&mut self.conn, site_id, name)
    }

    /// Registers a crew with an empty roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the insert fails.
    pub fn create_crew(&mut self, crew_id: &CrewId, name: &str) -> Result<(), PersistenceError> {
        mutations::crews::create_crew(&mut self.conn, crew_id, name)
    }

    /// Adds a member to a crew and returns the member id.
    ///
    /// # Errors
    ///
    /// Returns an error if the crew does not exist or the insert fails.
    pub fn add_crew_member(
        &mut self,
        crew_id: &CrewId,
        member: &TeamMember,
    ) -> Result<i64, PersistenceError> {
        mutations::crews::add_crew_member(&mut self.conn, crew_id, member)
    }

    /// Inserts an operation with its assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or code is taken, a referenced site or
    /// crew does not exist, or the insert fails.
    pub fn create_operation(&mut self, operation: &Operation) -> Result<(), PersistenceError> {
        mutations::operations::create_operation(&mut self.conn, operation)
    }

    /// Records the sign-off state of a safety document, replacing any
    /// previous state for the same operation and kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation does not exist or the write fails.
    pub fn record_safety_document(
        &mut self,
        operation_id: &OperationId,
        kind: DocumentKind,
        signed: bool,
    ) -> Result<i64, PersistenceError> {
        mutations::documents::record_safety_document(&mut self.conn, operation_id, kind, signed)
    }

    /// Books a crew on a day and returns the booking id.
    ///
    /// # Errors
    ///
    /// Returns an error if the crew or operation does not exist or the
    /// insert fails.
    pub fn record_crew_booking(
        &mut self,
        crew_id: &CrewId,
        date: Date,
        operation_id: Option<&OperationId>,
    ) -> Result<i64, PersistenceError> {
        mutations::crews::record_crew_booking(&mut self.conn, crew_id, date, operation_id)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Retrieves an operation, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub fn get_operation(
        &mut self,
        operation_id: &OperationId,
    ) -> Result<Option<Operation>, PersistenceError> {
        queries::operations::get_operation(&mut self.conn, operation_id)
    }

    /// Retrieves a safety document, or `None` if it was never recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub fn get_safety_document(
        &mut self,
        operation_id: &OperationId,
        kind: DocumentKind,
    ) -> Result<Option<SafetyDocument>, PersistenceError> {
        queries::documents::get_safety_document(&mut self.conn, operation_id, kind)
    }

    /// Returns whether a crew exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn crew_exists(&mut self, crew_id: &CrewId) -> Result<bool, PersistenceError> {
        queries::crews::crew_exists(&mut self.conn, crew_id)
    }

    /// Loads a crew roster, or `None` if the crew does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored role is unknown.
    pub fn get_crew_roster(
        &mut self,
        crew_id: &CrewId,
    ) -> Result<Option<CrewRoster>, PersistenceError> {
        queries::crews::get_crew_roster(&mut self.conn, crew_id)
    }

    /// Lists the days a crew is booked, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored date is malformed.
    pub fn list_crew_booking_dates(&mut self, crew_id: &CrewId) -> Result<Vec<Date>, PersistenceError> {
        queries::crews::list_crew_booking_dates(&mut self.conn, crew_id)
    }

    /// Lists every operation id, ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_operation_ids(&mut self) -> Result<Vec<OperationId>, PersistenceError> {
        queries::operations::list_operation_ids(&mut self.conn)
    }
}
