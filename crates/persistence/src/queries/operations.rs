// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{CrewId, Operation, OperationId, SiteId, parse_calendar_date};
use tracing::debug;

use crate::diesel_schema::operations;
use crate::error::PersistenceError;

/// Diesel Queryable struct for operation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = operations)]
struct OperationRow {
    operation_id: String,
    code: String,
    name: String,
    start_date: String,
    site_id: Option<String>,
    supervisor_ref: Option<String>,
    crew_id: Option<String>,
}

impl TryFrom<OperationRow> for Operation {
    type Error = PersistenceError;

    fn try_from(row: OperationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            operation_id: OperationId::new(&row.operation_id)?,
            code: row.code,
            name: row.name,
            start_date: parse_calendar_date(&row.start_date)?,
            site_id: row.site_id.as_deref().map(SiteId::new).transpose()?,
            supervisor_ref: row.supervisor_ref,
            crew_id: row.crew_id.as_deref().map(CrewId::new).transpose()?,
        })
    }
}

/// Retrieves an operation by id.
///
/// Returns `Ok(None)` if no such operation exists.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
pub fn get_operation(
    conn: &mut SqliteConnection,
    operation_id: &OperationId,
) -> Result<Option<Operation>, PersistenceError> {
    debug!(operation_id = %operation_id, "Loading operation");

    let row: Option<OperationRow> = operations::table
        .filter(operations::operation_id.eq(operation_id.value()))
        .select(OperationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Operation::try_from).transpose()
}

/// Lists every operation id, ordered by planned start date then id.
///
/// # Errors
///
/// Returns an error if the query fails or a stored id is malformed.
pub fn list_operation_ids(
    conn: &mut SqliteConnection,
) -> Result<Vec<OperationId>, PersistenceError> {
    let ids: Vec<String> = operations::table
        .select(operations::operation_id)
        .order((operations::start_date.asc(), operations::operation_id.asc()))
        .load(conn)?;

    debug!(count = ids.len(), "Listed operations");
    ids.iter()
        .map(|id| OperationId::new(id).map_err(PersistenceError::from))
        .collect()
}
