// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{CrewId, Operation, SiteId, format_calendar_date};
use tracing::info;

use crate::diesel_schema::operations;
use crate::error::PersistenceError;

/// Inserts an operation together with its assignments.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the id or code is taken,
/// and `PersistenceError::ReferenceNotFound` if the site or crew does not
/// exist.
pub fn create_operation(
    conn: &mut SqliteConnection,
    operation: &Operation,
) -> Result<(), PersistenceError> {
    diesel::insert_into(operations::table)
        .values((
            operations::operation_id.eq(operation.operation_id.value()),
            operations::code.eq(&operation.code),
            operations::name.eq(&operation.name),
            operations::start_date.eq(format_calendar_date(operation.start_date)),
            operations::site_id.eq(operation.site_id.as_ref().map(SiteId::value)),
            operations::supervisor_ref.eq(operation.supervisor_ref.as_deref()),
            operations::crew_id.eq(operation.crew_id.as_ref().map(CrewId::value)),
        ))
        .execute(conn)?;

    info!(
        operation_id = %operation.operation_id,
        code = %operation.code,
        "Operation created"
    );
    Ok(())
}
