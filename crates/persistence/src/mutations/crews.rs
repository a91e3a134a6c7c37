// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{CrewId, OperationId, TeamMember, format_calendar_date};
use time::Date;
use tracing::info;

use crate::backend::sqlite::last_insert_rowid;
use crate::diesel_schema::{crew_bookings, crew_members, crews};
use crate::error::PersistenceError;

/// Registers a crew with an empty roster.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the id is taken.
pub fn create_crew(
    conn: &mut SqliteConnection,
    crew_id: &CrewId,
    name: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(crews::table)
        .values((crews::crew_id.eq(crew_id.value()), crews::name.eq(name)))
        .execute(conn)?;

    info!(crew_id = %crew_id, "Crew created");
    Ok(())
}

/// Adds a member to a crew and returns the member id.
///
/// # Errors
///
/// Returns `PersistenceError::ReferenceNotFound` if the crew does not exist.
pub fn add_crew_member(
    conn: &mut SqliteConnection,
    crew_id: &CrewId,
    member: &TeamMember,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        diesel::insert_into(crew_members::table)
            .values((
                crew_members::crew_id.eq(crew_id.value()),
                crew_members::role.eq(member.role.as_str()),
                crew_members::person_ref.eq(&member.person_ref),
            ))
            .execute(conn)?;

        let member_id: i64 = last_insert_rowid(conn)?;
        info!(
            crew_id = %crew_id,
            member_id,
            role = member.role.as_str(),
            "Crew member added"
        );
        Ok(member_id)
    })
}

/// Books a crew on `date`, optionally on behalf of an operation.
///
/// Same-day conflicts are not rejected here; deciding whether to warn is
/// the caller's business. Returns the booking id.
///
/// # Errors
///
/// Returns `PersistenceError::ReferenceNotFound` if the crew or operation
/// does not exist.
pub fn record_crew_booking(
    conn: &mut SqliteConnection,
    crew_id: &CrewId,
    date: Date,
    operation_id: Option<&OperationId>,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        diesel::insert_into(crew_bookings::table)
            .values((
                crew_bookings::crew_id.eq(crew_id.value()),
                crew_bookings::booking_date.eq(format_calendar_date(date)),
                crew_bookings::operation_id.eq(operation_id.map(OperationId::value)),
            ))
            .execute(conn)?;

        let booking_id: i64 = last_insert_rowid(conn)?;
        info!(crew_id = %crew_id, date = %date, booking_id, "Crew booking recorded");
        Ok(booking_id)
    })
}
