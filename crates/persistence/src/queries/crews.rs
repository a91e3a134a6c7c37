// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{CrewId, CrewRoster, TeamMember, TeamRole, parse_calendar_date};
use time::Date;
use tracing::debug;

use crate::diesel_schema::{crew_bookings, crew_members, crews};
use crate::error::PersistenceError;

/// Diesel Queryable struct for crew member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crew_members)]
struct CrewMemberRow {
    role: String,
    person_ref: String,
}

/// Returns whether a crew with this id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn crew_exists(conn: &mut SqliteConnection, crew_id: &CrewId) -> Result<bool, PersistenceError> {
    let count: i64 = crews::table
        .filter(crews::crew_id.eq(crew_id.value()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Loads the roster of a crew.
///
/// Returns `Ok(None)` if the crew does not exist. A crew without members
/// yields an empty roster.
///
/// # Errors
///
/// Returns an error if the query fails or a stored role is unknown.
pub fn get_crew_roster(
    conn: &mut SqliteConnection,
    crew_id: &CrewId,
) -> Result<Option<CrewRoster>, PersistenceError> {
    if !crew_exists(conn, crew_id)? {
        debug!(crew_id = %crew_id, "Crew not found");
        return Ok(None);
    }

    let rows: Vec<CrewMemberRow> = crew_members::table
        .filter(crew_members::crew_id.eq(crew_id.value()))
        .order(crew_members::member_id.asc())
        .select(CrewMemberRow::as_select())
        .load(conn)?;

    let members: Vec<TeamMember> = rows
        .into_iter()
        .map(|row| -> Result<TeamMember, PersistenceError> {
            let role: TeamRole = row.role.parse()?;
            Ok(TeamMember::new(role, row.person_ref))
        })
        .collect::<Result<_, _>>()?;

    debug!(crew_id = %crew_id, members = members.len(), "Loaded crew roster");
    Ok(Some(CrewRoster::new(crew_id.clone(), members)))
}

/// Lists the days a crew is booked, in ascending order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is malformed.
pub fn list_crew_booking_dates(
    conn: &mut SqliteConnection,
    crew_id: &CrewId,
) -> Result<Vec<Date>, PersistenceError> {
    let stored: Vec<String> = crew_bookings::table
        .filter(crew_bookings::crew_id.eq(crew_id.value()))
        .order(crew_bookings::booking_date.asc())
        .select(crew_bookings::booking_date)
        .load(conn)?;

    debug!(crew_id = %crew_id, bookings = stored.len(), "Loaded crew bookings");
    stored
        .iter()
        .map(|date| parse_calendar_date(date).map_err(PersistenceError::from))
        .collect()
}
