// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::SiteId;
use tracing::info;

use crate::diesel_schema::sites;
use crate::error::PersistenceError;

/// Registers a dive site.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the id is taken.
pub fn create_site(
    conn: &mut SqliteConnection,
    site_id: &SiteId,
    name: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(sites::table)
        .values((sites::site_id.eq(site_id.value()), sites::name.eq(name)))
        .execute(conn)?;

    info!(site_id = site_id.value(), "Site created");
    Ok(())
}
