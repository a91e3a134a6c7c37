// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use dive_ready_domain::{CrewId, Operation, OperationId, SiteId};
use time::{Date, Month};

use crate::Persistence;

pub fn create_test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::April, day).expect("Valid test date")
}

pub fn create_test_operation(id: &str, code: &str) -> Operation {
    Operation::new(
        OperationId::new(id).unwrap(),
        code.to_string(),
        format!("Operation {code}"),
        create_test_date(15),
    )
}

/// Opens a database seeded with site `SITE-1` and crew `C-1`.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_site(&SiteId::new("SITE-1").unwrap(), "Muelle Norte")
        .unwrap();
    persistence
        .create_crew(&CrewId::new("C-1").unwrap(), "Cuadrilla Uno")
        .unwrap();
    persistence
}
