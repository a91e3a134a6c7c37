// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew availability calculation.
//!
//! Conflicts are detected at calendar-day granularity: a crew is unavailable
//! on a day it already holds a booking for. There is no duration or overlap
//! logic.

use crate::types::CrewBooking;
use time::Date;

/// Returns whether a crew with the given booked days is free on `proposed`.
///
/// # Arguments
///
/// * `booked_dates` - Days the crew is already committed to
/// * `proposed` - The day being proposed for a new assignment
#[must_use]
pub fn is_crew_available<'a, I>(booked_dates: I, proposed: Date) -> bool
where
    I: IntoIterator<Item = &'a Date>,
{
    !booked_dates.into_iter().any(|date| *date == proposed)
}

/// Returns the bookings that conflict with `proposed`.
///
/// The result is empty exactly when [`is_crew_available`] would return `true`
/// for the same bookings.
#[must_use]
pub fn find_conflicting_bookings(bookings: &[CrewBooking], proposed: Date) -> Vec<CrewBooking> {
    bookings
        .iter()
        .filter(|booking| booking.date == proposed)
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CrewId;
    use time::{Duration, Month};

    fn day(d: u8) -> Date {
        Date::from_calendar_date(2026, Month::March, d).unwrap()
    }

    #[test]
    fn test_available_with_no_bookings() {
        let booked: Vec<Date> = Vec::new();
        assert!(is_crew_available(&booked, day(10)));
    }

    #[test]
    fn test_unavailable_on_same_day() {
        let booked = vec![day(10)];
        assert!(!is_crew_available(&booked, day(10)));
    }

    #[test]
    fn test_adjacent_days_do_not_conflict() {
        let proposed = day(10);
        let booked = vec![
            proposed - Duration::days(1),
            proposed + Duration::days(1),
        ];
        assert!(is_crew_available(&booked, proposed));
    }

    #[test]
    fn test_month_boundary_is_day_granular() {
        let last_of_feb = Date::from_calendar_date(2026, Month::February, 28).unwrap();
        let booked = vec![last_of_feb];
        assert!(is_crew_available(&booked, day(1)));
        assert!(!is_crew_available(&booked, last_of_feb));
    }

    #[test]
    fn test_find_conflicting_bookings() {
        let crew = CrewId::new("C-1").unwrap();
        let bookings = vec![
            CrewBooking::new(crew.clone(), day(9)),
            CrewBooking::new(crew.clone(), day(10)),
            CrewBooking::new(crew, day(11)),
        ];

        let conflicts = find_conflicting_bookings(&bookings, day(10));
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].date, day(10));

        assert!(find_conflicting_bookings(&bookings, day(12)).is_empty());
    }
}
