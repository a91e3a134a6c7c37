// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dive_ready_domain::CrewId;

use crate::{CoreError, CrewAvailabilityChecker};
use crate::tests::helpers::{FailureKind, Failures, FakeSource, day};

fn crew() -> CrewId {
    CrewId::new("C-1").unwrap()
}

#[tokio::test]
async fn test_crew_without_bookings_is_available() {
    let source = FakeSource::default().with_crew("C-1");
    let checker = CrewAvailabilityChecker::new(&source);

    assert!(checker.is_available(&crew(), day(10)).await.unwrap());
}

#[tokio::test]
async fn test_same_day_booking_conflicts() {
    let source = FakeSource::default().with_bookings("C-1", vec![day(10)]);
    let checker = CrewAvailabilityChecker::new(&source);

    let check = checker.check(&crew(), day(10)).await.unwrap();
    assert!(!check.available);
    assert_eq!(check.conflicting_bookings, 1);
    assert!(!check.lookup_failed);
}

#[tokio::test]
async fn test_day_before_and_after_do_not_conflict() {
    let source = FakeSource::default().with_bookings("C-1", vec![day(9), day(11)]);
    let checker = CrewAvailabilityChecker::new(&source);

    assert!(checker.is_available(&crew(), day(10)).await.unwrap());
    assert!(!checker.is_available(&crew(), day(9)).await.unwrap());
    assert!(!checker.is_available(&crew(), day(11)).await.unwrap());
}

#[tokio::test]
async fn test_other_crews_bookings_are_ignored() {
    let source = FakeSource::default()
        .with_crew("C-1")
        .with_bookings("C-2", vec![day(10)]);
    let checker = CrewAvailabilityChecker::new(&source);

    assert!(checker.is_available(&crew(), day(10)).await.unwrap());
}

#[tokio::test]
async fn test_unknown_crew_is_reported() {
    let source = FakeSource::default().with_bookings("C-2", vec![day(10)]);
    let checker = CrewAvailabilityChecker::new(&source);

    let result = checker.check(&crew(), day(10)).await;
    assert!(matches!(result, Err(CoreError::CrewNotFound(ref id)) if *id == crew()));
}

#[tokio::test]
async fn test_lookup_failure_fails_open() {
    for kind in [FailureKind::Unavailable, FailureKind::Fatal] {
        let source = FakeSource::default()
            .with_bookings("C-1", vec![day(10)])
            .failing(Failures {
                bookings: Some(kind),
                ..Failures::default()
            });
        let checker = CrewAvailabilityChecker::new(&source);

        let check = checker.check(&crew(), day(10)).await.unwrap();
        assert!(check.available);
        assert_eq!(check.conflicting_bookings, 0);
        assert!(check.lookup_failed);
    }
}
