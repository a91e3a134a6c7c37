// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::source::OperationSource;
use dive_ready_domain::{CrewBooking, CrewId, find_conflicting_bookings, is_crew_available};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, warn};

/// The answer to one availability question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCheck {
    /// The crew asked about.
    pub crew_id: CrewId,
    /// The proposed day.
    pub date: Date,
    /// Whether no booking on `date` was found.
    pub available: bool,
    /// Number of existing bookings on `date`.
    pub conflicting_bookings: usize,
    /// Whether the booking lookup failed and `available` is the fail-open default.
    pub lookup_failed: bool,
}

/// Advisory same-day conflict check for crew bookings.
///
/// Lookup failures are reported as available. The check gates nothing; it
/// only decides whether the operator sees a conflict warning.
pub struct CrewAvailabilityChecker<'a, S> {
    source: &'a S,
}

impl<'a, S: OperationSource> CrewAvailabilityChecker<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Checks whether `crew_id` has no booking on `proposed`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CrewNotFound` if the source confirms the crew
    /// does not exist.
    pub async fn check(
        &self,
        crew_id: &CrewId,
        proposed: Date,
    ) -> Result<AvailabilityCheck, CoreError> {
        match self.source.fetch_crew_bookings(crew_id).await {
            Ok(Some(booked)) => {
                let bookings: Vec<CrewBooking> = booked
                    .into_iter()
                    .map(|date| CrewBooking::new(crew_id.clone(), date))
                    .collect();
                let available: bool =
                    is_crew_available(bookings.iter().map(|booking| &booking.date), proposed);
                let conflicting_bookings: usize =
                    find_conflicting_bookings(&bookings, proposed).len();
                debug!(
                    crew_id = %crew_id,
                    date = %proposed,
                    bookings = bookings.len(),
                    available,
                    "Crew availability checked"
                );
                Ok(AvailabilityCheck {
                    crew_id: crew_id.clone(),
                    date: proposed,
                    available,
                    conflicting_bookings,
                    lookup_failed: false,
                })
            }
            Ok(None) => Err(CoreError::CrewNotFound(crew_id.clone())),
            Err(err) => {
                warn!(
                    crew_id = %crew_id,
                    date = %proposed,
                    error = %err,
                    "Crew bookings unavailable; reporting crew as available"
                );
                Ok(AvailabilityCheck {
                    crew_id: crew_id.clone(),
                    date: proposed,
                    available: true,
                    conflicting_bookings: 0,
                    lookup_failed: true,
                })
            }
        }
    }

    /// Returns whether `crew_id` is free on `proposed`.
    ///
    /// # Errors
    ///
    /// See [`Self::check`].
    pub async fn is_available(&self, crew_id: &CrewId, proposed: Date) -> Result<bool, CoreError> {
        Ok(self.check(crew_id, proposed).await?.available)
    }
}
