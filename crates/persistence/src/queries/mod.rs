// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `operations`: Operation records and identifiers
//! - `documents`: Safety document sign-off state
//! - `crews`: Crew rosters and bookings

pub mod crews;
pub mod documents;
pub mod operations;
