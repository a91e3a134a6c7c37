// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! - `sites`: Dive site registration
//! - `operations`: Operation creation
//! - `documents`: Safety document sign-off
//! - `crews`: Crews, members and bookings

pub mod crews;
pub mod documents;
pub mod operations;
pub mod sites;
