// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all positional code.

pub mod rthetaphi;
pub mod thetaphi;
pub mod xyz;

use thiserror::Error;

/// The origin has no spherical representation; every physical LED sits
/// strictly off the dome centre, so hitting this error means the caller fed
/// in a coordinate that cannot belong to the dome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot express the origin (zero radius) in spherical coordinates")]
pub struct ZeroRadiusError;
