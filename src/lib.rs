// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Core code to describe the LED dome geometry and to synthesize the
//! traveling-wave stimulus it displays.
//!
//! The dome is a spherical LED display surrounding a subject's eye in
//! vision-neuroscience experiments. This crate computes the physical
//! position of every LED from the measured stripe catalog, converts between
//! cartesian and spherical coordinates, rotates positions through a minimal
//! quaternion algebra, and stamps out the boolean frame matrix of a wave
//! sweeping across the dome. It performs no I/O; metadata and curve-fitting
//! layers live elsewhere.

pub mod constants;
pub mod dome;
pub mod math;
pub mod pos;
pub mod quaternion;
pub mod relative;
pub mod wave;

// Re-exports.
pub use dome::{dome_positions, CoordMode, DomeError};
pub use pos::{rthetaphi::RThetaPhi, thetaphi::ThetaPhi, xyz::Xyz, ZeroRadiusError};
pub use quaternion::Quaternion;
pub use relative::{led_relative_position, waves_relative_position};
pub use wave::{build_wave_stimulus, wave_origins, WaveError, WaveParams};

pub use ndarray;
pub use rayon;
