// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Positions relative to a reference direction.
//!
//! Reverse-correlation analyses want to know where every LED or wave origin
//! sat relative to a cell's receptive-field centre. The functions here
//! rotate the dome so that a chosen reference direction lands on the pole
//! (elevation 0); every other position is then expressed in that frame.

use std::f64::consts::FRAC_PI_2;

use ndarray::{Array2, ArrayViewMut1};

use crate::constants::NUM_LEDS;
use crate::dome::{dome_positions, CoordMode, DomeError};
use crate::math::flat_to_led;
use crate::pos::thetaphi::ThetaPhi;
use crate::pos::xyz::Xyz;
use crate::quaternion::Quaternion;
use crate::wave::wave_origins;

/// The rotation that carries `reference` onto the dome pole. Its axis lies
/// in the equatorial plane, a quarter turn ahead of the reference azimuth,
/// and it rotates backwards through the reference inclination.
pub fn reference_rotation(reference: ThetaPhi) -> Quaternion {
    let axis = ThetaPhi::from_radians(FRAC_PI_2, reference.phi + FRAC_PI_2);
    Quaternion::from_axis_angle(axis, -reference.theta)
}

fn write_position(mut row: ArrayViewMut1<f64>, p: Xyz, mode: CoordMode) {
    match mode {
        CoordMode::Cartesian => {
            row[0] = p.x;
            row[1] = p.y;
            row[2] = p.z;
        }
        CoordMode::Spherical => {
            let s = p
                .to_rthetaphi()
                .expect("rotation preserves the nonzero radius");
            row[0] = s.r;
            row[1] = s.theta;
            row[2] = s.phi;
        }
    }
}

/// The positions of `n_waves` wave origins expressed relative to
/// `reference` (e.g. a cell's peak sensitivity direction), shape
/// `(n_waves, 3)` in the requested [`CoordMode`]. The reference direction
/// itself maps to elevation 0.
pub fn waves_relative_position(
    reference: ThetaPhi,
    n_waves: usize,
    mode: CoordMode,
) -> Array2<f64> {
    let rotation = reference_rotation(reference);
    let mut table = Array2::zeros((n_waves, 3));
    for (row, origin) in table.outer_iter_mut().zip(wave_origins(n_waves)) {
        write_position(row, rotation.rotate(origin.to_xyz()), mode);
    }
    table
}

/// The positions of all 948 LEDs expressed relative to the LED at
/// `ref_led_flat_idx` (e.g. the argmax of a cell's STA), shape `(948, 3)`
/// in the requested [`CoordMode`]. The reference LED itself maps to
/// elevation 0.
pub fn led_relative_position(
    ref_led_flat_idx: usize,
    mode: CoordMode,
) -> Result<Array2<f64>, DomeError> {
    if ref_led_flat_idx >= NUM_LEDS {
        return Err(DomeError::BadLedIndex {
            got: ref_led_flat_idx,
            num_leds: NUM_LEDS,
        });
    }

    let spherical = dome_positions(CoordMode::Spherical);
    let (quadrant, led) = flat_to_led(ref_led_flat_idx);
    let reference = ThetaPhi::from_radians(
        spherical[[quadrant, led, 1]],
        spherical[[quadrant, led, 2]],
    );
    let rotation = reference_rotation(reference);

    let cartesian = dome_positions(CoordMode::Cartesian);
    let mut table = Array2::zeros((NUM_LEDS, 3));
    for (row, position) in table.outer_iter_mut().zip(cartesian.rows()) {
        let p = Xyz::new(position[0], position[1], position[2]);
        write_position(row, rotation.rotate(p), mode);
    }
    Ok(table)
}
