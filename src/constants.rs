// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

use crate::dome::stripes::STRIPE_CATALOG;

/// Number of LEDs in one quadrant of the dome, i.e. the total LED count of
/// the stripe catalog (237).
pub const LEDS_PER_QUADRANT: usize = catalog_led_count();

/// Number of quadrants of the dome.
pub const NUM_QUADRANTS: usize = 4;

/// Total number of LEDs on the dome (948).
pub const NUM_LEDS: usize = NUM_QUADRANTS * LEDS_PER_QUADRANT;

/// Scale from the normalized Blender dome model to dome units.
pub const BLENDER_SCALE: f64 = 10.0;

/// The golden-angle azimuth increment, pi * (1 + sqrt(5)) \[radians\].
///
/// Successive wave origins are offset in azimuth by this angle, which spreads
/// them near-uniformly over the sphere with no clustering at the poles.
pub const GOLDEN_ANGLE: f64 = 10.166407384630519;

const fn catalog_led_count() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STRIPE_CATALOG.len() {
        total += STRIPE_CATALOG[i].n_led;
        i += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_counts() {
        assert_eq!(LEDS_PER_QUADRANT, 237);
        assert_eq!(NUM_LEDS, 948);
    }

    #[test]
    fn test_golden_angle() {
        approx::assert_abs_diff_eq!(
            GOLDEN_ANGLE,
            std::f64::consts::PI * (1.0 + 5.0_f64.sqrt()),
            epsilon = 1e-15
        );
    }
}
