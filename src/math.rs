// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.

use crate::constants::LEDS_PER_QUADRANT;

/// Convert a (quadrant, LED-within-quadrant) pair into the flat LED index
/// used by flattened dome tables.
#[inline]
pub fn led_to_flat(quadrant: usize, led: usize) -> usize {
    quadrant * LEDS_PER_QUADRANT + led
}

/// Convert a flat LED index back into its (quadrant, LED-within-quadrant)
/// pair.
#[inline]
pub fn flat_to_led(flat: usize) -> (usize, usize) {
    (flat / LEDS_PER_QUADRANT, flat % LEDS_PER_QUADRANT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUM_LEDS, NUM_QUADRANTS};

    #[test]
    fn test_flat_index_round_trip() {
        let mut flat = 0;
        for quadrant in 0..NUM_QUADRANTS {
            for led in 0..LEDS_PER_QUADRANT {
                assert_eq!(led_to_flat(quadrant, led), flat);
                assert_eq!(flat_to_led(flat), (quadrant, led));
                flat += 1;
            }
        }
        assert_eq!(flat, NUM_LEDS);
    }

    #[test]
    fn test_flat_to_led_known_values() {
        assert_eq!(flat_to_led(0), (0, 0));
        assert_eq!(flat_to_led(236), (0, 236));
        assert_eq!(flat_to_led(237), (1, 0));
        assert_eq!(flat_to_led(947), (3, 236));
    }
}
