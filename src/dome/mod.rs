// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dome LED geometry.
//!
//! The dome is made of four quadrants of 237 LEDs each. One canonical
//! quadrant was measured (see [`stripes`]); the other three are 90°, 180°
//! and 270° rotations of it about the dome pole. The full position table is
//! constant, so the cartesian table is built once and reused.

pub mod stripes;

use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use ndarray::Array3;
use thiserror::Error;

use crate::constants::{LEDS_PER_QUADRANT, NUM_QUADRANTS};
use crate::pos::thetaphi::ThetaPhi;
use crate::pos::xyz::Xyz;
use crate::pos::ZeroRadiusError;
use self::stripes::STRIPE_CATALOG;

#[derive(Error, Debug)]
pub enum DomeError {
    #[error("unsupported coordinate mode {got:?}: must be one of [\"cartesian\", \"spherical\"]")]
    InvalidMode { got: String },

    #[error(
        "cannot interpolate {n_led} LED positions over a great-circle arc of {omega} rad: \
         the arc is degenerate"
    )]
    DegenerateInterpolation { n_led: usize, omega: f64 },

    #[error("LED flat index {got} is out of range; the dome has {num_leds} LEDs")]
    BadLedIndex { got: usize, num_leds: usize },

    #[error(transparent)]
    ZeroRadius(#[from] ZeroRadiusError),
}

/// The coordinate system of a returned position table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordMode {
    /// (x, y, z) in dome units
    Cartesian,
    /// (r, theta, phi); radius in dome units, angles in radians
    Spherical,
}

impl FromStr for CoordMode {
    type Err = DomeError;

    fn from_str(s: &str) -> Result<Self, DomeError> {
        match s {
            "cartesian" => Ok(CoordMode::Cartesian),
            "spherical" => Ok(CoordMode::Spherical),
            other => Err(DomeError::InvalidMode {
                got: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CoordMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CoordMode::Cartesian => write!(f, "cartesian"),
            CoordMode::Spherical => write!(f, "spherical"),
        }
    }
}

/// Left-half stripes of a quadrant, in wiring order.
const LEFT_SIDE: [char; 9] = ['B', 'D', 'F', 'H', 'J', 'L', 'N', 'P', 'R'];
/// Right-half stripes of a quadrant, in wiring order.
const RIGHT_SIDE: [char; 9] = ['Q', 'O', 'M', 'K', 'I', 'G', 'E', 'C', 'A'];

/// Chain the interpolated stripes of the canonical quadrant into wiring
/// order: the left side first, then the right side. Every other stripe is
/// traversed last-LED-first (the chain snakes up and down the dome), so
/// consecutive indices stay physically adjacent across stripe boundaries.
fn chain_quadrant() -> Result<Vec<Xyz>, DomeError> {
    let mut chained = Vec::with_capacity(LEDS_PER_QUADRANT);
    for side in [LEFT_SIDE, RIGHT_SIDE] {
        let mut reversed = true;
        for name in side {
            let stripe = &STRIPE_CATALOG[(name as u8 - b'A') as usize];
            debug_assert_eq!(stripe.name, name);
            let mut positions = stripe.positions()?;
            if reversed {
                positions.reverse();
            }
            chained.extend(positions);
            reversed = !reversed;
        }
    }
    Ok(chained)
}

/// Build the four quadrants from the canonical one by rotating it about the
/// dome pole in 90° steps.
fn symmetry_quadrants(quadrant: &[Xyz]) -> Array3<f64> {
    let mut table = Array3::zeros((NUM_QUADRANTS, LEDS_PER_QUADRANT, 3));
    for (led, p) in quadrant.iter().enumerate() {
        let rotations = [
            *p,
            Xyz::new(p.y, -p.x, p.z),
            Xyz::new(-p.x, -p.y, p.z),
            Xyz::new(-p.y, p.x, p.z),
        ];
        for (q, r) in rotations.iter().enumerate() {
            table[[q, led, 0]] = r.x;
            table[[q, led, 1]] = r.y;
            table[[q, led, 2]] = r.z;
        }
    }
    table
}

lazy_static! {
    static ref CARTESIAN_TABLE: Array3<f64> = {
        debug!("building the dome LED position table");
        let quadrant = chain_quadrant()
            .expect("the measured stripe catalog never yields a degenerate arc");
        symmetry_quadrants(&quadrant)
    };
}

/// Positions of all LEDs of the dome, shape `(4, 237, 3)`: quadrant, LED
/// within quadrant (left side then right side, in wiring order), then the
/// coordinate triple in the requested [`CoordMode`].
pub fn dome_positions(mode: CoordMode) -> Array3<f64> {
    match mode {
        CoordMode::Cartesian => CARTESIAN_TABLE.clone(),
        CoordMode::Spherical => {
            let mut table = Array3::zeros(CARTESIAN_TABLE.raw_dim());
            for (mut out, row) in table.rows_mut().into_iter().zip(CARTESIAN_TABLE.rows()) {
                let s = Xyz::new(row[0], row[1], row[2])
                    .to_rthetaphi()
                    .expect("no LED sits at the dome centre");
                out[0] = s.r;
                out[1] = s.theta;
                out[2] = s.phi;
            }
            table
        }
    }
}

/// The unit direction of every LED, in flat order (quadrant-major).
pub fn led_directions() -> Vec<ThetaPhi> {
    dome_positions(CoordMode::Spherical)
        .rows()
        .into_iter()
        .map(|row| ThetaPhi::from_radians(row[1], row[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUM_LEDS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_coord_mode_from_str() {
        assert_eq!(CoordMode::from_str("cartesian").unwrap(), CoordMode::Cartesian);
        assert_eq!(CoordMode::from_str("spherical").unwrap(), CoordMode::Spherical);
        assert!(matches!(
            CoordMode::from_str("cylindrical"),
            Err(DomeError::InvalidMode { .. })
        ));
        assert!(matches!(
            CoordMode::from_str("Cartesian"),
            Err(DomeError::InvalidMode { .. })
        ));
    }

    #[test]
    fn test_dome_positions_shape_and_radii() {
        let table = dome_positions(CoordMode::Cartesian);
        assert_eq!(table.dim(), (NUM_QUADRANTS, LEDS_PER_QUADRANT, 3));
        for row in table.rows() {
            let norm = Xyz::new(row[0], row[1], row[2]).norm();
            assert!(norm > 0.0, "an LED sits at the dome centre");
        }
    }

    #[test]
    fn test_dome_positions_are_distinct() {
        // No two (quadrant, index) pairs share a position.
        let table = dome_positions(CoordMode::Cartesian);
        let mut keys: Vec<[i64; 3]> = table
            .rows()
            .into_iter()
            .map(|row| [0, 1, 2].map(|i| (row[i] * 1e6).round() as i64))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), NUM_LEDS);
    }

    #[test]
    fn test_quadrant_symmetry_preserves_radii() {
        let table = dome_positions(CoordMode::Spherical);
        for led in 0..LEDS_PER_QUADRANT {
            for quadrant in 1..NUM_QUADRANTS {
                assert_abs_diff_eq!(
                    table[[quadrant, led, 0]],
                    table[[0, led, 0]],
                    epsilon = 1e-12
                );
                // Rotation about the pole keeps the inclination too.
                assert_abs_diff_eq!(
                    table[[quadrant, led, 1]],
                    table[[0, led, 1]],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_quadrant_one_is_a_quarter_turn() {
        let table = dome_positions(CoordMode::Cartesian);
        for led in 0..LEDS_PER_QUADRANT {
            let (x, y, z) = (table[[0, led, 0]], table[[0, led, 1]], table[[0, led, 2]]);
            assert_abs_diff_eq!(table[[1, led, 0]], y);
            assert_abs_diff_eq!(table[[1, led, 1]], -x);
            assert_abs_diff_eq!(table[[1, led, 2]], z);
        }
    }

    #[test]
    fn test_chain_keeps_neighbours_adjacent() {
        // Within each half of the chain, consecutive LEDs are at most a
        // stripe-boundary hop apart. The one seam between the left half
        // (ending at stripe R) and the right half (starting at stripe Q, on
        // the opposite edge of the quadrant) is exempt.
        let quadrant = chain_quadrant().unwrap();
        assert_eq!(quadrant.len(), LEDS_PER_QUADRANT);
        let left_len: usize = LEFT_SIDE
            .iter()
            .map(|&n| STRIPE_CATALOG[(n as u8 - b'A') as usize].n_led)
            .sum();
        for (i, w) in quadrant.windows(2).enumerate() {
            if i + 1 == left_len {
                continue;
            }
            let spacing = (w[1] - w[0]).norm();
            // LEDs are a few dome units apart; a broken chain order would
            // show up as a jump across the whole quadrant.
            assert!(
                spacing < 25.0,
                "chain is broken at index {i}: neighbouring LEDs {spacing} units apart"
            );
        }
    }

    #[test]
    fn test_chain_starts_with_stripe_b_reversed() {
        let quadrant = chain_quadrant().unwrap();
        let b = &STRIPE_CATALOG[1];
        assert_eq!(b.name, 'B');
        let b_positions = b.positions().unwrap();
        // First chained LED is stripe B's last LED.
        assert_abs_diff_eq!(quadrant[0], *b_positions.last().unwrap());
        assert_abs_diff_eq!(quadrant[b.n_led - 1], b_positions[0]);
    }

    #[test]
    fn test_right_side_ends_with_stripe_a_reversed() {
        // A is the ninth right-side stripe; the side starts reversed at Q
        // and alternates, so A is walked last-LED-first and the chain ends
        // on A's first LED.
        let quadrant = chain_quadrant().unwrap();
        let a = &STRIPE_CATALOG[0];
        assert_eq!(a.name, 'A');
        let a_positions = a.positions().unwrap();
        assert_abs_diff_eq!(*quadrant.last().unwrap(), a_positions[0]);
    }
}
