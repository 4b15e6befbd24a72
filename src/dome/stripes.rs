// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The stripe catalog and great-circle interpolation.
//!
//! One quadrant of the dome is wired with 18 physical LED stripes, named A
//! through R. Only the first and the last LED of each stripe were measured
//! (on a normalized Blender model of the dome); every LED in between is
//! interpolated along the great-circle arc joining the two measurements.
//! Keeping the measurements as a catalog rather than inline literals makes
//! recalibration a data change, not a code change.

use crate::constants::BLENDER_SCALE;
use crate::pos::xyz::Xyz;

use super::DomeError;

/// One physical LED stripe: its measured endpoint positions (normalized
/// Blender coordinates) and how many LEDs sit on it.
#[derive(Clone, Copy, Debug)]
pub struct Stripe {
    /// Stripe letter, A..R
    pub name: char,
    /// Measured position of the first LED \[normalized Blender units\]
    pub first: [f64; 3],
    /// Measured position of the last LED \[normalized Blender units\]
    pub last: [f64; 3],
    /// Total number of LEDs on the stripe
    pub n_led: usize,
}

impl Stripe {
    /// The measured endpoints, scaled to dome units.
    pub fn endpoints(&self) -> (Xyz, Xyz) {
        (
            Xyz::new(self.first[0], self.first[1], self.first[2]) * BLENDER_SCALE,
            Xyz::new(self.last[0], self.last[1], self.last[2]) * BLENDER_SCALE,
        )
    }

    /// All LED positions on this stripe, first LED first.
    pub fn positions(&self) -> Result<Vec<Xyz>, DomeError> {
        let (p0, p1) = self.endpoints();
        slerp(p0, p1, self.n_led)
    }
}

/// The measured stripes of the canonical quadrant. Stripe R carries a single
/// LED, so both its endpoints are that one measurement.
pub const STRIPE_CATALOG: [Stripe; 18] = [
    Stripe {
        name: 'A',
        first: [-0.44162, 0.46045, 10.07932],
        last: [-0.03378, 10.07122, 0.72211],
        n_led: 23,
    },
    Stripe {
        name: 'B',
        first: [0.42254, 1.33094, 10.00507],
        last: [0.83062, 9.99418, 1.12168],
        n_led: 21,
    },
    Stripe {
        name: 'C',
        first: [-1.3044, 1.33575, 9.94323],
        last: [-0.93444, 10.00996, 0.99274],
        n_led: 21,
    },
    Stripe {
        name: 'D',
        first: [1.35075, 2.2321, 9.75535],
        last: [1.68846, 9.91944, 0.77928],
        n_led: 20,
    },
    Stripe {
        name: 'E',
        first: [-2.20708, 2.29345, 9.58381],
        last: [-1.8337, 9.92046, 1.14081],
        n_led: 19,
    },
    Stripe {
        name: 'F',
        first: [2.31814, 3.13993, 9.31365],
        last: [2.52401, 9.74959, 0.86306],
        n_led: 18,
    },
    Stripe {
        name: 'G',
        first: [-3.15667, 3.31007, 9.00523],
        last: [-2.69219, 9.68376, 1.0918],
        n_led: 17,
    },
    Stripe {
        name: 'H',
        first: [3.3186, 4.12493, 8.60008],
        last: [3.28828, 9.52856, 0.61278],
        n_led: 16,
    },
    Stripe {
        name: 'I',
        first: [-4.0779, 4.27888, 8.18478],
        last: [-3.45295, 9.45243, 0.77226],
        n_led: 15,
    },
    Stripe {
        name: 'J',
        first: [4.29328, 5.00709, 7.63564],
        last: [4.17924, 9.14635, 1.03659],
        n_led: 13,
    },
    Stripe {
        name: 'K',
        first: [-4.99026, 5.24451, 7.06361],
        last: [-4.3501, 9.07599, 1.00064],
        n_led: 12,
    },
    Stripe {
        name: 'L',
        first: [5.22638, 5.86208, 6.3335],
        last: [4.85207, 8.84847, 0.57339],
        n_led: 11,
    },
    Stripe {
        name: 'M',
        first: [-5.77797, 6.10141, 5.60405],
        last: [-5.14097, 8.63676, 1.02421],
        n_led: 9,
    },
    Stripe {
        name: 'N',
        first: [6.03059, 6.57628, 4.71668],
        last: [5.55174, 8.42348, 0.46679],
        n_led: 8,
    },
    Stripe {
        name: 'O',
        first: [-6.40277, 6.82204, 3.80993],
        last: [-5.84937, 8.19519, 0.84915],
        n_led: 6,
    },
    Stripe {
        name: 'P',
        first: [6.62294, 7.08816, 2.77088],
        last: [6.34649, 7.81552, 0.85683],
        n_led: 4,
    },
    Stripe {
        name: 'Q',
        first: [-6.77734, 7.27747, 1.7878],
        last: [-6.49463, 7.71771, 0.6162],
        n_led: 3,
    },
    Stripe {
        name: 'R',
        first: [6.94329, 7.30411, 0.65871],
        last: [6.94329, 7.30411, 0.65871],
        n_led: 1,
    },
];

/// Interpolate `n_led` positions along the great-circle arc from `p0` to
/// `p1` (spherical linear interpolation), evenly spaced in angle. The
/// endpoints are returned exactly; their radii carry through the
/// interpolation untouched.
///
/// A single-LED stripe (`n_led == 1`) needs no arc and returns `p0` as-is.
/// Coincident or antipodal endpoints leave the arc undefined and are
/// reported as [`DomeError::DegenerateInterpolation`] rather than producing
/// NaNs.
pub fn slerp(p0: Xyz, p1: Xyz, n_led: usize) -> Result<Vec<Xyz>, DomeError> {
    match n_led {
        0 => return Err(DomeError::DegenerateInterpolation { n_led, omega: 0.0 }),
        1 => return Ok(vec![p0]),
        _ => (),
    }

    // The arc angle comes from the normalized endpoints, but the
    // interpolation itself mixes the raw endpoints.
    let omega = p0
        .normalized()?
        .dot(p1.normalized()?)
        .clamp(-1.0, 1.0)
        .acos();
    let sin_omega = omega.sin();
    // Rounding in the normalization can leave coincident endpoints with a
    // tiny nonzero arc; the shortest real stripe arc is over a radian, so
    // anything this small is degenerate.
    if sin_omega.abs() < 1e-6 {
        return Err(DomeError::DegenerateInterpolation { n_led, omega });
    }

    Ok((0..n_led)
        .map(|i| {
            let t = i as f64 / (n_led - 1) as f64;
            p0 * (((1.0 - t) * omega).sin() / sin_omega) + p1 * ((t * omega).sin() / sin_omega)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_slerp_returns_endpoints_exactly() {
        let stripe = &STRIPE_CATALOG[0];
        assert_eq!(stripe.name, 'A');
        let (p0, p1) = stripe.endpoints();
        let positions = stripe.positions().unwrap();
        assert_eq!(positions.len(), 23);
        assert_eq!(positions[0], p0);
        assert_eq!(positions[22], p1);
    }

    #[test]
    fn test_slerp_single_led_stripe() {
        let stripe = STRIPE_CATALOG.last().unwrap();
        assert_eq!(stripe.name, 'R');
        let (p0, _) = stripe.endpoints();
        let positions = stripe.positions().unwrap();
        assert_eq!(positions, vec![p0]);
    }

    #[test]
    fn test_slerp_is_evenly_spaced_in_angle() {
        let p0 = Xyz::new(1.0, 0.0, 0.0);
        let p1 = Xyz::new(0.0, 1.0, 0.0);
        let positions = slerp(p0, p1, 10).unwrap();
        let steps: Vec<f64> = positions
            .windows(2)
            .map(|w| w[0].normalized().unwrap().dot(w[1].normalized().unwrap()).acos())
            .collect();
        for step in &steps {
            assert_abs_diff_eq!(*step, steps[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_slerp_interpolates_radius_between_endpoints() {
        // Endpoints with different radii: in-between radii stay within them.
        let p0 = Xyz::new(2.0, 0.0, 0.0);
        let p1 = Xyz::new(0.0, 0.0, 3.0);
        for p in slerp(p0, p1, 7).unwrap() {
            assert!(p.norm() > 1.9 && p.norm() < 3.1);
        }
    }

    #[test]
    fn test_slerp_degenerate_endpoints() {
        let p = Xyz::new(1.0, 2.0, 3.0);
        assert!(matches!(
            slerp(p, p, 5),
            Err(DomeError::DegenerateInterpolation { n_led: 5, .. })
        ));
        assert!(matches!(
            slerp(p, p * -1.0, 5),
            Err(DomeError::DegenerateInterpolation { .. })
        ));
        assert!(matches!(
            slerp(p, Xyz::new(0.0, 0.0, 0.0), 5),
            Err(DomeError::ZeroRadius(_))
        ));
    }

    #[test]
    fn test_catalog_side_totals() {
        let count = |names: &[char]| -> usize {
            STRIPE_CATALOG
                .iter()
                .filter(|s| names.contains(&s.name))
                .map(|s| s.n_led)
                .sum()
        };
        // Left and right halves of the quadrant wiring.
        assert_eq!(count(&['B', 'D', 'F', 'H', 'J', 'L', 'N', 'P', 'R']), 112);
        assert_eq!(count(&['Q', 'O', 'M', 'K', 'I', 'G', 'E', 'C', 'A']), 125);
    }
}
