// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle spherical (r, theta, phi) coordinates.
//!
//! The physics convention is used throughout: theta is the inclination
//! measured from +z (the dome pole), phi the azimuth measured from +x. All
//! angles are in radians.

use super::thetaphi::ThetaPhi;
use super::xyz::Xyz;

/// A spherical position. Radius is in dome units, angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RThetaPhi {
    /// Radius \[dome units\]
    pub r: f64,
    /// Inclination from the dome pole \[radians\]
    pub theta: f64,
    /// Azimuth \[radians\]
    pub phi: f64,
}

impl RThetaPhi {
    /// Make a new [`RThetaPhi`] from angles in radians.
    pub fn from_radians(r: f64, theta: f64, phi: f64) -> RThetaPhi {
        Self { r, theta, phi }
    }

    /// Make a new [`RThetaPhi`] from angles in degrees.
    pub fn from_degrees(r: f64, theta: f64, phi: f64) -> RThetaPhi {
        Self {
            r,
            theta: theta.to_radians(),
            phi: phi.to_radians(),
        }
    }

    /// Convert to cartesian [`Xyz`] coordinates.
    pub fn to_xyz(self) -> Xyz {
        let (s_theta, c_theta) = self.theta.sin_cos();
        let (s_phi, c_phi) = self.phi.sin_cos();
        Xyz {
            x: self.r * s_theta * c_phi,
            y: self.r * s_theta * s_phi,
            z: self.r * c_theta,
        }
    }

    /// Drop the radius, keeping only the direction.
    pub fn direction(self) -> ThetaPhi {
        ThetaPhi {
            theta: self.theta,
            phi: self.phi,
        }
    }
}

impl std::fmt::Display for RThetaPhi {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(r {:.4}, θ {:.4}°, φ {:.4}°)",
            self.r,
            self.theta.to_degrees(),
            self.phi.to_degrees()
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for RThetaPhi {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.r, &other.r, epsilon)
            && f64::abs_diff_eq(&self.theta, &other.theta, epsilon)
            && f64::abs_diff_eq(&self.phi, &other.phi, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for RThetaPhi {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.r, &other.r, epsilon, max_relative)
            && f64::relative_eq(&self.theta, &other.theta, epsilon, max_relative)
            && f64::relative_eq(&self.phi, &other.phi, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_to_xyz() {
        let pole = RThetaPhi::from_radians(10.0, 0.0, 0.0);
        assert_abs_diff_eq!(pole.to_xyz(), Xyz::new(0.0, 0.0, 10.0), epsilon = 1e-12);

        let equator = RThetaPhi::from_radians(1.0, FRAC_PI_2, FRAC_PI_2);
        assert_abs_diff_eq!(equator.to_xyz(), Xyz::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_from_degrees() {
        let s = RThetaPhi::from_degrees(1.0, 90.0, 180.0);
        assert_abs_diff_eq!(s, RThetaPhi::from_radians(1.0, FRAC_PI_2, PI));
    }

    #[test]
    // Spherical -> cartesian -> spherical is the identity away from the
    // poles (where phi is unconstrained).
    fn test_round_trip() {
        for &(r, theta, phi) in &[
            (1.0, 0.3, 0.7),
            (10.5, 1.2, -2.8),
            (3.0, FRAC_PI_2, 0.0),
            (0.1, 2.9, 3.0),
        ] {
            let s = RThetaPhi::from_radians(r, theta, phi);
            let back = s.to_xyz().to_rthetaphi().unwrap();
            assert_abs_diff_eq!(back, s, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_display() {
        let s = RThetaPhi::from_radians(1.0, 0.5, -0.5);
        assert!(!format!("{s}").is_empty());
    }
}
