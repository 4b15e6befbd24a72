// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle unit directions (theta, phi) on the dome sphere.

use std::f64::consts::FRAC_PI_2;

use super::rthetaphi::RThetaPhi;
use super::xyz::Xyz;

/// A direction on the unit sphere, physics convention (theta is the
/// inclination from the dome pole, phi the azimuth). All units are radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThetaPhi {
    /// Inclination from the dome pole \[radians\]
    pub theta: f64,
    /// Azimuth \[radians\]
    pub phi: f64,
}

impl ThetaPhi {
    /// Make a new [`ThetaPhi`] from values in radians.
    pub fn from_radians(theta: f64, phi: f64) -> ThetaPhi {
        Self { theta, phi }
    }

    /// The unit vector pointing along this direction.
    pub fn to_xyz(self) -> Xyz {
        RThetaPhi {
            r: 1.0,
            theta: self.theta,
            phi: self.phi,
        }
        .to_xyz()
    }

    /// Calculate the angle separating two directions on the sphere
    /// \[radians\]. The result is in `[0, pi]`, and is symmetric in its
    /// operands.
    pub fn separation(self, b: ThetaPhi) -> f64 {
        // The great-circle formula works on declinations, not inclinations.
        let dec_a = FRAC_PI_2 - self.theta;
        let dec_b = FRAC_PI_2 - b.theta;
        (dec_a.sin() * dec_b.sin() + dec_a.cos() * dec_b.cos() * (b.phi - self.phi).cos())
            .clamp(-1.0, 1.0)
            .acos()
    }
}

impl std::fmt::Display for ThetaPhi {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(θ {:.4}°, φ {:.4}°)",
            self.theta.to_degrees(),
            self.phi.to_degrees()
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for ThetaPhi {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.theta, &other.theta, epsilon)
            && f64::abs_diff_eq(&self.phi, &other.phi, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for ThetaPhi {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.theta, &other.theta, epsilon, max_relative)
            && f64::relative_eq(&self.phi, &other.phi, epsilon, max_relative)
    }
}
