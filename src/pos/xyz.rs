// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle cartesian (x,y,z) coordinates on the dome.
//!
//! The origin is the dome centre (the subject's eye); +z points at the dome
//! pole. All units are dome units, i.e. the Blender model scaled by
//! [`crate::constants::BLENDER_SCALE`].

use super::rthetaphi::RThetaPhi;
use super::ZeroRadiusError;

/// A cartesian position on (or inside) the dome. All units are dome units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// x-coordinate \[dome units\]
    pub x: f64,
    /// y-coordinate \[dome units\]
    pub y: f64,
    /// z-coordinate \[dome units\]
    pub z: f64,
}

impl Xyz {
    /// Make a new [`Xyz`] from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Xyz {
        Self { x, y, z }
    }

    /// The euclidean norm.
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// The dot product with another [`Xyz`].
    pub fn dot(self, rhs: Xyz) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Scale this position onto the unit sphere. Fails on the origin, which
    /// has no direction.
    pub fn normalized(self) -> Result<Xyz, ZeroRadiusError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(ZeroRadiusError);
        }
        Ok(self * (1.0 / norm))
    }

    /// Convert to spherical [`RThetaPhi`] coordinates. Fails on the origin;
    /// callers working with LED positions are guaranteed a nonzero radius by
    /// construction.
    pub fn to_rthetaphi(self) -> Result<RThetaPhi, ZeroRadiusError> {
        let r = self.norm();
        if r == 0.0 {
            return Err(ZeroRadiusError);
        }
        Ok(RThetaPhi {
            r,
            theta: (self.z / r).acos(),
            phi: self.y.atan2(self.x),
        })
    }
}

impl std::ops::Add<Xyz> for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Xyz {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub<Xyz> for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Xyz {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Xyz {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for Xyz {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for Xyz {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
