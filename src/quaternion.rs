// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A minimal quaternion algebra for rotating dome positions.
//!
//! Quaternions here only ever represent rotation operators (unit norm) or
//! pure vectors (zero scalar part); this is not a general quaternion
//! arithmetic type. Note that `q` and `-q` encode the same rotation: the
//! scalar part is `cos(angle / 2)`, and negating it adds a full turn.

use crate::pos::thetaphi::ThetaPhi;
use crate::pos::xyz::Xyz;

/// A quaternion, scalar part first. Immutable; all combinators produce new
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    /// Scalar part
    pub w: f64,
    /// Vector part, x
    pub x: f64,
    /// Vector part, y
    pub y: f64,
    /// Vector part, z
    pub z: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Make a new [`Quaternion`] from its components, scalar part first.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Quaternion {
        Self { w, x, y, z }
    }

    /// The rotation by `angle` radians about the axis pointing along `axis`
    /// (right-hand rule). The result has unit norm.
    pub fn from_axis_angle(axis: ThetaPhi, angle: f64) -> Quaternion {
        let (s, c) = (0.5 * angle).sin_cos();
        let u = axis.to_xyz();
        Quaternion {
            w: c,
            x: u.x * s,
            y: u.y * s,
            z: u.z * s,
        }
    }

    /// Embed a position vector as a pure quaternion (zero scalar part), ready
    /// to be rotated with the sandwich product `q * v * q̄`.
    pub fn from_vector(v: Xyz) -> Quaternion {
        Quaternion {
            w: 0.0,
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    /// The conjugate: vector part negated, scalar part kept. For unit
    /// quaternions this is the inverse rotation.
    pub fn conjugate(self) -> Quaternion {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// The vector part.
    pub fn vector(self) -> Xyz {
        Xyz {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Rotate a position vector by this (unit) quaternion via the sandwich
    /// product `q * v * q̄`. Rotation preserves the vector's norm.
    pub fn rotate(self, v: Xyz) -> Xyz {
        (self * Quaternion::from_vector(v) * self.conjugate()).vector()
    }
}

/// The Hamilton product. Non-commutative; `q * r` composes rotations with
/// `r` applied first.
impl std::ops::Mul<Quaternion> for Quaternion {
    type Output = Self;

    fn mul(self, r: Self) -> Self {
        Quaternion {
            w: self.w * r.w - self.x * r.x - self.y * r.y - self.z * r.z,
            x: self.w * r.x + self.x * r.w + self.y * r.z - self.z * r.y,
            y: self.w * r.y - self.x * r.z + self.y * r.w + self.z * r.x,
            z: self.w * r.z + self.x * r.y - self.y * r.x + self.z * r.w,
        }
    }
}
