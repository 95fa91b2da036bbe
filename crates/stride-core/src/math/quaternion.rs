// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the rotation type used for body facing.

use super::{degrees_to_radians, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Represents a quaternion for 3D rotations.
///
/// Stored as `(x, y, z, w)`, where `[x, y, z]` is the vector part and `w` the
/// scalar part. Rotations are expected to be unit quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a quaternion representing a rotation around `axis` by `angle_radians`.
    ///
    /// The axis is normalized before use.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let normalized_axis = axis.normalize();
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: normalized_axis.x * s,
            y: normalized_axis.y * s,
            z: normalized_axis.z * s,
            w: c,
        }
    }

    /// Creates a rotation of `yaw_degrees` around the world up (Y) axis.
    #[inline]
    pub fn from_yaw_degrees(yaw_degrees: f32) -> Self {
        Self::from_axis_angle(Vec3::Y, degrees_to_radians(yaw_degrees))
    }

    /// Returns the length of the quaternion as a 4D vector.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Returns a unit-length copy, or the identity when the magnitude is zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv = 1.0 / mag;
            Self {
                x: self.x * inv,
                y: self.y * inv,
                z: self.z * inv,
                w: self.w * inv,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Rotates a 3D vector by this quaternion.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s: f32 = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }
}

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_leaves_vector_unchanged() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::default() * v, v);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let q = Quaternion::from_yaw_degrees(90.0);
        let v = q * Vec3::X;
        assert_relative_eq!(v.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(v.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(v.z, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_half_turn_faces_left() {
        let v = Quaternion::from_yaw_degrees(180.0) * Vec3::X;
        assert_relative_eq!(v.x, -1.0, epsilon = EPSILON);
        assert_relative_eq!(v.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), 1.0);
        assert_relative_eq!(q.magnitude(), 1.0, epsilon = EPSILON);
    }
}
