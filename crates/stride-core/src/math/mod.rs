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

//! Provides the math primitives used by the locomotion loop.
//!
//! Vectors and quaternions are kept to the subset a character controller needs.
//! The scalar helpers at the bottom of this module follow the conventions of
//! game-engine math libraries: interpolation factors are clamped, and angular
//! helpers work in **degrees**, because yaw is authored and reported in degrees.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use std::f32::consts::PI;

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Lower bound applied to smoothing times so the damping filter never divides by zero.
pub const MIN_SMOOTH_TIME: f32 = 0.0001;

// --- Declare Sub-Modules ---

pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::quaternion::Quaternion;
pub use self::vector::Vec3;

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use stride_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use stride_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use stride_core::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linearly interpolates between `a` and `b`. The factor `t` is clamped to `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use stride_core::math::lerp;
/// assert_eq!(lerp(0.0, 2.0, 0.1), 0.2);
/// assert_eq!(lerp(0.0, 2.0, 4.0), 2.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * saturate(t)
}

/// Rounds `value` to `decimals` decimal places.
///
/// Ties round to the even neighbour, so `0.0005` becomes `0.0` at three places.
///
/// # Examples
///
/// ```
/// use stride_core::math::round_to;
/// assert_eq!(round_to(1.23456, 3), 1.235);
/// ```
#[inline]
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let scale = 10f32.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Wraps `t` into the `[0, length]` range.
///
/// # Examples
///
/// ```
/// use stride_core::math::repeat;
/// assert_eq!(repeat(370.0, 360.0), 10.0);
/// assert_eq!(repeat(-90.0, 360.0), 270.0);
/// ```
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    clamp(t - (t / length).floor() * length, 0.0, length)
}

/// Returns the shortest signed difference from `current` to `target`, in degrees.
///
/// The result lies in `(-180, 180]`.
///
/// # Examples
///
/// ```
/// use stride_core::math::delta_angle;
/// assert_eq!(delta_angle(350.0, 10.0), 20.0);
/// assert_eq!(delta_angle(10.0, 350.0), -20.0);
/// ```
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Moves `current` towards `target` with a critically-damped spring.
///
/// `velocity` is the filter state and must be carried between calls.
/// `smooth_time` is roughly the time needed to reach the target and is floored at
/// [`MIN_SMOOTH_TIME`]. The output never overshoots `target`.
///
/// A non-positive `delta_time` returns `current` and leaves `velocity` untouched.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta_time: f32,
) -> f32 {
    if delta_time <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Polynomial approximation of exp(-omega * dt).
    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / delta_time;
    }

    output
}

/// Angular variant of [`smooth_damp`], in degrees.
///
/// The target is first brought to within 180 degrees of `current`, so the filter
/// always turns the short way round.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta_time: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, delta_time)
}
