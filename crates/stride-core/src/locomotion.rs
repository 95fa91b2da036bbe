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

//! # Locomotion Collaborators
//!
//! Interface contracts for everything the locomotion loop talks to but does not
//! own: the input device, the ground probe, the kinematic body and the animation
//! parameter block. Hosts implement these traits; the controller only sees them
//! through a [`FrameContext`] for the duration of one tick.

use crate::math::Vec3;

/// Named input axes polled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right movement, `-1.0` to `1.0`.
    Horizontal,
}

/// Named buttons polled by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The jump button.
    Jump,
}

/// Source of player input, polled once per tick.
pub trait InputSource {
    /// Current value of `axis`, in `[-1.0, 1.0]`.
    fn axis(&self, axis: Axis) -> f32;

    /// Returns `true` only on the frame `key` went down.
    fn key_down(&self, key: Key) -> bool;
}

/// Reports whether the character is standing on walkable ground.
pub trait GroundSensor {
    /// Current contact state.
    fn is_grounded(&self) -> bool;
}

/// The kinematic body that resolves collisions and applies displacement.
pub trait BodyMover {
    /// Moves the body by `displacement`, resolving collisions.
    fn move_by(&mut self, displacement: Vec3);

    /// Velocity achieved by the last move, in units per second.
    fn velocity(&self) -> Vec3;

    /// Current facing around the up axis, in degrees within `[0, 360)`.
    fn yaw(&self) -> f32;

    /// Sets the facing around the up axis, in degrees. Does not move the body.
    fn set_yaw(&mut self, yaw_degrees: f32);
}

/// Receives the animation parameters computed each tick.
pub trait AnimationSink {
    /// Whether the character is on the ground.
    fn set_grounded(&mut self, grounded: bool);
    /// Whether a jump was launched this tick.
    fn set_jump(&mut self, jump: bool);
    /// Whether the character has been airborne long enough to play the fall state.
    fn set_free_fall(&mut self, free_fall: bool);
    /// The smoothed locomotion speed driving the blend tree.
    fn set_blend_speed(&mut self, speed: f32);
    /// Playback multiplier for the locomotion clips.
    fn set_motion_speed(&mut self, speed: f32);
}

/// Borrows every collaborator the controller needs for a single tick.
pub struct FrameContext<'a> {
    /// Input device.
    pub input: &'a dyn InputSource,
    /// Ground probe.
    pub ground: &'a dyn GroundSensor,
    /// Kinematic body.
    pub body: &'a mut dyn BodyMover,
    /// Animation parameter block.
    pub animation: &'a mut dyn AnimationSink,
}

impl<'a> FrameContext<'a> {
    /// Bundles the collaborators for one tick.
    pub fn new(
        input: &'a dyn InputSource,
        ground: &'a dyn GroundSensor,
        body: &'a mut dyn BodyMover,
        animation: &'a mut dyn AnimationSink,
    ) -> Self {
        Self {
            input,
            ground,
            body,
            animation,
        }
    }
}
