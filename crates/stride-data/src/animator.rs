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

use stride_core::AnimationSink;

/// Parameter names understood by the locomotion blend tree.
pub mod params {
    /// Bool: on the ground.
    pub const GROUNDED: &str = "Grounded";
    /// Bool: jump launched this tick.
    pub const JUMP: &str = "Jump";
    /// Bool: falling past the fall timeout.
    pub const FREE_FALL: &str = "FreeFall";
    /// Float: smoothed locomotion speed.
    pub const SPEED: &str = "Speed";
    /// Float: clip playback multiplier.
    pub const MOTION_SPEED: &str = "MotionSpeed";
}

/// A value stored in an animator parameter slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorValue {
    /// Boolean parameter.
    Bool(bool),
    /// Float parameter.
    Float(f32),
}

/// Parameter block holding the last value written for each locomotion parameter.
///
/// Implements [`AnimationSink`], so it can be handed straight to the controller
/// and read back by whatever drives the skeleton.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatorParameters {
    /// Last `Grounded` value.
    pub grounded: bool,
    /// Last `Jump` value.
    pub jump: bool,
    /// Last `FreeFall` value.
    pub free_fall: bool,
    /// Last `Speed` value.
    pub speed: f32,
    /// Last `MotionSpeed` value.
    pub motion_speed: f32,
    /// Number of times `Jump` went from false to true.
    pub jumps_triggered: u32,
}

impl AnimatorParameters {
    /// Creates a block with every parameter at its resting value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a parameter up by its animator name.
    pub fn get(&self, name: &str) -> Option<AnimatorValue> {
        match name {
            params::GROUNDED => Some(AnimatorValue::Bool(self.grounded)),
            params::JUMP => Some(AnimatorValue::Bool(self.jump)),
            params::FREE_FALL => Some(AnimatorValue::Bool(self.free_fall)),
            params::SPEED => Some(AnimatorValue::Float(self.speed)),
            params::MOTION_SPEED => Some(AnimatorValue::Float(self.motion_speed)),
            _ => None,
        }
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    fn set_jump(&mut self, jump: bool) {
        if jump && !self.jump {
            self.jumps_triggered += 1;
        }
        self.jump = jump;
    }

    fn set_free_fall(&mut self, free_fall: bool) {
        self.free_fall = free_fall;
    }

    fn set_blend_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_motion_speed(&mut self, speed: f32) {
        self.motion_speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let mut anim = AnimatorParameters::new();
        anim.set_grounded(true);
        anim.set_blend_speed(1.25);

        assert_eq!(anim.get(params::GROUNDED), Some(AnimatorValue::Bool(true)));
        assert_eq!(anim.get(params::SPEED), Some(AnimatorValue::Float(1.25)));
        assert_eq!(anim.get("Crouch"), None);
    }

    #[test]
    fn test_jump_rising_edges_are_counted() {
        let mut anim = AnimatorParameters::new();
        anim.set_jump(false);
        anim.set_jump(true);
        anim.set_jump(true);
        anim.set_jump(false);
        anim.set_jump(true);
        assert_eq!(anim.jumps_triggered, 2);
    }
}
