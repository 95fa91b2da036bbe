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

use crate::LocomotionConfig;

/// Runtime state of one character, owned and mutated only by its controller.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    /// Current eased speed magnitude.
    pub horizontal_speed: f32,
    /// Smoothed speed forwarded to animation.
    pub animation_blend: f32,
    /// Desired yaw, in degrees.
    pub target_facing_angle: f32,
    /// Internal velocity of the facing filter.
    pub facing_angular_velocity: f32,
    /// Signed vertical speed. Negative means falling.
    pub vertical_velocity: f32,
    /// Cooldown before the next jump. May dip slightly below zero.
    pub jump_timeout_remaining: f32,
    /// Airborne grace before free fall. May dip slightly below zero.
    pub fall_timeout_remaining: f32,
    /// When false, ticks are ignored.
    pub is_active: bool,
}

impl LocomotionState {
    /// Fresh state for a character that was just activated: at rest, facing
    /// right, both timers armed.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            horizontal_speed: 0.0,
            animation_blend: 0.0,
            target_facing_angle: 0.0,
            facing_angular_velocity: 0.0,
            vertical_velocity: 0.0,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_arms_timers() {
        let config = LocomotionConfig {
            jump_timeout: 0.7,
            fall_timeout: 0.2,
            ..Default::default()
        };
        let state = LocomotionState::new(&config);
        assert_eq!(state.jump_timeout_remaining, 0.7);
        assert_eq!(state.fall_timeout_remaining, 0.2);
        assert_eq!(state.vertical_velocity, 0.0);
        assert!(state.is_active);
    }
}
