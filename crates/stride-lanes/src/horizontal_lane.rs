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

//! Horizontal half of the motion model: speed ramp, facing and the final move.

use stride_core::math::{lerp, radians_to_degrees, round_to, smooth_damp_angle, Quaternion, Vec3};
use stride_core::{AnimationSink, BodyMover};
use stride_data::{LocomotionConfig, LocomotionState};

/// Dead band around the target speed inside which the ramp snaps instead of easing.
pub const SPEED_OFFSET: f32 = 0.1;

/// Playback multiplier sent to the animator. Input is digital, so always full speed.
pub const MOTION_SPEED: f32 = 1.0;

/// Decimal places kept by the eased speed.
const SPEED_DECIMALS: i32 = 3;

/// Eases horizontal speed, turns the body toward the input and issues the move.
#[derive(Debug, Default)]
pub struct HorizontalLane;

impl HorizontalLane {
    /// Creates a new `HorizontalLane`.
    pub fn new() -> Self {
        Self
    }

    /// Name reported in logs.
    pub fn strategy_name(&self) -> &'static str {
        "HorizontalMotion"
    }

    /// Advances the horizontal model and moves `body`.
    ///
    /// The vertical velocity already integrated this frame is folded into the
    /// same move. Returns the displacement handed to the body.
    pub fn step(
        &self,
        config: &LocomotionConfig,
        state: &mut LocomotionState,
        input_axis: f32,
        delta_time: f32,
        body: &mut dyn BodyMover,
        animation: &mut dyn AnimationSink,
    ) -> Vec3 {
        let target_speed = if input_axis == 0.0 {
            0.0
        } else {
            config.move_speed
        };
        let rate = delta_time * config.speed_change_rate;

        // Only the walking axis counts; vertical motion must not slow the ramp.
        let current_speed = body.velocity().x.abs();

        if current_speed < target_speed - SPEED_OFFSET
            || current_speed > target_speed + SPEED_OFFSET
        {
            let eased = lerp(current_speed, target_speed * MOTION_SPEED, rate);
            state.horizontal_speed = round_to(eased, SPEED_DECIMALS);
        } else {
            state.horizontal_speed = target_speed;
        }

        state.animation_blend = lerp(state.animation_blend, target_speed, rate);

        if input_axis != 0.0 {
            let input_direction = Vec3::new(input_axis, 0.0, 0.0).normalize();
            // Left or right only: 0 degrees faces +X, 180 faces -X.
            state.target_facing_angle = radians_to_degrees(0.0f32.atan2(input_direction.x));

            let yaw = smooth_damp_angle(
                body.yaw(),
                state.target_facing_angle,
                &mut state.facing_angular_velocity,
                config.rotation_smooth_time,
                delta_time,
            );
            body.set_yaw(yaw);
        }

        let facing = Quaternion::from_yaw_degrees(state.target_facing_angle) * Vec3::X;
        let displacement = facing.normalize() * (state.horizontal_speed * delta_time)
            + Vec3::new(0.0, state.vertical_velocity, 0.0) * delta_time;

        if !displacement.is_finite() {
            log::warn!(
                "{}: non-finite displacement {:?} (speed {}, vertical {})",
                self.strategy_name(),
                displacement,
                state.horizontal_speed,
                state.vertical_velocity
            );
        }
        debug_assert!(displacement.is_finite(), "non-finite displacement");

        body.move_by(displacement);

        animation.set_blend_speed(state.animation_blend);
        animation.set_motion_speed(MOTION_SPEED);

        displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingBody;
    use approx::assert_relative_eq;
    use stride_core::math::EPSILON;
    use stride_data::AnimatorParameters;

    fn setup() -> (LocomotionConfig, LocomotionState, RecordingBody, AnimatorParameters) {
        let config = LocomotionConfig::default();
        let state = LocomotionState::new(&config);
        (config, state, RecordingBody::default(), AnimatorParameters::new())
    }

    #[test]
    fn test_ramp_from_rest_eases_and_rounds() {
        let (config, mut state, mut body, mut anim) = setup();

        HorizontalLane::new().step(&config, &mut state, 1.0, 0.01, &mut body, &mut anim);

        // lerp(0, 2, 0.01 * 10) = 0.2
        assert_relative_eq!(state.horizontal_speed, 0.2);
        assert_relative_eq!(state.animation_blend, 0.2);
    }

    #[test]
    fn test_ramp_factor_saturates() {
        let (config, mut state, mut body, mut anim) = setup();

        // 0.1 * 10 = 1.0, so the lerp lands on the target in one step.
        HorizontalLane::new().step(&config, &mut state, 1.0, 0.1, &mut body, &mut anim);

        assert_eq!(state.horizontal_speed, 2.0);
    }

    #[test]
    fn test_ramp_starts_from_body_velocity() {
        let (config, mut state, mut body, mut anim) = setup();
        state.horizontal_speed = 1.9;
        body.velocity = Vec3::new(-1.0, -7.0, 0.0);

        HorizontalLane::new().step(&config, &mut state, -1.0, 0.02, &mut body, &mut anim);

        // lerp(1.0, 2.0, 0.2) = 1.2; vertical velocity is ignored.
        assert_relative_eq!(state.horizontal_speed, 1.2);
    }

    #[test]
    fn test_eased_speed_is_quantized() {
        let (config, mut state, mut body, mut anim) = setup();
        body.velocity = Vec3::new(0.123_456, 0.0, 0.0);

        HorizontalLane::new().step(&config, &mut state, 1.0, 1.0 / 60.0, &mut body, &mut anim);

        let scaled = state.horizontal_speed * 1000.0;
        assert_relative_eq!(scaled, scaled.round(), epsilon = 1e-3);
    }

    #[test]
    fn test_speed_snaps_inside_dead_band() {
        let (config, mut state, mut body, mut anim) = setup();
        body.velocity = Vec3::new(1.95, 0.0, 0.0);

        HorizontalLane::new().step(&config, &mut state, 1.0, 1.0 / 60.0, &mut body, &mut anim);

        assert_eq!(state.horizontal_speed, 2.0);
    }

    #[test]
    fn test_release_decelerates_toward_zero() {
        let (config, mut state, mut body, mut anim) = setup();
        body.velocity = Vec3::new(2.0, 0.0, 0.0);
        state.animation_blend = 2.0;

        HorizontalLane::new().step(&config, &mut state, 0.0, 0.05, &mut body, &mut anim);

        assert_relative_eq!(state.horizontal_speed, 1.0);
        assert_relative_eq!(state.animation_blend, 1.0);
        assert_relative_eq!(anim.speed, 1.0);
        assert_eq!(anim.motion_speed, MOTION_SPEED);
    }

    #[test]
    fn test_left_input_targets_half_turn_and_moves_left() {
        let (config, mut state, mut body, mut anim) = setup();
        body.velocity = Vec3::new(2.0, 0.0, 0.0);

        let displacement =
            HorizontalLane::new().step(&config, &mut state, -1.0, 0.1, &mut body, &mut anim);

        assert_relative_eq!(state.target_facing_angle, 180.0);
        assert!(displacement.x < 0.0);
        assert_relative_eq!(displacement.z, 0.0, epsilon = EPSILON);
        // Turning from 0 toward 180 takes several frames.
        assert!(body.yaw > 0.0 && body.yaw < 180.0);
        assert!(state.facing_angular_velocity > 0.0);
    }

    #[test]
    fn test_no_input_keeps_facing_and_yaw() {
        let (config, mut state, mut body, mut anim) = setup();
        state.target_facing_angle = 180.0;
        state.facing_angular_velocity = 12.0;
        body.yaw = 170.0;
        body.velocity = Vec3::new(-1.0, 0.0, 0.0);

        let displacement =
            HorizontalLane::new().step(&config, &mut state, 0.0, 0.05, &mut body, &mut anim);

        assert_eq!(body.yaw, 170.0);
        assert_eq!(state.facing_angular_velocity, 12.0);
        // Still coasting along the last facing.
        assert!(displacement.x < 0.0);
    }

    #[test]
    fn test_displacement_folds_in_vertical_velocity() {
        let (config, mut state, mut body, mut anim) = setup();
        state.vertical_velocity = -4.0;
        body.velocity = Vec3::new(2.0, 0.0, 0.0);

        let displacement =
            HorizontalLane::new().step(&config, &mut state, 1.0, 0.1, &mut body, &mut anim);

        assert_relative_eq!(displacement.x, 0.2, epsilon = EPSILON);
        assert_relative_eq!(displacement.y, -0.4, epsilon = EPSILON);
        assert_eq!(body.moves, vec![displacement]);
    }
}
