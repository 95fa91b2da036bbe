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

//! Vertical half of the motion model: gravity, jumping and the two timeouts.

use stride_core::AnimationSink;
use stride_data::{LocomotionConfig, LocomotionState};

/// Vertical velocity held while grounded, so the body stays pressed to the floor
/// and the ground probe does not flicker.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// What happened during one vertical step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalStep {
    /// A jump was launched this step.
    pub jumped: bool,
    /// The free-fall flag was raised this step.
    pub free_fall: bool,
}

/// Integrates vertical velocity and drives the jump and fall timers.
#[derive(Debug, Default)]
pub struct VerticalLane;

impl VerticalLane {
    /// Creates a new `VerticalLane`.
    pub fn new() -> Self {
        Self
    }

    /// Name reported in logs.
    pub fn strategy_name(&self) -> &'static str {
        "VerticalMotion"
    }

    /// Advances the vertical model by `delta_time` seconds.
    ///
    /// Writes the `Jump` and `FreeFall` flags to `animation`. Timers are only
    /// decremented while non-negative, so each can overshoot below zero by at
    /// most one frame before its gate reads it.
    pub fn step(
        &self,
        config: &LocomotionConfig,
        state: &mut LocomotionState,
        grounded: bool,
        jump_requested: bool,
        delta_time: f32,
        animation: &mut dyn AnimationSink,
    ) -> VerticalStep {
        let mut report = VerticalStep::default();

        if grounded {
            state.fall_timeout_remaining = config.fall_timeout;

            animation.set_jump(false);
            animation.set_free_fall(false);

            if state.vertical_velocity < 0.0 {
                state.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
            }

            if jump_requested && state.jump_timeout_remaining <= 0.0 {
                state.vertical_velocity = config.jump_velocity();
                animation.set_jump(true);
                report.jumped = true;
            }

            // Still counts down on the launch frame.
            if state.jump_timeout_remaining >= 0.0 {
                state.jump_timeout_remaining -= delta_time;
            }
        } else {
            state.jump_timeout_remaining = config.jump_timeout;

            if state.fall_timeout_remaining >= 0.0 {
                state.fall_timeout_remaining -= delta_time;
            } else {
                animation.set_free_fall(true);
                report.free_fall = true;
            }
        }

        // Literal guard: compares against +terminal_velocity, so it never stops a fall.
        if state.vertical_velocity < config.terminal_velocity {
            state.vertical_velocity += config.gravity * delta_time;
        }
        if config.clamp_fall_speed {
            state.vertical_velocity = state.vertical_velocity.max(-config.terminal_velocity);
        }

        report
    }
}
