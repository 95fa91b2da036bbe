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

//! Defines the LocomotionAgent, the per-frame orchestrator of a character.

use stride_core::math::Vec3;
use stride_core::{Axis, BodyMover, FrameContext, Key};
use stride_data::{ConfigError, LocomotionConfig, LocomotionState};
use stride_lanes::{HorizontalLane, VerticalLane};

/// Drives one character: reads input, steps both lanes, moves the body and
/// publishes animation parameters.
///
/// The agent is either active or inactive. While inactive every tick is a
/// no-op; collaborators are not even polled.
pub struct LocomotionAgent {
    /// Tuning values, fixed at construction.
    config: LocomotionConfig,
    /// Runtime state, mutated only by [`tick`](Self::tick) and
    /// [`set_enabled`](Self::set_enabled).
    state: LocomotionState,
    vertical: VerticalLane,
    horizontal: HorizontalLane,
    /// Ground contact seen on the previous tick, for transition logging.
    last_grounded: Option<bool>,
}

impl LocomotionAgent {
    /// Validates `config` and builds an active agent with both timers armed.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "LocomotionAgent: move_speed={} jump_height={} gravity={} terminal_velocity={}",
            config.move_speed,
            config.jump_height,
            config.gravity,
            config.terminal_velocity
        );
        if config.clamp_fall_speed {
            log::info!("LocomotionAgent: fall speed clamped to -{}", config.terminal_velocity);
        }

        let state = LocomotionState::new(&config);
        Ok(Self {
            config,
            state,
            vertical: VerticalLane::new(),
            horizontal: HorizontalLane::new(),
            last_grounded: None,
        })
    }

    /// The configuration this agent was built with.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Read-only view of the runtime state.
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Whether ticks are currently processed.
    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Switches processing on or off.
    ///
    /// Turning an active agent off issues a single zero move on `body` to flush
    /// its velocity. Repeated calls with the same value do nothing. Turning it
    /// back on resumes from the state it was left in.
    pub fn set_enabled(&mut self, on: bool, body: &mut dyn BodyMover) {
        if on == self.state.is_active {
            return;
        }

        self.state.is_active = on;
        if on {
            log::debug!("LocomotionAgent: enabled");
        } else {
            body.move_by(Vec3::ZERO);
            log::debug!("LocomotionAgent: disabled, body flushed");
        }
    }

    /// Advances the character by `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32, frame: &mut FrameContext<'_>) {
        if !self.state.is_active {
            return;
        }

        let input_axis = frame.input.axis(Axis::Horizontal);
        let jump_requested = frame.input.key_down(Key::Jump);

        let grounded = frame.ground.is_grounded();
        self.note_ground_contact(grounded);

        let vertical = self.vertical.step(
            &self.config,
            &mut self.state,
            grounded,
            jump_requested,
            delta_time,
            &mut *frame.animation,
        );
        if vertical.jumped {
            log::debug!(
                "LocomotionAgent: jump launched at {:.3} u/s",
                self.config.jump_velocity()
            );
        }

        let displacement = self.horizontal.step(
            &self.config,
            &mut self.state,
            input_axis,
            delta_time,
            &mut *frame.body,
            &mut *frame.animation,
        );

        // The sensor is sampled again after the move unless configured otherwise.
        let grounded_after_move = if self.config.single_ground_sample {
            grounded
        } else {
            frame.ground.is_grounded()
        };
        frame.animation.set_grounded(grounded_after_move);

        log::trace!(
            "LocomotionAgent: dt={delta_time} axis={input_axis} grounded={grounded_after_move} \
             speed={} vy={} move={:?}",
            self.state.horizontal_speed,
            self.state.vertical_velocity,
            displacement
        );
    }

    fn note_ground_contact(&mut self, grounded: bool) {
        match (self.last_grounded, grounded) {
            (Some(false), true) => log::debug!(
                "LocomotionAgent: landed (vy={:.3})",
                self.state.vertical_velocity
            ),
            (Some(true), false) => log::debug!("LocomotionAgent: left ground"),
            _ => {}
        }
        self.last_grounded = Some(grounded);
    }
}
