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

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tuning values for one character, fixed once the controller is built.
///
/// Deserialized from RON. Missing fields take their [`Default`] value, so a file
/// only needs to list what it overrides:
///
/// ```
/// use stride_data::LocomotionConfig;
///
/// let config = LocomotionConfig::from_ron_str("(move_speed: 3.5)").unwrap();
/// assert_eq!(config.move_speed, 3.5);
/// assert_eq!(config.gravity, -15.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walk speed in units per second.
    pub move_speed: f32,
    /// Sprint speed in units per second. Not read by the movement path.
    pub sprint_speed: f32,
    /// Apex height of a jump.
    pub jump_height: f32,
    /// Signed vertical acceleration. Must be negative.
    pub gravity: f32,
    /// Seconds on the ground before another jump is allowed.
    pub jump_timeout: f32,
    /// Seconds airborne before the free-fall flag is raised.
    pub fall_timeout: f32,
    /// Time constant of the facing filter, usually within `[0.0, 0.3]`.
    pub rotation_smooth_time: f32,
    /// Acceleration and deceleration rate of the speed ramp.
    pub speed_change_rate: f32,
    /// Magnitude meant to bound fall speed.
    pub terminal_velocity: f32,
    /// Floors vertical velocity at `-terminal_velocity` after integration.
    ///
    /// Off by default: the literal guard only stops integrating once velocity
    /// reaches `+terminal_velocity`, which a falling body never does.
    pub clamp_fall_speed: bool,
    /// Reads the ground sensor once per tick and reuses the value for the
    /// animation flag instead of sampling it again after the move.
    pub single_ground_sample: bool,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            sprint_speed: 5.335,
            jump_height: 1.2,
            gravity: -15.0,
            jump_timeout: 0.50,
            fall_timeout: 0.15,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            terminal_velocity: 53.0,
            clamp_fall_speed: false,
            single_ground_sample: false,
        }
    }
}

impl LocomotionConfig {
    /// Parses a configuration from RON text and validates it.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a RON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded locomotion config from {}", path.display());
        Ok(config)
    }

    /// Launch velocity that reaches [`jump_height`](Self::jump_height) under
    /// [`gravity`](Self::gravity).
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Checks the values the integrator relies on.
    ///
    /// A config that passes never produces NaN from the jump formula.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("sprint_speed", self.sprint_speed),
            ("jump_height", self.jump_height),
            ("gravity", self.gravity),
            ("jump_timeout", self.jump_timeout),
            ("fall_timeout", self.fall_timeout),
            ("rotation_smooth_time", self.rotation_smooth_time),
            ("speed_change_rate", self.speed_change_rate),
            ("terminal_velocity", self.terminal_velocity),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::invalid(*field, "must be finite"));
        }

        if self.gravity >= 0.0 {
            return Err(ConfigError::invalid("gravity", "must be negative"));
        }
        if self.jump_height < 0.0 {
            return Err(ConfigError::invalid("jump_height", "must not be negative"));
        }
        if self.terminal_velocity <= 0.0 {
            return Err(ConfigError::invalid("terminal_velocity", "must be positive"));
        }
        if self.jump_timeout < 0.0 {
            return Err(ConfigError::invalid("jump_timeout", "must not be negative"));
        }
        if self.fall_timeout < 0.0 {
            return Err(ConfigError::invalid("fall_timeout", "must not be negative"));
        }
        if self.rotation_smooth_time < 0.0 {
            return Err(ConfigError::invalid(
                "rotation_smooth_time",
                "must not be negative",
            ));
        }
        if self.speed_change_rate < 0.0 {
            return Err(ConfigError::invalid(
                "speed_change_rate",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LocomotionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_jump_velocity_matches_projectile_formula() {
        let config = LocomotionConfig::default();
        assert_relative_eq!(config.jump_velocity(), 36.0f32.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = LocomotionConfig::from_ron_str("(jump_height: 2.0, clamp_fall_speed: true)")
            .expect("valid config");
        assert_eq!(config.jump_height, 2.0);
        assert!(config.clamp_fall_speed);
        assert_eq!(config.move_speed, 2.0);
        assert!(!config.single_ground_sample);
    }

    #[test]
    fn test_positive_gravity_is_rejected() {
        let err = LocomotionConfig::from_ron_str("(gravity: 9.81)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "gravity",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_jump_height_is_rejected() {
        let config = LocomotionConfig {
            jump_height: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "jump_height",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_terminal_velocity_is_rejected() {
        let config = LocomotionConfig {
            terminal_velocity: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_field_is_rejected() {
        let config = LocomotionConfig {
            speed_change_rate: f32::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid locomotion config: `speed_change_rate` must be finite"
        );
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        let err = LocomotionConfig::from_ron_str("(move_speed: )").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(move_speed: 4.0, fall_timeout: 0.3)").unwrap();

        let config = LocomotionConfig::load(file.path()).unwrap();
        assert_eq!(config.move_speed, 4.0);
        assert_eq!(config.fall_timeout, 0.3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = LocomotionConfig::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
