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

//! Timeline-driven input for headless runs.

use stride_core::{Axis, InputSource, Key};

/// Input that replays a fixed script, one frame at a time.
///
/// ```
/// use stride_core::{Axis, InputSource, Key};
/// use stride_infra::ScriptedInput;
///
/// let mut input = ScriptedInput::new().hold_axis(2, 1.0).press_jump(3);
/// assert_eq!(input.axis(Axis::Horizontal), 0.0);
/// input.advance();
/// input.advance();
/// assert_eq!(input.axis(Axis::Horizontal), 1.0);
/// assert!(!input.key_down(Key::Jump));
/// input.advance();
/// assert!(input.key_down(Key::Jump));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frame: u64,
    /// `(from_frame, value)`, sorted by frame.
    axis_keys: Vec<(u64, f32)>,
    /// Sorted, deduplicated.
    jump_frames: Vec<u64>,
}

impl ScriptedInput {
    /// An empty script: no movement, no jumps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds the horizontal axis at `value` from `from_frame` until the next key.
    /// The value is clamped to `[-1.0, 1.0]`.
    pub fn hold_axis(mut self, from_frame: u64, value: f32) -> Self {
        let value = value.clamp(-1.0, 1.0);
        let index = self.axis_keys.partition_point(|(frame, _)| *frame <= from_frame);
        if index > 0 && self.axis_keys[index - 1].0 == from_frame {
            self.axis_keys[index - 1].1 = value;
        } else {
            self.axis_keys.insert(index, (from_frame, value));
        }
        self
    }

    /// Presses jump on `frame`.
    pub fn press_jump(mut self, frame: u64) -> Self {
        if let Err(index) = self.jump_frames.binary_search(&frame) {
            self.jump_frames.insert(index, frame);
        }
        self
    }

    /// The frame currently being replayed.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Moves to the next frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

impl InputSource for ScriptedInput {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => {
                let index = self
                    .axis_keys
                    .partition_point(|(frame, _)| *frame <= self.frame);
                if index == 0 {
                    0.0
                } else {
                    self.axis_keys[index - 1].1
                }
            }
        }
    }

    fn key_down(&self, key: Key) -> bool {
        match key {
            Key::Jump => self.jump_frames.binary_search(&self.frame).is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_keys_override_earlier_ones() {
        let mut input = ScriptedInput::new()
            .hold_axis(10, -1.0)
            .hold_axis(0, 1.0)
            .hold_axis(20, 0.0);

        let mut seen = Vec::new();
        for _ in 0..25 {
            seen.push(input.axis(Axis::Horizontal));
            input.advance();
        }

        assert_eq!(seen[0], 1.0);
        assert_eq!(seen[9], 1.0);
        assert_eq!(seen[10], -1.0);
        assert_eq!(seen[24], 0.0);
    }

    #[test]
    fn test_axis_is_clamped_and_rekeyed() {
        let input = ScriptedInput::new().hold_axis(0, 3.0).hold_axis(0, -7.0);
        assert_eq!(input.axis(Axis::Horizontal), -1.0);
    }

    #[test]
    fn test_jump_is_single_frame() {
        let mut input = ScriptedInput::new().press_jump(1).press_jump(1);
        assert!(!input.key_down(Key::Jump));
        input.advance();
        assert!(input.key_down(Key::Jump));
        input.advance();
        assert!(!input.key_down(Key::Jump));
        assert_eq!(input.frame(), 2);
    }
}
