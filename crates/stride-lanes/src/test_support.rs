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

use stride_core::math::{repeat, Vec3};
use stride_core::BodyMover;

/// Body double that records every move and reports a scripted velocity.
#[derive(Debug, Default)]
pub struct RecordingBody {
    pub moves: Vec<Vec3>,
    pub velocity: Vec3,
    pub yaw: f32,
}

impl BodyMover for RecordingBody {
    fn move_by(&mut self, displacement: Vec3) {
        self.moves.push(displacement);
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(&mut self, yaw_degrees: f32) {
        self.yaw = repeat(yaw_degrees, 360.0);
    }
}
