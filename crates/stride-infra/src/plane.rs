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

//! A kinematic body on an infinite horizontal floor.

use std::cell::Cell;
use std::rc::Rc;

use stride_core::math::{repeat, Quaternion, Vec3};
use stride_core::{BodyMover, GroundSensor};

/// Height above the floor within which the probe still reports contact.
pub const DEFAULT_CONTACT_TOLERANCE: f32 = 0.01;

/// A body that slides freely along the floor and cannot sink below it.
///
/// Velocity is derived from the displacement actually applied, divided by the
/// frame time given to [`begin_frame`](Self::begin_frame), so a blocked fall
/// reports zero vertical speed.
#[derive(Debug)]
pub struct PlaneBody {
    /// Shared with every [`PlaneProbe`] handed out by this body.
    position: Rc<Cell<Vec3>>,
    floor_height: f32,
    velocity: Vec3,
    yaw: f32,
    delta_time: f32,
    move_count: u64,
}

impl PlaneBody {
    /// Places a body at `position`, lifted onto the floor if it starts below it.
    pub fn new(position: Vec3, floor_height: f32) -> Self {
        let position = Vec3::new(position.x, position.y.max(floor_height), position.z);
        Self {
            position: Rc::new(Cell::new(position)),
            floor_height,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            delta_time: 0.0,
            move_count: 0,
        }
    }

    /// Records the frame time used to turn the next move into a velocity.
    pub fn begin_frame(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position.get()
    }

    /// Height of the floor plane.
    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }

    /// Current facing as a rotation around the up axis.
    pub fn rotation(&self) -> Quaternion {
        Quaternion::from_yaw_degrees(self.yaw)
    }

    /// Number of moves applied so far, including zero moves.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// A ground probe watching this body with [`DEFAULT_CONTACT_TOLERANCE`].
    pub fn probe(&self) -> PlaneProbe {
        PlaneProbe {
            position: Rc::clone(&self.position),
            floor_height: self.floor_height,
            tolerance: DEFAULT_CONTACT_TOLERANCE,
        }
    }
}

impl BodyMover for PlaneBody {
    fn move_by(&mut self, displacement: Vec3) {
        let start = self.position.get();
        let mut end = start + displacement;
        if end.y < self.floor_height {
            end.y = self.floor_height;
        }
        self.position.set(end);

        if self.delta_time > 0.0 {
            self.velocity = (end - start) * (1.0 / self.delta_time);
        }
        self.move_count += 1;
        log::trace!("PlaneBody: {start:?} -> {end:?}");
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(&mut self, yaw_degrees: f32) {
        self.yaw = repeat(yaw_degrees, 360.0);
        if self.yaw >= 360.0 {
            self.yaw = 0.0;
        }
    }
}

/// Ground sensor reporting whether a [`PlaneBody`] rests on its floor.
#[derive(Debug, Clone)]
pub struct PlaneProbe {
    position: Rc<Cell<Vec3>>,
    floor_height: f32,
    tolerance: f32,
}

impl PlaneProbe {
    /// Returns a copy using `tolerance` as the contact distance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl GroundSensor for PlaneProbe {
    fn is_grounded(&self) -> bool {
        self.position.get().y <= self.floor_height + self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_floor_blocks_downward_moves() {
        let mut body = PlaneBody::new(Vec3::ZERO, 0.0);
        body.begin_frame(0.1);
        body.move_by(Vec3::new(0.5, -1.0, 0.0));

        assert_eq!(body.position(), Vec3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(body.velocity().x, 5.0);
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn test_spawn_below_floor_is_lifted() {
        let body = PlaneBody::new(Vec3::new(0.0, -3.0, 0.0), 1.0);
        assert_eq!(body.floor_height(), 1.0);
        assert_eq!(body.position().y, body.floor_height());
    }

    #[test]
    fn test_probe_follows_body() {
        let mut body = PlaneBody::new(Vec3::ZERO, 0.0);
        let probe = body.probe();
        assert!(probe.is_grounded());

        body.begin_frame(0.1);
        body.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert!(!probe.is_grounded());
        assert!(probe.clone().with_tolerance(1.0).is_grounded());
    }

    #[test]
    fn test_zero_frame_time_keeps_velocity() {
        let mut body = PlaneBody::new(Vec3::ZERO, 0.0);
        body.begin_frame(0.5);
        body.move_by(Vec3::new(1.0, 0.0, 0.0));
        body.begin_frame(0.0);
        body.move_by(Vec3::ZERO);

        assert_relative_eq!(body.velocity().x, 2.0);
        assert_eq!(body.move_count(), 2);
    }

    #[test]
    fn test_yaw_is_wrapped() {
        let mut body = PlaneBody::new(Vec3::ZERO, 0.0);
        body.set_yaw(-90.0);
        assert_relative_eq!(body.yaw(), 270.0);
        body.set_yaw(360.0);
        assert_eq!(body.yaw(), 0.0);
    }
}
