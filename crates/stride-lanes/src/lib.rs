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

//! # Stride Lanes
//!
//! The two halves of the per-frame motion model. Each lane is stateless: it reads
//! the [`LocomotionConfig`](stride_data::LocomotionConfig), mutates the
//! [`LocomotionState`](stride_data::LocomotionState) it is handed, and talks to
//! the collaborators it is lent for the call.

#![warn(missing_docs)]

mod horizontal_lane;
mod vertical_lane;

pub use horizontal_lane::*;
pub use vertical_lane::*;

#[cfg(test)]
mod test_support;
