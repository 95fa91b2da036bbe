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

//! Acts as the orchestrator for one character's locomotion.
//!
//! The agent owns the [`LocomotionState`](stride_data::LocomotionState) and runs,
//! once per tick: input polling, the vertical lane, the horizontal lane, and the
//! grounded animation flag. Collaborators are lent to it per tick through a
//! [`FrameContext`](stride_core::FrameContext).

mod agent;

pub use agent::*;
