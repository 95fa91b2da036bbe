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

//! # Stride Infra
//!
//! Concrete, engine-free implementations of the collaborator traits in
//! [`stride_core::locomotion`]: a kinematic body on a flat floor with its ground
//! probe, and a scripted input timeline. They let the locomotion loop run
//! headless, in tests and in the sandbox.

#![warn(missing_docs)]

pub mod input;
pub mod plane;

pub use input::ScriptedInput;
pub use plane::{PlaneBody, PlaneProbe};
