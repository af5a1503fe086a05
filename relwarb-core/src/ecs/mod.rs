// Copyright 2025 John Brosnihan
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
//! Entity store
//!
//! This module provides the world container and its parts:
//! - Entity records addressed by creation index
//! - Shared component tables (shapes, rendering patterns, physics bodies)
//! - Factories for players, walls and boxes
//! - System execution framework

mod entity;
mod factory;
mod system;
mod world;

/// Component data types
pub mod components;

pub use entity::{Entity, EntityId, EntityKind};
pub use system::{System, SystemExecutor};
pub use world::{World, WORLD_SIZE};
