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
//! # Relwarb Core
//!
//! Simulation core of a 2D platform fighter: the entity store, player
//! movement with a designed jump arc, and the skill system (dash, mana
//! recharge, passive regeneration).
//!
//! ## Features
//!
//! - **Entity store**: fixed-capacity arena with shared shape and pattern tables
//! - **Movement**: semi-implicit Euler integration, double jump, quick fall
//! - **Skills**: closed set of abilities driven by controller edges
//! - **Collaborator traits**: rendering, assets, map loading, editor and
//!   collision stay outside the core
//! - **Parallelization**: optional Rayon render extraction
//!
//! ## Example
//!
//! ```rust
//! use relwarb_core::config::SimulationConfig;
//! use relwarb_core::ecs::World;
//! use relwarb_core::ecs::components::{RenderingPattern, Shape};
//! use relwarb_core::assets::Bitmap;
//! use relwarb_core::collision::NoCollision;
//! use relwarb_core::frame::update_world;
//! use relwarb_core::input::{Action, ActionSnapshot};
//! use relwarb_core::math::Vec2;
//!
//! let config = SimulationConfig::default();
//! let mut world = World::new();
//! let bitmap = world.create_bitmap(Bitmap::solid(1, 1, [255; 4]));
//! let pattern = world.create_rendering_pattern(RenderingPattern::still(bitmap));
//! let shape = world.create_shape(Shape::new(Vec2::new(1.0, 1.5)));
//! let hero = world.create_player_entity(Vec2::ZERO, pattern, shape, 0, &config);
//!
//! world.controllers.advance(0, ActionSnapshot::empty().with(Action::Jump));
//! update_world(&mut world, &mut NoCollision, 1.0 / 60.0);
//!
//! assert!(world.entity(hero).kinematics.position.y > 0.0);
//! ```

#![warn(missing_docs)]

/// Asset collaborator contract
pub mod assets;

/// Collision contract
pub mod collision;

/// Designer-facing tuning
pub mod config;

/// Entity store
pub mod ecs;

/// Recoverable errors
pub mod error;

/// Frame driver
pub mod frame;

/// Game mode machine
pub mod game;

/// Controller and input abstraction
pub mod input;

/// Numerical integration methods
pub mod integration;

/// Math and geometry primitives
pub mod math;

/// Player movement
pub mod movement;

/// Render transform extraction
pub mod render;

/// Default scene
pub mod scene;

/// Skills
pub mod skills;

pub use ecs::{Entity, EntityId, World};
pub use error::SimError;
pub use game::{Game, GameMode};
