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
//! Frame driver
//!
//! Walks the entity table once per tick in creation order and runs each
//! entity's update behavior. Entities updated earlier in a tick are seen in
//! their new state by the ones updated later.

use crate::collision::{Collider, NoCollision};
use crate::ecs::{System, World};
use crate::movement::update_player;

/// What an entity does on each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateBehavior {
    /// Static content
    #[default]
    Noop,
    /// Player movement and skills
    Player,
}

/// Run one tick of every entity's update behavior
pub fn update_world(world: &mut World, collider: &mut dyn Collider, dt: f32) {
    for index in 0..world.entity_count() {
        let (entity, scene, controllers) = world.split_for_update(index);
        match entity.update {
            UpdateBehavior::Noop => {}
            UpdateBehavior::Player => update_player(entity, controllers, collider, &scene, dt),
        }
    }
}

/// System wrapping [`update_world`] with its collider
pub struct EntityUpdateSystem {
    collider: Box<dyn Collider>,
}

impl EntityUpdateSystem {
    /// Update system querying `collider` for contacts
    pub fn new<C: Collider + 'static>(collider: C) -> Self {
        EntityUpdateSystem {
            collider: Box::new(collider),
        }
    }
}

impl Default for EntityUpdateSystem {
    fn default() -> Self {
        Self::new(NoCollision)
    }
}

impl System for EntityUpdateSystem {
    fn run(&mut self, world: &mut World, dt: f32) {
        update_world(world, self.collider.as_mut(), dt);
    }

    fn name(&self) -> &str {
        "EntityUpdateSystem"
    }
}
