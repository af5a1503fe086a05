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
//! Collision contract
//!
//! The movement update asks a [`Collider`] for contacts after integrating an
//! entity. How contacts are found and resolved is up to the collider; the
//! update only reacts to them. A contact whose normal is exactly
//! [`LANDING_NORMAL`] lands the entity.

use crate::ecs::components::Shape;
use crate::ecs::{Entity, EntityId};
use crate::math::Vec2;

/// Contact normal meaning "standing on top of `other`"
pub const LANDING_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

/// A contact reported by a collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Contact normal, pointing from the updated entity into `other`
    pub normal: Vec2,
    /// Entity touched
    pub other: EntityId,
}

impl CollisionResult {
    /// Whether this contact lands the updated entity
    pub fn is_landing(&self) -> bool {
        self.normal == LANDING_NORMAL
    }
}

/// Read-only view of the world around the entity being updated
#[derive(Clone, Copy)]
pub struct CollisionScene<'a> {
    before: &'a [Entity],
    after: &'a [Entity],
    shapes: &'a [Shape],
}

impl<'a> CollisionScene<'a> {
    /// Scene made of the entities stored before and after the updated one
    pub fn new(before: &'a [Entity], after: &'a [Entity], shapes: &'a [Shape]) -> Self {
        CollisionScene {
            before,
            after,
            shapes,
        }
    }

    /// Scene with nothing in it
    pub fn empty() -> Self {
        CollisionScene::new(&[], &[], &[])
    }

    /// Every other entity, in creation order
    pub fn others(&self) -> impl Iterator<Item = &'a Entity> + 'a {
        let (before, after) = (self.before, self.after);
        before.iter().chain(after.iter())
    }

    /// Shape of `entity`, if it is collidable
    pub fn shape_of(&self, entity: &Entity) -> Option<&'a Shape> {
        let shapes = self.shapes;
        entity.shape().and_then(|id| shapes.get(id.index()))
    }
}

/// Finds contacts for an entity that just moved
pub trait Collider {
    /// Contacts of `entity` against `scene`
    fn collide_entity(&mut self, entity: &Entity, scene: &CollisionScene<'_>)
        -> Vec<CollisionResult>;

    /// `entity` launched a jump and left the ground
    fn went_airborne(&mut self, _entity: EntityId) {}
}

/// Collider that never reports a contact
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl Collider for NoCollision {
    fn collide_entity(
        &mut self,
        _entity: &Entity,
        _scene: &CollisionScene<'_>,
    ) -> Vec<CollisionResult> {
        Vec::new()
    }
}
