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
//! World management
//!
//! The World is the central container for all simulation data: the entity
//! arena, the shared component tables, the player roster and the controller
//! table written by the input layer.
//!
//! Every table has a fixed capacity chosen at construction. Running out is a
//! content bug, not a runtime condition, and panics.

use crate::assets::Bitmap;
use crate::collision::CollisionScene;
use crate::ecs::components::{
    BitmapId, ComponentFlags, Kinematics, PatternId, PhysicsBody, PhysicsId, RenderingPattern,
    Shape, ShapeId,
};
use crate::ecs::entity::{Entity, EntityId, EntityKind};
use crate::input::Controllers;
use crate::math::Vec2;

/// Default capacity of every world table
pub const WORLD_SIZE: usize = 512;

/// The main simulation container
pub struct World {
    capacity: usize,
    entities: Vec<Entity>,
    shapes: Vec<Shape>,
    patterns: Vec<RenderingPattern>,
    physics: Vec<PhysicsBody>,
    bitmaps: Vec<Bitmap>,
    pub(crate) players: Vec<EntityId>,
    /// Controller states, advanced by the input layer before each update
    pub controllers: Controllers,
}

impl World {
    /// Create an empty world with `WORLD_SIZE` slots per table
    pub fn new() -> Self {
        Self::with_capacity(WORLD_SIZE)
    }

    /// Create an empty world with `capacity` slots per table
    ///
    /// Storage is reserved up front and never grows past `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        World {
            capacity,
            entities: Vec::with_capacity(capacity),
            shapes: Vec::with_capacity(capacity),
            patterns: Vec::with_capacity(capacity),
            physics: Vec::with_capacity(capacity),
            bitmaps: Vec::with_capacity(capacity),
            players: Vec::new(),
            controllers: Controllers::new(),
        }
    }

    /// Slots per table
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Create a new entity in the next free slot
    ///
    /// Ids are handed out in creation order starting at 0.
    ///
    /// # Panics
    ///
    /// Panics if the entity table is full.
    pub fn create_entity(
        &mut self,
        kind: EntityKind,
        position: Vec2,
        velocity: Vec2,
        acceleration: Vec2,
    ) -> EntityId {
        let index = self.entities.len();
        assert!(index < self.capacity, "World capacity exceeded ({} entities)", self.capacity);

        let id = EntityId::new(index as u32);
        self.entities.push(Entity::new(
            id,
            kind,
            Kinematics::new(position, velocity, acceleration),
        ));
        id
    }

    /// Look up an entity
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this world.
    pub fn entity(&self, id: EntityId) -> &Entity {
        assert!(id.index() < self.entities.len(), "Invalid entity id {}", id);
        &self.entities[id.index()]
    }

    /// Look up an entity mutably
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this world.
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        assert!(id.index() < self.entities.len(), "Invalid entity id {}", id);
        &mut self.entities[id.index()]
    }

    /// All entities in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities created so far
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing has been created yet
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.shapes.is_empty()
            && self.patterns.is_empty()
            && self.physics.is_empty()
            && self.bitmaps.is_empty()
    }

    /// Add a shape to the shared shape table
    ///
    /// # Panics
    ///
    /// Panics if the shape table is full.
    pub fn create_shape(&mut self, shape: Shape) -> ShapeId {
        ShapeId::new(push_bounded(&mut self.shapes, shape, self.capacity, "shape"))
    }

    /// Look up a shape
    pub fn shape(&self, id: ShapeId) -> &Shape {
        assert!(id.index() < self.shapes.len(), "Invalid shape id {:?}", id);
        &self.shapes[id.index()]
    }

    /// Add a pattern to the rendering pattern table
    ///
    /// # Panics
    ///
    /// Panics if the pattern table is full.
    pub fn create_rendering_pattern(&mut self, pattern: RenderingPattern) -> PatternId {
        PatternId::new(push_bounded(&mut self.patterns, pattern, self.capacity, "pattern"))
    }

    /// Look up a rendering pattern
    pub fn pattern(&self, id: PatternId) -> &RenderingPattern {
        assert!(id.index() < self.patterns.len(), "Invalid pattern id {:?}", id);
        &self.patterns[id.index()]
    }

    /// Store a decoded bitmap
    ///
    /// # Panics
    ///
    /// Panics if the bitmap table is full.
    pub fn create_bitmap(&mut self, bitmap: Bitmap) -> BitmapId {
        BitmapId::new(push_bounded(&mut self.bitmaps, bitmap, self.capacity, "bitmap"))
    }

    /// Look up a bitmap
    pub fn bitmap(&self, id: BitmapId) -> &Bitmap {
        assert!(id.index() < self.bitmaps.len(), "Invalid bitmap id {:?}", id);
        &self.bitmaps[id.index()]
    }

    /// Number of stored bitmaps
    pub fn bitmap_count(&self) -> usize {
        self.bitmaps.len()
    }

    /// Look up a physics body
    pub fn physics_body(&self, id: PhysicsId) -> &PhysicsBody {
        assert!(id.index() < self.physics.len(), "Invalid physics id {:?}", id);
        &self.physics[id.index()]
    }

    /// Attach a shared shape, making the entity collidable
    pub fn add_shape_to_entity(&mut self, entity: EntityId, shape: ShapeId) {
        assert!(shape.index() < self.shapes.len(), "Invalid shape id {:?}", shape);
        self.entity_mut(entity).attach_shape(shape);
    }

    /// Attach a rendering pattern, making the entity renderable
    pub fn add_rendering_pattern_to_entity(&mut self, entity: EntityId, pattern: PatternId) {
        assert!(pattern.index() < self.patterns.len(), "Invalid pattern id {:?}", pattern);
        self.entity_mut(entity).attach_pattern(pattern);
    }

    /// Give the entity a physics body
    ///
    /// # Panics
    ///
    /// Panics if the entity already has one or the physics table is full.
    pub fn setup_dynamic_entity(&mut self, entity: EntityId, body: PhysicsBody) -> PhysicsId {
        assert!(
            self.entity(entity).physics().is_none(),
            "{} already has a physics body",
            entity
        );
        let id = PhysicsId::new(push_bounded(&mut self.physics, body, self.capacity, "physics"));
        self.entity_mut(entity).attach_physics(id);
        id
    }

    /// Set capability flags on an entity
    ///
    /// Flags backed by a component (RENDERABLE, COLLIDABLE, DYNAMIC) may only
    /// be set once that component is attached.
    ///
    /// # Panics
    ///
    /// Panics if a backed flag is set without its component.
    pub fn set_entity_component(&mut self, entity: EntityId, flags: ComponentFlags) {
        let target = self.entity_mut(entity);
        assert!(
            !flags.contains(ComponentFlags::COLLIDABLE) || target.shape().is_some(),
            "{} cannot be collidable without a shape",
            entity
        );
        assert!(
            !flags.contains(ComponentFlags::RENDERABLE) || target.pattern().is_some(),
            "{} cannot be renderable without a pattern",
            entity
        );
        assert!(
            !flags.contains(ComponentFlags::DYNAMIC) || target.physics().is_some(),
            "{} cannot be dynamic without a physics body",
            entity
        );
        target.insert_flags(flags);
    }

    /// Whether `entity` has every flag in `flags`
    pub fn entity_has_component(&self, entity: EntityId, flags: ComponentFlags) -> bool {
        self.entity(entity).has_component(flags)
    }

    /// Number of registered players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Entity ids of registered players, in registration order
    pub fn players(&self) -> &[EntityId] {
        &self.players
    }

    /// Entity of the `player`-th registered player
    ///
    /// # Panics
    ///
    /// Panics if fewer than `player + 1` players are registered.
    pub fn player_entity(&self, player: usize) -> &Entity {
        assert!(player < self.players.len(), "Invalid player index {}", player);
        self.entity(self.players[player])
    }

    /// Split the world for updating the entity at `index`
    ///
    /// Returns the entity itself, a read-only view of every other entity for
    /// collision queries, and the controller table.
    pub(crate) fn split_for_update(
        &mut self,
        index: usize,
    ) -> (&mut Entity, CollisionScene<'_>, &Controllers) {
        assert!(index < self.entities.len(), "Invalid entity index {}", index);
        let (before, rest) = self.entities.split_at_mut(index);
        let (current, after) = rest
            .split_first_mut()
            .expect("index checked against the entity count");
        (
            current,
            CollisionScene::new(before, after, &self.shapes),
            &self.controllers,
        )
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded<T>(table: &mut Vec<T>, value: T, capacity: usize, what: &str) -> u32 {
    let index = table.len();
    assert!(index < capacity, "World {} table capacity exceeded ({})", what, capacity);
    table.push(value);
    index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_creation_order() {
        let mut world = World::new();
        for expected in 0..10u32 {
            let id = world.create_entity(EntityKind::Wall, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
            assert_eq!(id.raw(), expected);
            assert_eq!(world.entity(id).id(), id);
        }
        assert_eq!(world.entity_count(), 10);
    }

    #[test]
    fn test_create_entity_stores_kinematics() {
        let mut world = World::new();
        let id = world.create_entity(
            EntityKind::Enemy,
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(5.0, 6.0),
        );
        let entity = world.entity(id);
        assert_eq!(entity.kind(), EntityKind::Enemy);
        assert_eq!(entity.kinematics.position, Vec2::new(1.0, 2.0));
        assert_eq!(entity.kinematics.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(entity.kinematics.acceleration, Vec2::new(5.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "World capacity exceeded")]
    fn test_capacity_exceeded() {
        let mut world = World::with_capacity(2);
        for _ in 0..3 {
            world.create_entity(EntityKind::Wall, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
        }
    }

    #[test]
    #[should_panic(expected = "shape table capacity exceeded")]
    fn test_shape_capacity_exceeded() {
        let mut world = World::with_capacity(1);
        world.create_shape(Shape::new(Vec2::ONE));
        world.create_shape(Shape::new(Vec2::ONE));
    }

    #[test]
    #[should_panic(expected = "Invalid entity id")]
    fn test_invalid_entity_lookup() {
        let world = World::new();
        world.entity(EntityId::new(0));
    }

    #[test]
    fn test_shared_shape() {
        let mut world = World::new();
        let shape = world.create_shape(Shape::new(Vec2::new(1.0, 1.5)));
        let a = world.create_entity(EntityKind::Wall, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
        let b = world.create_entity(EntityKind::Wall, Vec2::ONE, Vec2::ZERO, Vec2::ZERO);

        world.add_shape_to_entity(a, shape);
        world.add_shape_to_entity(b, shape);

        assert_eq!(world.entity(a).shape(), Some(shape));
        assert_eq!(world.entity(b).shape(), Some(shape));
        assert!(world.entity_has_component(a, ComponentFlags::COLLIDABLE));
        assert!(world.entity(a).is_consistent());
    }

    #[test]
    #[should_panic(expected = "cannot be renderable without a pattern")]
    fn test_flag_without_component() {
        let mut world = World::new();
        let id = world.create_entity(EntityKind::Wall, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
        world.set_entity_component(id, ComponentFlags::RENDERABLE);
    }

    #[test]
    fn test_unbacked_flag() {
        let mut world = World::new();
        let id = world.create_entity(EntityKind::Player, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
        world.set_entity_component(id, ComponentFlags::ORIENTABLE);
        assert!(world.entity_has_component(id, ComponentFlags::ORIENTABLE));
        assert!(world.entity(id).is_consistent());
    }

    #[test]
    fn test_split_for_update() {
        let mut world = World::new();
        for i in 0..4 {
            world.create_entity(EntityKind::Wall, Vec2::splat(i as f32), Vec2::ZERO, Vec2::ZERO);
        }
        let (current, scene, _) = world.split_for_update(2);
        assert_eq!(current.id().raw(), 2);
        let others: Vec<u32> = scene.others().map(|e| e.id().raw()).collect();
        assert_eq!(others, vec![0, 1, 3]);
    }

    #[test]
    fn test_world_starts_empty() {
        let world = World::default();
        assert!(world.is_empty());
        assert_eq!(world.capacity(), WORLD_SIZE);
        assert_eq!(world.player_count(), 0);
    }
}
