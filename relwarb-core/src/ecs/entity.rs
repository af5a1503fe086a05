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
//! Entity records
//!
//! Entities live in a fixed-capacity arena and are addressed by the index
//! they were created at. Slots are never freed during a session, so an
//! [`EntityId`] stays valid and unique until the whole world is dropped and
//! needs no generation counter.

use crate::ecs::components::{ComponentFlags, Kinematics, PatternId, PhysicsId, PlayerState, ShapeId};
use crate::frame::UpdateBehavior;
use crate::skills::{Skill, NB_SKILLS};
use std::fmt;

/// Unique identifier for an entity, equal to its creation index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Create a new EntityId from a raw index
    pub fn new(id: u32) -> Self {
        EntityId(id)
    }

    /// Get the raw value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Index into the entity table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Gameplay role of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Controlled by a player
    Player,
    /// Level geometry
    Wall,
    /// Hostile or pushable object
    Enemy,
}

/// An entity and the handles to its components
///
/// Capability flags and component handles are private and only change
/// through [`World`](crate::ecs::World), which keeps them in agreement.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    flags: ComponentFlags,
    shape: Option<ShapeId>,
    pattern: Option<PatternId>,
    physics: Option<PhysicsId>,
    /// Position, velocity and acceleration
    pub kinematics: Kinematics,
    /// Skill slots, applied in index order every tick
    pub skills: [Skill; NB_SKILLS],
    /// Per-tick behavior selected by the frame driver
    pub update: UpdateBehavior,
    /// Player-only state
    pub player: Option<PlayerState>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, kind: EntityKind, kinematics: Kinematics) -> Self {
        Entity {
            id,
            kind,
            flags: ComponentFlags::empty(),
            shape: None,
            pattern: None,
            physics: None,
            kinematics,
            skills: Default::default(),
            update: UpdateBehavior::Noop,
            player: None,
        }
    }

    /// Get the entity ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Get the entity kind
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Capability bitset
    pub fn flags(&self) -> ComponentFlags {
        self.flags
    }

    /// Whether every flag in `flags` is set
    pub fn has_component(&self, flags: ComponentFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Shared shape, if collidable
    pub fn shape(&self) -> Option<ShapeId> {
        self.shape
    }

    /// Rendering pattern, if renderable
    pub fn pattern(&self) -> Option<PatternId> {
        self.pattern
    }

    /// Physics body, if dynamic
    pub fn physics(&self) -> Option<PhysicsId> {
        self.physics
    }

    /// Facing direction; non-player entities always face right
    pub fn orientation(&self) -> f32 {
        self.player.as_ref().map_or(1.0, |p| p.orientation)
    }

    /// Whether the capability flags agree with the populated handles
    pub fn is_consistent(&self) -> bool {
        self.flags.contains(ComponentFlags::COLLIDABLE) == self.shape.is_some()
            && self.flags.contains(ComponentFlags::RENDERABLE) == self.pattern.is_some()
            && self.flags.contains(ComponentFlags::DYNAMIC) == self.physics.is_some()
    }

    pub(crate) fn attach_shape(&mut self, shape: ShapeId) {
        self.shape = Some(shape);
        self.flags.insert(ComponentFlags::COLLIDABLE);
    }

    pub(crate) fn attach_pattern(&mut self, pattern: PatternId) {
        self.pattern = Some(pattern);
        self.flags.insert(ComponentFlags::RENDERABLE);
    }

    pub(crate) fn attach_physics(&mut self, physics: PhysicsId) {
        self.physics = Some(physics);
        self.flags.insert(ComponentFlags::DYNAMIC);
    }

    pub(crate) fn insert_flags(&mut self, flags: ComponentFlags) {
        self.flags.insert(flags);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.id, self.kind)
    }
}
