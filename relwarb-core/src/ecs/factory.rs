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
//! Entity factories for the game's content kinds

use crate::config::SimulationConfig;
use crate::ecs::components::{
    ComponentFlags, PatternId, PhysicsBody, PlayerState, RigidBodyType, ShapeId,
};
use crate::ecs::entity::{EntityId, EntityKind};
use crate::ecs::World;
use crate::frame::UpdateBehavior;
use crate::input::MAX_PLAYERS;
use crate::math::Vec2;
use crate::skills::{Dash, ManaRecharge, PassiveRegeneration, Skill};

impl World {
    /// Create a player driven by `controller_id`
    ///
    /// The player is renderable, collidable, orientable and carries a
    /// kinematic physics body sized from its shape. Skill slots are dash,
    /// mana recharge and passive regeneration, in that order.
    ///
    /// # Panics
    ///
    /// Panics if `MAX_PLAYERS` players already exist, the controller id is
    /// unknown, or the world is full.
    pub fn create_player_entity(
        &mut self,
        position: Vec2,
        pattern: PatternId,
        shape: ShapeId,
        controller_id: usize,
        config: &SimulationConfig,
    ) -> EntityId {
        assert!(
            self.players.len() < MAX_PLAYERS,
            "Too many players (max {})",
            MAX_PLAYERS
        );
        assert!(
            controller_id < MAX_PLAYERS,
            "Invalid controller id {}",
            controller_id
        );

        let id = self.create_entity(EntityKind::Player, position, Vec2::ZERO, Vec2::ZERO);
        self.add_rendering_pattern_to_entity(id, pattern);
        self.add_shape_to_entity(id, shape);
        self.set_entity_component(id, ComponentFlags::ORIENTABLE);

        let hero_shape = *self.shape(shape);
        self.setup_dynamic_entity(
            id,
            PhysicsBody {
                body_type: RigidBodyType::Kinematic,
                extents: hero_shape.half_extents(),
            },
        );

        let entity = self.entity_mut(id);
        entity.player = Some(PlayerState::new(&config.player, controller_id));
        entity.skills = [
            Skill::Dash(Dash::new(&config.dash, &hero_shape)),
            Skill::ManaRecharge(ManaRecharge::new(config.regen.mana_per_second)),
            Skill::PassiveRegeneration(PassiveRegeneration::new(config.regen.health_per_second)),
        ];
        entity.update = UpdateBehavior::Player;

        self.players.push(id);
        log::info!(
            "Created player {} as {} on controller {}",
            self.players.len(),
            id,
            controller_id
        );
        id
    }

    /// Create a static piece of level geometry
    pub fn create_wall_entity(
        &mut self,
        position: Vec2,
        pattern: PatternId,
        shape: ShapeId,
    ) -> EntityId {
        let id = self.create_entity(EntityKind::Wall, position, Vec2::ZERO, Vec2::ZERO);
        self.add_rendering_pattern_to_entity(id, pattern);
        self.add_shape_to_entity(id, shape);
        id
    }

    /// Create a box
    pub fn create_box_entity(&mut self, position: Vec2, pattern: PatternId, shape: ShapeId) -> EntityId {
        let id = self.create_entity(EntityKind::Enemy, position, Vec2::ZERO, Vec2::ZERO);
        self.add_rendering_pattern_to_entity(id, pattern);
        self.add_shape_to_entity(id, shape);
        id
    }
}
