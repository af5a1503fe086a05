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
//! Player movement update
//!
//! One call to [`update_player`] advances a player by one tick:
//!
//! 1. Skill triggers, unless muted or stunned
//! 2. Horizontal input and the jump state machine, unless rooted or stunned
//! 3. Integration under gravity
//! 4. Collision query; a landing contact resets the jump state
//! 5. Orientation flip when the player moved against its facing
//! 6. Skill apply phase, every slot in order

mod jump;

pub use jump::{
    JumpPhysics, JumpState, MAX_JUMP_TIME, MAX_NB_JUMPS, MAX_STOP_TIME, QUICK_FALL_MULTIPLIER,
};

use crate::collision::{Collider, CollisionScene};
use crate::ecs::components::StatusFlags;
use crate::ecs::Entity;
use crate::input::{Action, ControllerState, Controllers};
use crate::integration::{Integrator, SemiImplicitEuler};
use crate::math::{opposite_sign, Vec2};
use crate::skills::{Skill, SkillContext, NB_SKILLS};

/// Advance a player entity by `dt` seconds
///
/// # Panics
///
/// Panics if `entity` has no player state or its controller id is unknown.
pub fn update_player(
    entity: &mut Entity,
    controllers: &Controllers,
    collider: &mut dyn Collider,
    scene: &CollisionScene<'_>,
    dt: f32,
) {
    let controller_id = match &entity.player {
        Some(player) => player.controller_id,
        None => panic!("{} has no player state", entity.id()),
    };
    let controller = controllers.get(controller_id);

    trigger_skills(entity, controller);

    let old_x = entity.kinematics.position.x;
    let acceleration = drive(entity, controller, collider, dt);
    SemiImplicitEuler.integrate(&mut entity.kinematics, acceleration, dt);
    debug_assert!(
        entity.kinematics.is_valid(),
        "{} integrated to a non-finite state",
        entity.id()
    );

    for contact in collider.collide_entity(entity, scene) {
        if contact.is_landing() {
            landed(entity);
        }
        if let Some((skills, mut ctx)) = skill_slots(entity, controller) {
            for skill in skills.iter_mut() {
                skill.collide(&mut ctx, contact.other);
            }
        }
    }

    let moved = entity.kinematics.position.x - old_x;
    if let Some(player) = entity.player.as_mut() {
        if opposite_sign(moved, player.orientation) {
            player.orientation = -player.orientation;
        }
    }

    if let Some((skills, mut ctx)) = skill_slots(entity, controller) {
        for skill in skills.iter_mut() {
            skill.apply(&mut ctx, dt);
        }
    }
}

/// Landing callback: the player touched the ground
pub fn landed(entity: &mut Entity) {
    let id = entity.id();
    if let Some(player) = entity.player.as_mut() {
        if player.jump.already_jumping {
            log::debug!("{} landed", id);
        }
        player.jump.landed();
    }
}

fn skill_slots<'a>(
    entity: &'a mut Entity,
    controller: &'a ControllerState,
) -> Option<(&'a mut [Skill; NB_SKILLS], SkillContext<'a>)> {
    let owner = entity.id();
    let player = entity.player.as_mut()?;
    Some((
        &mut entity.skills,
        SkillContext {
            owner,
            body: &mut entity.kinematics,
            vitals: &mut player.vitals,
            controller,
        },
    ))
}

fn trigger_skills(entity: &mut Entity, controller: &ControllerState) {
    let silenced = match &entity.player {
        Some(player) => player
            .status
            .intersects(StatusFlags::MUTED | StatusFlags::STUNNED),
        None => true,
    };
    if silenced {
        return;
    }

    if let Some((skills, mut ctx)) = skill_slots(entity, controller) {
        if controller.is_rising_edge(Action::Skill1) {
            skills[0].trigger(&mut ctx);
        }
        if controller.is_rising_edge(Action::Skill2) {
            skills[1].trigger(&mut ctx);
        }
        skills[2].trigger(&mut ctx);
    }
}

/// Apply input to velocity and the jump state; returns this tick's acceleration
fn drive(
    entity: &mut Entity,
    controller: &ControllerState,
    collider: &mut dyn Collider,
    dt: f32,
) -> Vec2 {
    let id = entity.id();
    let body = &mut entity.kinematics;
    let Some(player) = entity.player.as_mut() else {
        return Vec2::ZERO;
    };

    let mut acceleration = Vec2::new(0.0, player.jump_physics.gravity);
    body.velocity.x = 0.0;

    if player
        .status
        .intersects(StatusFlags::ROOTED | StatusFlags::STUNNED)
    {
        return acceleration;
    }

    if controller.is_pressed(Action::Left) {
        body.velocity.x -= player.run_speed;
    }
    if controller.is_pressed(Action::Right) {
        body.velocity.x += player.run_speed;
    }

    if controller.is_pressed(Action::Jump) {
        if controller.is_rising_edge(Action::Jump) && player.jump.can_start() {
            body.velocity.y = player.jump_physics.initial_velocity;
            player.jump.start();
            log::debug!("{} jumps ({}/{})", id, player.jump.nb_jumps, MAX_NB_JUMPS);
            collider.went_airborne(id);
        } else {
            player.jump.hold(dt);
        }
    } else {
        acceleration.y *= player.jump.release(dt);
    }

    acceleration
}
