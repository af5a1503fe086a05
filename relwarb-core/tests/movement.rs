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
//! Player movement through the frame driver
//!
//! Jump arc, double jump, quick fall, orientation and crowd control

use relwarb_core::assets::Bitmap;
use relwarb_core::collision::{Collider, CollisionResult, CollisionScene, NoCollision, LANDING_NORMAL};
use relwarb_core::config::SimulationConfig;
use relwarb_core::ecs::components::{RenderingPattern, Shape, StatusFlags};
use relwarb_core::ecs::{Entity, EntityId, World};
use relwarb_core::frame::update_world;
use relwarb_core::input::{Action, ActionSnapshot};
use relwarb_core::math::Vec2;
use relwarb_core::movement::{MAX_NB_JUMPS, QUICK_FALL_MULTIPLIER};

fn world_with_player(config: &SimulationConfig) -> (World, EntityId) {
    let mut world = World::new();
    let bitmap = world.create_bitmap(Bitmap::solid(1, 1, [255; 4]));
    let pattern = world.create_rendering_pattern(RenderingPattern::still(bitmap));
    let shape = world.create_shape(Shape::new(Vec2::new(1.0, 1.5)));
    let id = world.create_player_entity(Vec2::ZERO, pattern, shape, 0, config);
    (world, id)
}

fn step(world: &mut World, collider: &mut dyn Collider, actions: &[Action], dt: f32) {
    let snapshot: ActionSnapshot = actions.iter().copied().collect();
    world.controllers.advance(0, snapshot);
    update_world(world, collider, dt);
}

/// Reports a landing contact when asked to, and counts take-offs
#[derive(Default)]
struct Ground {
    land_next: bool,
    take_offs: usize,
}

impl Collider for Ground {
    fn collide_entity(&mut self, _entity: &Entity, _scene: &CollisionScene<'_>) -> Vec<CollisionResult> {
        if std::mem::take(&mut self.land_next) {
            vec![CollisionResult {
                normal: LANDING_NORMAL,
                other: EntityId::new(99),
            }]
        } else {
            Vec::new()
        }
    }

    fn went_airborne(&mut self, _entity: EntityId) {
        self.take_offs += 1;
    }
}

#[test]
fn test_full_jump_reaches_designed_peak() {
    let mut config = SimulationConfig::default();
    config.player.run_speed = config.player.speed;
    let (mut world, id) = world_with_player(&config);

    let dt = 1.0 / 600.0;
    let mut peak = Vec2::ZERO;
    for _ in 0..480 {
        step(&mut world, &mut NoCollision, &[Action::Jump, Action::Right], dt);
        let p = world.entity(id).kinematics.position;
        if p.y > peak.y {
            peak = p;
        }
    }

    assert!((peak.y - 5.0).abs() < 1e-2, "peak height {}", peak.y);
    assert!((peak.x - 16.0).abs() < 0.5, "distance to peak {}", peak.x);
}

#[test]
fn test_jump_count_only_reset_by_landing() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    let mut ground = Ground::default();
    let dt = 0.01;

    for _ in 0..5 {
        step(&mut world, &mut ground, &[Action::Jump], dt);
        step(&mut world, &mut ground, &[], dt);
    }

    let jump = world.entity(id).player.as_ref().unwrap().jump.clone();
    assert_eq!(jump.nb_jumps, MAX_NB_JUMPS);
    assert!(jump.already_jumping);
    assert_eq!(ground.take_offs, MAX_NB_JUMPS as usize);

    ground.land_next = true;
    step(&mut world, &mut ground, &[], dt);
    let jump = &world.entity(id).player.as_ref().unwrap().jump;
    assert_eq!(jump.nb_jumps, 0);
    assert!(!jump.already_jumping);

    step(&mut world, &mut ground, &[Action::Jump], dt);
    assert_eq!(world.entity(id).player.as_ref().unwrap().jump.nb_jumps, 1);
    assert!(world.entity(id).kinematics.velocity.y > 24.0);
}

#[test]
fn test_holding_jump_does_not_double_jump() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    let mut ground = Ground::default();

    for _ in 0..20 {
        step(&mut world, &mut ground, &[Action::Jump], 0.01);
    }

    let jump = &world.entity(id).player.as_ref().unwrap().jump;
    assert_eq!(jump.nb_jumps, 1);
    assert!((jump.jump_time - 0.19).abs() < 1e-4);
    assert_eq!(ground.take_offs, 1);
}

#[test]
fn test_short_hop_quick_fall_window() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    let gravity = world.entity(id).player.as_ref().unwrap().jump_physics.gravity;
    let dt = 0.02;

    step(&mut world, &mut NoCollision, &[Action::Jump], dt);
    assert_eq!(world.entity(id).kinematics.acceleration.y, gravity);

    for _ in 0..3 {
        step(&mut world, &mut NoCollision, &[], dt);
        assert_eq!(
            world.entity(id).kinematics.acceleration.y,
            gravity * QUICK_FALL_MULTIPLIER
        );
    }

    step(&mut world, &mut NoCollision, &[], dt);
    assert_eq!(world.entity(id).kinematics.acceleration.y, gravity);
}

#[test]
fn test_second_jump_gets_its_own_quick_fall() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    let gravity = world.entity(id).player.as_ref().unwrap().jump_physics.gravity;
    let dt = 0.02;
    let acceleration = |world: &World| world.entity(id).kinematics.acceleration.y;

    // Short hop: the window opens and closes
    step(&mut world, &mut NoCollision, &[Action::Jump], dt);
    for _ in 0..4 {
        step(&mut world, &mut NoCollision, &[], dt);
    }
    assert_eq!(acceleration(&world), gravity);

    // Mid-air jump starts a fresh hold timer and a fresh window
    step(&mut world, &mut NoCollision, &[Action::Jump], dt);
    let jump = world.entity(id).player.as_ref().unwrap().jump.clone();
    assert_eq!(jump.nb_jumps, 2);
    assert_eq!(jump.jump_time, 0.0);
    assert!(!jump.quick_fall);
    assert_eq!(acceleration(&world), gravity);

    for _ in 0..3 {
        step(&mut world, &mut NoCollision, &[], dt);
        assert_eq!(acceleration(&world), gravity * QUICK_FALL_MULTIPLIER);
    }
    step(&mut world, &mut NoCollision, &[], dt);
    assert_eq!(acceleration(&world), gravity);
}

#[test]
fn test_long_jump_has_no_quick_fall() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    let gravity = world.entity(id).player.as_ref().unwrap().jump_physics.gravity;

    for _ in 0..30 {
        step(&mut world, &mut NoCollision, &[Action::Jump], 0.01);
    }
    step(&mut world, &mut NoCollision, &[], 0.01);
    assert_eq!(world.entity(id).kinematics.acceleration.y, gravity);
}

#[test]
fn test_orientation_follows_displacement() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    assert_eq!(world.entity(id).orientation(), 1.0);

    step(&mut world, &mut NoCollision, &[Action::Right], 0.1);
    assert_eq!(world.entity(id).orientation(), 1.0);

    step(&mut world, &mut NoCollision, &[Action::Left], 0.1);
    assert_eq!(world.entity(id).orientation(), -1.0);

    step(&mut world, &mut NoCollision, &[], 0.1);
    assert_eq!(world.entity(id).orientation(), -1.0);

    step(&mut world, &mut NoCollision, &[Action::Left], 0.1);
    assert_eq!(world.entity(id).orientation(), -1.0);
}

#[test]
fn test_muted_player_still_moves() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    world
        .entity_mut(id)
        .player
        .as_mut()
        .unwrap()
        .status
        .insert(StatusFlags::MUTED);

    step(&mut world, &mut NoCollision, &[Action::Right, Action::Skill1], 0.1);

    let entity = world.entity(id);
    assert_eq!(entity.player.as_ref().unwrap().vitals.mana, 5);
    assert!(!entity.skills[0].is_active());
    assert!((entity.kinematics.position.x - 1.5).abs() < 1e-5);
    assert!(entity.kinematics.position.y < 0.0);
}

#[test]
fn test_stunned_player_only_falls() {
    let (mut world, id) = world_with_player(&SimulationConfig::default());
    world
        .entity_mut(id)
        .player
        .as_mut()
        .unwrap()
        .status
        .insert(StatusFlags::STUNNED);

    step(&mut world, &mut NoCollision, &[Action::Right, Action::Jump, Action::Skill1], 0.1);

    let entity = world.entity(id);
    assert_eq!(entity.kinematics.position.x, 0.0);
    assert!(entity.kinematics.velocity.y < 0.0);
    assert_eq!(entity.player.as_ref().unwrap().vitals.mana, 5);
    assert_eq!(entity.player.as_ref().unwrap().jump.nb_jumps, 0);
}
