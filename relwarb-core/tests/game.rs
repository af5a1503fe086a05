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
//! Game loop: setup, mode machine, slow motion, rendering and config

use relwarb_core::assets::{Bitmap, BitmapLoader};
use relwarb_core::config::SimulationConfig;
use relwarb_core::ecs::components::{RenderingPattern, Shape};
use relwarb_core::ecs::World;
use relwarb_core::game::{Editor, MapLoader, NoEditor};
use relwarb_core::input::{Action, ActionSnapshot, GlobalKey};
use relwarb_core::math::Vec2;
use relwarb_core::render::{Renderer, Transform};
use relwarb_core::{Game, GameMode, SimError};

struct Assets;

impl BitmapLoader for Assets {
    fn load_bitmap_data(&mut self, _path: &str) -> Option<Bitmap> {
        Some(Bitmap::solid(4, 4, [10, 20, 30, 255]))
    }
}

/// Floor slab, as a map file would describe it
struct Floor;

impl MapLoader for Floor {
    fn load_map(&mut self, world: &mut World) {
        let bitmap = world.create_bitmap(Bitmap::solid(1, 1, [0; 4]));
        let pattern = world.create_rendering_pattern(RenderingPattern::still(bitmap));
        let shape = world.create_shape(Shape::new(Vec2::new(48.0, 1.0)));
        world.create_wall_entity(Vec2::new(0.0, -11.5), pattern, shape);
    }
}

#[derive(Default)]
struct RecordingRenderer {
    transforms: Vec<Transform>,
}

impl Renderer for RecordingRenderer {
    fn render_pattern(&mut self, _pattern: &RenderingPattern, transform: &Transform, _size: Vec2) {
        self.transforms.push(*transform);
    }

    fn render_bitmap(&mut self, _bitmap: &Bitmap, _transform: &Transform) {}
}

#[derive(Default)]
struct CountingEditor {
    frames: usize,
}

impl Editor for CountingEditor {
    fn update(&mut self, _world: &mut World, _dt: f32) {
        self.frames += 1;
    }
}

fn game() -> Game {
    let mut game = Game::new(SimulationConfig::default());
    game.setup(&mut Floor, &mut Assets);
    game
}

fn hold(game: &mut Game, controller: usize, actions: &[Action]) {
    let snapshot: ActionSnapshot = actions.iter().copied().collect();
    game.world_mut().controllers.advance(controller, snapshot);
}

/// One frame: the polling layer reports `keys` as held, then the game updates
fn frame(game: &mut Game, keys: &[GlobalKey], dt: f32, editor: &mut dyn Editor) {
    for key in [GlobalKey::ToggleMode, GlobalKey::SlowMotion] {
        game.advance_global_key(key, keys.contains(&key));
    }
    game.update(dt, editor);
}

#[test]
fn test_setup_puts_map_first() {
    let game = game();
    let world = game.world();
    assert_eq!(world.entity_count(), 3);
    assert_eq!(world.entities()[0].kinematics.position, Vec2::new(0.0, -11.5));
    assert_eq!(world.players()[0].raw(), 1);
    assert_eq!(world.players()[1].raw(), 2);
}

#[test]
fn test_editor_mode_suppresses_simulation() {
    let mut game = game();
    let mut editor = CountingEditor::default();
    let start = game.world().player_entity(0).kinematics.position;

    hold(&mut game, 0, &[Action::Right]);
    for _ in 0..10 {
        frame(&mut game, &[GlobalKey::ToggleMode], 1.0 / 60.0, &mut editor);
    }

    assert_eq!(game.mode(), GameMode::Editor);
    assert_eq!(editor.frames, 10);
    assert_eq!(game.world().player_entity(0).kinematics.position, start);

    frame(&mut game, &[], 1.0 / 60.0, &mut editor);
    frame(&mut game, &[GlobalKey::ToggleMode], 1.0 / 60.0, &mut editor);

    assert_eq!(game.mode(), GameMode::Game);
    assert_eq!(editor.frames, 11);
    assert!(game.world().player_entity(0).kinematics.position.x > start.x);
}

#[test]
fn test_slow_motion_scales_dt() {
    let mut game = game();
    hold(&mut game, 1, &[Action::Left]);

    let x0 = game.world().player_entity(1).kinematics.position.x;
    frame(&mut game, &[], 0.1, &mut NoEditor);
    let x1 = game.world().player_entity(1).kinematics.position.x;
    assert!((x1 - x0 + 1.5).abs() < 1e-4);

    frame(&mut game, &[GlobalKey::SlowMotion], 0.1, &mut NoEditor);
    assert!(game.is_slow_motion());
    let x2 = game.world().player_entity(1).kinematics.position.x;
    assert!((x2 - x1 + 0.15).abs() < 1e-4);

    // Still held: no second toggle
    frame(&mut game, &[GlobalKey::SlowMotion], 0.1, &mut NoEditor);
    assert!(game.is_slow_motion());

    frame(&mut game, &[], 0.1, &mut NoEditor);
    frame(&mut game, &[GlobalKey::SlowMotion], 0.1, &mut NoEditor);
    assert!(!game.is_slow_motion());
}

#[test]
fn test_render_flips_players_facing_left() {
    let mut game = game();
    hold(&mut game, 0, &[Action::Left]);
    frame(&mut game, &[], 0.1, &mut NoEditor);

    let mut renderer = RecordingRenderer::default();
    assert_eq!(game.render(&mut renderer), 3);

    let floor = renderer.transforms[0];
    let left = renderer.transforms[1];
    let right = renderer.transforms[2];
    assert_eq!(floor.scale, Vec2::new(48.0, 1.0));
    assert_eq!(left.scale, Vec2::new(-1.0, 1.5));
    assert_eq!(right.scale, Vec2::new(1.0, 1.5));
    assert_eq!(left.proj, game.viewport().proj());
    assert_eq!(left.world, game.viewport().world());

    frame(&mut game, &[GlobalKey::ToggleMode], 0.0, &mut NoEditor);
    assert_eq!(game.render(&mut renderer), 0);
}

#[test]
fn test_config_round_trip() {
    let mut config = SimulationConfig::default();
    config.player.jump_height = 7.5;
    config.dash.distance_factor = 3.0;

    let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
    let parsed = SimulationConfig::from_ron_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_drives_player_tuning() {
    let config = SimulationConfig::from_ron_str(
        r#"(
            version: "0.3.0",
            player: (run_speed: 20.0, mana: 2),
            dash: (mana_cost: 2),
        )"#,
    )
    .unwrap();
    let mut game = Game::new(config);
    game.setup(&mut Floor, &mut Assets);

    hold(&mut game, 0, &[Action::Right, Action::Skill1]);
    frame(&mut game, &[], 0.1, &mut NoEditor);

    let player = game.world().player_entity(0);
    assert_eq!(player.player.as_ref().unwrap().vitals.mana, 0);
    assert_eq!(player.kinematics.velocity.x, 20.0);
}

#[test]
fn test_config_errors_are_reported() {
    let err = SimulationConfig::from_ron_str(r#"(version: "2.0.0")"#).unwrap_err();
    assert!(matches!(err, SimError::IncompatibleVersion { .. }));
    assert!(err.to_string().contains("2.0.0"));

    let err = SimulationConfig::from_ron_str(r#"(version: "0.3.0", dash: (duration: -1.0))"#)
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidTuning { field: "dash.duration", .. }));
}

#[test]
#[should_panic(expected = "invalid tuning value for slow_motion_factor")]
fn test_negative_slow_motion_factor_is_rejected() {
    let mut config = SimulationConfig::default();
    config.slow_motion_factor = -1.0;
    Game::new(config);
}

#[test]
#[should_panic(expected = "invalid tuning value for player.jump_distance")]
fn test_config_built_in_code_is_validated() {
    let mut config = SimulationConfig::default();
    config.player.jump_distance = 0.0;
    Game::with_collider(config, relwarb_core::collision::NoCollision);
}

#[test]
fn test_zero_slow_motion_factor_freezes_time() {
    let mut config = SimulationConfig::default();
    config.slow_motion_factor = 0.0;
    let mut game = Game::new(config);
    game.setup(&mut Floor, &mut Assets);
    hold(&mut game, 0, &[Action::Right]);

    let start = game.world().player_entity(0).kinematics.position;
    frame(&mut game, &[GlobalKey::SlowMotion], 0.1, &mut NoEditor);
    assert!(game.is_slow_motion());
    assert_eq!(game.world().player_entity(0).kinematics.position, start);
}
