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
//! Two players in the default scene
//!
//! Drives a `Game` for one second with scripted input: player 1 runs right
//! and double jumps, player 2 dashes left and channels a mana recharge.
//! Assets, map and renderer are stand-ins that only count what they receive.

use relwarb_core::assets::{Bitmap, BitmapLoader};
use relwarb_core::config::SimulationConfig;
use relwarb_core::ecs::components::{RenderingPattern, Shape};
use relwarb_core::ecs::World;
use relwarb_core::game::{MapLoader, NoEditor};
use relwarb_core::input::{Action, ActionSnapshot};
use relwarb_core::math::Vec2;
use relwarb_core::render::{Renderer, Transform};
use relwarb_core::Game;

/// Hands out a flat-colored bitmap for every path
struct FlatAssets {
    loaded: usize,
}

impl BitmapLoader for FlatAssets {
    fn load_bitmap_data(&mut self, _path: &str) -> Option<Bitmap> {
        self.loaded += 1;
        Some(Bitmap::solid(16, 16, [200, 120, 40, 255]))
    }
}

/// A single floor slab along the bottom of the screen
struct FloorMap;

impl MapLoader for FloorMap {
    fn load_map(&mut self, world: &mut World) {
        let bitmap = world.create_bitmap(Bitmap::solid(1, 1, [60, 60, 60, 255]));
        let pattern = world.create_rendering_pattern(RenderingPattern::still(bitmap));
        let shape = world.create_shape(Shape::new(Vec2::new(48.0, 1.0)));
        world.create_wall_entity(Vec2::new(0.0, -11.5), pattern, shape);
    }
}

#[derive(Default)]
struct CountingRenderer {
    quads: usize,
    mirrored: usize,
}

impl Renderer for CountingRenderer {
    fn render_pattern(&mut self, _pattern: &RenderingPattern, transform: &Transform, _size: Vec2) {
        self.quads += 1;
        if transform.scale.x < 0.0 {
            self.mirrored += 1;
        }
    }

    fn render_bitmap(&mut self, _bitmap: &Bitmap, _transform: &Transform) {}
}

fn script(frame: usize) -> [ActionSnapshot; 2] {
    let mut first = ActionSnapshot::empty().with(Action::Right);
    if frame < 10 || (15..20).contains(&frame) {
        first = first.with(Action::Jump);
    }

    let second = match frame {
        0 => ActionSnapshot::empty().with(Action::Left).with(Action::Skill1),
        30 => ActionSnapshot::empty().with(Action::Skill2),
        _ => ActionSnapshot::empty(),
    };
    [first, second]
}

fn main() {
    println!("Relwarb Core - Two Players Example");
    println!("==================================\n");

    let mut game = Game::new(SimulationConfig::default());
    let mut assets = FlatAssets { loaded: 0 };
    let scene = game.setup(&mut FloorMap, &mut assets);
    println!(
        "Scene ready: {} entities, {} players, {} bitmaps loaded\n",
        game.world().entity_count(),
        scene.players.len(),
        assets.loaded
    );

    let dt = 1.0 / 60.0;
    for frame in 0..60 {
        for (controller, snapshot) in script(frame).into_iter().enumerate() {
            game.world_mut().controllers.advance(controller, snapshot);
        }
        game.update(dt, &mut NoEditor);

        if frame % 10 == 9 {
            println!("Frame {:2}:", frame + 1);
            for index in 0..game.world().player_count() {
                let player = game.world().player_entity(index);
                let state = player.player.as_ref().map(|p| (p.vitals.mana, p.jump.nb_jumps));
                let (mana, jumps) = state.unwrap_or_default();
                println!(
                    "  Player {}: position = ({:6.2}, {:6.2}), mana = {}, jumps = {}",
                    index + 1,
                    player.kinematics.position.x,
                    player.kinematics.position.y,
                    mana,
                    jumps
                );
            }
        }
    }

    let mut renderer = CountingRenderer::default();
    let calls = game.render(&mut renderer);
    assert_eq!(calls, renderer.quads);
    println!("\nRendered {} quads ({} mirrored)", renderer.quads, renderer.mirrored);
}
