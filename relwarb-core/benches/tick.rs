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
//! Frame cost benchmarks
//!
//! These benchmarks measure:
//! - One world update with a full set of players among static level geometry
//! - Render command extraction as the entity count grows

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relwarb_core::assets::Bitmap;
use relwarb_core::collision::NoCollision;
use relwarb_core::config::SimulationConfig;
use relwarb_core::ecs::components::{RenderingPattern, Shape};
use relwarb_core::ecs::World;
use relwarb_core::frame::update_world;
use relwarb_core::input::{Action, ActionSnapshot, MAX_PLAYERS};
use relwarb_core::math::Vec2;
use relwarb_core::render::{build_render_commands, Viewport};

fn setup_world(tiles: usize, config: &SimulationConfig) -> World {
    let mut world = World::new();
    let bitmap = world.create_bitmap(Bitmap::solid(8, 8, [128; 4]));
    let pattern = world.create_rendering_pattern(RenderingPattern::still(bitmap));
    let tile = world.create_shape(Shape::new(Vec2::ONE));
    let hero = world.create_shape(Shape::new(Vec2::new(1.0, 1.5)));

    for i in 0..tiles {
        let position = Vec2::new((i % 48) as f32 - 24.0, -12.0 + (i / 48) as f32);
        world.create_wall_entity(position, pattern, tile);
    }
    for controller in 0..MAX_PLAYERS {
        let position = Vec2::new(controller as f32 * 4.0 - 6.0, 0.0);
        world.create_player_entity(position, pattern, hero, controller, config);
    }
    world
}

fn bench_world_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_update");
    let config = SimulationConfig::default();
    let inputs = [
        ActionSnapshot::empty().with(Action::Right),
        ActionSnapshot::empty().with(Action::Left).with(Action::Jump),
        ActionSnapshot::empty().with(Action::Skill1).with(Action::Right),
        ActionSnapshot::empty().with(Action::Skill2),
    ];

    for tiles in [0, 128, 496] {
        group.bench_with_input(BenchmarkId::from_parameter(tiles), &tiles, |b, &tiles| {
            let mut world = setup_world(tiles, &config);
            let mut frame = 0usize;
            b.iter(|| {
                for (controller, input) in inputs.iter().enumerate() {
                    // Alternate with an empty snapshot so edges keep firing
                    let snapshot = if frame % 2 == 0 { *input } else { ActionSnapshot::empty() };
                    world.controllers.advance(controller, snapshot);
                }
                update_world(&mut world, &mut NoCollision, black_box(1.0 / 60.0));
                frame += 1;
            });
        });
    }

    group.finish();
}

fn bench_render_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_extraction");
    let config = SimulationConfig::default();
    let viewport = Viewport::new(config.viewport_size, config.world_size);

    for tiles in [16, 128, 496] {
        let world = setup_world(tiles, &config);
        group.throughput(Throughput::Elements(world.entity_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tiles), &world, |b, world| {
            b.iter(|| black_box(build_render_commands(world, &viewport)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_world_update, bench_render_extraction);
criterion_main!(benches);
