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
//! Default two-player scene

use crate::assets::BitmapLoader;
use crate::config::SimulationConfig;
use crate::ecs::components::{BitmapId, RenderingPattern, Shape};
use crate::ecs::{EntityId, World};
use crate::math::Vec2;

/// Size of the hero silhouette shared by both players
pub const HERO_SIZE: Vec2 = Vec2::new(1.0, 1.5);

/// Seconds per frame of the idle animation
pub const IDLE_FRAME_TIME: f32 = 0.5;

const PLAYER_SPAWNS: [(Vec2, usize, [&str; 2]); 2] = [
    (
        Vec2::new(-2.0, -2.0),
        0,
        ["assets/p1_stand.png", "assets/p1_stand2.png"],
    ),
    (
        Vec2::new(2.0, -2.0),
        1,
        ["assets/p2_stand.png", "assets/p2_stand2.png"],
    ),
];

/// Border tiles used by the level editor, in palette order
pub const TILE_BITMAPS: [&str; 9] = [
    "assets/corner_topleft.png",
    "assets/horizontal_up.png",
    "assets/corner_topright.png",
    "assets/vertical_left.png",
    "assets/vertical_right.png",
    "assets/corner_bottomleft.png",
    "assets/horizontal_down.png",
    "assets/corner_bottomright.png",
    "assets/horizontal_up.png",
];

/// Handles created by [`setup_default_scene`]
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultScene {
    /// Player entities, in player order
    pub players: Vec<EntityId>,
    /// Editor tile palette
    pub tiles: Vec<BitmapId>,
}

/// Populate the world with two players and the tile palette
///
/// Must run after the map, since map files address content by index.
pub fn setup_default_scene(
    world: &mut World,
    loader: &mut dyn BitmapLoader,
    config: &SimulationConfig,
) -> DefaultScene {
    let hero_shape = world.create_shape(Shape::new(HERO_SIZE));

    let mut players = Vec::with_capacity(PLAYER_SPAWNS.len());
    for (position, controller_id, frames) in PLAYER_SPAWNS {
        let frames = frames
            .iter()
            .map(|path| world.load_bitmap(loader, path))
            .collect();
        let pattern =
            world.create_rendering_pattern(RenderingPattern::animated(frames, IDLE_FRAME_TIME));
        let id = world.create_player_entity(position, pattern, hero_shape, controller_id, config);
        let number = world.player_count();
        load_player_avatar(world, loader, number);
        players.push(id);
    }

    let tiles = TILE_BITMAPS
        .iter()
        .map(|path| world.load_bitmap(loader, path))
        .collect();

    log::info!(
        "Default scene ready: {} players, {} entities",
        players.len(),
        world.entity_count()
    );
    DefaultScene { players, tiles }
}

/// Avatar image for the `number`-th player (1-based), if one ships
pub fn avatar_path(number: usize) -> Option<&'static str> {
    match number {
        1 => Some("assets/sprites/p1_avatar.png"),
        2 => Some("assets/sprites/p2_avatar.png"),
        _ => None,
    }
}

/// Load and attach the avatar of the `number`-th player (1-based)
///
/// Players 3 and 4 have no avatar art yet. Any other number is logged as an
/// error and leaves the player without an avatar.
pub fn load_player_avatar(world: &mut World, loader: &mut dyn BitmapLoader, number: usize) {
    if number == 0 || number > world.player_count() {
        log::error!("Invalid number of players: {}", number);
        return;
    }
    let Some(path) = avatar_path(number) else {
        return;
    };

    let avatar = world.load_bitmap(loader, path);
    let id = world.players()[number - 1];
    if let Some(player) = world.entity_mut(id).player.as_mut() {
        player.avatar = Some(avatar);
    }
}
