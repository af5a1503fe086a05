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
//! Game mode machine
//!
//! [`Game`] owns the world and decides, once per frame, whether the
//! simulation or the level editor runs. Exactly one of them does.
//!
//! # Frame protocol
//!
//! 1. The polling layer advances every controller
//!    (`game.world_mut().controllers.advance(..)`) and the global keys
//!    ([`Game::advance_global_key`]).
//! 2. [`Game::update`] handles mode and slow-motion toggles, then runs the
//!    simulation systems or the editor.
//! 3. [`Game::render`] hands render commands to the graphics backend.

use crate::assets::BitmapLoader;
use crate::collision::Collider;
use crate::config::SimulationConfig;
use crate::ecs::{SystemExecutor, World};
use crate::frame::EntityUpdateSystem;
use crate::input::{GlobalKey, GlobalKeys};
use crate::integration::validate_timestep;
use crate::render::{render_world, Renderer, Viewport};
use crate::scene::{setup_default_scene, DefaultScene};

/// Which half of the program runs this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameMode {
    /// Simulation
    #[default]
    Game,
    /// Level editor
    Editor,
}

impl GameMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Game => GameMode::Editor,
            GameMode::Editor => GameMode::Game,
        }
    }
}

/// Level editor, driven while the game is in editor mode
pub trait Editor {
    /// Run one editor frame
    fn update(&mut self, world: &mut World, dt: f32);
}

/// Editor that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEditor;

impl Editor for NoEditor {
    fn update(&mut self, _world: &mut World, _dt: f32) {}
}

/// Level file parser
///
/// Map files address shapes and patterns by table index, so loading must
/// happen on an empty world.
pub trait MapLoader {
    /// Create the map's content in `world`
    fn load_map(&mut self, world: &mut World);
}

/// Top-level game state
pub struct Game {
    world: World,
    mode: GameMode,
    keys: GlobalKeys,
    slow_motion: bool,
    config: SimulationConfig,
    viewport: Viewport,
    executor: SystemExecutor,
}

impl Game {
    /// Game with an empty world and no collision
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_system(config, EntityUpdateSystem::default())
    }

    /// Game whose entity update queries `collider`
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SimulationConfig::validate`].
    pub fn with_collider<C: Collider + 'static>(config: SimulationConfig, collider: C) -> Self {
        Self::with_system(config, EntityUpdateSystem::new(collider))
    }

    fn with_system(config: SimulationConfig, system: EntityUpdateSystem) -> Self {
        if let Err(err) = config.validate() {
            panic!("Invalid simulation config: {}", err);
        }
        let mut executor = SystemExecutor::new();
        executor.add_system(system);
        Game {
            world: World::new(),
            mode: GameMode::Game,
            keys: GlobalKeys::new(),
            slow_motion: false,
            viewport: Viewport::new(config.viewport_size, config.world_size),
            config,
            executor,
        }
    }

    /// Load the map, then the default scene
    ///
    /// # Panics
    ///
    /// Panics if anything was created in the world before.
    pub fn setup(
        &mut self,
        map: &mut dyn MapLoader,
        assets: &mut dyn BitmapLoader,
    ) -> DefaultScene {
        assert!(
            self.world.is_empty(),
            "Map must be loaded before any other content"
        );
        map.load_map(&mut self.world);
        log::info!("Map loaded: {} entities", self.world.entity_count());
        setup_default_scene(&mut self.world, assets, &self.config)
    }

    /// The world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world, for the polling layer and tools
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Current mode
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Whether slow motion is on
    pub fn is_slow_motion(&self) -> bool {
        self.slow_motion
    }

    /// Tuning in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Window mapping
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Record this frame's state of a global key
    pub fn advance_global_key(&mut self, key: GlobalKey, pressed: bool) {
        self.keys.advance(key, pressed);
    }

    /// Run one frame of `dt` seconds
    ///
    /// # Panics
    ///
    /// Panics if `dt` is negative or not finite.
    pub fn update(&mut self, dt: f32, editor: &mut dyn Editor) {
        assert!(
            dt.is_finite() && dt >= 0.0,
            "Timestep must be finite and non-negative"
        );
        if let Err(err) = validate_timestep(dt) {
            log::warn!("{}", err);
        }

        if self.keys.is_rising_edge(GlobalKey::ToggleMode) {
            self.mode = self.mode.toggled();
            log::info!("Switched to {:?} mode", self.mode);
        }
        if self.keys.is_rising_edge(GlobalKey::SlowMotion) {
            self.slow_motion = !self.slow_motion;
            log::info!("Slow motion {}", if self.slow_motion { "on" } else { "off" });
        }

        let dt = if self.slow_motion {
            dt * self.config.slow_motion_factor
        } else {
            dt
        };

        match self.mode {
            GameMode::Game => self.executor.run_sequential(&mut self.world, dt),
            GameMode::Editor => editor.update(&mut self.world, dt),
        }
    }

    /// Draw the world in game mode; returns the number of draw calls
    ///
    /// The editor draws itself, so nothing is emitted in editor mode.
    pub fn render(&self, renderer: &mut dyn Renderer) -> usize {
        match self.mode {
            GameMode::Game => render_world(&self.world, &self.viewport, renderer),
            GameMode::Editor => 0,
        }
    }
}
