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
//! Designer-facing tuning
//!
//! Every magic number the game ships with lives in [`SimulationConfig`].
//! `Default` carries the shipped values so code and tests never need a file;
//! a RON document can override any subset of them.
//!
//! # Example
//!
//! ```
//! use relwarb_core::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_ron_str(r#"(
//!     version: "0.3.0",
//!     player: (jump_height: 6.0),
//! )"#).unwrap();
//!
//! assert_eq!(config.player.jump_height, 6.0);
//! assert_eq!(config.player.speed, 40.0);
//! ```

use crate::error::SimError;
use glam::Vec2;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Config format version understood by this build
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning.
pub const CONFIG_FORMAT_VERSION: &str = "0.3.0";

/// Player vitals and movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Health a player can hold
    pub max_health: u32,
    /// Health at spawn
    pub health: u32,
    /// Mana a player can hold
    pub max_mana: u32,
    /// Mana at spawn
    pub mana: u32,
    /// Horizontal speed used to derive the jump arc
    pub speed: f32,
    /// Peak height of a full jump
    pub jump_height: f32,
    /// Horizontal distance covered by a full jump at `speed`
    pub jump_distance: f32,
    /// Horizontal velocity applied while left or right is held
    pub run_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            max_health: 10,
            health: 1,
            max_mana: 5,
            mana: 5,
            speed: 40.0,
            jump_height: 5.0,
            jump_distance: 16.0,
            run_speed: 15.0,
        }
    }
}

/// Dash skill tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Mana consumed when the dash fires
    pub mana_cost: u32,
    /// Time the dash takes to cover its distance, in seconds
    pub duration: f32,
    /// Dash distance as a multiple of the owner's shape height
    pub distance_factor: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        DashConfig {
            mana_cost: 1,
            duration: 0.25,
            distance_factor: 4.0,
        }
    }
}

/// Rates for the restoring skills, in points per second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegenConfig {
    /// Mana restored per second while channelling a recharge
    pub mana_per_second: f32,
    /// Health restored per second by passive regeneration
    pub health_per_second: f32,
}

impl Default for RegenConfig {
    fn default() -> Self {
        RegenConfig {
            mana_per_second: 2.0,
            health_per_second: 0.2,
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Format version of the document
    pub version: String,
    /// Visible world extent in world units
    pub world_size: Vec2,
    /// Window size in pixels
    pub viewport_size: Vec2,
    /// dt multiplier while slow motion is toggled on
    pub slow_motion_factor: f32,
    /// Player tuning
    pub player: PlayerConfig,
    /// Dash tuning
    pub dash: DashConfig,
    /// Regeneration tuning
    pub regen: RegenConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            version: CONFIG_FORMAT_VERSION.to_string(),
            world_size: Vec2::new(48.0, 24.0),
            viewport_size: Vec2::new(960.0, 480.0),
            slow_motion_factor: 0.1,
            player: PlayerConfig::default(),
            dash: DashConfig::default(),
            regen: RegenConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parse a RON document, check its version and validate the values
    pub fn from_ron_str(source: &str) -> Result<Self, SimError> {
        let config: SimulationConfig = ron::from_str(source)?;
        check_version(&config.version)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the simulation divides by or integrates with
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("player.speed", self.player.speed),
            ("player.jump_height", self.player.jump_height),
            ("player.jump_distance", self.player.jump_distance),
            ("dash.duration", self.dash.duration),
            ("world_size.x", self.world_size.x),
            ("world_size.y", self.world_size.y),
            ("viewport_size.x", self.viewport_size.x),
            ("viewport_size.y", self.viewport_size.y),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SimError::InvalidTuning { field, value });
            }
        }

        let non_negative = [
            ("player.run_speed", self.player.run_speed),
            ("dash.distance_factor", self.dash.distance_factor),
            ("regen.mana_per_second", self.regen.mana_per_second),
            ("regen.health_per_second", self.regen.health_per_second),
            ("slow_motion_factor", self.slow_motion_factor),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SimError::InvalidTuning { field, value });
            }
        }

        Ok(())
    }
}

fn check_version(version: &str) -> Result<(), SimError> {
    let found = Version::parse(version).map_err(|source| SimError::InvalidVersion {
        version: version.to_string(),
        source,
    })?;
    let supported = Version::parse(CONFIG_FORMAT_VERSION)
        .expect("CONFIG_FORMAT_VERSION is a valid semantic version");

    if is_version_compatible(&found, &supported) {
        Ok(())
    } else {
        Err(SimError::IncompatibleVersion {
            found: version.to_string(),
            supported: CONFIG_FORMAT_VERSION,
        })
    }
}

/// Major must match; for 0.x the minor is breaking, otherwise the file may
/// not be newer than the build.
fn is_version_compatible(found: &Version, supported: &Version) -> bool {
    if found.major != supported.major {
        return false;
    }
    if found.major != 0 {
        found.minor <= supported.minor
    } else {
        found.minor == supported.minor
    }
}
