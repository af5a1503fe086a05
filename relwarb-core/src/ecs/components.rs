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
//! Component data
//!
//! Plain data attached to entities. Shapes, rendering patterns and physics
//! bodies live in tables owned by the [`World`](crate::ecs::World) and are
//! referenced by small integer handles, so several entities can share one
//! silhouette without any aliasing of owned data.

use crate::config::PlayerConfig;
use crate::math::Vec2;
use crate::movement::{JumpPhysics, JumpState};
use std::ops::{BitOr, BitOrAssign};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw table index
            pub fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the owning table
            pub fn index(&self) -> usize {
                self.0 as usize
            }
        }
    };
}

handle!(
    /// Handle into the world's shape table
    ShapeId
);
handle!(
    /// Handle into the world's rendering pattern table
    PatternId
);
handle!(
    /// Handle into the world's physics body table
    PhysicsId
);
handle!(
    /// Handle into the world's bitmap table
    BitmapId
);

/// Position, velocity and acceleration of an entity
///
/// `acceleration` holds the value used by the last integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    /// World-space position
    pub position: Vec2,
    /// Velocity in world units per second
    pub velocity: Vec2,
    /// Acceleration in world units per second squared
    pub acceleration: Vec2,
}

impl Kinematics {
    /// Create kinematic state from its three vectors
    pub fn new(position: Vec2, velocity: Vec2, acceleration: Vec2) -> Self {
        Kinematics {
            position,
            velocity,
            acceleration,
        }
    }

    /// Check that every component is finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}

/// Axis-aligned rectangle extent with an offset from the entity position
///
/// Used both as the render scale and as the collision extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Full width and height
    pub size: Vec2,
    /// Offset of the rectangle center from the entity position
    pub offset: Vec2,
}

impl Shape {
    /// Shape centered on the entity position
    pub fn new(size: Vec2) -> Self {
        Shape {
            size,
            offset: Vec2::ZERO,
        }
    }

    /// Shape displaced from the entity position
    pub fn with_offset(size: Vec2, offset: Vec2) -> Self {
        Shape { size, offset }
    }

    /// Half of `size`
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Frames an entity is drawn with
///
/// A single-frame pattern is a still image; more frames cycle every
/// `frame_time` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderingPattern {
    frames: Vec<BitmapId>,
    frame_time: f32,
}

impl RenderingPattern {
    /// Animated pattern cycling through `frames`
    ///
    /// # Panics
    ///
    /// Panics if `frames` is empty or `frame_time` is not positive.
    pub fn animated(frames: Vec<BitmapId>, frame_time: f32) -> Self {
        assert!(!frames.is_empty(), "Rendering pattern needs at least one frame");
        assert!(
            frame_time > 0.0 && frame_time.is_finite(),
            "Frame time must be positive and finite"
        );
        RenderingPattern { frames, frame_time }
    }

    /// Still pattern showing a single bitmap
    pub fn still(bitmap: BitmapId) -> Self {
        RenderingPattern {
            frames: vec![bitmap],
            frame_time: f32::INFINITY,
        }
    }

    /// Frames in display order
    pub fn frames(&self) -> &[BitmapId] {
        &self.frames
    }

    /// Bitmap to display at `time` seconds
    pub fn frame_at(&self, time: f32) -> BitmapId {
        if self.frames.len() == 1 {
            return self.frames[0];
        }
        let step = (time.max(0.0) / self.frame_time) as usize;
        self.frames[step % self.frames.len()]
    }
}

/// How a physics body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Never moves
    Static,
    /// Moved by game logic, pushes but is not pushed
    Kinematic,
    /// Moved by contact resolution
    Dynamic,
}

/// Physics setup data for a dynamic entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    /// Body behavior
    pub body_type: RigidBodyType,
    /// Collision half extents
    pub extents: Vec2,
}

macro_rules! flags {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $flag:ident = $bit:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name(u8);

        impl $name {
            $(
                $(#[$fmeta])*
                pub const $flag: $name = $name(1 << $bit);
            )+

            /// No flag set
            pub const fn empty() -> Self {
                $name(0)
            }

            /// Raw bits
            pub const fn bits(&self) -> u8 {
                self.0
            }

            /// All flags in `other` are set
            pub const fn contains(&self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }

            /// At least one flag in `other` is set
            pub const fn intersects(&self, other: $name) -> bool {
                self.0 & other.0 != 0
            }

            /// Set the flags in `other`
            pub fn insert(&mut self, other: $name) {
                self.0 |= other.0;
            }

            /// Clear the flags in `other`
            pub fn remove(&mut self, other: $name) {
                self.0 &= !other.0;
            }
        }

        impl BitOr for $name {
            type Output = $name;

            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }
    };
}

flags!(
    /// Capabilities attached to an entity
    ComponentFlags {
        /// Has a rendering pattern
        RENDERABLE = 0,
        /// Has a shape
        COLLIDABLE = 1,
        /// Facing direction matters for rendering
        ORIENTABLE = 2,
        /// Has a physics body
        DYNAMIC = 3,
    }
);

flags!(
    /// Crowd-control effects on a player
    StatusFlags {
        /// Cannot trigger skills
        MUTED = 0,
        /// Cannot trigger skills nor move
        STUNNED = 1,
        /// Cannot move
        ROOTED = 2,
    }
);

/// Health and mana pools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    /// Current health
    pub health: u32,
    /// Health cap
    pub max_health: u32,
    /// Current mana
    pub mana: u32,
    /// Mana cap
    pub max_mana: u32,
}

impl Vitals {
    /// Pools from the player config, current values clamped to their caps
    pub fn from_config(config: &PlayerConfig) -> Self {
        Vitals {
            health: config.health.min(config.max_health),
            max_health: config.max_health,
            mana: config.mana.min(config.max_mana),
            max_mana: config.max_mana,
        }
    }

    /// Spend `cost` mana if enough is available
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana >= cost {
            self.mana -= cost;
            true
        } else {
            false
        }
    }

    /// Add up to `amount` mana without passing `max_mana`
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Add up to `amount` health without passing `max_health`
    pub fn restore_health(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Mana is at its cap
    pub fn mana_full(&self) -> bool {
        self.mana >= self.max_mana
    }

    /// Health is at its cap
    pub fn health_full(&self) -> bool {
        self.health >= self.max_health
    }
}

/// State only player entities carry
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Health and mana
    pub vitals: Vitals,
    /// Horizontal speed applied while a direction is held
    pub run_speed: f32,
    /// Jump velocity and gravity derived from the design parameters
    pub jump_physics: JumpPhysics,
    /// Jump and quick-fall state machine
    pub jump: JumpState,
    /// Active crowd-control effects
    pub status: StatusFlags,
    /// Controller driving this player
    pub controller_id: usize,
    /// Facing direction, `1.0` right or `-1.0` left
    pub orientation: f32,
    /// Portrait shown by the HUD
    pub avatar: Option<BitmapId>,
}

impl PlayerState {
    /// Fresh player state from the tuning config
    pub fn new(config: &PlayerConfig, controller_id: usize) -> Self {
        PlayerState {
            vitals: Vitals::from_config(config),
            run_speed: config.run_speed,
            jump_physics: JumpPhysics::from_design(
                config.jump_height,
                config.speed,
                config.jump_distance,
            ),
            jump: JumpState::default(),
            status: StatusFlags::empty(),
            controller_id,
            orientation: 1.0,
            avatar: None,
        }
    }
}
