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
//! Dash skill
//!
//! A dash moves its owner a fixed horizontal distance over a fixed duration,
//! independent of run speed, and cancels vertical velocity while it lasts.
//!
//! The last tick of a dash usually overshoots `duration`. Only the part of
//! that tick that falls inside the dash is applied, so the total distance is
//! the same whatever the frame timing.

use super::SkillContext;
use crate::config::DashConfig;
use crate::ecs::components::Shape;
use crate::input::Action;

/// Dash state and tuning
#[derive(Debug, Clone, PartialEq)]
pub struct Dash {
    mana_cost: u32,
    duration: f32,
    horizontal_distance: f32,
    active: bool,
    elapsed: f32,
    direction: f32,
}

impl Dash {
    /// Dash sized from the owner's shape
    ///
    /// The distance is `shape.size.y * distance_factor`.
    ///
    /// # Panics
    ///
    /// Panics if `config.duration` is not positive and finite.
    pub fn new(config: &DashConfig, shape: &Shape) -> Self {
        assert!(
            config.duration > 0.0 && config.duration.is_finite(),
            "Dash duration must be positive and finite"
        );
        Dash {
            mana_cost: config.mana_cost,
            duration: config.duration,
            horizontal_distance: shape.size.y * config.distance_factor,
            active: false,
            elapsed: 0.0,
            direction: 1.0,
        }
    }

    /// Mana consumed per dash
    pub fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    /// Dash duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Distance covered by a full dash
    pub fn horizontal_distance(&self) -> f32 {
        self.horizontal_distance
    }

    /// Time spent in the current (or last) dash
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// `-1.0` for left, `1.0` for right
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Whether a dash is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn trigger(&mut self, ctx: &mut SkillContext<'_>) -> bool {
        if self.active {
            return false;
        }

        let left = ctx.controller.is_pressed(Action::Left);
        let right = ctx.controller.is_pressed(Action::Right);
        if !left && !right {
            return false;
        }

        if !ctx.vitals.spend_mana(self.mana_cost) {
            return false;
        }

        self.direction = if left { -1.0 } else { 1.0 };
        self.active = true;
        self.elapsed = 0.0;
        log::debug!(
            "{} dashes {} ({} mana left)",
            ctx.owner,
            if left { "left" } else { "right" },
            ctx.vitals.mana
        );
        true
    }

    pub(super) fn apply(&mut self, ctx: &mut SkillContext<'_>, dt: f32) {
        if !self.active {
            return;
        }

        let mut step = dt;
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.active = false;
            step -= self.elapsed - self.duration;
            self.elapsed = self.duration;
            log::debug!("{} dash finished", ctx.owner);
        }

        ctx.body.position.x += self.direction * (step / self.duration) * self.horizontal_distance;
        ctx.body.velocity.y = 0.0;
    }
}
