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
//! Restoring skills
//!
//! Health and mana are whole points while rates are fractional, so both
//! skills accumulate `rate * dt` and only hand out whole points.

use super::SkillContext;

/// Fractional restore accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accumulator {
    pending: f32,
}

impl Accumulator {
    /// Add `amount` and take out the whole part
    fn step(&mut self, amount: f32) -> u32 {
        self.pending += amount;
        let whole = self.pending.floor();
        self.pending -= whole;
        whole as u32
    }

    fn reset(&mut self) {
        self.pending = 0.0;
    }
}

/// Channelled mana restoration, toggled by the second skill key
#[derive(Debug, Clone, PartialEq)]
pub struct ManaRecharge {
    rate: f32,
    active: bool,
    accumulator: Accumulator,
}

impl ManaRecharge {
    /// Recharge restoring `mana_per_second`
    pub fn new(mana_per_second: f32) -> Self {
        ManaRecharge {
            rate: mana_per_second,
            active: false,
            accumulator: Accumulator::default(),
        }
    }

    /// Mana restored per second
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whether the player is channelling
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn trigger(&mut self, ctx: &mut SkillContext<'_>) -> bool {
        if self.active {
            self.stop();
            log::debug!("{} stops recharging mana", ctx.owner);
            return true;
        }
        if ctx.vitals.mana_full() {
            return false;
        }
        self.active = true;
        log::debug!("{} starts recharging mana", ctx.owner);
        true
    }

    pub(super) fn apply(&mut self, ctx: &mut SkillContext<'_>, dt: f32) {
        if !self.active {
            return;
        }
        let restored = self.accumulator.step(self.rate * dt);
        ctx.vitals.restore_mana(restored);
        if ctx.vitals.mana_full() {
            self.stop();
        }
    }

    fn stop(&mut self) {
        self.active = false;
        self.accumulator.reset();
    }
}

/// Health regeneration that runs whenever health is below its cap
#[derive(Debug, Clone, PartialEq)]
pub struct PassiveRegeneration {
    rate: f32,
    active: bool,
    accumulator: Accumulator,
}

impl PassiveRegeneration {
    /// Regeneration restoring `health_per_second`
    pub fn new(health_per_second: f32) -> Self {
        PassiveRegeneration {
            rate: health_per_second,
            active: false,
            accumulator: Accumulator::default(),
        }
    }

    /// Health restored per second
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whether health is being restored
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn trigger(&mut self, ctx: &mut SkillContext<'_>) -> bool {
        self.active = !ctx.vitals.health_full();
        if !self.active {
            self.accumulator.reset();
        }
        self.active
    }

    pub(super) fn apply(&mut self, ctx: &mut SkillContext<'_>, dt: f32) {
        if !self.active {
            return;
        }
        let restored = self.accumulator.step(self.rate * dt);
        ctx.vitals.restore_health(restored);
        if ctx.vitals.health_full() {
            self.active = false;
            self.accumulator.reset();
        }
    }
}
