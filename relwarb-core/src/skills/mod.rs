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
//! Active and passive skills
//!
//! Every player carries [`NB_SKILLS`] slots. A slot holds one [`Skill`]
//! variant with its own tuning and live timing state. The movement update
//! drives three hooks on each slot:
//!
//! - `trigger`: an input (or, for passives, every tick) asks the skill to
//!   start. The skill decides whether it can.
//! - `apply`: runs every tick after integration and advances whatever the
//!   skill is doing.
//! - `collide`: reserved for contact reactions; no current skill reacts.
//!
//! [`Skill::Empty`] marks an unused slot. Every hook is a no-op on it.

mod dash;
mod regen;

pub use dash::Dash;
pub use regen::{ManaRecharge, PassiveRegeneration};

use crate::ecs::components::{Kinematics, Vitals};
use crate::ecs::EntityId;
use crate::input::ControllerState;

/// Number of skill slots per entity
pub const NB_SKILLS: usize = 3;

/// Everything a skill may read or change on its owner
pub struct SkillContext<'a> {
    /// Owner of the skill
    pub owner: EntityId,
    /// Owner's kinematic state
    pub body: &'a mut Kinematics,
    /// Owner's health and mana
    pub vitals: &'a mut Vitals,
    /// Owner's controller for this tick
    pub controller: &'a ControllerState,
}

/// One skill slot
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Skill {
    /// Unused slot
    #[default]
    Empty,
    /// Short horizontal burst
    Dash(Dash),
    /// Channelled mana restoration
    ManaRecharge(ManaRecharge),
    /// Always-on health restoration
    PassiveRegeneration(PassiveRegeneration),
}

impl Skill {
    /// Ask the skill to start; returns whether it did
    pub fn trigger(&mut self, ctx: &mut SkillContext<'_>) -> bool {
        match self {
            Skill::Empty => false,
            Skill::Dash(dash) => dash.trigger(ctx),
            Skill::ManaRecharge(recharge) => recharge.trigger(ctx),
            Skill::PassiveRegeneration(regen) => regen.trigger(ctx),
        }
    }

    /// Advance the skill by `dt` seconds
    pub fn apply(&mut self, ctx: &mut SkillContext<'_>, dt: f32) {
        match self {
            Skill::Empty => {}
            Skill::Dash(dash) => dash.apply(ctx, dt),
            Skill::ManaRecharge(recharge) => recharge.apply(ctx, dt),
            Skill::PassiveRegeneration(regen) => regen.apply(ctx, dt),
        }
    }

    /// React to touching `other`; returns whether the contact was consumed
    pub fn collide(&mut self, _ctx: &mut SkillContext<'_>, _other: EntityId) -> bool {
        false
    }

    /// Whether the skill is currently running
    pub fn is_active(&self) -> bool {
        match self {
            Skill::Empty => false,
            Skill::Dash(dash) => dash.is_active(),
            Skill::ManaRecharge(recharge) => recharge.is_active(),
            Skill::PassiveRegeneration(regen) => regen.is_active(),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Skill::Empty => "empty",
            Skill::Dash(_) => "dash",
            Skill::ManaRecharge(_) => "mana_recharge",
            Skill::PassiveRegeneration(_) => "passive_regeneration",
        }
    }
}
