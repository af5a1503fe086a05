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
//! Controller and input abstraction
//!
//! Raw keyboard and gamepad polling happens outside the core. Once per tick,
//! before any entity update, the polling collaborator hands each controller
//! a snapshot of which logical actions are held via
//! [`Controllers::advance`]. Everything else only queries:
//!
//! - [`Controllers::is_action_pressed`]: level-sensitive
//! - [`Controllers::is_action_rising_edge`]: true only on the tick the action
//!   went from released to pressed
//!
//! Queries never mutate state, so asking twice in one tick gives the same
//! answer.

/// Maximum number of local players, and therefore controllers
pub const MAX_PLAYERS: usize = 4;

/// Logical actions a player can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move left
    Left,
    /// Move right
    Right,
    /// Jump, held for a full arc
    Jump,
    /// First active skill (dash)
    Skill1,
    /// Second active skill (mana recharge)
    Skill2,
}

impl Action {
    /// Number of actions
    pub const COUNT: usize = 5;

    /// All actions in index order
    pub const ALL: [Action; Action::COUNT] = [
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Skill1,
        Action::Skill2,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed state of one input plus whether it changed this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Currently held
    pub pressed: bool,
    /// `pressed` differs from the previous tick
    pub state_change: bool,
}

impl ButtonState {
    /// Record this tick's level and derive the change flag
    pub fn advance(&mut self, pressed: bool) {
        self.state_change = self.pressed != pressed;
        self.pressed = pressed;
    }

    /// Released on the previous tick, pressed on this one
    pub fn rising_edge(&self) -> bool {
        self.pressed && self.state_change
    }
}

/// Set of actions held during one tick, as produced by the polling layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSnapshot {
    bits: u8,
}

impl ActionSnapshot {
    /// Nothing held
    pub const fn empty() -> Self {
        ActionSnapshot { bits: 0 }
    }

    /// Builder-style: mark `action` as held
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    /// Set or clear `action`
    pub fn set(&mut self, action: Action, pressed: bool) {
        let mask = 1u8 << action.index();
        if pressed {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
    }

    /// Whether `action` is held
    pub fn contains(&self, action: Action) -> bool {
        self.bits & (1u8 << action.index()) != 0
    }
}

impl FromIterator<Action> for ActionSnapshot {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ActionSnapshot::empty(), |snapshot, action| snapshot.with(action))
    }
}

/// Per-controller action states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerState {
    buttons: [ButtonState; Action::COUNT],
}

impl ControllerState {
    /// State of a single action
    pub fn button(&self, action: Action) -> ButtonState {
        self.buttons[action.index()]
    }

    /// Level-sensitive query
    pub fn is_pressed(&self, action: Action) -> bool {
        self.button(action).pressed
    }

    /// Edge-triggered query
    pub fn is_rising_edge(&self, action: Action) -> bool {
        self.button(action).rising_edge()
    }

    /// Advance every action to the levels in `snapshot`
    pub fn advance(&mut self, snapshot: ActionSnapshot) {
        for action in Action::ALL {
            self.buttons[action.index()].advance(snapshot.contains(action));
        }
    }
}

/// Controller table owned by the world, keyed by controller id
#[derive(Debug, Clone, Default)]
pub struct Controllers {
    states: [ControllerState; MAX_PLAYERS],
}

impl Controllers {
    /// All controllers released
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow one controller's state
    ///
    /// # Panics
    ///
    /// Panics if `controller_id >= MAX_PLAYERS`.
    pub fn get(&self, controller_id: usize) -> &ControllerState {
        assert!(
            controller_id < MAX_PLAYERS,
            "Invalid controller id {}",
            controller_id
        );
        &self.states[controller_id]
    }

    /// Level-sensitive query for one controller
    pub fn is_action_pressed(&self, controller_id: usize, action: Action) -> bool {
        self.get(controller_id).is_pressed(action)
    }

    /// Rising-edge query for one controller
    pub fn is_action_rising_edge(&self, controller_id: usize, action: Action) -> bool {
        self.get(controller_id).is_rising_edge(action)
    }

    /// Advance one controller to this tick's snapshot
    ///
    /// Called by the polling collaborator exactly once per controller per
    /// tick, before the world update.
    ///
    /// # Panics
    ///
    /// Panics if `controller_id >= MAX_PLAYERS`.
    pub fn advance(&mut self, controller_id: usize, snapshot: ActionSnapshot) {
        assert!(
            controller_id < MAX_PLAYERS,
            "Invalid controller id {}",
            controller_id
        );
        self.states[controller_id].advance(snapshot);
    }
}

/// Keys that act on the whole game rather than on a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKey {
    /// Switch between simulation and editor (F1)
    ToggleMode,
    /// Toggle slow motion (T)
    SlowMotion,
}

/// Edge-tracked state of the global keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalKeys {
    toggle_mode: ButtonState,
    slow_motion: ButtonState,
}

impl GlobalKeys {
    /// All keys released
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, key: GlobalKey) -> &ButtonState {
        match key {
            GlobalKey::ToggleMode => &self.toggle_mode,
            GlobalKey::SlowMotion => &self.slow_motion,
        }
    }

    /// Record this tick's level for `key`
    pub fn advance(&mut self, key: GlobalKey, pressed: bool) {
        match key {
            GlobalKey::ToggleMode => self.toggle_mode.advance(pressed),
            GlobalKey::SlowMotion => self.slow_motion.advance(pressed),
        }
    }

    /// Whether `key` went down this tick
    pub fn is_rising_edge(&self, key: GlobalKey) -> bool {
        self.state(key).rising_edge()
    }
}
