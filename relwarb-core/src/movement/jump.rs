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
//! Jump arc and jump state machine
//!
//! The arc is designed, not simulated: a designer picks the peak height `h`
//! and the horizontal distance `d` covered at speed `s` to reach it, and the
//! launch velocity and gravity follow:
//!
//! ```text
//! v0 = 2 * h * s / d
//! g  = -2 * h * s² / d²
//! ```
//!
//! Releasing jump early enters a short quick-fall window where gravity is
//! multiplied, which gives short hops without a second tuning.

/// Jump held for less than this counts as a short hop
pub const MAX_JUMP_TIME: f32 = 0.25;

/// Length of the quick-fall window
pub const MAX_STOP_TIME: f32 = 0.05;

/// Jumps allowed before landing
pub const MAX_NB_JUMPS: u32 = 2;

/// Gravity multiplier inside the quick-fall window
pub const QUICK_FALL_MULTIPLIER: f32 = 5.0;

/// Launch velocity and gravity derived from the jump design values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPhysics {
    /// Vertical velocity set when a jump starts
    pub initial_velocity: f32,
    /// Constant vertical acceleration (negative)
    pub gravity: f32,
}

impl JumpPhysics {
    /// Derive the arc from peak height, horizontal speed and distance to peak
    ///
    /// # Panics
    ///
    /// Panics if any input is not positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use relwarb_core::movement::JumpPhysics;
    ///
    /// let jump = JumpPhysics::from_design(5.0, 40.0, 16.0);
    /// assert_eq!(jump.initial_velocity, 25.0);
    /// assert_eq!(jump.gravity, -62.5);
    /// ```
    pub fn from_design(height: f32, speed: f32, distance: f32) -> Self {
        for value in [height, speed, distance] {
            assert!(
                value > 0.0 && value.is_finite(),
                "Jump design values must be positive and finite"
            );
        }
        JumpPhysics {
            initial_velocity: 2.0 * height * speed / distance,
            gravity: -2.0 * height * speed * speed / (distance * distance),
        }
    }

    /// Seconds from launch to the top of the arc
    pub fn time_to_peak(&self) -> f32 {
        -self.initial_velocity / self.gravity
    }

    /// Height gained at the top of the arc
    pub fn peak_height(&self) -> f32 {
        -self.initial_velocity * self.initial_velocity / (2.0 * self.gravity)
    }

    /// Horizontal distance covered at `speed` before reaching the peak
    pub fn distance_to_peak(&self, speed: f32) -> f32 {
        speed * self.time_to_peak()
    }
}

/// Per-player jump state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpState {
    /// Airborne from a jump since the last landing
    pub already_jumping: bool,
    /// Jump was released since the last jump started
    pub new_jump: bool,
    /// Jumps started since the last landing
    pub nb_jumps: u32,
    /// Time jump has been held during the current jump
    pub jump_time: f32,
    /// Quick-fall window entered for the current jump
    pub quick_fall: bool,
    /// Time spent inside the quick-fall window
    pub quick_fall_time: f32,
}

impl JumpState {
    /// Whether a jump press would launch
    pub fn can_start(&self) -> bool {
        !self.already_jumping || (self.new_jump && self.nb_jumps < MAX_NB_JUMPS)
    }

    /// Launch a new jump
    pub fn start(&mut self) {
        self.already_jumping = true;
        self.new_jump = false;
        self.nb_jumps += 1;
        self.jump_time = 0.0;
        self.quick_fall = false;
        self.quick_fall_time = 0.0;
    }

    /// Jump is held but did not launch this tick
    pub fn hold(&mut self, dt: f32) {
        self.jump_time += dt;
    }

    /// Jump is not held; returns the gravity multiplier for this tick
    pub fn release(&mut self, dt: f32) -> f32 {
        self.new_jump = true;
        if !self.already_jumping {
            return 1.0;
        }

        if !self.quick_fall && self.jump_time < MAX_JUMP_TIME {
            self.quick_fall = true;
            self.quick_fall_time = 0.0;
        }

        if self.quick_fall && self.quick_fall_time < MAX_STOP_TIME {
            self.quick_fall_time += dt;
            QUICK_FALL_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Touched the ground
    pub fn landed(&mut self) {
        self.already_jumping = false;
        self.nb_jumps = 0;
        self.jump_time = 0.0;
        self.quick_fall = false;
        self.quick_fall_time = 0.0;
    }
}
