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
//! Numerical integration of entity motion
//!
//! Player motion uses a single integrator: semi-implicit Euler with the
//! constant-acceleration position term,
//!
//! ```text
//! p(t + dt) = p(t) + v(t)*dt + 0.5*a*dt²
//! v(t + dt) = v(t) + a*dt
//! ```
//!
//! Acceleration is piecewise constant over a tick (gravity, possibly scaled
//! by the quick-fall multiplier), so the position update is exact for the
//! tick and jump arcs do not drift with the frame rate.
//!
//! # Timestep Guidelines
//!
//! The game runs at the display refresh rate. Steps above
//! [`MAX_STABLE_TIMESTEP`] usually mean a hitch (window drag, debugger) and
//! let fast entities tunnel through thin geometry.

use crate::ecs::components::Kinematics;
use crate::error::SimError;
use crate::math::Vec2;

/// Largest timestep that is not reported as suspicious
pub const MAX_STABLE_TIMESTEP: f32 = 0.1;

/// Trait for numerical integration methods
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance `body` by `dt` seconds under constant `acceleration`
    ///
    /// The acceleration used is stored in `body.acceleration`.
    fn integrate(&self, body: &mut Kinematics, acceleration: Vec2, dt: f32);
}

/// Semi-implicit Euler with the exact constant-acceleration position term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn integrate(&self, body: &mut Kinematics, acceleration: Vec2, dt: f32) {
        body.position += dt * body.velocity + 0.5 * dt * dt * acceleration;
        body.velocity += dt * acceleration;
        body.acceleration = acceleration;
    }
}

/// Check a frame timestep
///
/// Returns an error for non-finite, negative, or larger than
/// [`MAX_STABLE_TIMESTEP`] steps. A zero step is valid and leaves every
/// entity in place.
pub fn validate_timestep(dt: f32) -> Result<(), SimError> {
    if !dt.is_finite() || dt < 0.0 || dt > MAX_STABLE_TIMESTEP {
        return Err(SimError::SuspiciousTimestep(dt));
    }
    Ok(())
}
