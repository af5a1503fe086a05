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
//! Math and geometry primitives
//!
//! The simulation works in single precision world units. Vector and matrix
//! arithmetic comes from `glam`; this module adds the handful of helpers the
//! game logic and the render transform builder need on top of it.

pub use glam::{Mat4, Vec2, Vec4};

/// Returns true when `a` and `b` are both non-zero and have opposite signs
///
/// Zero is treated as having no sign, so `opposite_sign(0.0, x)` is always
/// false. The orientation flip relies on this: standing still never turns a
/// player around.
///
/// # Examples
///
/// ```
/// use relwarb_core::math::opposite_sign;
///
/// assert!(opposite_sign(-0.5, 1.0));
/// assert!(!opposite_sign(0.0, -1.0));
/// assert!(!opposite_sign(2.0, 1.0));
/// ```
#[inline]
pub fn opposite_sign(a: f32, b: f32) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Orthographic projection
///
/// Maps `[left, right] x [bottom, top]` onto the `[-1, 1]` clip square with
/// depth left untouched: `left`/`bottom` go to -1, `right`/`top` to +1.
/// Column-major, matching `glam`.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            0.0,
            1.0,
        ),
    )
}

/// Axis-aligned scale matrix that maps world units onto viewport pixels
///
/// `viewport_size` and `world_size` are full extents; the matrix scales
/// half-extents onto half-extents so the origin stays centered.
pub fn world_to_viewport_scale(viewport_size: Vec2, world_size: Vec2) -> Mat4 {
    let half_ratio = (viewport_size * 0.5) / (world_size * 0.5);
    Mat4::from_scale(glam::Vec3::new(half_ratio.x, half_ratio.y, 1.0))
}
