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
//! Render transform extraction
//!
//! The core never talks to the GPU. Each frame it turns renderable entities
//! into [`RenderCommand`]s and hands them to a [`Renderer`] implementation,
//! which owns textures and shaders.
//!
//! Extraction is read-only over the world. With the `parallel` feature it
//! runs on the Rayon pool; commands come out in entity order either way.

use crate::assets::Bitmap;
use crate::ecs::components::{ComponentFlags, PatternId, RenderingPattern};
use crate::ecs::{Entity, EntityId, EntityKind, World};
use crate::math::{ortho, world_to_viewport_scale, Mat4, Vec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Placement of one quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub position: Vec2,
    /// Quad scale; negative x mirrors the image
    pub scale: Vec2,
    /// Offset from `position`
    pub offset: Vec2,
    /// Projection matrix
    pub proj: Mat4,
    /// World-to-viewport matrix
    pub world: Mat4,
}

/// Window size and the world extent shown in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: Vec2,
    world_size: Vec2,
    proj: Mat4,
    world: Mat4,
}

impl Viewport {
    /// Viewport of `size` pixels showing `world_size` units centered on the origin
    ///
    /// # Panics
    ///
    /// Panics if either size has a non-positive component.
    pub fn new(size: Vec2, world_size: Vec2) -> Self {
        assert!(
            size.cmpgt(Vec2::ZERO).all() && world_size.cmpgt(Vec2::ZERO).all(),
            "Viewport and world sizes must be positive"
        );
        let half = size * 0.5;
        Viewport {
            size,
            world_size,
            proj: ortho(-half.x, half.x, -half.y, half.y),
            world: world_to_viewport_scale(size, world_size),
        }
    }

    /// Window size in pixels
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Visible world extent
    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Orthographic projection over the window
    pub fn proj(&self) -> Mat4 {
        self.proj
    }

    /// World units to pixels
    pub fn world(&self) -> Mat4 {
        self.world
    }

    /// Map a window point (origin top-left, y down) to world coordinates
    pub fn viewport_to_world(&self, point: Vec2) -> Vec2 {
        let mut normalized = point / self.size;
        normalized.y = 1.0 - normalized.y;
        (normalized - Vec2::splat(0.5)) * self.world_size
    }

    /// Transform with this viewport's matrices
    pub fn transform(&self, position: Vec2, scale: Vec2, offset: Vec2) -> Transform {
        Transform {
            position,
            scale,
            offset,
            proj: self.proj,
            world: self.world,
        }
    }
}

/// Draw call for one renderable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    /// Entity drawn
    pub entity: EntityId,
    /// Pattern to draw
    pub pattern: PatternId,
    /// Placement
    pub transform: Transform,
    /// Drawing size
    pub size: Vec2,
}

/// Graphics backend
pub trait Renderer {
    /// Draw a rendering pattern
    fn render_pattern(&mut self, pattern: &RenderingPattern, transform: &Transform, size: Vec2);

    /// Draw a single bitmap
    fn render_bitmap(&mut self, bitmap: &Bitmap, transform: &Transform);
}

/// Render command for `entity`, if it is renderable
pub fn render_command(world: &World, viewport: &Viewport, entity: &Entity) -> Option<RenderCommand> {
    if !entity.has_component(ComponentFlags::RENDERABLE) {
        return None;
    }
    let pattern = entity.pattern()?;

    let (mut scale, offset) = match entity.shape() {
        Some(shape) if entity.has_component(ComponentFlags::COLLIDABLE) => {
            let shape = world.shape(shape);
            (shape.size, shape.offset)
        }
        _ => (Vec2::ONE, Vec2::ZERO),
    };
    let size = scale;

    if entity.kind() == EntityKind::Player && entity.orientation() < 0.0 {
        scale.x = -scale.x;
    }

    Some(RenderCommand {
        entity: entity.id(),
        pattern,
        transform: viewport.transform(entity.kinematics.position, scale, offset),
        size,
    })
}

/// Render commands for every renderable entity, in entity order
pub fn build_render_commands(world: &World, viewport: &Viewport) -> Vec<RenderCommand> {
    #[cfg(feature = "parallel")]
    {
        world
            .entities()
            .par_iter()
            .filter_map(|entity| render_command(world, viewport, entity))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        world
            .entities()
            .iter()
            .filter_map(|entity| render_command(world, viewport, entity))
            .collect()
    }
}

/// Draw every renderable entity; returns the number of draw calls
pub fn render_world(world: &World, viewport: &Viewport, renderer: &mut dyn Renderer) -> usize {
    let commands = build_render_commands(world, viewport);
    for command in &commands {
        renderer.render_pattern(world.pattern(command.pattern), &command.transform, command.size);
    }
    commands.len()
}
