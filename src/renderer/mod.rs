//! Rendering seam
//!
//! The core never talks to a GPU. It describes each frame as fill and blit
//! calls against a host-provided [`Canvas`], using interpolated positions.

pub mod draw_list;
pub mod frame;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::render_frame;

use glam::Vec2;

/// Axis-aligned rectangle in playfield pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// Images the host is expected to have loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Ship,
    Enemy,
    Background,
}

/// Host drawing primitives
pub trait Canvas {
    /// Fill a rectangle with an RGBA color
    fn fill(&mut self, rect: Rect, color: [f32; 4]);
    /// Draw a texture stretched over a rectangle
    fn blit(&mut self, texture: TextureId, rect: Rect);
}

/// Colors for game elements
pub mod colors {
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Particle base color; alpha comes from the particle
    pub const PARTICLE: [f32; 3] = [1.0, 0.5, 0.0];
}
