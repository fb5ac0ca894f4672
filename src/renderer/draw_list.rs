//! Recording canvas
//!
//! Stores draw calls instead of executing them. Used by the headless binary
//! and by tests.

use super::{Canvas, Rect, TextureId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: [f32; 4] },
    Blit { texture: TextureId, rect: Rect },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Rectangles blitted with `texture`, in draw order
    pub fn blits(&self, texture: TextureId) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Blit { texture: t, rect } if *t == texture => Some(rect),
            _ => None,
        })
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn fill(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn blit(&mut self, texture: TextureId, rect: Rect) {
        self.commands.push(DrawCommand::Blit { texture, rect });
    }
}
