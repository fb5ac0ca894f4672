//! Moving rectangles with two retained positions
//!
//! Each actor keeps the position it had when the last snapshot was taken
//! (`previous`) and its position after the latest integration (`current`).
//! Rendering interpolates between the two; nothing older is kept.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::lerp;

/// Common position/size/velocity record shared by every actor kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Position at the start of the most recent saved tick (top-left)
    pub previous: Vec2,
    /// Position after the most recent tick (top-left)
    pub current: Vec2,
    pub size: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, velocity: Vec2) -> Self {
        Self {
            previous: pos,
            current: pos,
            size,
            velocity,
        }
    }

    /// Copy `current` into `previous`
    #[inline]
    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }

    /// Advance one tick, snapshotting first when `save` is set
    #[inline]
    pub fn integrate(&mut self, save: bool) {
        if save {
            self.snapshot();
        }
        self.current += self.velocity;
    }

    /// Position to draw at interpolation factor `t`
    #[inline]
    pub fn interpolated(&self, t: f32) -> Vec2 {
        lerp(self.previous, self.current, t)
    }

    /// Center of the current bounding box
    pub fn center(&self) -> Vec2 {
        self.current + self.size * 0.5
    }
}

/// The player's ship, steered by held direction keys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub actor: Actor,
    /// Speed applied on each held axis (pixels per tick)
    pub speed: f32,
}

/// Held direction keys relevant to ship steering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Ship {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            actor: Actor::new(pos, size, Vec2::ZERO),
            speed,
        }
    }

    /// Set velocity from held keys. Left beats right, up beats down.
    pub fn steer(&mut self, keys: Steering) {
        let vx = if keys.left {
            -self.speed
        } else if keys.right {
            self.speed
        } else {
            0.0
        };
        let vy = if keys.up {
            -self.speed
        } else if keys.down {
            self.speed
        } else {
            0.0
        };
        self.actor.velocity = Vec2::new(vx, vy);
    }

    /// Where a fired bullet starts: the ship's nose, vertically centered
    pub fn muzzle(&self, bullet_size: f32) -> Vec2 {
        let a = &self.actor;
        Vec2::new(
            a.current.x + a.size.x,
            a.current.y + a.size.y / 2.0 - bullet_size / 2.0,
        )
    }
}

/// A player projectile flying right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub actor: Actor,
}

/// An enemy drifting left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub actor: Actor,
}
