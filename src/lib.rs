//! Scroller - a side-scrolling arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step simulation (actors, collisions, clock)
//! - `renderer`: Draw seam the host implements, plus a recording canvas
//! - `platform`: Key state polling and frame timing
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SettingsResult};
pub use settings::Settings;
pub use sim::Simulator;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Physics tick rate
    pub const PHYS_FPS: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const PHYS_DT: f64 = 1.0 / PHYS_FPS;

    /// Logical playfield dimensions (pixels)
    pub const ASSUMED_W: f32 = 800.0;
    pub const ASSUMED_H: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 64.0;
    pub const SHIP_HEIGHT: f32 = 48.0;
    pub const SHIP_SPEED: f32 = 10.0;

    /// Bullet defaults (speed in pixels per tick)
    pub const BULLET_SIZE: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 16.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 64.0;
    pub const ENEMY_SPEED: f32 = 4.0;
    /// Ticks between enemy spawns
    pub const ENEMY_SPAWN_RATE: u32 = 120;

    /// Explosion defaults
    pub const PARTICLES_PER_EXPLOSION: usize = 50;
    pub const PARTICLE_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_LIFE: f32 = 50.0;
    pub const PARTICLE_MAX_LIFE: f32 = 80.0;

    /// Backdrop scroll (pixels per tick) and tile width
    pub const BACKDROP_SPEED: f32 = 2.0;
    pub const BACKDROP_WIDTH: f32 = 800.0;
}

/// Linear interpolation between two points, `t` in [0, 1]
#[inline]
pub fn lerp(from: Vec2, to: Vec2, t: f32) -> Vec2 {
    from + (to - from) * t
}
