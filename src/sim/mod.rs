//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the `Canvas` seam

pub mod actor;
pub mod clock;
pub mod collision;
pub mod explosion;
pub mod simulator;
pub mod state;
pub mod tick;

pub use actor::{Actor, Bullet, Enemy, Ship, Steering};
pub use clock::SimClock;
pub use collision::overlaps;
pub use explosion::{Explosion, Particle, ParticleSpec};
pub use simulator::Simulator;
pub use state::{Backdrop, GameEvent, GameState};
pub use tick::{TickInput, tick};
