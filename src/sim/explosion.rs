//! Explosion particles
//!
//! An explosion is a burst of particles that drift at a random velocity and
//! fade out linearly over a random lifetime.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::consts::PARTICLES_PER_EXPLOSION;

/// Random ranges used when spawning particles
#[derive(Debug, Clone, Copy)]
pub struct ParticleSpec {
    /// Per-axis velocity is drawn from `[-speed, speed)`
    pub speed: f32,
    /// Lifetime in ticks, `[min, max)`
    pub life: (f32, f32),
}

/// A single fading particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Position is the particle center; size is its square side
    pub actor: Actor,
    /// Ticks lived so far
    pub life: f32,
    pub max_life: f32,
    /// Opacity, 1 at spawn and 0 at death
    pub alpha: f32,
}

impl Particle {
    pub fn spawn(center: Vec2, spec: ParticleSpec, rng: &mut impl Rng) -> Self {
        let velocity = Vec2::new(
            rng.random_range(-spec.speed..spec.speed),
            rng.random_range(-spec.speed..spec.speed),
        );
        let side = rng.random_range(1.0..3.0);
        Self {
            actor: Actor::new(center, Vec2::splat(side), velocity),
            life: 0.0,
            max_life: rng.random_range(spec.life.0..spec.life.1),
            alpha: 1.0,
        }
    }

    pub fn update(&mut self, save: bool) {
        self.actor.integrate(save);
        self.life += 1.0;
        self.alpha = 1.0 - self.life / self.max_life;
    }

    pub fn is_alive(&self) -> bool {
        self.life < self.max_life
    }
}

/// A burst of particles around an impact point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Vec2,
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(center: Vec2, spec: ParticleSpec, rng: &mut impl Rng) -> Self {
        let particles = (0..PARTICLES_PER_EXPLOSION)
            .map(|_| Particle::spawn(center, spec, &mut *rng))
            .collect();
        Self { center, particles }
    }

    /// Age every particle and drop the expired ones
    pub fn update(&mut self, save: bool) {
        self.particles.retain_mut(|p| {
            p.update(save);
            p.is_alive()
        });
    }

    /// Snapshot particles without ageing them (paused frames)
    pub fn snapshot(&mut self) {
        for particle in &mut self.particles {
            particle.actor.snapshot();
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.particles.is_empty()
    }
}
