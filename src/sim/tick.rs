//! Fixed timestep simulation tick
//!
//! One call advances gameplay by exactly one `PHYS_DT` step.

use rand::Rng;

use super::actor::Steering;
use super::collision::overlaps;
use super::state::GameState;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held direction keys, polled
    pub steering: Steering,
    /// Fire one bullet (one-shot, consumed by the tick that sees it)
    pub fire: bool,
}

/// Advance the game state by one fixed timestep.
///
/// `save` snapshots every actor before it moves; it is set only for the
/// first tick of a render frame. A paused state still honors the snapshot
/// but nothing moves, spawns or collides.
pub fn tick(state: &mut GameState, input: &TickInput, save: bool) {
    if state.paused {
        if save {
            state.snapshot();
        }
        return;
    }

    state.time_ticks += 1;

    state.backdrop.update(save);

    // Fire before the ship moves so the bullet leaves from where the ship was
    if input.fire {
        state.spawn_bullet();
    }

    state.ship.steer(input.steering);
    state.ship.actor.integrate(save);

    state.bullets.retain_mut(|bullet| {
        bullet.actor.integrate(save);
        bullet.actor.current.x <= ASSUMED_W
    });

    state.spawn_counter += 1;
    if state.spawn_counter >= state.spawn_rate {
        let y = state.rng.random_range(0.0..ASSUMED_H - ENEMY_SIZE);
        state.spawn_enemy(y);
        state.spawn_counter = 0;
    }

    resolve_enemies(state, save);

    state.explosions.retain_mut(|explosion| {
        explosion.update(save);
        explosion.is_alive()
    });
}

/// Move enemies, cull the ones that left the screen and destroy the ones hit
/// by the ship or a bullet. Each destroyed enemy yields exactly one explosion;
/// every bullet overlapping it is consumed.
fn resolve_enemies(state: &mut GameState, save: bool) {
    let ship = state.ship.actor;
    let bullets = &mut state.bullets;
    let mut blasts = Vec::new();

    state.enemies.retain_mut(|enemy| {
        enemy.actor.integrate(save);

        if enemy.actor.current.x < -enemy.actor.size.x {
            return false;
        }

        let rammed = overlaps(&ship, &enemy.actor);
        let before = bullets.len();
        bullets.retain(|bullet| !overlaps(&bullet.actor, &enemy.actor));
        let shot = bullets.len() != before;

        if rammed || shot {
            blasts.push(enemy.actor.center());
            return false;
        }
        true
    });

    for center in blasts {
        state.spawn_explosion(center);
    }
}
