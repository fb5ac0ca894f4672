//! Per-frame draw description

use glam::Vec2;

use super::{Canvas, Rect, TextureId, colors};
use crate::consts::ASSUMED_H;
use crate::sim::GameState;

/// Draw every visible actor at interpolation factor `t`.
///
/// Only interpolated positions are used; `current` is never drawn directly.
pub fn render_frame(state: &GameState, t: f32, canvas: &mut impl Canvas) {
    // Two backdrop tiles side by side cover the scroll window
    let backdrop = &state.backdrop;
    let bx = backdrop.interpolated(t);
    let tile = Vec2::new(backdrop.width, ASSUMED_H);
    canvas.blit(TextureId::Background, Rect::new(Vec2::new(bx, 0.0), tile));
    canvas.blit(
        TextureId::Background,
        Rect::new(Vec2::new(bx + backdrop.width, 0.0), tile),
    );

    let ship = &state.ship.actor;
    canvas.blit(TextureId::Ship, Rect::new(ship.interpolated(t), ship.size));

    for bullet in &state.bullets {
        let a = &bullet.actor;
        canvas.fill(Rect::new(a.interpolated(t), a.size), colors::BULLET);
    }

    for enemy in &state.enemies {
        let a = &enemy.actor;
        canvas.blit(TextureId::Enemy, Rect::new(a.interpolated(t), a.size));
    }

    let [r, g, b] = colors::PARTICLE;
    for explosion in &state.explosions {
        for particle in &explosion.particles {
            let a = &particle.actor;
            // Particles are positioned by their center
            let pos = a.interpolated(t) - a.size / 2.0;
            canvas.fill(Rect::new(pos, a.size), [r, g, b, particle.alpha]);
        }
    }
}
