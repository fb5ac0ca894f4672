//! Game state and core simulation types
//!
//! Everything a tick mutates lives here, owned by one `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Bullet, Enemy, Ship};
use super::explosion::{Explosion, ParticleSpec};
use crate::Settings;
use crate::consts::*;

/// Things that happened during a tick that the host may react to (sound cues).
/// Only recorded when `Settings::sound` is on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bullet left the ship
    ShotFired,
    /// A new enemy entered at the right edge
    EnemySpawned { y: f32 },
    /// An enemy was destroyed
    Explosion { center: Vec2 },
}

/// Horizontally scrolling background offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    pub previous: f32,
    pub current: f32,
    /// Pixels per tick (moves left)
    pub speed: f32,
    /// Tile width; the offset wraps after one tile
    pub width: f32,
}

impl Backdrop {
    pub fn new(speed: f32, width: f32) -> Self {
        Self {
            previous: 0.0,
            current: 0.0,
            speed,
            width,
        }
    }

    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }

    pub fn update(&mut self, save: bool) {
        if save {
            self.snapshot();
        }
        self.current -= self.speed;
        if self.current <= -self.width {
            // Shift both ends so interpolation stays continuous across the wrap
            self.current += self.width;
            self.previous += self.width;
        }
    }

    pub fn interpolated(&self, t: f32) -> f32 {
        self.previous + (self.current - self.previous) * t
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Gameplay ticks executed (paused ticks excluded)
    pub time_ticks: u64,
    /// When set, ticks advance the clock but no gameplay happens
    pub paused: bool,
    pub ship: Ship,
    /// Active bullets (spawn order)
    pub bullets: Vec<Bullet>,
    /// Active enemies (spawn order)
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub backdrop: Backdrop,
    /// Ticks since the last enemy spawn
    pub spawn_counter: u32,
    /// Ticks between enemy spawns
    pub spawn_rate: u32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    pub particle_spec: ParticleSpec,
    /// Events accumulated since the host last drained them
    pub events: Vec<GameEvent>,
    sound: bool,
    next_id: u32,
}

impl GameState {
    /// Create a new game state from settings
    pub fn new(settings: &Settings) -> Self {
        let ship_pos = Vec2::new(ASSUMED_W / 2.0, ASSUMED_H / 2.0);
        Self {
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
            time_ticks: 0,
            paused: false,
            ship: Ship::new(ship_pos, settings.ship_size, settings.ship_speed),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            backdrop: Backdrop::new(settings.backdrop_speed, settings.backdrop_width),
            spawn_counter: 0,
            spawn_rate: settings.enemy_spawn_rate,
            bullet_speed: settings.bullet_speed,
            enemy_speed: settings.enemy_speed,
            particle_spec: ParticleSpec {
                speed: settings.particle_speed,
                life: settings.particle_life,
            },
            events: Vec::new(),
            sound: settings.sound,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Copy every actor's current position into its previous one
    pub fn snapshot(&mut self) {
        self.backdrop.snapshot();
        self.ship.actor.snapshot();
        for bullet in &mut self.bullets {
            bullet.actor.snapshot();
        }
        for enemy in &mut self.enemies {
            enemy.actor.snapshot();
        }
        for explosion in &mut self.explosions {
            explosion.snapshot();
        }
    }

    /// Fire a bullet from the ship's nose
    pub fn spawn_bullet(&mut self) {
        let id = self.next_entity_id();
        let pos = self.ship.muzzle(BULLET_SIZE);
        self.bullets.push(Bullet {
            id,
            actor: Actor::new(
                pos,
                Vec2::splat(BULLET_SIZE),
                Vec2::new(self.bullet_speed, 0.0),
            ),
        });
        self.emit(GameEvent::ShotFired);
    }

    /// Spawn an enemy at the right edge at height `y`
    pub fn spawn_enemy(&mut self, y: f32) {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            actor: Actor::new(
                Vec2::new(ASSUMED_W, y),
                Vec2::splat(ENEMY_SIZE),
                Vec2::new(-self.enemy_speed, 0.0),
            ),
        });
        log::debug!("Enemy {id} spawned at y={y:.1}");
        self.emit(GameEvent::EnemySpawned { y });
    }

    /// Start an explosion centered on `center`
    pub fn spawn_explosion(&mut self, center: Vec2) {
        let explosion = Explosion::new(center, self.particle_spec, &mut self.rng);
        self.explosions.push(explosion);
        log::debug!("Explosion at ({:.1}, {:.1})", center.x, center.y);
        self.emit(GameEvent::Explosion { center });
    }

    /// Take all events accumulated so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.sound {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_ship() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.ship.actor.current, Vec2::new(400.0, 300.0));
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(!state.paused);
    }

    #[test]
    fn test_backdrop_wrap_keeps_interpolation_continuous() {
        let mut backdrop = Backdrop::new(2.0, 10.0);
        for _ in 0..4 {
            backdrop.update(true);
        }
        assert_eq!(backdrop.current, -8.0);

        // Crosses -10 and wraps to 0; previous follows it to 2
        backdrop.update(true);
        assert_eq!(backdrop.current, 0.0);
        assert_eq!(backdrop.previous, 2.0);
        assert_eq!(backdrop.interpolated(0.5), 1.0);
    }

    #[test]
    fn test_events_serialize_as_json() {
        let events = vec![
            GameEvent::ShotFired,
            GameEvent::EnemySpawned { y: 120.5 },
            GameEvent::Explosion {
                center: Vec2::new(432.0, 332.0),
            },
        ];
        let json = serde_json::to_string(&events).unwrap();
        assert!(json.contains("\"EnemySpawned\""));
        let back: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }

    #[test]
    fn test_backdrop_snapshot_survives_json() {
        let mut backdrop = Backdrop::new(2.0, 800.0);
        backdrop.update(true);
        let json = serde_json::to_string(&backdrop).unwrap();
        let back: Backdrop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, backdrop);
        assert_eq!(back.interpolated(0.5), -1.0);
    }

    #[test]
    fn test_sound_off_suppresses_cues() {
        let settings = Settings {
            sound: false,
            ..Default::default()
        };
        let mut state = GameState::new(&settings);
        state.spawn_bullet();
        assert_eq!(state.bullets.len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
