//! Render-driven fixed-step simulator
//!
//! The host calls [`Simulator::advance_to`] once per frame with the frame's
//! timestamp, then draws with [`Simulator::render`]. Gameplay always runs in
//! whole `PHYS_DT` ticks; drawing interpolates between the last two saved
//! positions so a render rate above the tick rate does not stutter.

use super::clock::SimClock;
use super::state::{GameEvent, GameState};
use super::tick::{TickInput, tick};
use crate::Settings;
use crate::renderer::{Canvas, render_frame};

pub struct Simulator {
    clock: SimClock,
    state: GameState,
    /// One-shot input waiting for the next tick
    pending: TickInput,
}

impl Simulator {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "Simulator starting (seed {}, spawn every {} ticks)",
            settings.seed,
            settings.enemy_spawn_rate
        );
        Self {
            clock: SimClock::default(),
            state: GameState::new(settings),
            pending: TickInput::default(),
        }
    }

    /// Bring the simulation up to `render_time` (seconds since start).
    ///
    /// Runs one tick per `PHYS_DT` boundary crossed. Held keys in `input`
    /// apply to every tick of this call; a `fire` request is consumed by the
    /// first tick that runs (and dropped if the game is paused then).
    /// Returns the number of ticks executed.
    pub fn advance_to(&mut self, render_time: f64, input: &TickInput) -> u32 {
        self.pending.steering = input.steering;
        self.pending.fire |= input.fire;

        let state = &mut self.state;
        let pending = &mut self.pending;
        self.clock.advance_to(render_time, |save| {
            tick(state, pending, save);
            pending.fire = false;
        })
    }

    /// Interpolation factor for drawing at `render_time`
    pub fn interpolation(&self, render_time: f64) -> f32 {
        self.clock.interpolation(render_time)
    }

    /// Draw the frame for `render_time` with interpolated positions
    pub fn render(&self, render_time: f64, canvas: &mut impl Canvas) {
        render_frame(&self.state, self.interpolation(render_time), canvas);
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.state.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.state.paused);
    }

    /// Take the gameplay events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
