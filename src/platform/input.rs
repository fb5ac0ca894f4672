//! Keyboard state
//!
//! The host forwards raw key events; the simulation polls which keys are
//! held. Fire and pause are edge-triggered and surface as one-shot requests.

use std::collections::HashSet;

use crate::sim::{Steering, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    P,
}

/// A raw key transition from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Held keys plus one-shot requests accumulated between frames
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
    fire: bool,
    pause_toggle: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key transition.
    ///
    /// Pressing Space fires once per press (auto-repeat is ignored);
    /// releasing P toggles pause.
    pub fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(key) => {
                let fresh = self.held.insert(key);
                if fresh && key == Key::Space {
                    self.fire = true;
                }
            }
            KeyEvent::Up(key) => {
                self.held.remove(&key);
                if key == Key::P {
                    self.pause_toggle = !self.pause_toggle;
                }
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Build this frame's tick input, consuming the fire request
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            steering: Steering {
                left: self.is_held(Key::Left),
                right: self.is_held(Key::Right),
                up: self.is_held(Key::Up),
                down: self.is_held(Key::Down),
            },
            fire: std::mem::take(&mut self.fire),
        }
    }

    /// Whether pause should flip this frame (consumes the request)
    pub fn take_pause_toggle(&mut self) -> bool {
        std::mem::take(&mut self.pause_toggle)
    }
}
