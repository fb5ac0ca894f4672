//! Fixed-step simulation clock
//!
//! Tracks how far the simulation has advanced in whole `PHYS_DT` steps and
//! which tick boundary the current render frame interpolates from.
//!
//! ```text
//! last_committed_time ... render_time ... simulated_time
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::PHYS_DT;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Time of the newest tick boundary reached (seconds)
    pub simulated_time: f64,
    /// `simulated_time` at the start of the last frame that ticked
    pub last_committed_time: f64,
    /// Step size (seconds)
    pub step: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(PHYS_DT)
    }
}

impl SimClock {
    pub fn new(step: f64) -> Self {
        assert!(step > 0.0, "tick step must be positive, got {step}");
        Self {
            simulated_time: 0.0,
            last_committed_time: 0.0,
            step,
        }
    }

    /// Advance to the first step boundary past `render_time`, calling
    /// `on_step(save)` once per boundary crossed, in order. `save` is true
    /// only for the first step of the call. Returns the number of steps.
    pub fn advance_to(&mut self, render_time: f64, mut on_step: impl FnMut(bool)) -> u32 {
        assert!(render_time.is_finite(), "render time must be finite");

        let mut steps = 0;
        while self.simulated_time <= render_time {
            if steps == 0 {
                self.last_committed_time = self.simulated_time;
            }
            self.simulated_time += self.step;
            on_step(steps == 0);
            steps += 1;
        }
        steps
    }

    /// Fraction of the way `render_time` lies between the last committed
    /// boundary and the current one, clamped to [0, 1]. Zero when no tick
    /// bracket exists yet.
    pub fn interpolation(&self, render_time: f64) -> f32 {
        let span = self.simulated_time - self.last_committed_time;
        if span <= 0.0 || render_time < self.last_committed_time {
            return 0.0;
        }
        (((render_time - self.last_committed_time) / span) as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_step() {
        let mut clock = SimClock::default();
        let mut saves = Vec::new();
        let steps = clock.advance_to(0.0, |save| saves.push(save));
        assert_eq!(steps, 1);
        assert_eq!(saves, vec![true]);
        assert_eq!(clock.last_committed_time, 0.0);
        assert!((clock.simulated_time - PHYS_DT).abs() < 1e-12);
    }

    #[test]
    fn test_only_first_step_saves() {
        let mut clock = SimClock::new(0.25);
        let mut saves = Vec::new();
        let steps = clock.advance_to(1.0, |save| saves.push(save));
        // Boundaries 0.25, 0.5, 0.75, 1.0, 1.25 -> stops past 1.0
        assert_eq!(steps, 5);
        assert_eq!(saves, vec![true, false, false, false, false]);
        assert_eq!(clock.simulated_time, 1.25);
        assert_eq!(clock.last_committed_time, 0.0);
    }

    #[test]
    fn test_before_boundary_runs_nothing() {
        let mut clock = SimClock::new(0.25);
        clock.advance_to(0.3, |_| {});
        let before = clock;

        let steps = clock.advance_to(0.4, |_| panic!("no step expected"));
        assert_eq!(steps, 0);
        assert_eq!(clock, before);
    }

    #[test]
    fn test_interpolation_factor() {
        let mut clock = SimClock::new(0.25);
        clock.advance_to(0.3, |_| {});
        // First frame brackets everything it ran: [0, 0.5]
        assert_eq!(clock.last_committed_time, 0.0);
        assert_eq!(clock.simulated_time, 0.5);
        assert!((clock.interpolation(0.3) - 0.6).abs() < 1e-6);

        clock.advance_to(0.6, |_| {});
        // Bracket is [0.5, 0.75]
        assert_eq!(clock.last_committed_time, 0.5);
        assert_eq!(clock.simulated_time, 0.75);
        assert!((clock.interpolation(0.6) - 0.4).abs() < 1e-6);
        assert_eq!(clock.interpolation(0.5), 0.0);
        assert_eq!(clock.interpolation(0.75), 1.0);
        assert_eq!(clock.interpolation(0.9), 1.0);
        assert_eq!(clock.interpolation(0.4), 0.0);
    }

    #[test]
    fn test_clock_resumes_from_json() {
        let mut clock = SimClock::new(0.25);
        clock.advance_to(0.6, |_| {});
        let json = serde_json::to_string(&clock).unwrap();
        let mut back: SimClock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clock);

        // A restored clock keeps stepping from where it left off
        assert_eq!(back.advance_to(0.8, |_| {}), 1);
        assert_eq!(back.simulated_time, 1.0);
    }

    #[test]
    fn test_no_bracket_yields_zero() {
        let clock = SimClock::new(0.25);
        assert_eq!(clock.interpolation(0.1), 0.0);
    }

    #[test]
    #[should_panic(expected = "tick step must be positive")]
    fn test_zero_step_rejected() {
        SimClock::new(0.0);
    }

    #[test]
    #[should_panic(expected = "render time must be finite")]
    fn test_nan_render_time_rejected() {
        SimClock::default().advance_to(f64::NAN, |_| {});
    }
}
