//! Scroller entry point
//!
//! Native builds run a headless session: a scripted player drives the
//! simulation from a jittery render clock and every frame is recorded into a
//! draw list instead of a window.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => scroller::Settings::load_or_default(path),
        None => scroller::Settings::default(),
    };
    let seconds = session_length(args.next());

    log::info!("Scroller (headless) running for {seconds}s");
    let summary = headless::run(&settings, seconds);
    println!("{summary}");
}

/// Session length in seconds from the optional command line argument
#[cfg(not(target_arch = "wasm32"))]
fn session_length(arg: Option<String>) -> f64 {
    const DEFAULT_SECONDS: f64 = 10.0;
    let Some(raw) = arg else {
        return DEFAULT_SECONDS;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            log::warn!("Invalid duration {raw:?}; running for {DEFAULT_SECONDS}s");
            DEFAULT_SECONDS
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosted builds drive `Simulator` from their own frame callback
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::fmt;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use scroller::Settings;
    use scroller::platform::{FpsCounter, Key, KeyEvent, KeyState};
    use scroller::renderer::DrawList;
    use scroller::sim::{GameEvent, Simulator};

    /// Nominal display refresh the fake render clock jitters around
    const RENDER_HZ: f64 = 144.0;
    /// Seconds between scripted shots
    const FIRE_INTERVAL: f64 = 0.25;
    /// Scripted pause window (seconds)
    const PAUSE_WINDOW: (f64, f64) = (4.0, 5.0);

    #[derive(Debug, Default)]
    pub struct Summary {
        pub frames: u64,
        pub ticks: u64,
        pub shots: u32,
        pub enemies: u32,
        pub explosions: u32,
        pub draw_calls: u64,
        pub fps: f64,
    }

    impl fmt::Display for Summary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "frames={} ticks={} shots={} enemies={} explosions={} draw_calls={} fps={:.1}",
                self.frames,
                self.ticks,
                self.shots,
                self.enemies,
                self.explosions,
                self.draw_calls,
                self.fps
            )
        }
    }

    pub fn run(settings: &Settings, seconds: f64) -> Summary {
        let mut sim = Simulator::new(settings);
        let mut keys = KeyState::new();
        let mut fps = FpsCounter::new();
        let mut canvas = DrawList::default();
        // Separate stream from the simulation RNG so jitter never perturbs gameplay
        let mut jitter = Pcg32::seed_from_u64(settings.seed ^ 0xf00d);
        let mut summary = Summary::default();

        let mut now = 0.0;
        let mut next_shot = 0.0;
        let mut paused_once = false;
        let mut heading_up = true;

        while now < seconds {
            script(&mut keys, &sim, now, &mut next_shot, &mut heading_up);

            if !paused_once && now >= PAUSE_WINDOW.0 {
                keys.handle(KeyEvent::Up(Key::P));
                paused_once = true;
            }
            if sim.is_paused() && now >= PAUSE_WINDOW.1 {
                keys.handle(KeyEvent::Up(Key::P));
            }
            if keys.take_pause_toggle() {
                sim.toggle_pause();
            }

            let input = keys.take_tick_input();
            summary.ticks += u64::from(sim.advance_to(now, &input));

            for event in sim.drain_events() {
                match event {
                    GameEvent::ShotFired => summary.shots += 1,
                    GameEvent::EnemySpawned { .. } => summary.enemies += 1,
                    GameEvent::Explosion { .. } => summary.explosions += 1,
                }
            }

            canvas.clear();
            sim.render(now, &mut canvas);
            summary.draw_calls += canvas.commands.len() as u64;
            summary.frames += 1;
            if let Some(value) = fps.frame(now) {
                log::debug!("fps {value:.1}, {} draw calls", canvas.commands.len());
            }

            // Frame times wobble +-20% around the nominal refresh
            now += jitter.random_range(0.8..1.2) / RENDER_HZ;
        }

        summary.fps = fps.fps();
        log::info!("Session finished: {summary}");
        summary
    }

    /// Scripted player: sweeps up and down and fires on a fixed cadence
    fn script(
        keys: &mut KeyState,
        sim: &Simulator,
        now: f64,
        next_shot: &mut f64,
        heading_up: &mut bool,
    ) {
        let y = sim.state().ship.actor.current.y;
        if y < 60.0 {
            *heading_up = false;
        } else if y > 480.0 {
            *heading_up = true;
        }
        let (press, release) = if *heading_up {
            (Key::Up, Key::Down)
        } else {
            (Key::Down, Key::Up)
        };
        keys.handle(KeyEvent::Up(release));
        keys.handle(KeyEvent::Down(press));

        if now >= *next_shot {
            keys.handle(KeyEvent::Up(Key::Space));
            keys.handle(KeyEvent::Down(Key::Space));
            *next_shot += FIRE_INTERVAL;
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_session_length() {
        assert_eq!(session_length(None), 10.0);
        assert_eq!(session_length(Some("2.5".into())), 2.5);
        assert_eq!(session_length(Some("abc".into())), 10.0);
        assert_eq!(session_length(Some("-3".into())), 10.0);
        assert_eq!(session_length(Some("inf".into())), 10.0);
    }
}
