//! Frame rate measurement

/// Counts frames and publishes frames-per-second once a second
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start: Option<f64>,
    frames: u32,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame presented at `now` (seconds). Returns the new FPS value
    /// when a one-second window closes.
    pub fn frame(&mut self, now: f64) -> Option<f64> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now - start;
        if elapsed >= 1.0 {
            self.fps = self.frames as f64 / elapsed;
            self.frames = 0;
            self.window_start = Some(now);
            return Some(self.fps);
        }
        None
    }

    /// Last published value (0 until the first window closes)
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publishes_after_one_second() {
        let mut counter = FpsCounter::new();
        let mut published = None;
        for i in 0..=120 {
            if let Some(fps) = counter.frame(i as f64 / 120.0) {
                published = Some(fps);
            }
        }
        let fps = published.expect("a window should have closed");
        assert!((fps - 121.0).abs() < 1e-9);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn test_nothing_before_one_second() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.frame(0.0), None);
        assert_eq!(counter.frame(0.5), None);
        assert_eq!(counter.fps(), 0.0);
    }
}
