//! Redraw throttling.

use std::time::{Duration, Instant};

/// Limits how often the progress bar is redrawn.
///
/// The first check always passes; afterwards a redraw is allowed once
/// `min_interval` has elapsed since the last allowed one.
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    last_draw: Option<Instant>,
    min_interval: Duration,
}

impl RedrawThrottle {
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_draw: None,
            min_interval,
        }
    }

    /// Whether a redraw is due at `now`. Records `now` when it is.
    pub fn should_draw_at(&mut self, now: Instant) -> bool {
        match self.last_draw {
            Some(last) if now.saturating_duration_since(last) < self.min_interval => false,
            _ => {
                self.last_draw = Some(now);
                true
            }
        }
    }

    pub fn should_draw(&mut self) -> bool {
        self.should_draw_at(Instant::now())
    }
}

impl Default for RedrawThrottle {
    /// 100 ms between redraws.
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
