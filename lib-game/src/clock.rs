use log::warn;

/// Paces the game logic to a fixed tickrate on top of whatever
/// rate the frames are presented at.
///
/// There is no catch-up: a frame that took too long results in
/// exactly one (late) tick. Leftover time is kept up to half a tick,
/// so frame time jitter around the tick length still gives one tick
/// per frame.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    tick: f32,
    accumulated: f32,
}

impl Ticker {
    pub fn new(tickrate: u32) -> Self {
        Self {
            tick: 1.0 / tickrate as f32,
            accumulated: 0.0,
        }
    }

    pub fn tick_len(&self) -> f32 {
        self.tick
    }

    /// Feeds the real frame time in. Returns whether the game
    /// should advance by one tick this frame.
    pub fn advance(&mut self, real_dt: f32) -> bool {
        if real_dt >= 2.0 * self.tick {
            warn!("LAG by {:.2}ms", (real_dt - self.tick) * 1000.0);
        }

        self.accumulated += real_dt;
        if self.accumulated < self.tick {
            return false;
        }

        self.accumulated = (self.accumulated - self.tick).min(self.tick / 2.0);
        true
    }
}
