//! Timed reveal helpers: staggered transition delays and line-by-line text.

use std::time::Duration;

/// CSS transition delay for the `index`-th item of a staggered group,
/// rounded to whole milliseconds (`3, 0.1` → `"0.3s"`).
pub fn stagger_delay(index: usize, base_secs: f64) -> String {
    let secs = index as f64 * base_secs.max(0.0);
    let millis = (secs * 1000.0).round();
    format!("{}s", millis / 1000.0)
}

/// Reveals one more line every `interval` while its region is visible.
#[derive(Clone, Debug, PartialEq)]
pub struct LineReveal {
    total: usize,
    revealed: usize,
    interval: Duration,
    elapsed: Duration,
}

impl LineReveal {
    pub fn new(total: usize, interval: Duration) -> Self {
        Self {
            total,
            revealed: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    /// Reveal every remaining line at once. Used when there is no visibility
    /// signal to wait for. Returns the new count when it changed.
    pub fn finish(&mut self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        self.revealed = self.total;
        self.elapsed = Duration::ZERO;
        Some(self.revealed)
    }

    /// Advance by `dt`. Time only accumulates while `visible`; progress made
    /// earlier is kept when the region scrolls away. Returns the new count when
    /// it changed.
    pub fn advance(&mut self, dt: Duration, visible: bool) -> Option<usize> {
        if !visible || self.is_complete() {
            return None;
        }
        if self.interval.is_zero() {
            self.revealed = self.total;
            return Some(self.revealed);
        }
        self.elapsed += dt;
        let before = self.revealed;
        while self.elapsed >= self.interval && !self.is_complete() {
            self.elapsed -= self.interval;
            self.revealed += 1;
        }
        if self.is_complete() {
            self.elapsed = Duration::ZERO;
        }
        (self.revealed != before).then_some(self.revealed)
    }
}
