//! Pointer position relative to a region, and the per-frame smoothing used by
//! the hero cursor follower.

use glam::Vec2;

use super::constants::{CURSOR_FOLLOW_FACTOR, CURSOR_SETTLE_EPSILON, POINTER_REST};
use super::geometry::Rect;
use super::lifecycle::{Lifecycle, Reactive};

/// What to do with pointer positions outside the region's bounds.
///
/// A listener scoped to an ancestor (or the window) keeps reporting while the
/// pointer is outside the tracked element, giving values below 0 or above 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClampPolicy {
    #[default]
    PassThrough,
    Clamp,
}

/// Pointer offset from the region's top-left corner in CSS pixels.
#[inline]
pub fn local_offset(client: Vec2, rect: &Rect) -> Vec2 {
    Vec2::new(
        client.x - rect.left as f32,
        client.y - rect.top as f32,
    )
}

/// Pointer position normalised to the region's box. `None` for an empty box.
pub fn relative_position(client: Vec2, rect: &Rect, policy: ClampPolicy) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let local = local_offset(client, rect);
    let uv = Vec2::new(local.x / rect.width as f32, local.y / rect.height as f32);
    if !uv.is_finite() {
        return None;
    }
    Some(match policy {
        ClampPolicy::PassThrough => uv,
        ClampPolicy::Clamp => uv.clamp(Vec2::ZERO, Vec2::ONE),
    })
}

#[derive(Debug)]
pub struct PointerTracker {
    policy: ClampPolicy,
    lifecycle: Lifecycle,
    position: Reactive<Vec2>,
}

impl PointerTracker {
    pub fn new(policy: ClampPolicy) -> Self {
        Self {
            policy,
            lifecycle: Lifecycle::Uninitialized,
            position: Reactive::new(Vec2::from(POINTER_REST)),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn position(&self) -> Vec2 {
        *self.position.get()
    }

    pub fn subscribe(&mut self, on_change: impl FnMut(&Vec2) + 'static) {
        self.position.subscribe(on_change);
    }

    pub fn mount(&mut self) -> bool {
        self.lifecycle.mount()
    }

    /// Record a pointer move at `client` against the region's current box.
    pub fn sample(&mut self, client: Vec2, rect: &Rect) -> Option<Vec2> {
        if !self.lifecycle.is_observing() {
            return None;
        }
        let uv = relative_position(client, rect, self.policy)?;
        self.position.set(uv);
        Some(uv)
    }

    pub fn teardown(&mut self) {
        if self.lifecycle.teardown() {
            self.position.unsubscribe();
        }
    }
}

/// Exponential approach of a displayed position toward a raw target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothFollow {
    current: Vec2,
    target: Vec2,
    factor: f32,
}

impl SmoothFollow {
    pub fn new(start: Vec2, factor: f32) -> Self {
        Self {
            current: start,
            target: start,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one animation frame.
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.factor;
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current.distance(self.target) < CURSOR_SETTLE_EPSILON
    }
}

impl Default for SmoothFollow {
    fn default() -> Self {
        Self::new(Vec2::ZERO, CURSOR_FOLLOW_FACTOR)
    }
}
