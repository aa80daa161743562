//! Scroll-derived values: progress through the viewport, parallax offsets and
//! page-offset fades.
//!
//! All metrics are pure functions of one layout read, so recomputing on every
//! scroll or resize event is idempotent and the last event wins.

use super::geometry::LayoutGeometry;
use super::lifecycle::{Lifecycle, Reactive};

/// How progress through the viewport is normalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressFormula {
    /// 0 when the region's top touches the viewport bottom, 1 once the region
    /// has fully left through the top.
    FullTraverse,
    /// 0 when the region's top touches the viewport bottom, 1 when it reaches
    /// the viewport top.
    Linear,
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// `clamp((vh − top) / (vh + height), 0, 1)`.
pub fn full_traverse_progress(g: &LayoutGeometry) -> f64 {
    let total = g.viewport_height + g.region_height;
    if total <= 0.0 {
        return 0.0;
    }
    clamp_unit((g.viewport_height - g.region_top) / total)
}

/// `clamp(1 − top / vh, 0, 1)`.
pub fn linear_scroll_fraction(g: &LayoutGeometry) -> f64 {
    if g.viewport_height <= 0.0 {
        return 0.0;
    }
    clamp_unit(1.0 - g.region_top / g.viewport_height)
}

/// `(vh − top) × speed`, unclamped and unsmoothed.
pub fn parallax_offset(g: &LayoutGeometry, speed: f64) -> f64 {
    let offset = (g.viewport_height - g.region_top) * speed;
    if offset.is_finite() {
        offset
    } else {
        0.0
    }
}

/// `max(0, 1 − scrollY / distance)`.
pub fn fade_out_opacity(scroll_y: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return if scroll_y > 0.0 { 0.0 } else { 1.0 };
    }
    clamp_unit(1.0 - scroll_y / distance)
}

/// What a `ScrollTracker` reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMetric {
    Progress(ProgressFormula),
    Parallax { speed: f64 },
    FadeOut { distance: f64 },
    PageOffset,
}

impl ScrollMetric {
    pub fn evaluate(&self, g: &LayoutGeometry) -> f64 {
        match *self {
            ScrollMetric::Progress(ProgressFormula::FullTraverse) => full_traverse_progress(g),
            ScrollMetric::Progress(ProgressFormula::Linear) => linear_scroll_fraction(g),
            ScrollMetric::Parallax { speed } => parallax_offset(g, speed),
            ScrollMetric::FadeOut { distance } => fade_out_opacity(g.scroll_y, distance),
            ScrollMetric::PageOffset => g.scroll_y.max(0.0),
        }
    }

    /// Value reported before the first sample.
    pub fn initial(&self) -> f64 {
        match self {
            ScrollMetric::FadeOut { .. } => 1.0,
            _ => 0.0,
        }
    }
}

/// Reactive holder for one scroll metric of one region.
#[derive(Debug)]
pub struct ScrollTracker {
    metric: ScrollMetric,
    lifecycle: Lifecycle,
    value: Reactive<f64>,
}

impl ScrollTracker {
    pub fn new(metric: ScrollMetric) -> Self {
        Self {
            value: Reactive::new(metric.initial()),
            metric,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn metric(&self) -> ScrollMetric {
        self.metric
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn value(&self) -> f64 {
        *self.value.get()
    }

    pub fn subscribe(&mut self, on_change: impl FnMut(&f64) + 'static) {
        self.value.subscribe(on_change);
    }

    /// Enter `Observing` and take the initial sample so the first paint
    /// already reflects the current scroll position.
    pub fn mount(&mut self, initial: &LayoutGeometry) -> bool {
        if !self.lifecycle.mount() {
            return false;
        }
        log::debug!("[scroll] mount {:?}", self.metric);
        self.sample(initial);
        true
    }

    /// Recompute from the current geometry. Ignored unless observing.
    pub fn sample(&mut self, g: &LayoutGeometry) -> Option<f64> {
        if !self.lifecycle.is_observing() {
            return None;
        }
        let value = self.metric.evaluate(g);
        self.value.set(value);
        Some(value)
    }

    pub fn teardown(&mut self) {
        if self.lifecycle.teardown() {
            self.value.unsubscribe();
            log::debug!("[scroll] teardown {:?}", self.metric);
        }
    }
}
