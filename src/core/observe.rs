//! Visibility observation: is a region on screen above a threshold?
//!
//! The browser delivers intersection samples (from `IntersectionObserver` or
//! from a synchronous layout read on mount); `VisibilityObserver` turns them
//! into a boolean reactive state in either continuous or once mode.

use std::fmt;

use super::config::ConfigError;
use super::constants::{
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use super::geometry::Rect;
use super::lifecycle::{Lifecycle, Reactive};

/// A single CSS length accepted by `rootMargin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Option<Length> {
        let (number, make): (&str, fn(f64) -> Length) = if let Some(n) = token.strip_suffix("px")
        {
            (n, Length::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            // unitless lengths are only valid for zero
            (token, Length::Px)
        };
        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        if number.len() == token.len() && value != 0.0 {
            return None;
        }
        Some(make(value))
    }

    /// Resolve against the root dimension the length applies to.
    #[inline]
    pub fn resolve(&self, basis: f64) -> f64 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Root margin in CSS shorthand order: top, right, bottom, left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::uniform(Length::Px(0.0));

    pub const fn uniform(len: Length) -> Self {
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }

    /// Parse the 1–4 value margin shorthand (`"-50px"`, `"10px 0px"`, ...).
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let err = || ConfigError::RootMargin(input.to_string());
        let lengths = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(err)?;
        match lengths.as_slice() {
            [all] => Ok(Self::uniform(*all)),
            [v, h] => Ok(Self {
                top: *v,
                right: *h,
                bottom: *v,
                left: *h,
            }),
            [t, h, b] => Ok(Self {
                top: *t,
                right: *h,
                bottom: *b,
                left: *h,
            }),
            [t, r, b, l] => Ok(Self {
                top: *t,
                right: *r,
                bottom: *b,
                left: *l,
            }),
            _ => Err(err()),
        }
    }

    /// The root rectangle after applying this margin to `root`.
    pub fn apply(&self, root: &Rect) -> Rect {
        root.expand(
            self.top.resolve(root.height),
            self.right.resolve(root.width),
            self.bottom.resolve(root.height),
            self.left.resolve(root.width),
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the region that must intersect the root, in [0, 1].
    pub threshold: f64,
    pub root_margin: RootMargin,
    /// Latch the first `true` and stop observing.
    pub once: bool,
}

impl VisibilityOptions {
    pub fn new(threshold: f64, root_margin: RootMargin, once: bool) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            root_margin,
            once,
        }
    }

    /// Reveal-on-scroll preset: latch once a fifth of the region is visible,
    /// 50px inside the viewport edge.
    pub fn reveal() -> Self {
        let margin = RootMargin::parse(REVEAL_ROOT_MARGIN).unwrap_or_default();
        Self::new(REVEAL_THRESHOLD, margin, true)
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        let margin = RootMargin::parse(DEFAULT_ROOT_MARGIN).unwrap_or_default();
        Self::new(DEFAULT_THRESHOLD, margin, false)
    }
}

/// One intersection report for the observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub intersecting: bool,
}

impl IntersectionSample {
    #[inline]
    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

/// Whether the caller should keep delivering samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

#[derive(Debug)]
pub struct VisibilityObserver {
    options: VisibilityOptions,
    lifecycle: Lifecycle,
    visible: Reactive<bool>,
    latched: bool,
}

impl VisibilityObserver {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            lifecycle: Lifecycle::Uninitialized,
            visible: Reactive::new(false),
            latched: false,
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.get()
    }

    pub fn subscribe(&mut self, on_change: impl FnMut(&bool) + 'static) {
        self.visible.subscribe(on_change);
    }

    pub fn mount(&mut self) -> bool {
        let mounted = self.lifecycle.mount();
        if mounted {
            log::debug!(
                "[observe] mount threshold={} margin={} once={}",
                self.options.threshold,
                self.options.root_margin,
                self.options.once
            );
        }
        mounted
    }

    /// Apply a sample. Returns `Stop` once nothing further can change the
    /// state: after teardown, before mount, or after a once-mode latch.
    pub fn observe(&mut self, sample: IntersectionSample) -> Observation {
        if !self.lifecycle.is_observing() || self.latched {
            return Observation::Stop;
        }
        let visible = sample.meets(self.options.threshold);
        if self.options.once {
            if visible {
                self.visible.set(true);
                self.latched = true;
                return Observation::Stop;
            }
            return Observation::Continue;
        }
        self.visible.set(visible);
        Observation::Continue
    }

    pub fn teardown(&mut self) {
        if self.lifecycle.teardown() {
            self.visible.unsubscribe();
            log::debug!("[observe] teardown");
        }
    }
}

/// Fraction of `region` inside `viewport` grown by `margin`, computed the way
/// `IntersectionObserver` does for the document root.
pub fn intersection_sample(region: &Rect, viewport: &Rect, margin: &RootMargin) -> IntersectionSample {
    let root = margin.apply(viewport);
    match region.intersection(&root) {
        None => IntersectionSample {
            ratio: 0.0,
            intersecting: false,
        },
        Some(overlap) => {
            let area = region.area();
            let ratio = if area > 0.0 {
                (overlap.area() / area).clamp(0.0, 1.0)
            } else {
                1.0
            };
            IntersectionSample {
                ratio,
                intersecting: true,
            }
        }
    }
}

#[inline]
pub fn intersection_ratio(region: &Rect, viewport: &Rect, margin: &RootMargin) -> f64 {
    intersection_sample(region, viewport, margin).ratio
}

/// Thresholds to register with the browser for a logical `threshold`.
///
/// Browsers report ratios at a crossing with rounding error, so a sample taken
/// exactly at `threshold` may fall just short of it. Extra steps make sure a
/// later, larger ratio is delivered as the region keeps scrolling in.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut steps = vec![0.0, 0.25, 0.5, 0.75, 1.0, threshold.clamp(0.0, 1.0)];
    steps.sort_by(|a, b| a.total_cmp(b));
    steps.dedup();
    steps
}
