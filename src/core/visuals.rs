//! Decorative canvas visuals for the "divide" fold.
//!
//! Both routines draw through `DrawSurface`, a thin mirror of the 2D canvas
//! API, and interpolate on an externally supplied progress in [0, 1]: the
//! chaotic field fades out as progress grows, the coherent signal fades in.

use std::f64::consts::{PI, TAU};
use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use super::constants::*;

/// CSS `rgba()` colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 },
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const SLATE: Rgba = Rgba::rgb(100, 116, 139);
pub const SLATE_LIGHT: Rgba = Rgba::rgb(148, 163, 184);
pub const ALERT_RED: Rgba = Rgba::rgb(239, 68, 68);
pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);

pub const FLICKER_FONT: &str = "10px JetBrains Mono, monospace";

/// The subset of the 2D canvas API the visuals draw with.
pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba, line_width: f64);
    fn set_shadow(&mut self, blur: f64, color: Rgba);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Full circle path segment.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualKind {
    Chaotic,
    Coherent,
}

#[inline]
fn unit(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// ---------------- Chaotic ----------------

#[inline]
pub fn chaos_level(progress: f64) -> f64 {
    1.0 - unit(progress)
}

#[inline]
pub fn jitter_magnitude(progress: f64) -> f64 {
    CHAOS_JITTER_PX * chaos_level(progress)
}

/// Upper bound of any fragment's fill alpha at this progress.
#[inline]
pub fn fragment_alpha_max(progress: f64) -> f64 {
    CHAOS_FRAGMENT_OPACITY_MAX * chaos_level(progress)
}

/// Alpha of the red glitch lines, or `None` when they are not drawn.
pub fn glitch_alpha(progress: f64) -> Option<f64> {
    let chaos = chaos_level(progress);
    (chaos > CHAOS_GLITCH_MIN).then_some(CHAOS_GLITCH_ALPHA * chaos)
}

/// Number of flickering numbers drawn per frame.
pub fn flicker_count(progress: f64) -> usize {
    let chaos = chaos_level(progress);
    if chaos <= CHAOS_FLICKER_MIN {
        return 0;
    }
    ((CHAOS_FLICKER_MAX_LABELS as f64 * chaos).ceil() as usize).min(CHAOS_FLICKER_MAX_LABELS)
}

/// CSS blur applied to the chaotic canvas.
#[inline]
pub fn blur_px(progress: f64) -> f64 {
    CHAOS_BLUR_MAX_PX * chaos_level(progress)
}

/// One jittering rectangle of the chaotic field.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub speed: f64,
    pub phase: f64,
}

impl Fragment {
    fn random(rng: &mut impl Rng, area_w: f64, area_h: f64) -> Self {
        let opacity_span = CHAOS_FRAGMENT_OPACITY_MAX - CHAOS_FRAGMENT_OPACITY_MIN;
        Self {
            x: rng.gen::<f64>() * area_w.max(0.0),
            y: rng.gen::<f64>() * area_h.max(0.0),
            width: rng.gen::<f64>() * 80.0 + 30.0,
            height: rng.gen::<f64>() * 40.0 + 15.0,
            rotation_deg: rng.gen::<f64>() * 2.0 * CHAOS_ROTATION_MAX_DEG - CHAOS_ROTATION_MAX_DEG,
            opacity: rng.gen::<f64>() * opacity_span + CHAOS_FRAGMENT_OPACITY_MIN,
            speed: rng.gen::<f64>() * 2.0 + 0.5,
            phase: rng.gen::<f64>() * TAU,
        }
    }

    /// Displacement from the fragment's anchor at `time`.
    pub fn jitter(&self, time: f64, progress: f64) -> (f64, f64) {
        let angle = time * self.speed + self.phase;
        let magnitude = jitter_magnitude(progress);
        (angle.sin() * magnitude, angle.cos() * magnitude)
    }
}

fn scatter(rng: &mut impl Rng, width: f64, height: f64) -> Vec<Fragment> {
    (0..CHAOS_FRAGMENT_COUNT)
        .map(|_| Fragment::random(&mut *rng, width, height))
        .collect()
}

#[derive(Clone, Debug)]
struct FlickerLabel {
    text: String,
    x: f64,
    y: f64,
}

/// Jittering rectangles, glitch lines and flickering numbers.
#[derive(Debug)]
pub struct ChaoticVisual<R: Rng = StdRng> {
    rng: R,
    fragments: Vec<Fragment>,
    width: f64,
    height: f64,
    time: f64,
}

impl<R: Rng> ChaoticVisual<R> {
    /// Scatter a fresh set of fragments over a `width` × `height` area.
    pub fn new(mut rng: R, width: f64, height: f64) -> Self {
        let fragments = scatter(&mut rng, width, height);
        Self {
            rng,
            fragments,
            width,
            height,
            time: 0.0,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Fragments keep their relative positions in the new area. An area that
    /// was empty (canvas not laid out yet) is scattered afresh.
    pub fn resize(&mut self, width: f64, height: f64) {
        let was_empty = self.width <= 0.0 || self.height <= 0.0;
        if was_empty {
            if width > 0.0 && height > 0.0 {
                self.fragments = scatter(&mut self.rng, width, height);
            }
        } else {
            let sx = width.max(0.0) / self.width;
            let sy = height.max(0.0) / self.height;
            for fragment in &mut self.fragments {
                fragment.x *= sx;
                fragment.y *= sy;
            }
        }
        self.width = width;
        self.height = height;
    }

    pub fn draw(&mut self, surface: &mut impl DrawSurface, progress: f64, dt_sec: f32) {
        surface.clear(self.width, self.height);
        self.time += CHAOS_TIME_RATE * dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) as f64;

        let chaos = chaos_level(progress);
        if chaos <= 0.0 {
            return;
        }
        let glitch = glitch_alpha(progress);

        for fragment in &self.fragments {
            surface.save();
            surface.translate(fragment.x, fragment.y);
            surface.rotate(fragment.rotation_deg * chaos * PI / 180.0);

            let (jx, jy) = fragment.jitter(self.time, progress);
            let half_w = fragment.width / 2.0;
            surface.set_fill(SLATE.with_alpha(fragment.opacity * chaos));
            surface.fill_rect(jx - half_w, jy - fragment.height / 2.0, fragment.width, fragment.height);

            if let Some(alpha) = glitch {
                let tail = (self.rng.gen::<f64>() - 0.5) * CHAOS_GLITCH_TAIL_PX;
                surface.set_stroke(ALERT_RED.with_alpha(alpha), 1.0);
                surface.begin_path();
                surface.move_to(jx - half_w, jy);
                surface.line_to(jx + half_w, jy + tail);
                surface.stroke();
            }
            surface.restore();
        }

        let count = flicker_count(progress);
        if count > 0 {
            let labels: SmallVec<[FlickerLabel; CHAOS_FLICKER_MAX_LABELS]> = (0..count)
                .map(|_| FlickerLabel {
                    text: format!("{:.2}", self.rng.gen::<f64>() * 1000.0),
                    x: self.rng.gen::<f64>() * self.width.max(0.0),
                    y: self.rng.gen::<f64>() * self.height.max(0.0),
                })
                .collect();
            surface.set_font(FLICKER_FONT);
            surface.set_fill(SLATE_LIGHT.with_alpha(CHAOS_FLICKER_ALPHA * chaos));
            for label in &labels {
                surface.fill_text(&label.text, label.x, label.y);
            }
        }
    }
}

// ---------------- Coherent ----------------

#[inline]
pub fn clarity_level(progress: f64) -> f64 {
    unit(progress)
}

#[inline]
pub fn signal_alpha(progress: f64) -> f64 {
    COHERENT_SIGNAL_ALPHA * clarity_level(progress)
}

#[inline]
pub fn grid_alpha(progress: f64) -> f64 {
    COHERENT_GRID_ALPHA * clarity_level(progress)
}

#[inline]
pub fn node_alpha(progress: f64) -> f64 {
    COHERENT_NODE_ALPHA * clarity_level(progress)
}

/// Alpha of ring `index` (1-based); inner rings are brighter.
#[inline]
pub fn ring_alpha(index: usize, progress: f64) -> f64 {
    COHERENT_RING_ALPHA / index.max(1) as f64 * clarity_level(progress)
}

/// Grid, sine signal, pulsing node and concentric rings.
#[derive(Clone, Debug, Default)]
pub struct CoherentVisual {
    width: f64,
    height: f64,
    time: f64,
}

impl CoherentVisual {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            time: 0.0,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn draw(&mut self, surface: &mut impl DrawSurface, progress: f64, dt_sec: f32) {
        surface.clear(self.width, self.height);
        self.time += COHERENT_TIME_RATE * dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) as f64;

        let clarity = clarity_level(progress);
        let (w, h) = (self.width.max(0.0), self.height.max(0.0));
        let (cx, cy) = (w / 2.0, h / 2.0);

        surface.set_stroke(CYAN.with_alpha(grid_alpha(progress)), 0.5);
        let mut x = 0.0;
        while x < w {
            surface.begin_path();
            surface.move_to(x, 0.0);
            surface.line_to(x, h);
            surface.stroke();
            x += COHERENT_GRID_PX;
        }
        let mut y = 0.0;
        while y < h {
            surface.begin_path();
            surface.move_to(0.0, y);
            surface.line_to(w, y);
            surface.stroke();
            y += COHERENT_GRID_PX;
        }

        surface.begin_path();
        surface.set_stroke(CYAN.with_alpha(signal_alpha(progress)), 2.0);
        let mut x = 0.0;
        while x < w {
            let y = cy
                + ((x / w) * PI * 4.0 + self.time * 2.0).sin()
                    * COHERENT_SIGNAL_AMPLITUDE_PX
                    * clarity;
            if x == 0.0 {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
            x += COHERENT_SIGNAL_STEP_PX;
        }
        surface.stroke();

        surface.set_shadow(COHERENT_GLOW_BLUR_PX * clarity, CYAN.with_alpha(0.5));

        let pulse = COHERENT_NODE_RADIUS_PX + (self.time * 2.0).sin() * COHERENT_NODE_PULSE_PX;
        surface.begin_path();
        surface.arc(cx, cy, pulse * clarity);
        surface.set_fill(CYAN.with_alpha(node_alpha(progress)));
        surface.fill();

        for i in 1..=COHERENT_RING_COUNT {
            surface.begin_path();
            surface.arc(cx, cy, COHERENT_RING_SPACING_PX * i as f64 * clarity);
            surface.set_stroke(CYAN.with_alpha(ring_alpha(i, progress)), 1.0);
            surface.stroke();
        }

        surface.set_shadow(0.0, CYAN.with_alpha(0.0));
    }
}

/// Either visual, as mounted on a canvas.
#[derive(Debug)]
pub enum Visual<R: Rng = StdRng> {
    Chaotic(ChaoticVisual<R>),
    Coherent(CoherentVisual),
}

impl<R: Rng> Visual<R> {
    pub fn new(kind: VisualKind, rng: R, width: f64, height: f64) -> Self {
        match kind {
            VisualKind::Chaotic => Visual::Chaotic(ChaoticVisual::new(rng, width, height)),
            VisualKind::Coherent => Visual::Coherent(CoherentVisual::new(width, height)),
        }
    }

    pub fn kind(&self) -> VisualKind {
        match self {
            Visual::Chaotic(_) => VisualKind::Chaotic,
            Visual::Coherent(_) => VisualKind::Coherent,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        match self {
            Visual::Chaotic(v) => v.resize(width, height),
            Visual::Coherent(v) => v.resize(width, height),
        }
    }

    pub fn draw(&mut self, surface: &mut impl DrawSurface, progress: f64, dt_sec: f32) {
        match self {
            Visual::Chaotic(v) => v.draw(surface, progress, dt_sec),
            Visual::Coherent(v) => v.draw(surface, progress, dt_sec),
        }
    }
}

/// Styling of the glowing divider between the two canvases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerStyle {
    pub opacity: f64,
    pub glow_px: f64,
    pub glow_alpha: f64,
}

impl DividerStyle {
    pub fn from_progress(progress: f64) -> Self {
        let p = unit(progress);
        Self {
            opacity: 0.3 + p * 0.4,
            glow_px: 20.0 + p * 20.0,
            glow_alpha: 0.3 + p * 0.3,
        }
    }

    /// CSS `box-shadow` value for the divider glow.
    pub fn box_shadow(&self) -> String {
        format!("0 0 {}px {}", self.glow_px, CYAN.with_alpha(self.glow_alpha))
    }
}
