//! Layout geometry as measured from the DOM.
//!
//! Values are CSS pixels in viewport coordinates, the same space that
//! `getBoundingClientRect` reports.

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rectangles, or `None` when they are disjoint.
    /// Edge-adjacent rectangles overlap with zero area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }

    /// Grow (or shrink, for negative values) each edge.
    pub fn expand(&self, top: f64, right: f64, bottom: f64, left: f64) -> Rect {
        Rect::new(
            self.left - left,
            self.top - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }
}

/// Everything the scroll metrics need from a single layout read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutGeometry {
    pub viewport_height: f64,
    /// Top edge of the tracked region relative to the viewport top.
    pub region_top: f64,
    pub region_height: f64,
    /// Document scroll offset (`window.scrollY`).
    pub scroll_y: f64,
}

impl LayoutGeometry {
    pub fn from_rect(viewport_height: f64, region: Rect, scroll_y: f64) -> Self {
        Self {
            viewport_height,
            region_top: region.top,
            region_height: region.height,
            scroll_y,
        }
    }
}
