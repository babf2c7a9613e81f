//! Axis-aligned rectangle geometry.
//!
//! Every collision check in the game reduces to `overlaps`, so it stays
//! strict: rectangles that merely touch along an edge do not overlap.

/// Axis-aligned rectangle in playfield units (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Check if two rectangles intersect with nonzero area.
///
/// Strict inequalities on all four sides: sharing an edge is not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}
