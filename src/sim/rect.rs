//! Axis-aligned rectangle geometry for sprites
//!
//! Every entity carries a bounding rectangle anchored at a floating-point
//! center. Edges and anchor points (midtop, midbottom) mirror the way the
//! sprites are positioned on screen: y grows downward.

use glam::Vec2;

/// A center-anchored, axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center point
    pub center: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build a rect whose bottom-center edge sits at `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            center: Vec2::new(midbottom.x, midbottom.y - size.y / 2.0),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Top-left corner (blit origin)
    #[inline]
    pub fn topleft(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// Center of the top edge
    #[inline]
    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.center.x, self.top())
    }

    /// Center of the bottom edge
    #[inline]
    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.center.x, self.bottom())
    }

    /// Strict overlap test; rects that merely touch along an edge do not
    /// count as intersecting
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Grow (or shrink, with negative amounts) around the same center
    pub fn inflate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            center: self.center,
            size: Vec2::new(self.size.x + dx, self.size.y + dy),
        }
    }

    /// Shift by an offset
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect {
            center: self.center + offset,
            size: self.size,
        }
    }
}

/// Bounding box of `size` rotated by `angle_deg` about its center.
///
/// Used to re-derive a rotated sprite's rect each tick from the immutable
/// base image dimensions, so repeated rotation accumulates no error.
pub fn rotated_bounds(size: Vec2, angle_deg: f32) -> Vec2 {
    let a = angle_deg.to_radians();
    let (sin, cos) = (a.sin().abs(), a.cos().abs());
    Vec2::new(
        snap(size.x * cos + size.y * sin),
        snap(size.x * sin + size.y * cos),
    )
}

/// Absorb trig roundoff so exact right angles keep exact pixel dimensions
/// once the bounds are ceiled
fn snap(v: f32) -> f32 {
    let r = v.round();
    if (v - r).abs() < 1e-3 { r } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_anchors() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.left(), 90.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 45.0);
        assert_eq!(r.bottom(), 55.0);
        assert_eq!(r.midtop(), Vec2::new(100.0, 45.0));
        assert_eq!(r.midbottom(), Vec2::new(100.0, 55.0));
    }

    #[test]
    fn test_from_midbottom_round_trips() {
        let r = Rect::from_midbottom(Vec2::new(40.0, 100.0), Vec2::new(8.0, 30.0));
        assert_eq!(r.midbottom(), Vec2::new(40.0, 100.0));
        assert_eq!(r.top(), 70.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::from_center(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::from_center(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Rect::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let d = Rect::from_center(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        // Touching edges is not an overlap
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_inflate_keeps_center() {
        let r = Rect::from_center(Vec2::new(5.0, 5.0), Vec2::new(10.0, 4.0));
        let grown = r.inflate(20.0, 10.0);
        assert_eq!(grown.center, r.center);
        assert_eq!(grown.size, Vec2::new(30.0, 14.0));
    }

    #[test]
    fn test_rotated_bounds() {
        let size = Vec2::new(100.0, 40.0);
        // No rotation: unchanged
        assert_eq!(rotated_bounds(size, 0.0), size);
        // Quarter turn: exactly swapped, so ceiling never inflates pixel
        // dimensions at right angles
        let quarter = rotated_bounds(size, 90.0);
        assert_eq!(quarter, Vec2::new(40.0, 100.0));
        assert_eq!(rotated_bounds(size, 180.0), size);
        assert_eq!(rotated_bounds(size, 270.0), Vec2::new(40.0, 100.0));
        // 45 degrees: grows in both directions
        let diag = rotated_bounds(size, 45.0);
        assert!(diag.x > 98.0 && diag.y > 98.0);
        // Full turn: back to the original
        let full = rotated_bounds(size, 360.0);
        assert!((full - size).length() < 1e-3);
    }
}
