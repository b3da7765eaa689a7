//! Integer pixel geometry.
//!
//! The simulation works in whole pixels on a y-down canvas, so positions are
//! [`IVec2`] rather than the float vectors the renderer uses. [`PixelRect`]
//! is the half-open bounding box used for collision.

pub use glam::{IVec2, Mat4, Vec2, Vec3};

/// An axis-aligned, half-open pixel rectangle: `[min.x, max.x) × [min.y, max.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl PixelRect {
    /// Rectangle from a top-left corner and a size.
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Returns `true` if the two rectangles share a non-empty area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Returns `true` if `point` lies inside the rectangle.
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> PixelRect {
        PixelRect::from_pos_size(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn identical_rects_overlap() {
        assert!(rect(10, 10, 32, 32).overlaps(&rect(10, 10, 32, 32)));
    }

    #[test]
    fn edge_touching_is_not_overlap() {
        let a = rect(0, 0, 32, 32);
        assert!(!a.overlaps(&rect(32, 0, 32, 32)));
        assert!(!a.overlaps(&rect(0, 32, 32, 32)));
        assert!(!a.overlaps(&rect(32, 32, 32, 32)));
    }

    #[test]
    fn one_pixel_of_shared_area_overlaps() {
        let a = rect(0, 0, 32, 32);
        assert!(a.overlaps(&rect(31, 31, 32, 32)));
        assert!(rect(31, 31, 32, 32).overlaps(&a));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        assert!(!rect(5, 5, 0, 10).overlaps(&rect(0, 0, 20, 20)));
    }

    #[test]
    fn contains_is_half_open() {
        let r = rect(0, 0, 10, 10);
        assert!(r.contains(IVec2::new(0, 0)));
        assert!(r.contains(IVec2::new(9, 9)));
        assert!(!r.contains(IVec2::new(10, 0)));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 10);
    }
}
