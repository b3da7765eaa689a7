//! Canvas-to-window mapping.
//!
//! The game draws on a fixed canvas (1000×800 by default) with the origin at
//! the top-left and y pointing down. The window can be any size; the canvas
//! is scaled uniformly to fit and centered, leaving bars on the sides or on
//! top and bottom.

use crate::math::{Mat4, Vec2};

/// Rectangle of the surface the canvas is drawn into, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Largest centered rectangle with the canvas aspect ratio that fits the surface.
pub fn fit_canvas(surface: (u32, u32), canvas: Vec2) -> Viewport {
    let surface_w = surface.0.max(1) as f32;
    let surface_h = surface.1.max(1) as f32;
    let scale = (surface_w / canvas.x).min(surface_h / canvas.y);
    let width = canvas.x * scale;
    let height = canvas.y * scale;
    Viewport {
        x: (surface_w - width) * 0.5,
        y: (surface_h - height) * 0.5,
        width,
        height,
    }
}

/// Orthographic projection for canvas pixels: (0,0) top-left, y down.
pub fn canvas_projection(canvas: Vec2) -> Mat4 {
    Mat4::orthographic_rh(0.0, canvas.x, canvas.y, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    const CANVAS: Vec2 = Vec2::new(1000.0, 800.0);

    #[test]
    fn matching_surface_fills_exactly() {
        let vp = fit_canvas((1000, 800), CANVAS);
        assert_eq!(vp, Viewport { x: 0.0, y: 0.0, width: 1000.0, height: 800.0 });
    }

    #[test]
    fn wide_surface_gets_side_bars() {
        let vp = fit_canvas((2000, 800), CANVAS);
        assert_eq!(vp.width, 1000.0);
        assert_eq!(vp.height, 800.0);
        assert_eq!(vp.x, 500.0);
        assert_eq!(vp.y, 0.0);
    }

    #[test]
    fn tall_surface_gets_top_and_bottom_bars() {
        let vp = fit_canvas((500, 800), CANVAS);
        assert_eq!(vp.width, 500.0);
        assert_eq!(vp.height, 400.0);
        assert_eq!(vp.x, 0.0);
        assert_eq!(vp.y, 200.0);
    }

    #[test]
    fn minimized_surface_does_not_divide_by_zero() {
        let vp = fit_canvas((0, 0), CANVAS);
        assert!(vp.width.is_finite() && vp.height.is_finite());
    }

    #[test]
    fn projection_maps_top_left_and_bottom_right_corners() {
        let proj = canvas_projection(CANVAS);
        let top_left = proj.project_point3(Vec3::ZERO);
        let bottom_right = proj.project_point3(Vec3::new(1000.0, 800.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 1e-5 && (top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_right.x - 1.0).abs() < 1e-5 && (bottom_right.y + 1.0).abs() < 1e-5);
    }
}
