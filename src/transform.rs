//! Point transforms for animating shape vertices.

use std::f64::consts::PI;

/// Rotate `(x, y)` around the pivot `(cx, cy)` by `angle` degrees.
///
/// Pure function with no canvas interaction; callers typically rotate a
/// shape's vertices each frame and redraw.
///
/// # Example
///
/// ```
/// use lienzo::transform::rotate_point;
///
/// let (x, y) = rotate_point(0.0, 0.0, 1.0, 0.0, 90.0);
/// assert!(x.abs() < 1e-9);
/// assert!((y - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn rotate_point(cx: f64, cy: f64, x: f64, y: f64, angle: f64) -> (f64, f64) {
    let rad = degrees_to_radians(angle);
    let cos = rad.cos();
    let sin = rad.sin();

    let x = x - cx;
    let y = y - cy;

    let new_x = x * cos - y * sin;
    let new_y = x * sin + y * cos;

    (new_x + cx, new_y + cy)
}

fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_zero_degrees_is_identity() {
        let (x, y) = rotate_point(5.0, 5.0, 8.0, 3.0, 0.0);
        assert!((x - 8.0).abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let (x, y) = rotate_point(0.0, 0.0, 1.0, 0.0, 90.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let (x, y) = rotate_point(3.0, 4.0, 10.0, -2.0, 360.0);
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - -2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_about_offset_pivot() {
        // (6, 5) rotated 180 degrees around (5, 5) lands at (4, 5)
        let (x, y) = rotate_point(5.0, 5.0, 6.0, 5.0, 180.0);
        assert!((x - 4.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_preserves_pivot_distance() {
        let (cx, cy) = (3.0, 7.0);
        let (x0, y0) = (11.0, 2.0);
        let (x1, y1) = rotate_point(cx, cy, x0, y0, 37.0);

        let d0 = ((x0 - cx).powi(2) + (y0 - cy).powi(2)).sqrt();
        let d1 = ((x1 - cx).powi(2) + (y1 - cy).powi(2)).sqrt();
        assert!((d0 - d1).abs() < 1e-9);
    }
}
