//! Primitive rasterization algorithms.
//!
//! Implements line, circle and triangle rasterization as [`Canvas`]
//! methods. All bounds handling is delegated to the canvas's clipping
//! write path (see [`Canvas::set_pixel`](Canvas::set_pixel)): primitives
//! compute coverage in `i64` so extreme coordinates clip instead of
//! overflowing, the canvas clips and composites.

use crate::canvas::Canvas;

impl Canvas {
    /// Draw a straight line between `(x0, y0)` and `(x1, y1)` using
    /// Bresenham's algorithm.
    ///
    /// Both axes carry their own error branch and their own early stop
    /// (`x` frozen once it reaches `x1`, `y` once it reaches `y1`), which
    /// terminates axis-aligned and diagonal lines alike without a step
    /// counter. Not anti-aliased.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let width = i64::from(self.width());
        let height = i64::from(self.height());
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));

        // A segment whose bounding box misses the canvas plots nothing
        if x0.max(x1) < 0 || x0.min(x1) >= width || y0.max(y1) < 0 || y0.min(y1) >= height {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel_wide(x0, y0, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            // Past a canvas edge and still stepping away from it: every
            // remaining pixel clips
            if (sx > 0 && x0 >= width)
                || (sx < 0 && x0 < 0)
                || (sy > 0 && y0 >= height)
                || (sy < 0 && y0 < 0)
            {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Render a filled circle with an anti-aliased edge.
    ///
    /// Scans the bounding square `[cx-r-1, cx+r+1] × [cy-r-1, cy+r+1]`,
    /// clipped to the canvas, and classifies each pixel by its signed
    /// distance to the circle's edge:
    /// negative is fully inside and plots the caller's color as-is, while a
    /// distance within `[0, 1)` falls on the boundary ring and plots with
    /// the color's alpha scaled by `1 - distance`: a linear falloff over
    /// exactly one pixel of ring width. This is the only anti-aliased
    /// primitive.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: u32) {
        let width = i64::from(self.width());
        let height = i64::from(self.height());
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));

        // Only the part of the bounding square that overlaps the canvas can
        // plot anything; an extreme center clamps to an empty scan
        let x_first = (cx - r - 1).max(0);
        let x_last = (cx + r + 1).min(width - 1);
        let y_first = (cy - r - 1).max(0);
        let y_last = (cy + r + 1).min(height - 1);

        for y in y_first..=y_last {
            for x in x_first..=x_last {
                let dx = (x - cx) as f64;
                let dy = (y - cy) as f64;

                let distance_to_edge = (dx * dx + dy * dy).sqrt() - r as f64;

                if distance_to_edge < 0.0 {
                    self.set_pixel_wide(x, y, color);
                } else if distance_to_edge < 1.0 {
                    let opacity = 1.0 - distance_to_edge;

                    let new_alpha = (f64::from(color & 0xFF) * opacity) as u8;
                    let new_color = (color & 0xFFFF_FF00) | u32::from(new_alpha);

                    self.set_pixel_wide(x, y, new_color);
                }
            }
        }
    }

    /// Draw the outline of a circle using the midpoint algorithm.
    ///
    /// Plots all 8 octant-symmetric points per step; a circle partially off
    /// the canvas still renders its in-bounds octants. Not anti-aliased,
    /// unlike [`fill_circle`](Canvas::fill_circle).
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: u32) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        let (mut x, mut y) = (r, 0);
        let mut p = 1 - r;

        self.set_circle_octants(cx, cy, x, y, color);

        while x > y {
            y += 1;
            if p <= 0 {
                p += 2 * y + 1;
            } else {
                x -= 1;
                p += 2 * (y - x) + 1;
            }
            self.set_circle_octants(cx, cy, x, y, color);
        }
    }

    /// Plot the 8 octant-symmetric points of a circle outline.
    fn set_circle_octants(&mut self, cx: i64, cy: i64, x: i64, y: i64, color: u32) {
        self.set_pixel_wide(cx + x, cy + y, color);
        self.set_pixel_wide(cx - x, cy + y, color);
        self.set_pixel_wide(cx + x, cy - y, color);
        self.set_pixel_wide(cx - x, cy - y, color);
        self.set_pixel_wide(cx + y, cy + x, color);
        self.set_pixel_wide(cx - y, cy + x, color);
        self.set_pixel_wide(cx + y, cy - x, color);
        self.set_pixel_wide(cx - y, cy - x, color);
    }

    /// Render a filled triangle from three vertices.
    ///
    /// Vertices are sorted by ascending y, then the triangle is rasterized
    /// in two scanline passes: `y0..=y1` interpolating along the
    /// `(v0, v1)` and `(v0, v2)` edges, and `y1..=y2` along `(v1, v2)` and
    /// `(v0, v2)`. Each scanline plots the inclusive span between the two
    /// interpolated x values. Not anti-aliased.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u32,
    ) {
        let height = i64::from(self.height());
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let (mut x2, mut y2) = (i64::from(x2), i64::from(y2));

        if y1 < y0 {
            (x0, x1) = (x1, x0);
            (y0, y1) = (y1, y0);
        }
        if y2 < y0 {
            (x0, x2) = (x2, x0);
            (y0, y2) = (y2, y0);
        }
        if y2 < y1 {
            (x1, x2) = (x2, x1);
            (y1, y2) = (y2, y1);
        }

        // Scanlines outside the canvas plot nothing; iterate only the rows
        // that can land
        for y in y0.max(0)..=y1.min(height - 1) {
            let xa = interpolate(x0, y0, x1, y1, y);
            let xb = interpolate(x0, y0, x2, y2, y);
            self.scanline(y, xa.min(xb), xa.max(xb), color);
        }

        for y in y1.max(0)..=y2.min(height - 1) {
            let xa = interpolate(x1, y1, x2, y2, y);
            let xb = interpolate(x0, y0, x2, y2, y);
            self.scanline(y, xa.min(xb), xa.max(xb), color);
        }
    }

    /// Draw the outline of a triangle: three lines connecting the vertices
    /// in caller order.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u32,
    ) {
        self.line(x0, y0, x1, y1, color);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x0, y0, color);
    }

    /// Plot the inclusive horizontal span `[xa, xb]` on row `y`, clipped to
    /// the canvas columns.
    fn scanline(&mut self, y: i64, xa: i64, xb: i64, color: u32) {
        let width = i64::from(self.width());
        for x in xa.max(0)..=xb.min(width - 1) {
            self.set_pixel_wide(x, y, color);
        }
    }
}

/// Interpolate x along the edge `(xa, ya)-(xb, yb)` at scanline `y`.
///
/// Returns `xa` unchanged for a horizontal edge; otherwise truncating
/// integer division, which exported images are bit-exact against. The
/// product is taken in `i128` so extreme vertex spreads cannot overflow.
fn interpolate(xa: i64, ya: i64, xb: i64, yb: i64, y: i64) -> i64 {
    if ya == yb {
        return xa;
    }
    xa + ((i128::from(xb - xa) * i128::from(y - ya)) / i128::from(yb - ya)) as i64
}
