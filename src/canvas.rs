//! Core canvas for pixel rendering.
//!
//! The [`Canvas`] owns a flat buffer of packed RGBA pixels and exposes the
//! drawing surface every primitive renders into. All writes go through
//! [`Canvas::set_pixel`], which clips out-of-bounds coordinates and
//! composites through [`blend`]; drawing never assigns a pixel directly.

use crate::color::blend;
use crate::error::{Error, Result};

/// Owned pixel buffer plus its dimensions; the unit of state all drawing
/// operates on.
///
/// Pixels are packed `R<<24 | G<<16 | B<<8 | A` values in row-major order,
/// top-left origin, y increasing downward, indexed as `row * stride + col`.
///
/// # Example
///
/// ```
/// use lienzo::canvas::Canvas;
/// use lienzo::color::Rgba;
///
/// let mut canvas = Canvas::new(64, 64).unwrap();
/// canvas.fill(Rgba::WHITE.pack());
/// canvas.fill_rect(8, 8, 16, 16, Rgba::RED.pack());
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels per row in the backing buffer. Equals `width` today; kept as
    /// a separate field so a padded or tiled layout would not change the
    /// pixel-addressing contract.
    stride: usize,
    /// Packed RGBA pixels, `width * height` of them, row-major.
    pixels: Vec<u32>,
}

/// A requested rectangle after clipping to canvas bounds.
///
/// Ephemeral: produced by [`Canvas::normalize_rect`] for the duration of a
/// single drawing call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRect {
    /// Left edge, clamped to `>= 0`.
    pub x1: i32,
    /// Top edge, clamped to `>= 0`.
    pub y1: i32,
    /// Right edge (`x1 + clipped width`), clamped to `<= width`.
    pub x2: i32,
    /// Bottom edge (`y1 + clipped height`), clamped to `<= height`.
    pub y2: i32,
}

impl Canvas {
    /// Create a new canvas with the given dimensions.
    ///
    /// The buffer starts zero-filled: transparent black, which the first
    /// [`fill`](Canvas::fill) composites over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let stride = width as usize;
        let pixels = vec![0u32; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            stride,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (pixels per row in the backing buffer).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the packed pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get the packed color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[self.pixel_index(x, y)])
    }

    /// Composite `color` over the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are silently dropped, never an error; this
    /// is the single bounds-check choke point for every primitive. In-bounds
    /// writes always go through [`blend`], so an opaque color overwrites and
    /// a fully transparent one leaves the background untouched.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.set_pixel_wide(i64::from(x), i64::from(y), color);
    }

    /// Widened twin of [`set_pixel`](Canvas::set_pixel), same clipping
    /// contract. Primitives run their loop arithmetic in `i64` so extreme
    /// coordinates clip instead of overflowing, and plot through this.
    pub(crate) fn set_pixel_wide(&mut self, x: i64, y: i64, color: u32) {
        if x < 0 || x >= i64::from(self.width) || y < 0 || y >= i64::from(self.height) {
            return;
        }

        let index = (y as usize) * self.stride + (x as usize);
        self.pixels[index] = blend(self.pixels[index], color);
    }

    /// Clip a requested rectangle to canvas bounds.
    ///
    /// A negative near edge is clamped to zero by shrinking the width or
    /// height (the far edge shifts, the near edge does not). Returns `None`
    /// when the clipped width or height is zero or negative.
    #[must_use]
    pub fn normalize_rect(&self, x: i32, y: i32, w: i32, h: i32) -> Option<NormalizedRect> {
        let width = i64::from(self.width);
        let height = i64::from(self.height);

        // Clip in i64: x + w on extreme inputs must clip, not overflow
        let (mut x, mut y, mut w, mut h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));

        if x < 0 {
            w += x;
            x = 0;
        }
        if x + w > width {
            w = width - x;
        }

        if y < 0 {
            h += y;
            y = 0;
        }
        if y + h > height {
            h = height - y;
        }

        if w <= 0 || h <= 0 {
            return None;
        }

        Some(NormalizedRect {
            x1: x as i32,
            y1: y as i32,
            x2: (x + w) as i32,
            y2: (y + h) as i32,
        })
    }

    /// Composite `color` over every pixel of the canvas.
    pub fn fill(&mut self, color: u32) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Render a filled rectangle.
    ///
    /// The clipped bounds are iterated inclusive of both edges, so an
    /// unclipped rectangle of width `w` covers `w + 1` columns (and `h + 1`
    /// rows). Exported images depend on this coverage; it is intentionally
    /// not harmonized with [`draw_rect`](Canvas::draw_rect)'s exclusive
    /// iteration.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: u32) {
        let Some(nr) = self.normalize_rect(x0, y0, w, h) else {
            return;
        };

        for y in nr.y1..=nr.y2 {
            for x in nr.x1..=nr.x2 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Draw the outline of a rectangle.
    ///
    /// Paints the top and bottom rows over `x0..x0+w` and the left and
    /// right columns over `y0..y0+h`, exclusive of the far edge.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: u32) {
        let width = i64::from(self.width);
        let height = i64::from(self.height);
        let (x0, y0, w, h) = (i64::from(x0), i64::from(y0), i64::from(w), i64::from(h));

        // Only the in-canvas portion of each boundary line can plot
        let x_first = x0.max(0);
        let x_last = (x0 + w).min(width);
        let y_first = y0.max(0);
        let y_last = (y0 + h).min(height);

        // Top and bottom
        for row in [y0, y0 + h - 1] {
            if (0..height).contains(&row) {
                for x in x_first..x_last {
                    self.set_pixel_wide(x, row, color);
                }
            }
        }

        // Left and right
        for col in [x0, x0 + w - 1] {
            if (0..width).contains(&col) {
                for y in y_first..y_last {
                    self.set_pixel_wide(col, y, color);
                }
            }
        }
    }

    /// Flatten the canvas to raw bytes, four per pixel in R, G, B, A order,
    /// row-major with no padding.
    ///
    /// This is the exact layout a display surface expects when uploading
    /// the canvas as a streaming texture: `width * height * 4` bytes,
    /// `width * 4` bytes per row. Returns an empty vec if the canvas holds
    /// no pixels; callers presenting the buffer must supply their own
    /// fallback rather than indexing into it.
    #[must_use]
    pub fn pixels_to_bytes(&self) -> Vec<u8> {
        if self.pixels.is_empty() {
            return Vec::new();
        }

        let mut bytes = Vec::with_capacity(self.pixel_count() * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                let pixel = self.pixels[(y as usize) * self.stride + (x as usize)];
                bytes.push((pixel >> 24) as u8);
                bytes.push((pixel >> 16) as u8);
                bytes.push((pixel >> 8) as u8);
                bytes.push(pixel as u8);
            }
        }

        bytes
    }

    /// Calculate the buffer index for an in-bounds pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        (y as usize) * self.stride + (x as usize)
    }
}
