//! Rasterization of shape primitives.
//!
//! Converts continuous shape descriptions (lines, circles, triangles) into
//! the discrete pixel sets that represent them, compositing every pixel
//! through [`Canvas::set_pixel`](crate::canvas::Canvas::set_pixel).

mod primitives;
