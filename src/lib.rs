//! # Lienzo
//!
//! Software 2D rasterizer: an alpha-compositing pixel canvas with shape
//! primitives and PPM/PNG export. Pure Rust, no GPU, no windowing: lienzo
//! renders into memory and hands the bytes to whatever wants them.
//!
//! ## Features
//!
//! - **Owned canvas**: a flat packed-RGBA buffer with silent bounds
//!   clipping; offscreen drawing is a no-op, never an error
//! - **Compositing everywhere**: every pixel write blends through the
//!   foreground's alpha channel
//! - **Primitives**: fill, rectangles, Bresenham lines, midpoint circles
//!   (filled variant with an anti-aliased edge), scanline triangles
//! - **Exports**: binary P6 PPM, 8-bit RGBA PNG, and a raw byte buffer
//!   ready for streaming-texture upload
//!
//! ## Quick Start
//!
//! ```
//! use lienzo::prelude::*;
//!
//! let mut canvas = Canvas::new(256, 256)?;
//! canvas.fill(Rgba::rgb(24, 24, 32).pack());
//! canvas.fill_circle(128, 128, 80, Rgba::RED.pack());
//! canvas.line(0, 0, 255, 255, Rgba::WHITE.pack());
//!
//! let png = PngEncoder::to_bytes(&canvas)?;
//! # assert!(!png.is_empty());
//! # Ok::<(), lienzo::Error>(())
//! ```
//!
//! ## Color encoding
//!
//! Every drawing call takes a single packed 32-bit value,
//! `R<<24 | G<<16 | B<<8 | A`; `0xFF0000FF` is opaque red. The
//! [`Rgba`](color::Rgba) struct converts to and from the packed form.
//!
//! The core is strictly single-threaded: the canvas is exclusively owned,
//! drawing calls run to completion, and exporters only read.

#![warn(missing_docs)]
// Allow common patterns in graphics/rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

/// Color types and alpha compositing.
pub mod color;

/// Core canvas for pixel rendering.
pub mod canvas;

/// Rasterization of shape primitives.
pub mod render;

/// Point transforms for animating shape vertices.
pub mod transform;

/// Output encoders (PPM, PNG).
pub mod output;

/// Error types for lienzo operations.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use lienzo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, NormalizedRect};
    pub use crate::color::{blend, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::output::{PngEncoder, PpmEncoder};
    pub use crate::transform::rotate_point;
}
