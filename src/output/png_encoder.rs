//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. The canvas supplies one
//! 8-bit RGBA sample per pixel in row-major order; everything past that
//! (filtering, compression, chunk layout) belongs to the codec.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file (8-bit RGBA).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for an empty path; file creation and
    /// codec failures propagate unchanged as [`Error::Io`] and
    /// [`Error::PngEncoding`].
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        if path.as_ref().as_os_str().is_empty() {
            return Err(Error::InvalidPath);
        }

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Self::encode(canvas, writer)
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: std::io::Write>(canvas: &Canvas, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&canvas.pixels_to_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_png_to_bytes_magic() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.fill(Rgba::RED.pack());

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_empty_path_rejected() {
        let canvas = Canvas::new(2, 2).unwrap();
        let result = PngEncoder::write_to_file(&canvas, "");
        assert!(matches!(result, Err(Error::InvalidPath)));
    }
}
