//! Binary PPM (P6) output encoder.
//!
//! The simplest raster container there is: an ASCII header followed by raw
//! RGB triplets. Alpha is discarded; the canvas only ever stores opaque
//! pixels anyway.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PPM (P6) encoder for canvas output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a canvas to a P6 PPM file.
    ///
    /// The stream is `P6\n{width} {height}\n255\n` in ASCII followed by
    /// `width * height * 3` bytes of R, G, B in row-major order. If writing
    /// fails mid-stream a partially written file may remain on disk; no
    /// cleanup is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for an empty path, or [`Error::Io`]
    /// if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        if path.as_ref().as_os_str().is_empty() {
            return Err(Error::InvalidPath);
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&Self::to_bytes(canvas))?;
        writer.flush()?;

        Ok(())
    }

    /// Encode a canvas to an in-memory P6 PPM stream.
    #[must_use]
    pub fn to_bytes(canvas: &Canvas) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", canvas.width(), canvas.height());

        let mut bytes = Vec::with_capacity(header.len() + canvas.pixel_count() * 3);
        bytes.extend_from_slice(header.as_bytes());

        let pixels = canvas.pixels();
        for y in 0..canvas.height() as usize {
            for x in 0..canvas.width() as usize {
                let pixel = pixels[y * canvas.stride() + x];
                bytes.push((pixel >> 24) as u8);
                bytes.push((pixel >> 16) as u8);
                bytes.push((pixel >> 8) as u8);
                // Alpha channel dropped
            }
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_ppm_header_and_payload_size() {
        let canvas = Canvas::new(4, 3).unwrap();
        let bytes = PpmEncoder::to_bytes(&canvas);

        assert!(bytes.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(bytes.len(), b"P6\n4 3\n255\n".len() + 4 * 3 * 3);
    }

    #[test]
    fn test_ppm_drops_alpha() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_pixel(0, 0, Rgba::new(10, 20, 30, 255).pack());

        let bytes = PpmEncoder::to_bytes(&canvas);
        assert_eq!(&bytes[bytes.len() - 3..], &[10, 20, 30]);
    }

    #[test]
    fn test_ppm_empty_path_rejected() {
        let canvas = Canvas::new(2, 2).unwrap();
        let result = PpmEncoder::write_to_file(&canvas, "");
        assert!(matches!(result, Err(Error::InvalidPath)));
    }
}
