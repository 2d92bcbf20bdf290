//! Output encoders (PPM, PNG).

mod png_encoder;
mod ppm;

pub use png_encoder::PngEncoder;
pub use ppm::PpmEncoder;
