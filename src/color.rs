//! Color types and alpha compositing.
//!
//! Colors cross the public API as a single packed 32-bit value,
//! `R<<24 | G<<16 | B<<8 | A`. The [`Rgba`] struct gives the same value
//! named channels for code that prefers them; the two forms convert
//! losslessly in both directions.

/// RGBA color with 8-bit components.
///
/// The packed form `R<<24 | G<<16 | B<<8 | A` is the canonical wire
/// representation; see [`Rgba::pack`] and [`Rgba::from_packed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Pack into the canonical `R<<24 | G<<16 | B<<8 | A` form.
    #[must_use]
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
    }

    /// Unpack from the canonical `R<<24 | G<<16 | B<<8 | A` form.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self::new(
            ((packed >> 24) & 0xFF) as u8,
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.pack()
    }
}

/// Composite `foreground` over `background` using the foreground's alpha.
///
/// `alpha = fg.a / 255`; each of R, G, B becomes
/// `bg.ch * (1 - alpha) + fg.ch * alpha`, truncated toward zero. The
/// result's alpha is always forced to 255: the canvas never stores a
/// translucent pixel, alpha is consumed as a mixing weight only.
///
/// Truncation (not rounding) is part of the output contract; exported
/// images are bit-exact against it.
#[must_use]
pub fn blend(background: u32, foreground: u32) -> u32 {
    let bg = Rgba::from_packed(background);
    let fg = Rgba::from_packed(foreground);

    let alpha = f64::from(fg.a) / 255.0;

    let r = (f64::from(bg.r) * (1.0 - alpha) + f64::from(fg.r) * alpha) as u8;
    let g = (f64::from(bg.g) * (1.0 - alpha) + f64::from(fg.g) * alpha) as u8;
    let b = (f64::from(bg.b) * (1.0 - alpha) + f64::from(fg.b) * alpha) as u8;

    Rgba::new(r, g, b, 0xFF).pack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_pack_unpack() {
        let color = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.pack(), 0x1234_5678);
        assert_eq!(Rgba::from_packed(0x1234_5678), color);
    }

    #[test]
    fn test_pack_known_values() {
        assert_eq!(Rgba::RED.pack(), 0xFF00_00FF);
        assert_eq!(Rgba::GREEN.pack(), 0x00FF_00FF);
        assert_eq!(Rgba::BLUE.pack(), 0x0000_FFFF);
        assert_eq!(Rgba::TRANSPARENT.pack(), 0x0000_0000);
    }

    #[test]
    fn test_from_trait_round_trip() {
        let packed: u32 = Rgba::new(10, 20, 30, 40).into();
        let color: Rgba = packed.into();
        assert_eq!(color, Rgba::new(10, 20, 30, 40));
    }

    #[test]
    fn test_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_blend_opaque_foreground_overwrites() {
        let bg = Rgba::rgb(10, 20, 30).pack();
        let fg = Rgba::RED.pack();
        assert_eq!(blend(bg, fg), fg);
    }

    #[test]
    fn test_blend_transparent_foreground_keeps_background() {
        let bg = Rgba::rgb(10, 20, 30).pack();
        let fg = Rgba::RED.with_alpha(0).pack();
        assert_eq!(blend(bg, fg), Rgba::rgb(10, 20, 30).pack());
    }

    #[test]
    fn test_blend_forces_opaque_result() {
        let bg = Rgba::new(0, 0, 0, 0).pack();
        let fg = Rgba::new(200, 100, 50, 77).pack();
        assert_eq!(blend(bg, fg) & 0xFF, 0xFF);
    }

    #[test]
    fn test_blend_truncates_channels() {
        // alpha 128/255 over black: 200 * (128/255) = 100.39..., truncates to 100
        let bg = Rgba::BLACK.pack();
        let fg = Rgba::new(200, 0, 0, 128).pack();
        let out = Rgba::from_packed(blend(bg, fg));
        assert_eq!(out.r, 100);
        assert_eq!(out.g, 0);
        assert_eq!(out.b, 0);
    }

    #[test]
    fn test_blend_half_alpha_midpoint() {
        // 255 * 0.5 with alpha 127/255 lands just below 127
        let bg = Rgba::BLACK.pack();
        let fg = Rgba::WHITE.with_alpha(127).pack();
        let out = Rgba::from_packed(blend(bg, fg));
        assert_eq!(out.r, 127);
    }
}
