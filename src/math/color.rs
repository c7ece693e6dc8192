use super::{Vec2, Vec3, Vec4};

pub type RG = Vec2;
pub type RGB = Vec3;
pub type RGBA = Vec4;

pub const RED: RGB = RGB::new(255.0, 0.0, 0.0);
pub const GREEN: RGB = RGB::new(0.0, 255.0, 0.0);
pub const BLUE: RGB = RGB::new(0.0, 0.0, 255.0);

pub const BLACK: RGB = RGB::new(0.0, 0.0, 0.0);
pub const WHITE: RGB = RGB::new(255.0, 255.0, 255.0);

pub const BLUEISH: RGB = RGB::new(80.0, 140.0, 255.0);
pub const GRAY: RGB = RGB::new(128.0, 128.0, 128.0);
pub const DARKGRAY: RGB = RGB::new(32.0, 32.0, 32.0);

/// Packs a color into a 32 bit `0xAARRGGBB` pixel with opaque alpha.
///
/// Channels are clamped to 0..=255 and truncated first.
pub fn rgb_to_u32(color: RGB) -> u32 {
    let c = color.clamp255();
    let (r, g, b) = (c.r() as u8, c.g() as u8, c.b() as u8);
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
