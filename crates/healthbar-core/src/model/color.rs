/// ARGB colour value used by every painted element.
///
/// Colours are stored as a packed `0xAARRGGBB` integer, the same layout the
/// attribute bag and resource tables use, so an unresolvable resource id can
/// be reinterpreted as a literal colour without conversion.
use crate::error::HealthBarError;
use serde::{Deserialize, Serialize};

/// A packed `0xAARRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xff00_0000);
    pub const WHITE: Color = Color(0xffff_ffff);

    /// Build from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Build an opaque colour from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb_channels(0xff, r, g, b)
    }

    pub const fn from_argb_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_rgba_array(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Linear interpolation between two colours, `t` clamped to `[0, 1]`.
    ///
    /// Positions left of the start or right of the end take the endpoint
    /// colour, matching how the fill gradient is clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
        Color::from_argb_channels(
            mix(self.a(), other.a()),
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }

    /// Parse `#RRGGBB`, `#AARRGGBB`, or `0xAARRGGBB`.
    pub fn parse(text: &str) -> Result<Color, HealthBarError> {
        let trimmed = text.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| HealthBarError::InvalidColor(text.to_string()))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HealthBarError::InvalidColor(text.to_string()));
        }

        let raw = u32::from_str_radix(hex, 16)
            .map_err(|_| HealthBarError::InvalidColor(text.to_string()))?;

        match hex.len() {
            6 => Ok(Color(0xff00_0000 | raw)),
            8 => Ok(Color(raw)),
            _ => Err(HealthBarError::InvalidColor(text.to_string())),
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}
