use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An 8-bit per channel sRGB color, the form colors take in import settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Errors returned by [`RgbColor::from_hex`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexColorError {
    /// The string did not hold exactly six hex digits.
    #[error("expected 6 hex digits, found {0} characters")]
    Length(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit in {0:?}")]
    Char(String),
}

impl RgbColor {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, HexColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(HexColorError::Length(hex.len()));
        }
        let channel = |range: core::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| HexColorError::Char(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as lowercase `rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A material color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialColor {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
}

impl MaterialColor {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from normalized channels.
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

impl From<RgbColor> for MaterialColor {
    fn from(color: RgbColor) -> Self {
        Self::new(
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
        )
    }
}
