//! RGBA color with hex parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// A component was not valid hexadecimal.
    #[error("invalid hex digit in color string")]
    InvalidHex,
    /// The string was not 6 or 8 hex characters.
    #[error("hex color must have 6 or 8 digits")]
    InvalidLength,
}

/// RGBA color with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping components to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit RGB components.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// 8-bit RGB components, for front ends that want bytes.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex color string (e.g. "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        // Length and ranges below count bytes; reject multibyte input before
        // slicing.
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidHex)
        };
        match hex.len() {
            6 => Ok(Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => {
                let rgb = Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?);
                Ok(Self::new(
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    f32::from(byte(6..8)?) / 255.0,
                ))
            }
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to a hex string (RGB only).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
