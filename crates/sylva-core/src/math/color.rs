// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Color` type stored in palettes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised when a color cannot be built from configuration input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A normalized component is not a finite value in `[0.0, 1.0]`.
    #[error("color channel '{channel}' must be within [0, 1], got {value}")]
    ComponentOutOfRange {
        /// The offending channel (`r`, `g` or `b`).
        channel: char,
        /// The rejected value.
        value: f32,
    },
    /// A hex string is not of the form `#RRGGBB`.
    #[error("malformed hex color '{0}', expected #RRGGBB")]
    MalformedHex(String),
}

/// An opaque RGB color with normalized `f32` components.
///
/// Palette colors are display colors handed to the renderer as-is, so no
/// sRGB/linear conversion happens here.
///
/// `#[repr(C)]` keeps the layout stable for vertex buffers.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Color {
    /// The red component.
    pub r: f32,
    /// The green component.
    pub g: f32,
    /// The blue component.
    pub b: f32,
}

impl Color {
    // --- Common Color Constants ---

    /// Opaque white (`[1.0, 1.0, 1.0]`), the value of every unset palette slot.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red (`[1.0, 0.0, 0.0]`).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green (`[0.0, 1.0, 0.0]`).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue (`[0.0, 0.0, 1.0]`).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Color` without validating the components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a new `Color`, rejecting components outside `[0.0, 1.0]`.
    pub fn try_new(r: f32, g: f32, b: f32) -> Result<Self, ColorError> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::ComponentOutOfRange { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }

    /// Creates a `Color` from 8-bit channels, normalizing them to `[0.0, 1.0]`.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string.
    ///
    /// # Example
    /// ```
    /// use sylva_core::math::Color;
    /// assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::RED);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::MalformedHex(hex.to_string()))
        };

        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts this color to a `#RRGGBB` hex string.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Converts this color to 8-bit channels, clamping out-of-range components.
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Returns the components as an array, the layout vertex buffers expect.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rgb8_normalizes() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_relative_eq!(color.b, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::from_hex("#6495ED").unwrap();
        assert_eq!(color.to_hex(), "#6495ED");
        assert_eq!(Color::from_hex("0000FF").unwrap(), Color::BLUE);
    }

    #[test]
    fn test_malformed_hex_is_rejected() {
        assert!(matches!(
            Color::from_hex("#FFF"),
            Err(ColorError::MalformedHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorError::MalformedHex(_))
        ));
        assert!(Color::from_hex("#ÿÿÿ").is_err());
        // Sign characters and repeated prefixes are not hex digits.
        assert!(matches!(
            Color::from_hex("#+F+F+F"),
            Err(ColorError::MalformedHex(_))
        ));
        assert!(matches!(
            Color::from_hex("##FF0000"),
            Err(ColorError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Color::try_new(0.0, 0.5, 1.0).unwrap(), Color::new(0.0, 0.5, 1.0));
        assert_eq!(
            Color::try_new(0.0, 1.5, 0.0),
            Err(ColorError::ComponentOutOfRange {
                channel: 'g',
                value: 1.5
            })
        );
        assert!(Color::try_new(f32::NAN, 0.0, 0.0).is_err());
        assert!(Color::try_new(0.0, 0.0, -0.1).is_err());
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }
}
