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

//! Defines the indexed color table streams refer to.

use crate::error::PaletteError;
use crate::math::Color;

/// The number of slots a palette has unless configured otherwise.
pub const DEFAULT_PALETTE_SIZE: usize = 3;

/// A small, fixed-size, ordered table of colors addressed by stream indices.
///
/// The palette is owned by the caller and borrowed by each decode call; it is
/// only mutated through [`set`](Palette::set), [`reset`](Palette::reset) and
/// [`resize`](Palette::resize). Unset slots hold opaque white.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette with `size` white slots.
    pub fn new(size: usize) -> Result<Self, PaletteError> {
        if size == 0 {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            colors: vec![Color::WHITE; size],
        })
    }

    /// Creates a palette holding exactly the given colors.
    pub fn with_colors(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Returns the color at `index`.
    pub fn get(&self, index: usize) -> Result<Color, PaletteError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Replaces the color at `index`.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), PaletteError> {
        let size = self.size();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, size })?;
        *slot = color;
        Ok(())
    }

    /// Returns the number of slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    /// Sets every slot back to opaque white.
    pub fn reset(&mut self) {
        self.colors.fill(Color::WHITE);
    }

    /// Changes the number of slots. New slots are white; surplus slots are dropped.
    pub fn resize(&mut self, size: usize) -> Result<(), PaletteError> {
        if size == 0 {
            return Err(PaletteError::Empty);
        }
        log::trace!("Resizing palette from {} to {} slots", self.size(), size);
        self.colors.resize(size, Color::WHITE);
        Ok(())
    }

    /// Iterates over the colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Color::WHITE; DEFAULT_PALETTE_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_three_whites() {
        let palette = Palette::default();
        assert_eq!(palette.size(), 3);
        assert!(palette.iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(Palette::new(0), Err(PaletteError::Empty));
        assert_eq!(Palette::with_colors(Vec::new()), Err(PaletteError::Empty));
        assert_eq!(Palette::default().resize(0), Err(PaletteError::Empty));
    }

    #[test]
    fn test_get_and_set() {
        let mut palette = Palette::new(3).unwrap();
        palette.set(1, Color::RED).unwrap();
        assert_eq!(palette.get(1), Ok(Color::RED));
        assert_eq!(palette.get(0), Ok(Color::WHITE));
    }

    #[test]
    fn test_out_of_range_is_an_error_not_a_clamp() {
        let mut palette = Palette::new(3).unwrap();
        assert_eq!(
            palette.get(3),
            Err(PaletteError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(
            palette.set(7, Color::BLUE),
            Err(PaletteError::IndexOutOfRange { index: 7, size: 3 })
        );
        assert!(palette.iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_reset_and_resize() {
        let mut palette =
            Palette::with_colors(vec![Color::RED, Color::GREEN, Color::BLUE]).unwrap();
        palette.resize(4).unwrap();
        assert_eq!(palette.get(2), Ok(Color::BLUE));
        assert_eq!(palette.get(3), Ok(Color::WHITE));

        palette.resize(2).unwrap();
        assert_eq!(palette.size(), 2);

        palette.reset();
        assert_eq!(palette.get(0), Ok(Color::WHITE));
        assert_eq!(palette.get(1), Ok(Color::WHITE));
    }
}
