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

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sylva_core::{
    math::color::ColorError, palette::DEFAULT_PALETTE_SIZE, Color, Palette, StreamLayout,
};
use sylva_lanes::{
    decode_lane::batching::DEFAULT_MINIMUM_VISIBLE_WIDTH, LineDecoderConfig,
    PolygonDecoderConfig, SceneDecoder,
};

/// File name the sandbox looks for when no settings path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "sylva.ron";

/// A palette color as written in a settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorSpec {
    /// Normalized components in `[0, 1]`.
    Rgb(f32, f32, f32),
    /// 8-bit components.
    Rgb8(u8, u8, u8),
    /// A `#RRGGBB` string.
    Hex(String),
}

impl ColorSpec {
    /// Resolves the written form into a color.
    pub fn to_color(&self) -> Result<Color, ColorError> {
        match self {
            ColorSpec::Rgb(r, g, b) => Color::try_new(*r, *g, *b),
            ColorSpec::Rgb8(r, g, b) => Ok(Color::from_rgb8(*r, *g, *b)),
            ColorSpec::Hex(hex) => Color::from_hex(hex),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgb(color.r, color.g, color.b)
    }
}

/// Palette section of the settings.
///
/// Slots past the listed colors start out white.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Number of slots.
    pub size: usize,
    /// Colors of the first slots, in slot order.
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_PALETTE_SIZE,
            colors: Vec::new(),
        }
    }
}

/// Complete decoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    /// The palette the streams index into.
    pub palette: PaletteSettings,
    /// Line records thinner than this produce no segment.
    pub minimum_visible_width: f64,
    /// Optional fields of line records.
    pub line_layout: StreamLayout,
    /// Optional fields of polygon records (only the color field applies).
    pub polygon_layout: StreamLayout,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            palette: PaletteSettings::default(),
            minimum_visible_width: DEFAULT_MINIMUM_VISIBLE_WIDTH,
            line_layout: StreamLayout::FULL,
            polygon_layout: StreamLayout::FULL,
        }
    }
}

impl DecoderSettings {
    /// Parses and validates settings written as RON.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parses and validates settings written as JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a file, as JSON if its extension is `.json` and as RON otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = if is_json(path) {
            Self::from_json_str(&text)?
        } else {
            Self::from_ron_str(&text)?
        };
        log::debug!("Loaded decoder settings from '{}'", path.display());
        Ok(settings)
    }

    /// Renders the settings as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Saves the settings, choosing the format from the extension like [`Self::from_file`].
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_ron_string()?
        };
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks every value a decoder would otherwise reject at run time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.palette.size;
        if size == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if self.palette.colors.len() > size {
            return Err(ConfigError::TooManyColors {
                count: self.palette.colors.len(),
                size,
            });
        }
        for (slot, spec) in self.palette.colors.iter().enumerate() {
            spec.to_color()
                .map_err(|source| ConfigError::InvalidColor { slot, source })?;
        }
        if !self.minimum_visible_width.is_finite() || self.minimum_visible_width < 0.0 {
            return Err(ConfigError::InvalidMinimumWidth(self.minimum_visible_width));
        }
        Ok(())
    }

    /// Builds the palette described by these settings.
    pub fn build_palette(&self) -> Result<Palette, ConfigError> {
        self.validate()?;

        let mut palette = Palette::new(self.palette.size)?;
        for (slot, spec) in self.palette.colors.iter().enumerate() {
            let color = spec
                .to_color()
                .map_err(|source| ConfigError::InvalidColor { slot, source })?;
            palette.set(slot, color)?;
        }
        Ok(palette)
    }

    /// The line decoder configuration described by these settings.
    pub fn line_decoder_config(&self) -> LineDecoderConfig {
        LineDecoderConfig {
            layout: self.line_layout,
            minimum_visible_width: self.minimum_visible_width,
        }
    }

    /// The polygon decoder configuration described by these settings.
    pub fn polygon_decoder_config(&self) -> PolygonDecoderConfig {
        PolygonDecoderConfig {
            layout: self.polygon_layout,
        }
    }

    /// A scene decoder configured from these settings.
    pub fn scene_decoder(&self) -> SceneDecoder {
        SceneDecoder::with_configs(self.line_decoder_config(), self.polygon_decoder_config())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_decoder_defaults() {
        let settings = DecoderSettings::default();
        assert_eq!(settings.palette.size, 3);
        assert_eq!(settings.line_decoder_config(), LineDecoderConfig::default());
        assert_eq!(
            settings.build_palette().unwrap(),
            Palette::new(3).unwrap()
        );
    }

    #[test]
    fn test_ron_with_partial_fields() {
        let settings = DecoderSettings::from_ron_str(
            r##"(
                palette: (colors: [Rgb(1.0, 1.0, 1.0), Hex("#FF0000"), Rgb8(0, 0, 255)]),
                minimum_visible_width: 0.5,
            )"##,
        )
        .unwrap();

        assert_eq!(settings.minimum_visible_width, 0.5);
        assert_eq!(settings.line_layout, StreamLayout::FULL);

        let palette = settings.build_palette().unwrap();
        assert_eq!(palette.size(), 3);
        assert_eq!(palette.get(1).unwrap(), Color::RED);
        assert_eq!(palette.get(2).unwrap(), Color::BLUE);
    }

    #[test]
    fn test_json_settings() {
        let settings = DecoderSettings::from_json_str(
            r##"{
                "palette": { "size": 4, "colors": [{ "Hex": "#00FF00" }] },
                "line_layout": { "has_color_field": false, "has_width_field": false }
            }"##,
        )
        .unwrap();

        assert_eq!(settings.line_layout, StreamLayout::BARE);
        let palette = settings.build_palette().unwrap();
        assert_eq!(palette.size(), 4);
        assert_eq!(palette.get(0).unwrap(), Color::GREEN);
        assert_eq!(palette.get(3).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = DecoderSettings::default();
        settings.palette.size = 0;
        assert!(matches!(settings.validate(), Err(ConfigError::EmptyPalette)));

        let mut settings = DecoderSettings::default();
        settings.palette.size = 1;
        settings.palette.colors = vec![ColorSpec::Rgb8(0, 0, 0), ColorSpec::Rgb8(1, 1, 1)];
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::TooManyColors { count: 2, size: 1 })
        ));

        let mut settings = DecoderSettings::default();
        settings.palette.colors = vec![ColorSpec::Rgb(0.0, 0.0, 0.0), ColorSpec::Rgb(1.5, 0.0, 0.0)];
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidColor { slot: 1, .. })
        ));

        let mut settings = DecoderSettings::default();
        settings.palette.colors = vec![ColorSpec::Hex("#GG0000".to_string())];
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidColor { slot: 0, .. })
        ));

        for width in [-0.1, f64::NAN, f64::INFINITY] {
            let settings = DecoderSettings {
                minimum_visible_width: width,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(ConfigError::InvalidMinimumWidth(_))
            ));
        }
    }

    #[test]
    fn test_ron_output_reads_back() {
        let settings = DecoderSettings {
            palette: PaletteSettings {
                size: 2,
                colors: vec![Color::RED.into(), ColorSpec::Hex("#0000FF".to_string())],
            },
            minimum_visible_width: 0.25,
            line_layout: StreamLayout::BARE,
            polygon_layout: StreamLayout::FULL,
        };

        let text = settings.to_ron_string().unwrap();
        assert_eq!(DecoderSettings::from_ron_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_scene_decoder_uses_settings() {
        let settings = DecoderSettings {
            minimum_visible_width: 0.0,
            ..Default::default()
        };
        let decoder = settings.scene_decoder();
        assert_eq!(decoder.line_lane().config().minimum_visible_width, 0.0);
    }
}
