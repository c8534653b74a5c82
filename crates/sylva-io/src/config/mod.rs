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

//! Decoder settings: palette, visibility threshold and stream layouts.
//!
//! Settings are stored as RON by default, or as JSON when the file name ends
//! in `.json`. Every field has a default, so a settings file only needs to
//! name what it changes. Loading always validates.

mod settings;

pub use settings::{ColorSpec, DecoderSettings, PaletteSettings, DEFAULT_SETTINGS_FILE};

use std::path::PathBuf;
use sylva_core::{math::color::ColorError, PaletteError};
use thiserror::Error;

/// An error that can occur while loading, saving or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("failed to access settings file '{path}'")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The RON text is not valid settings.
    #[error("invalid RON settings")]
    Ron(#[from] ron::error::SpannedError),
    /// The settings could not be written as RON.
    #[error("failed to serialize settings as RON")]
    RonSerialize(#[from] ron::Error),
    /// The JSON text is not valid settings (or could not be written).
    #[error("invalid JSON settings")]
    Json(#[from] serde_json::Error),
    /// A palette needs at least one slot.
    #[error("palette size must be positive")]
    EmptyPalette,
    /// More colors were listed than the palette has slots.
    #[error("{count} palette color(s) do not fit a palette of size {size}")]
    TooManyColors {
        /// Number of listed colors.
        count: usize,
        /// Declared palette size.
        size: usize,
    },
    /// A listed color is not a valid color.
    #[error("invalid palette color at slot {slot}")]
    InvalidColor {
        /// Palette slot of the color.
        slot: usize,
        /// Why the color was rejected.
        #[source]
        source: ColorError,
    },
    /// The visibility threshold is negative or not finite.
    #[error("minimum visible width must be finite and non-negative, got {0}")]
    InvalidMinimumWidth(f64),
    /// The palette could not be built.
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
