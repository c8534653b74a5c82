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

//! Lanes decoding the generator's flat scalar streams.

pub mod batching;
pub mod encoder;
mod line_decoder_lane;
mod polygon_decoder_lane;

pub use line_decoder_lane::{LineBatchDecoderLane, LineDecoderConfig, DEFAULT_LINE_WIDTH};
pub use polygon_decoder_lane::{PolygonDecoderConfig, PolygonDecoderLane, MIN_POLYGON_VERTICES};

use sylva_core::{
    lane::Lane, Color, DecodeError, Palette, PaletteError, StreamKind, StreamReader,
};

/// A lane that decodes one flat stream into a sequence of records.
///
/// Records are appended to `out` as soon as they are complete. When decoding
/// fails, everything appended before the failure stays in `out` and the
/// caller decides whether to keep it.
pub trait StreamDecodeLane: Lane {
    /// The record type produced by this lane.
    type Output;

    /// Which generator stream this lane understands.
    fn stream_kind(&self) -> StreamKind;

    /// Consumes `reader` to its end, appending decoded records to `out`.
    fn decode_into(
        &self,
        reader: &mut StreamReader<'_>,
        palette: &Palette,
        out: &mut Vec<Self::Output>,
    ) -> Result<(), DecodeError>;

    /// Decodes a whole stream into a fresh vector, discarding partial output on failure.
    fn decode(&self, stream: &[f64], palette: &Palette) -> Result<Vec<Self::Output>, DecodeError> {
        let mut reader = StreamReader::new(stream);
        let mut out = Vec::new();
        self.decode_into(&mut reader, palette, &mut out)?;
        Ok(out)
    }
}

/// Reads a color index field and resolves it through the palette.
///
/// The raw value is truncated toward zero. Negative, non-finite and
/// out-of-range values are rejected, never clamped.
pub(crate) fn read_color(
    reader: &mut StreamReader<'_>,
    palette: &Palette,
    stream: StreamKind,
) -> Result<(usize, Color), DecodeError> {
    let offset = reader.position();
    let raw = reader.next_scalar()?;
    let invalid = || DecodeError::InvalidColorIndex {
        stream,
        offset,
        raw,
        palette_size: palette.size(),
    };

    if !raw.is_finite() || raw < 0.0 {
        return Err(invalid());
    }

    let index = raw as usize;
    match palette.get(index) {
        Ok(color) => Ok((index, color)),
        Err(PaletteError::IndexOutOfRange { .. }) => Err(invalid()),
        Err(other) => Err(other.into()),
    }
}

/// Resolves the implicit color of layouts without a color field.
#[inline]
pub(crate) fn default_color(palette: &Palette) -> Result<(usize, Color), DecodeError> {
    Ok((0, palette.get(0)?))
}
