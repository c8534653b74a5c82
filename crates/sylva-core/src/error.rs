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

//! Defines the error hierarchy for palette access and stream decoding.
//!
//! Every decode error is final for the stream being decoded: the decoder stops
//! at the offending record and hands the error to the caller. Offsets are
//! scalar positions in the stream, counted from zero.

use crate::stream::StreamKind;
use thiserror::Error;

/// An error related to palette construction or indexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A palette must hold at least one color.
    #[error("palette size must be positive")]
    Empty,
    /// The index does not address a slot of the palette.
    #[error("palette index {index} is out of range for a palette of size {size}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The palette size at the time of the request.
        size: usize,
    },
}

/// An error raised while decoding a geometry stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A scalar was requested from an exhausted reader.
    #[error("stream underrun: no scalar left at offset {position}")]
    StreamUnderrun {
        /// The cursor position at the time of the read.
        position: usize,
    },
    /// The stream ends with a partial record.
    #[error(
        "malformed {stream} stream: {trailing} trailing scalar(s) at offset {offset}, \
         records are {record_len} scalars long"
    )]
    MalformedStream {
        /// The stream being decoded.
        stream: StreamKind,
        /// The offset of the partial record.
        offset: usize,
        /// How many scalars were left.
        trailing: usize,
        /// The record length the layout expects.
        record_len: usize,
    },
    /// A color index field does not resolve to a palette slot.
    #[error(
        "invalid color index {raw} at offset {offset} of the {stream} stream \
         (palette size {palette_size})"
    )]
    InvalidColorIndex {
        /// The stream being decoded.
        stream: StreamKind,
        /// The offset of the color field.
        offset: usize,
        /// The raw value read from the stream.
        raw: f64,
        /// The size of the palette used for resolution.
        palette_size: usize,
    },
    /// A polygon announces fewer than three vertices, or more than the stream holds.
    #[error(
        "invalid vertex count {raw} at offset {offset}: {remaining} scalar(s) remain after it"
    )]
    InvalidVertexCount {
        /// The offset of the vertex count field.
        offset: usize,
        /// The raw value read from the stream.
        raw: f64,
        /// Scalars left in the stream after the count field.
        remaining: usize,
    },
    /// A palette operation failed while decoding.
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DecodeError::MalformedStream {
            stream: StreamKind::Lines,
            offset: 8,
            trailing: 5,
            record_len: 8,
        };
        assert_eq!(
            err.to_string(),
            "malformed line stream: 5 trailing scalar(s) at offset 8, records are 8 scalars long"
        );

        let err: DecodeError = PaletteError::IndexOutOfRange { index: 4, size: 3 }.into();
        assert_eq!(
            err.to_string(),
            "palette index 4 is out of range for a palette of size 3"
        );
    }
}
