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

//! Flat `f64` stream protocol: record layouts and the read-only cursor.
//!
//! The generator emits two independent streams:
//!
//! - **lines**: `[colorIndex, width, x0, y0, z0, x1, y1, z1]` repeated;
//! - **polygons**: `[vertexCount, colorIndex, x0, y0, z0, ..., xn, yn, zn]` repeated.
//!
//! Older generator revisions omit the width and/or color fields. Those reduced
//! forms are described by a [`StreamLayout`] rather than by separate protocols.

use serde::{Deserialize, Serialize};
use std::fmt;

mod reader;

pub use reader::StreamReader;

/// Number of scalars in one vertex.
pub const SCALARS_PER_VERTEX: usize = 3;

/// Identifies which of the two generator streams is being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// The line segment stream.
    Lines,
    /// The polygon stream.
    Polygons,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Lines => write!(f, "line"),
            StreamKind::Polygons => write!(f, "polygon"),
        }
    }
}

/// Describes which optional fields a stream revision carries.
///
/// `has_width_field` is only meaningful for line streams; polygon records
/// never carry a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamLayout {
    /// Records start with a palette index.
    pub has_color_field: bool,
    /// Line records carry a width after the color index.
    pub has_width_field: bool,
}

impl StreamLayout {
    /// The latest and most capable layout: color and width fields present.
    pub const FULL: Self = Self {
        has_color_field: true,
        has_width_field: true,
    };

    /// The earliest layout: bare coordinates only.
    pub const BARE: Self = Self {
        has_color_field: false,
        has_width_field: false,
    };

    /// Number of scalars in one line record under this layout.
    #[inline]
    pub fn line_record_len(&self) -> usize {
        2 * SCALARS_PER_VERTEX
            + usize::from(self.has_color_field)
            + usize::from(self.has_width_field)
    }

    /// Number of scalars following a polygon's vertex count field before its coordinates.
    #[inline]
    pub fn polygon_attribute_len(&self) -> usize {
        usize::from(self.has_color_field)
    }
}

impl Default for StreamLayout {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_record_lengths() {
        assert_eq!(StreamLayout::FULL.line_record_len(), 8);
        assert_eq!(StreamLayout::BARE.line_record_len(), 6);
        let color_only = StreamLayout {
            has_color_field: true,
            has_width_field: false,
        };
        assert_eq!(color_only.line_record_len(), 7);
    }

    #[test]
    fn test_polygon_attribute_len() {
        assert_eq!(StreamLayout::FULL.polygon_attribute_len(), 1);
        assert_eq!(StreamLayout::BARE.polygon_attribute_len(), 0);
    }

    #[test]
    fn test_stream_kind_display() {
        assert_eq!(StreamKind::Lines.to_string(), "line");
        assert_eq!(StreamKind::Polygons.to_string(), "polygon");
    }
}
