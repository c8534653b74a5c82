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

//! Defines the lane decoding the polygon stream.

use super::{default_color, read_color, StreamDecodeLane};
use sylva_core::{
    lane::{Lane, LaneKind},
    stream::SCALARS_PER_VERTEX,
    DecodeError, Palette, PolygonRecord, StreamKind, StreamLayout, StreamReader,
};

/// The smallest vertex count a polygon record may announce.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Configuration of the polygon decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolygonDecoderConfig {
    /// Which optional fields the records carry. Only `has_color_field` applies.
    pub layout: StreamLayout,
}

/// A `StreamDecodeLane` producing one [`PolygonRecord`] per stream record.
///
/// Polygons are independent draw units: they are never merged or split.
#[derive(Debug, Clone, Default)]
pub struct PolygonDecoderLane {
    config: PolygonDecoderConfig,
}

impl PolygonDecoderLane {
    /// Creates a decoder for the latest layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with an explicit configuration.
    pub fn with_config(config: PolygonDecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PolygonDecoderConfig {
        &self.config
    }

    /// Validates a raw vertex count against the scalars left after it.
    fn vertex_count(&self, raw: f64, offset: usize, remaining: usize) -> Result<usize, DecodeError> {
        let invalid = DecodeError::InvalidVertexCount {
            offset,
            raw,
            remaining,
        };

        if !raw.is_finite() || raw < MIN_POLYGON_VERTICES as f64 {
            return Err(invalid);
        }

        let count = raw as usize;
        let needed = count
            .checked_mul(SCALARS_PER_VERTEX)
            .and_then(|n| n.checked_add(self.config.layout.polygon_attribute_len()));

        match needed {
            Some(needed) if needed <= remaining => Ok(count),
            _ => Err(invalid),
        }
    }
}

impl StreamDecodeLane for PolygonDecoderLane {
    type Output = PolygonRecord;

    fn stream_kind(&self) -> StreamKind {
        StreamKind::Polygons
    }

    fn decode_into(
        &self,
        reader: &mut StreamReader<'_>,
        palette: &Palette,
        out: &mut Vec<PolygonRecord>,
    ) -> Result<(), DecodeError> {
        let first_polygon = out.len();

        while !reader.is_empty() {
            let offset = reader.position();
            let raw_count = reader.next_scalar()?;
            let count = self.vertex_count(raw_count, offset, reader.remaining())?;

            let (color_index, color) = if self.config.layout.has_color_field {
                read_color(reader, palette, StreamKind::Polygons)?
            } else {
                default_color(palette)?
            };

            let vertices = (0..count)
                .map(|_| reader.read_vertex())
                .collect::<Result<Vec<_>, _>>()?;

            out.push(PolygonRecord {
                color_index,
                color,
                vertices,
            });
        }

        log::debug!(
            "Decoded {} polygon(s) from {} scalars",
            out.len() - first_polygon,
            reader.len()
        );
        Ok(())
    }
}

impl Lane for PolygonDecoderLane {
    fn strategy_name(&self) -> &'static str {
        "PolygonDecoder"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Decode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::{Color, Vertex};

    fn palette() -> Palette {
        Palette::with_colors(vec![Color::WHITE, Color::RED, Color::BLUE]).unwrap()
    }

    #[test]
    fn test_single_triangle_uses_palette_color() {
        let stream = [3.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let polygons = PolygonDecoderLane::new()
            .decode(&stream, &palette())
            .unwrap();

        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].color_index, 2);
        assert_eq!(polygons[0].color, Color::BLUE);
        assert_eq!(
            polygons[0].vertices,
            vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_consecutive_polygons_stay_separate() {
        let stream = [
            3.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            4.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0,
        ];
        let polygons = PolygonDecoderLane::new()
            .decode(&stream, &palette())
            .unwrap();

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].vertices.len(), 3);
        assert_eq!(polygons[1].vertices.len(), 4);
        assert_eq!(polygons[1].color, Color::RED);
    }

    #[test]
    fn test_vertex_count_below_three() {
        let stream = [2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let err = PolygonDecoderLane::new()
            .decode(&stream, &palette())
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidVertexCount {
                offset: 0,
                raw: 2.0,
                remaining: 7,
            }
        );
    }

    #[test]
    fn test_vertex_count_past_end_of_stream() {
        let stream = [3.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let err = PolygonDecoderLane::new()
            .decode(&stream, &palette())
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidVertexCount { remaining: 7, .. }));

        let err = PolygonDecoderLane::new()
            .decode(&[1e300], &palette())
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidVertexCount { .. }));
    }

    #[test]
    fn test_out_of_range_color_stops_at_record() {
        let stream = [
            3.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            3.0, 3.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        ];
        let mut reader = StreamReader::new(&stream);
        let mut out = Vec::new();
        let err = PolygonDecoderLane::new()
            .decode_into(&mut reader, &palette(), &mut out)
            .unwrap_err();

        assert!(matches!(
            err,
            DecodeError::InvalidColorIndex {
                stream: StreamKind::Polygons,
                offset: 12,
                palette_size: 3,
                ..
            }
        ));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_layout_without_color_field() {
        let config = PolygonDecoderConfig {
            layout: StreamLayout::BARE,
        };
        let stream = [3.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let polygons = PolygonDecoderLane::with_config(config)
            .decode(&stream, &palette())
            .unwrap();

        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].color_index, 0);
        assert_eq!(polygons[0].color, Color::WHITE);
        assert_eq!(polygons[0].vertices[2], Vertex::new(0.0, 1.0, 0.0));
    }
}
