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

//! Serializes geometry back into the generator's flat stream format.
//!
//! This is the inverse of the decode lanes and is used to build fixtures and
//! demo streams. Fields the layout does not carry are simply not written.

use sylva_core::{LineBatch, LineSegment, PolygonRecord, StreamLayout};

/// Encodes line segments as consecutive line records.
pub fn encode_line_segments(segments: &[LineSegment], layout: StreamLayout) -> Vec<f64> {
    let mut data = Vec::with_capacity(segments.len() * layout.line_record_len());

    for segment in segments {
        if layout.has_color_field {
            data.push(segment.color_index as f64);
        }
        if layout.has_width_field {
            data.push(segment.width);
        }
        data.extend_from_slice(&segment.start.to_array());
        data.extend_from_slice(&segment.end.to_array());
    }

    data
}

/// Encodes the segments of every batch, each with its batch's width.
///
/// Empty batches write nothing: they only exist in decoded output, as the
/// trace of a run of invisible records.
pub fn encode_line_batches(batches: &[LineBatch], layout: StreamLayout) -> Vec<f64> {
    let segments: Vec<LineSegment> = batches
        .iter()
        .flat_map(|batch| {
            batch.segments.iter().map(move |segment| LineSegment {
                color_index: segment.color_index,
                width: batch.width,
                start: segment.start,
                end: segment.end,
            })
        })
        .collect();

    encode_line_segments(&segments, layout)
}

/// Encodes polygons as consecutive polygon records.
pub fn encode_polygons(polygons: &[PolygonRecord], layout: StreamLayout) -> Vec<f64> {
    let mut data = Vec::new();

    for polygon in polygons {
        data.push(polygon.vertices.len() as f64);
        if layout.has_color_field {
            data.push(polygon.color_index as f64);
        }
        for vertex in &polygon.vertices {
            data.extend_from_slice(&vertex.to_array());
        }
    }

    data
}
