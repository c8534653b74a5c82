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

//! Defines the decoded geometry model handed to render assembly.
//!
//! A [`DecodedScene`] is built from scratch by every decode call and handed to
//! the caller by value. Nothing in it refers back to the stream buffers.

use crate::math::{Bounds, Color, Vertex};

/// A single line record as read from the line stream.
///
/// Segments are transient: the decoder turns each one into a
/// [`BatchedSegment`] (or drops it when invisible) and never keeps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Palette slot of the segment.
    pub color_index: usize,
    /// Raw width value, the batch key.
    pub width: f64,
    /// Start position.
    pub start: Vertex,
    /// End position.
    pub end: Vertex,
}

/// A visible segment stored inside a [`LineBatch`], with its color resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchedSegment {
    /// Start position.
    pub start: Vertex,
    /// End position.
    pub end: Vertex,
    /// Palette slot the color was resolved from.
    pub color_index: usize,
    /// The resolved color.
    pub color: Color,
}

/// A run of consecutive line records sharing one width.
///
/// Color varies per segment; width is the only batch key. A batch may be
/// empty when every record of its run was below the visibility threshold.
/// Such batches are kept so that batch positions line up with width runs.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    /// The width shared by every record of the run.
    pub width: f64,
    /// The visible segments, in stream order.
    pub segments: Vec<BatchedSegment>,
}

impl LineBatch {
    /// Opens an empty batch for the given width.
    #[inline]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            segments: Vec::new(),
        }
    }

    /// Returns `true` if no visible segment ended up in this batch.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of visible segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

/// A single polygon, an independent draw unit.
///
/// Decoded polygons always have at least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecord {
    /// Palette slot of the polygon.
    pub color_index: usize,
    /// The color resolved at decode time.
    pub color: Color,
    /// The vertices, in stream order.
    pub vertices: Vec<Vertex>,
}

/// Counts describing a decoded scene, used for logging and reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneSummary {
    /// Number of line batches, empty ones included.
    pub batch_count: usize,
    /// Number of line batches without any visible segment.
    pub empty_batch_count: usize,
    /// Number of visible line segments across all batches.
    pub segment_count: usize,
    /// Number of polygons.
    pub polygon_count: usize,
    /// Number of polygon vertices across all polygons.
    pub vertex_count: usize,
}

/// The complete output of one decode call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedScene {
    /// Line batches in stream order.
    pub line_batches: Vec<LineBatch>,
    /// Polygons in stream order.
    pub polygons: Vec<PolygonRecord>,
}

impl DecodedScene {
    /// Returns `true` if the scene holds no batch and no polygon.
    pub fn is_empty(&self) -> bool {
        self.line_batches.is_empty() && self.polygons.is_empty()
    }

    /// Computes the scene counts.
    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            batch_count: self.line_batches.len(),
            empty_batch_count: self.line_batches.iter().filter(|b| b.is_empty()).count(),
            segment_count: self.line_batches.iter().map(LineBatch::len).sum(),
            polygon_count: self.polygons.len(),
            vertex_count: self.polygons.iter().map(|p| p.vertices.len()).sum(),
        }
    }

    /// Computes the bounds of every visible segment endpoint and polygon vertex.
    ///
    /// Returns `None` when there is no geometry to frame.
    pub fn bounds(&self) -> Option<Bounds> {
        let segment_points = self
            .line_batches
            .iter()
            .flat_map(|batch| batch.segments.iter())
            .flat_map(|segment| [segment.start, segment.end]);
        let polygon_points = self
            .polygons
            .iter()
            .flat_map(|polygon| polygon.vertices.iter().copied());

        match (
            Bounds::from_points(segment_points),
            Bounds::from_points(polygon_points),
        ) {
            (Some(lines), Some(polygons)) => Some(lines.merge(polygons)),
            (lines, polygons) => lines.or(polygons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: Vertex, end: Vertex) -> BatchedSegment {
        BatchedSegment {
            start,
            end,
            color_index: 0,
            color: Color::WHITE,
        }
    }

    fn sample_scene() -> DecodedScene {
        let mut thick = LineBatch::new(2.0);
        thick
            .segments
            .push(segment(Vertex::ZERO, Vertex::new(1.0, 0.0, 0.0)));
        thick
            .segments
            .push(segment(Vertex::new(1.0, 0.0, 0.0), Vertex::new(1.0, 3.0, 0.0)));

        DecodedScene {
            line_batches: vec![thick, LineBatch::new(0.5)],
            polygons: vec![PolygonRecord {
                color_index: 1,
                color: Color::RED,
                vertices: vec![
                    Vertex::new(-1.0, 0.0, 0.0),
                    Vertex::new(0.0, 1.0, 0.0),
                    Vertex::new(0.0, 0.0, 4.0),
                ],
            }],
        }
    }

    #[test]
    fn test_summary_counts_empty_batches() {
        let summary = sample_scene().summary();
        assert_eq!(
            summary,
            SceneSummary {
                batch_count: 2,
                empty_batch_count: 1,
                segment_count: 2,
                polygon_count: 1,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn test_bounds_cover_segments_and_polygons() {
        let bounds = sample_scene().bounds().unwrap();
        assert_eq!(bounds.min, Vertex::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vertex::new(1.0, 3.0, 4.0));
    }

    #[test]
    fn test_bounds_of_polygons_only() {
        let scene = DecodedScene {
            line_batches: vec![LineBatch::new(2.0)],
            polygons: sample_scene().polygons,
        };
        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds, Bounds::from_points(scene.polygons[0].vertices.clone()).unwrap());
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        let scene = DecodedScene {
            line_batches: vec![LineBatch::new(0.1)],
            polygons: Vec::new(),
        };
        assert!(!scene.is_empty());
        assert_eq!(scene.bounds(), None);
        assert!(DecodedScene::default().is_empty());
    }
}
