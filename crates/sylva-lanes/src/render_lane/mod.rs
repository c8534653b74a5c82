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

//! Render assembly: the boundary between decoded geometry and a renderer.
//!
//! The decoder keeps positions exactly as the generator wrote them. The
//! generator's Y axis points down, so by default this boundary negates Y
//! ([`CoordinateConvention::flip_y`]). This is the only place where a
//! coordinate convention is applied.
//!
//! Each line batch becomes one line-list draw call (one width per call), and
//! each polygon becomes one triangle-fan draw call with a flat color and a
//! face normal.

mod draw_call;

pub use draw_call::{LineDrawCall, LineVertex, PolygonDrawCall, RenderFrame};

use sylva_core::{
    lane::{Lane, LaneKind},
    DecodedScene, LineBatch, PolygonRecord, Vertex,
};

/// The coordinate convention the target renderer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateConvention {
    /// Negate the Y component of every position.
    pub flip_y: bool,
}

impl CoordinateConvention {
    /// Positions are passed through unchanged.
    pub const IDENTITY: Self = Self { flip_y: false };

    /// Applies the convention to a stream position.
    #[inline]
    pub fn apply(&self, vertex: Vertex) -> Vertex {
        if self.flip_y {
            vertex.flip_y()
        } else {
            vertex
        }
    }
}

impl Default for CoordinateConvention {
    /// Y negated, the convention of the generator's original viewer.
    fn default() -> Self {
        Self { flip_y: true }
    }
}

/// Builds renderer-facing draw calls from a decoded scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderAssembly {
    convention: CoordinateConvention,
}

impl RenderAssembly {
    /// Creates an assembly with the default (Y-flipped) convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembly with an explicit convention.
    pub fn with_convention(convention: CoordinateConvention) -> Self {
        Self { convention }
    }

    /// Assembles every batch and polygon of the scene, preserving their order.
    pub fn assemble(&self, scene: &DecodedScene) -> RenderFrame {
        let frame = RenderFrame {
            line_draws: scene
                .line_batches
                .iter()
                .map(|batch| self.assemble_batch(batch))
                .collect(),
            polygon_draws: scene
                .polygons
                .iter()
                .map(|polygon| self.assemble_polygon(polygon))
                .collect(),
        };

        log::debug!(
            "Assembled {} draw call(s) ({} line, {} polygon)",
            frame.draw_call_count(),
            frame.line_draws.len(),
            frame.polygon_draws.len()
        );
        frame
    }

    /// Converts one batch into a line-list draw call.
    pub fn assemble_batch(&self, batch: &LineBatch) -> LineDrawCall {
        let vertices = batch
            .segments
            .iter()
            .flat_map(|segment| {
                let color = segment.color.to_array();
                [segment.start, segment.end].map(|p| LineVertex {
                    position: self.convention.apply(p).to_f32_array(),
                    color,
                })
            })
            .collect();

        LineDrawCall {
            width: batch.width as f32,
            vertices,
        }
    }

    /// Converts one polygon into a triangle-fan draw call.
    pub fn assemble_polygon(&self, polygon: &PolygonRecord) -> PolygonDrawCall {
        let points: Vec<Vertex> = polygon
            .vertices
            .iter()
            .map(|v| self.convention.apply(*v))
            .collect();

        let triangle_count = points.len().saturating_sub(2) as u32;
        let indices = (1..=triangle_count).flat_map(|i| [0, i, i + 1]).collect();

        PolygonDrawCall {
            color: polygon.color,
            positions: points.iter().map(|p| p.to_f32_array()).collect(),
            indices,
            normal: newell_normal(&points),
        }
    }
}

impl Lane for RenderAssembly {
    fn strategy_name(&self) -> &'static str {
        "FlatRenderAssembly"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Assembly
    }
}

/// Computes the unit normal of a (possibly non-planar) polygon with Newell's method.
fn newell_normal(points: &[Vertex]) -> [f32; 3] {
    let mut normal = Vertex::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    let length = (normal.x * normal.x + normal.y * normal.y + normal.z * normal.z).sqrt();
    if length > f64::EPSILON {
        [
            (normal.x / length) as f32,
            (normal.y / length) as f32,
            (normal.z / length) as f32,
        ]
    } else {
        [0.0; 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sylva_core::{BatchedSegment, Color};

    fn triangle() -> PolygonRecord {
        PolygonRecord {
            color_index: 1,
            color: Color::RED,
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ],
        }
    }

    #[test]
    fn test_default_convention_flips_y() {
        let batch = LineBatch {
            width: 2.0,
            segments: vec![BatchedSegment {
                start: Vertex::new(1.0, 2.0, 3.0),
                end: Vertex::new(4.0, 5.0, 6.0),
                color_index: 2,
                color: Color::BLUE,
            }],
        };

        let call = RenderAssembly::new().assemble_batch(&batch);
        assert_eq!(call.width, 2.0);
        assert_eq!(call.vertices[0].position, [1.0, -2.0, 3.0]);
        assert_eq!(call.vertices[1].position, [4.0, -5.0, 6.0]);
        assert_eq!(call.vertices[1].color, [0.0, 0.0, 1.0]);

        let call = RenderAssembly::with_convention(CoordinateConvention::IDENTITY)
            .assemble_batch(&batch);
        assert_eq!(call.vertices[0].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_batch_keeps_its_draw_call() {
        let scene = DecodedScene {
            line_batches: vec![LineBatch::new(0.5), LineBatch::new(1.0)],
            polygons: Vec::new(),
        };

        let frame = RenderAssembly::new().assemble(&scene);
        assert_eq!(frame.line_draws.len(), 2);
        assert!(frame.line_draws[0].is_empty());
        assert_eq!(frame.line_draws[0].width, 0.5);
        assert_eq!(frame.draw_call_count(), 2);
    }

    #[test]
    fn test_polygon_fan_and_normal() {
        let assembly = RenderAssembly::with_convention(CoordinateConvention::IDENTITY);
        let call = assembly.assemble_polygon(&triangle());

        assert_eq!(call.color, Color::RED);
        assert_eq!(call.indices, vec![0, 1, 2]);
        assert_relative_eq!(call.normal[2], 1.0);

        // Mirroring Y reverses the winding, and with it the normal.
        let flipped = RenderAssembly::new().assemble_polygon(&triangle());
        assert_relative_eq!(flipped.normal[2], -1.0);
        assert_eq!(flipped.positions[2], [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_quad_fan_indices() {
        let quad = PolygonRecord {
            color_index: 0,
            color: Color::WHITE,
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 1.0),
                Vertex::new(0.0, 0.0, 1.0),
            ],
        };

        let call = RenderAssembly::new().assemble_polygon(&quad);
        assert_eq!(call.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(call.triangle_count(), 2);
        assert_relative_eq!(call.normal[1].abs(), 1.0);
    }

    #[test]
    fn test_degenerate_polygon_has_zero_normal() {
        let line = PolygonRecord {
            color_index: 0,
            color: Color::WHITE,
            vertices: vec![
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(2.0, 0.0, 0.0),
            ],
        };
        assert_eq!(RenderAssembly::new().assemble_polygon(&line).normal, [0.0; 3]);
    }
}
