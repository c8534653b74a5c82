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

//! Renderer-facing draw call data.

use std::mem;
use sylva_core::Color;

/// One vertex of a line list, interleaved for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Position after the coordinate convention was applied.
    pub position: [f32; 3],
    /// Per-segment color.
    pub color: [f32; 3],
}

impl LineVertex {
    /// Size of one vertex in bytes (the buffer stride).
    pub const STRIDE: usize = mem::size_of::<LineVertex>();
    /// Byte offset of the color attribute.
    pub const COLOR_OFFSET: usize = mem::size_of::<[f32; 3]>();
}

/// One line-list draw call: every segment of one batch, drawn with one width.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDrawCall {
    /// Line width of the batch.
    pub width: f32,
    /// Two vertices per segment, in stream order.
    pub vertices: Vec<LineVertex>,
}

impl LineDrawCall {
    /// Number of segments drawn by this call.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Returns `true` if the call draws nothing (an empty batch).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The interleaved vertex buffer, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// One flat-colored polygon, triangulated as a fan.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonDrawCall {
    /// The face color.
    pub color: Color,
    /// Positions after the coordinate convention was applied.
    pub positions: Vec<[f32; 3]>,
    /// Triangle list indices of the fan `(0, i, i + 1)`.
    pub indices: Vec<u32>,
    /// Unit face normal, or zero for a degenerate polygon.
    pub normal: [f32; 3],
}

impl PolygonDrawCall {
    /// Number of triangles in the fan.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Everything the renderer needs to draw one decoded scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// One call per line batch, in batch order (empty batches included).
    pub line_draws: Vec<LineDrawCall>,
    /// One call per polygon, in stream order.
    pub polygon_draws: Vec<PolygonDrawCall>,
}

impl RenderFrame {
    /// Total number of draw calls, empty line calls included.
    pub fn draw_call_count(&self) -> usize {
        self.line_draws.len() + self.polygon_draws.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_vertex_layout() {
        assert_eq!(LineVertex::STRIDE, 24);
        assert_eq!(LineVertex::COLOR_OFFSET, 12);
    }

    #[test]
    fn test_as_bytes_interleaves() {
        let call = LineDrawCall {
            width: 1.0,
            vertices: vec![
                LineVertex {
                    position: [1.0, 2.0, 3.0],
                    color: [1.0, 0.0, 0.0],
                },
                LineVertex {
                    position: [4.0, 5.0, 6.0],
                    color: [1.0, 0.0, 0.0],
                },
            ],
        };

        let bytes = call.as_bytes();
        assert_eq!(bytes.len(), 2 * LineVertex::STRIDE);
        assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
        assert_eq!(call.segment_count(), 1);
    }
}
