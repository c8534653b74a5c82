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

// A small built-in drawing, encoded the way the generator would emit it.

use anyhow::Result;
use sylva_core::{LineSegment, Palette, PolygonRecord, StreamLayout, Vertex};
use sylva_io::{ColorSpec, DecoderSettings, PaletteSettings};
use sylva_lanes::decode_lane::encoder::{encode_line_segments, encode_polygons};

/// Width per branch depth. The last one is below the default visibility threshold.
const WIDTHS: [f64; 4] = [3.0, 1.5, 1.0, 0.5];
const TRUNK_LENGTH: f64 = 1.0;
const SHRINK: f64 = 0.7;
const SPREAD: f64 = 0.45;
const LEAF_SIZE: f64 = 0.15;

const BARK: usize = 0;
const LEAF: usize = 1;
const BLOSSOM: usize = 2;

/// Settings used for the demo when none are given: bark, leaf and blossom colors.
pub fn settings() -> DecoderSettings {
    DecoderSettings {
        palette: PaletteSettings {
            size: 3,
            colors: vec![
                ColorSpec::Hex("#8B5A2B".to_string()),
                ColorSpec::Hex("#3C8D2F".to_string()),
                ColorSpec::Rgb8(240, 200, 220),
            ],
        },
        ..Default::default()
    }
}

/// Encodes the demo tree as a line stream and a polygon stream.
pub fn streams(palette: &Palette) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut tree = Tree {
        palette,
        segments: Vec::new(),
        leaves: Vec::new(),
    };
    tree.grow(Vertex::ZERO, 0.0, 0)?;

    log::debug!(
        "Demo tree: {} segment(s), {} leaf polygon(s)",
        tree.segments.len(),
        tree.leaves.len()
    );
    Ok((
        encode_line_segments(&tree.segments, StreamLayout::FULL),
        encode_polygons(&tree.leaves, StreamLayout::FULL),
    ))
}

struct Tree<'a> {
    palette: &'a Palette,
    segments: Vec<LineSegment>,
    leaves: Vec<PolygonRecord>,
}

impl Tree<'_> {
    // Y grows downward in generator space, so "up" is negative Y.
    fn grow(&mut self, start: Vertex, angle: f64, depth: usize) -> Result<()> {
        let Some(&width) = WIDTHS.get(depth) else {
            return self.leaf(start, angle);
        };

        let length = TRUNK_LENGTH * SHRINK.powi(depth as i32);
        let end = start + Vertex::new(angle.sin() * length, -angle.cos() * length, 0.0);
        self.segments.push(LineSegment {
            color_index: BARK,
            width,
            start,
            end,
        });

        self.grow(end, angle - SPREAD, depth + 1)?;
        self.grow(end, angle + SPREAD, depth + 1)
    }

    fn leaf(&mut self, base: Vertex, angle: f64) -> Result<()> {
        let color_index = if self.leaves.len() % 3 == 2 { BLOSSOM } else { LEAF };
        let tip = base + Vertex::new(angle.sin() * LEAF_SIZE * 2.0, -angle.cos() * LEAF_SIZE * 2.0, 0.0);
        let side = Vertex::new(angle.cos() * LEAF_SIZE, angle.sin() * LEAF_SIZE, 0.05);

        self.leaves.push(PolygonRecord {
            color_index,
            color: self.palette.get(color_index)?,
            vertices: vec![base, tip + side, tip, tip - side],
        });
        Ok(())
    }
}
