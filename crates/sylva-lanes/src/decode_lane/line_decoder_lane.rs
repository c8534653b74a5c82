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

//! Defines the lane decoding the line stream into width batches.

use super::batching::{self, BatchAction, DEFAULT_MINIMUM_VISIBLE_WIDTH};
use super::{default_color, read_color, StreamDecodeLane};
use sylva_core::{
    lane::{Lane, LaneKind},
    BatchedSegment, Color, DecodeError, LineBatch, LineSegment, Palette, StreamKind,
    StreamLayout, StreamReader,
};

/// Width given to every record of a layout without a width field.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Configuration of the line decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDecoderConfig {
    /// Which optional fields the records carry.
    pub layout: StreamLayout,
    /// Records thinner than this are consumed but produce no segment.
    /// Ignored for layouts without a width field, where everything is visible.
    pub minimum_visible_width: f64,
}

impl Default for LineDecoderConfig {
    fn default() -> Self {
        Self {
            layout: StreamLayout::FULL,
            minimum_visible_width: DEFAULT_MINIMUM_VISIBLE_WIDTH,
        }
    }
}

/// A `StreamDecodeLane` grouping consecutive equal-width line records into batches.
///
/// A batch is emitted whenever the width changes and at the end of the
/// stream, even if none of its records was visible. Those empty batches keep
/// batch positions aligned with width runs.
#[derive(Debug, Clone, Default)]
pub struct LineBatchDecoderLane {
    config: LineDecoderConfig,
}

impl LineBatchDecoderLane {
    /// Creates a decoder for the latest layout with the default visibility threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with an explicit configuration.
    pub fn with_config(config: LineDecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LineDecoderConfig {
        &self.config
    }

    fn read_segment(
        &self,
        reader: &mut StreamReader<'_>,
        palette: &Palette,
    ) -> Result<(LineSegment, Color), DecodeError> {
        let layout = self.config.layout;

        let (color_index, color) = if layout.has_color_field {
            read_color(reader, palette, StreamKind::Lines)?
        } else {
            default_color(palette)?
        };
        let width = if layout.has_width_field {
            reader.next_scalar()?
        } else {
            DEFAULT_LINE_WIDTH
        };
        let start = reader.read_vertex()?;
        let end = reader.read_vertex()?;

        Ok((
            LineSegment {
                color_index,
                width,
                start,
                end,
            },
            color,
        ))
    }

    fn is_visible(&self, segment: &LineSegment) -> bool {
        !self.config.layout.has_width_field
            || batching::is_visible(segment.width, self.config.minimum_visible_width)
    }
}

impl StreamDecodeLane for LineBatchDecoderLane {
    type Output = LineBatch;

    fn stream_kind(&self) -> StreamKind {
        StreamKind::Lines
    }

    fn decode_into(
        &self,
        reader: &mut StreamReader<'_>,
        palette: &Palette,
        out: &mut Vec<LineBatch>,
    ) -> Result<(), DecodeError> {
        let record_len = self.config.layout.line_record_len();
        let first_batch = out.len();
        let mut current: Option<LineBatch> = None;
        let mut hidden = 0usize;

        while reader.remaining() >= record_len {
            let (segment, color) = self.read_segment(reader, palette)?;

            let previous = current.as_ref().map(|batch| batch.width);
            if batching::batch_action(previous, segment.width) == BatchAction::StartNewBatch {
                if let Some(closed) = current.take() {
                    log::trace!(
                        "Closing line batch (width {}, {} segments)",
                        closed.width,
                        closed.len()
                    );
                    out.push(closed);
                }
            }
            let batch = current.get_or_insert_with(|| LineBatch::new(segment.width));

            if self.is_visible(&segment) {
                batch.segments.push(BatchedSegment {
                    start: segment.start,
                    end: segment.end,
                    color_index: segment.color_index,
                    color,
                });
            } else {
                hidden += 1;
            }
        }

        if !reader.is_empty() {
            return Err(DecodeError::MalformedStream {
                stream: StreamKind::Lines,
                offset: reader.position(),
                trailing: reader.remaining(),
                record_len,
            });
        }

        out.extend(current);

        log::debug!(
            "Decoded {} line batch(es) from {} scalars ({} record(s) below width {})",
            out.len() - first_batch,
            reader.len(),
            hidden,
            self.config.minimum_visible_width
        );
        Ok(())
    }
}

impl Lane for LineBatchDecoderLane {
    fn strategy_name(&self) -> &'static str {
        "LineBatchDecoder"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Decode
    }
}
