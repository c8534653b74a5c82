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

//! Rebuilds a whole [`DecodedScene`] from the two generator streams.
//!
//! Every call starts from an empty scene: nothing is cached or diffed between
//! calls. The stream buffers are only borrowed for the duration of the call.

use crate::decode_lane::{
    LineBatchDecoderLane, LineDecoderConfig, PolygonDecoderConfig, PolygonDecoderLane,
    StreamDecodeLane,
};
use std::time::Instant;
use sylva_core::{DecodeError, DecodedScene, Palette, StreamKind, StreamReader};
use thiserror::Error;

/// A scene decode that stopped on a malformed stream.
///
/// `partial` holds everything completed before the failure: the batches
/// closed before a line stream error, or all batches plus the polygons decoded
/// before a polygon stream error. The polygon stream is not read when the line
/// stream fails.
#[derive(Debug, Error)]
#[error("failed to decode the {stream} stream")]
pub struct SceneDecodeError {
    /// The stream that failed.
    pub stream: StreamKind,
    /// The underlying decode error.
    #[source]
    pub source: DecodeError,
    /// The geometry decoded before the failure.
    pub partial: Box<DecodedScene>,
}

/// Drives the line and polygon lanes over one pair of streams.
#[derive(Debug, Clone, Default)]
pub struct SceneDecoder {
    lines: LineBatchDecoderLane,
    polygons: PolygonDecoderLane,
}

impl SceneDecoder {
    /// Creates a scene decoder for the latest stream layouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene decoder with explicit lane configurations.
    pub fn with_configs(lines: LineDecoderConfig, polygons: PolygonDecoderConfig) -> Self {
        Self {
            lines: LineBatchDecoderLane::with_config(lines),
            polygons: PolygonDecoderLane::with_config(polygons),
        }
    }

    /// The line lane used by this decoder.
    pub fn line_lane(&self) -> &LineBatchDecoderLane {
        &self.lines
    }

    /// The polygon lane used by this decoder.
    pub fn polygon_lane(&self) -> &PolygonDecoderLane {
        &self.polygons
    }

    /// Decodes both streams into a fresh scene.
    pub fn decode(
        &self,
        lines: &[f64],
        polygons: &[f64],
        palette: &Palette,
    ) -> Result<DecodedScene, SceneDecodeError> {
        let started = Instant::now();
        let mut scene = DecodedScene::default();

        if let Err(source) = run_lane(&self.lines, lines, palette, &mut scene.line_batches) {
            return Err(fail(StreamKind::Lines, source, scene));
        }
        if let Err(source) = run_lane(&self.polygons, polygons, palette, &mut scene.polygons) {
            return Err(fail(StreamKind::Polygons, source, scene));
        }

        let summary = scene.summary();
        log::debug!(
            "Scene decoded in {:.3}ms: {} batch(es) ({} empty), {} segment(s), {} polygon(s)",
            started.elapsed().as_secs_f64() * 1000.0,
            summary.batch_count,
            summary.empty_batch_count,
            summary.segment_count,
            summary.polygon_count
        );
        Ok(scene)
    }
}

fn run_lane<L: StreamDecodeLane>(
    lane: &L,
    stream: &[f64],
    palette: &Palette,
    out: &mut Vec<L::Output>,
) -> Result<(), DecodeError> {
    log::trace!(
        "Running {} lane '{}' over {} {} scalars",
        lane.lane_kind(),
        lane.strategy_name(),
        stream.len(),
        lane.stream_kind()
    );
    let mut reader = StreamReader::new(stream);
    lane.decode_into(&mut reader, palette, out)
}

fn fail(stream: StreamKind, source: DecodeError, partial: DecodedScene) -> SceneDecodeError {
    log::warn!("Aborting {stream} stream decode: {source}");
    SceneDecodeError {
        stream,
        source,
        partial: Box::new(partial),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::Color;

    fn palette() -> Palette {
        Palette::with_colors(vec![Color::WHITE, Color::RED, Color::BLUE]).unwrap()
    }

    #[test]
    fn test_decode_both_streams() {
        let lines = [1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let polygons = [3.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let scene = SceneDecoder::new()
            .decode(&lines, &polygons, &palette())
            .unwrap();

        assert_eq!(scene.line_batches.len(), 1);
        assert_eq!(scene.polygons.len(), 1);
        assert_eq!(scene.polygons[0].color, Color::BLUE);
    }

    #[test]
    fn test_line_failure_skips_polygons() {
        let lines = [1.0, 1.0, 0.0];
        let polygons = [3.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let err = SceneDecoder::new()
            .decode(&lines, &polygons, &palette())
            .unwrap_err();

        assert_eq!(err.stream, StreamKind::Lines);
        assert!(matches!(err.source, DecodeError::MalformedStream { .. }));
        assert!(err.partial.is_empty());
        assert_eq!(err.to_string(), "failed to decode the line stream");
    }

    #[test]
    fn test_polygon_failure_keeps_lines() {
        let lines = [0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let polygons = [3.0, 9.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let err = SceneDecoder::new()
            .decode(&lines, &polygons, &palette())
            .unwrap_err();

        assert_eq!(err.stream, StreamKind::Polygons);
        assert!(matches!(err.source, DecodeError::InvalidColorIndex { .. }));
        assert_eq!(err.partial.line_batches.len(), 1);
        assert!(err.partial.polygons.is_empty());
    }
}
