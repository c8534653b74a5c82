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

//! # Sylva Lanes
//!
//! Hot-path pipelines of the decoder:
//!
//! - [`decode_lane`] turns the flat line and polygon streams into batches and
//!   polygon records, and encodes them back for fixtures;
//! - [`scene_lane`] drives both decoders to rebuild a whole scene per call;
//! - [`render_lane`] turns a decoded scene into renderer-facing draw calls.

#![warn(missing_docs)]

pub mod decode_lane;
pub mod render_lane;
pub mod scene_lane;

pub use decode_lane::{
    LineBatchDecoderLane, LineDecoderConfig, PolygonDecoderConfig, PolygonDecoderLane,
    StreamDecodeLane,
};
pub use render_lane::{CoordinateConvention, RenderAssembly, RenderFrame};
pub use scene_lane::{SceneDecodeError, SceneDecoder};
