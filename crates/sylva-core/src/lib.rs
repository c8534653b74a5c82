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

//! # Sylva Core
//!
//! Foundational crate containing the types shared by every stage of the
//! geometry stream pipeline: colors and vertices, the caller-owned palette,
//! the read-only stream cursor, the decoded geometry model and the error
//! hierarchy.

#![warn(missing_docs)]

pub mod error;
pub mod geometry;
pub mod lane;
pub mod math;
pub mod palette;
pub mod stream;

pub use error::{DecodeError, PaletteError};
pub use geometry::{BatchedSegment, DecodedScene, LineBatch, LineSegment, PolygonRecord, SceneSummary};
pub use math::{Bounds, Color, Vertex};
pub use palette::Palette;
pub use stream::{StreamKind, StreamLayout, StreamReader};
