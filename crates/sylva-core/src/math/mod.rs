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

//! Provides the small set of math primitives the decoder works with.
//!
//! Positions stay in `f64` exactly as the generator wrote them; colors are
//! normalized `f32` triples. Nothing in this module performs a coordinate
//! convention change (the renderer-facing Y flip lives in the render lane).

// --- Declare Sub-Modules ---

pub mod bounds;
pub mod color;
pub mod vertex;

// --- Re-export Principal Types ---

pub use self::bounds::Bounds;
pub use self::color::Color;
pub use self::vertex::Vertex;
