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

//! # Lane Abstraction
//!
//! The base trait shared by every processing strategy of the pipeline.
//!
//! A **Lane** is a swappable strategy for one stage of turning generator
//! output into draw calls. Domain-specific traits extend it with their
//! execution method:
//!
//! - `StreamDecodeLane: Lane` — decodes one flat stream into records
//!   (line batches, polygons)
//!
//! The render assembly also identifies itself as a lane so log output names
//! every stage the same way.
//!
//! ## Usage
//!
//! ```rust
//! use sylva_core::lane::{Lane, LaneKind};
//!
//! struct CountingLane;
//!
//! impl Lane for CountingLane {
//!     fn strategy_name(&self) -> &'static str { "Counting" }
//!     fn lane_kind(&self) -> LaneKind { LaneKind::Decode }
//! }
//!
//! assert_eq!(CountingLane.lane_kind().to_string(), "Decode");
//! ```

use std::fmt;

/// Classification of lane types, used for routing and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Turns a raw scalar stream into decoded records.
    Decode,
    /// Turns decoded records into renderer-facing draw calls.
    Assembly,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Decode => write!(f, "Decode"),
            LaneKind::Assembly => write!(f, "Assembly"),
        }
    }
}

/// The common interface of every lane.
pub trait Lane {
    /// A short, stable, human-readable name for the strategy (e.g. `"LineBatchDecoder"`).
    fn strategy_name(&self) -> &'static str;

    /// The stage this lane belongs to.
    fn lane_kind(&self) -> LaneKind;
}
