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

//! Batch boundary and visibility rules shared by the line decoder.
//!
//! Widths are compared with exact IEEE equality on the raw stream value, no
//! tolerance. The generator is expected to emit bit-stable width values for
//! every record of one logical drawing run; two widths that differ in the last
//! bit start two batches. A `NaN` width never equals anything, so each such
//! record opens its own batch.

/// Line width below which a record is parsed but not drawn.
pub const DEFAULT_MINIMUM_VISIBLE_WIDTH: f64 = 0.9;

/// What the decoder does with the current batch when a record arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    /// The record belongs to the open batch.
    Continue,
    /// The open batch (if any) is closed and a new one starts with this record.
    StartNewBatch,
}

/// Decides the batch boundary for a record of width `current`.
///
/// `previous` is the width of the open batch, or `None` for the first record.
///
/// ```
/// use sylva_lanes::decode_lane::batching::{batch_action, BatchAction};
///
/// assert_eq!(batch_action(None, 1.0), BatchAction::StartNewBatch);
/// assert_eq!(batch_action(Some(1.0), 1.0), BatchAction::Continue);
/// assert_eq!(batch_action(Some(1.0), 1.0 + f64::EPSILON), BatchAction::StartNewBatch);
/// ```
#[inline]
pub fn batch_action(previous: Option<f64>, current: f64) -> BatchAction {
    match previous {
        Some(width) if width == current => BatchAction::Continue,
        _ => BatchAction::StartNewBatch,
    }
}

/// Returns `true` if a segment of this width produces geometry.
#[inline]
pub fn is_visible(width: f64, minimum_visible_width: f64) -> bool {
    width >= minimum_visible_width
}
