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

//! Implements the bounds-checked cursor over a borrowed scalar buffer.

use crate::error::DecodeError;
use crate::math::Vertex;

/// A forward-only cursor over a borrowed `f64` buffer.
///
/// The reader never copies the buffer. Its lifetime is bound to the borrow,
/// so it cannot outlive the generator's memory or be kept across decode calls.
#[derive(Debug, Clone)]
pub struct StreamReader<'a> {
    data: &'a [f64],
    cursor: usize,
}

impl<'a> StreamReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [f64]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Total number of scalars in the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` once every scalar has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Number of unread scalars.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Offset of the next scalar to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Reads the next scalar and advances the cursor.
    ///
    /// Fails with [`DecodeError::StreamUnderrun`] when nothing is left.
    pub fn next_scalar(&mut self) -> Result<f64, DecodeError> {
        let value = *self
            .data
            .get(self.cursor)
            .ok_or(DecodeError::StreamUnderrun {
                position: self.cursor,
            })?;
        self.cursor += 1;
        Ok(value)
    }

    /// Reads `N` consecutive scalars.
    ///
    /// The cursor does not move if fewer than `N` scalars remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[f64; N], DecodeError> {
        let end = self.cursor + N;
        let slice = self
            .data
            .get(self.cursor..end)
            .ok_or(DecodeError::StreamUnderrun {
                position: self.data.len(),
            })?;

        let mut out = [0.0; N];
        out.copy_from_slice(slice);
        self.cursor = end;
        Ok(out)
    }

    /// Reads three consecutive scalars as a vertex.
    #[inline]
    pub fn read_vertex(&mut self) -> Result<Vertex, DecodeError> {
        self.read_array::<3>().map(Vertex::from_array)
    }
}
