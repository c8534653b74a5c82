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

//! Provides the `Vertex` position type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 3D position with `f64` components, kept bit-identical to the stream.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vertex {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Vertex {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new `Vertex` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a `Vertex` from three consecutive stream scalars.
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Returns the components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the position narrowed to `f32`, the precision GPU buffers use.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    /// Returns the vertex mirrored across the XZ plane (Y negated).
    #[inline]
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }

    /// Returns the component-wise minimum of two vertices.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Returns the component-wise maximum of two vertices.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

// --- Operator Overloads ---

impl Add for Vertex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vertex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f64; 3]> for Vertex {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y_only_touches_y() {
        let v = Vertex::new(1.5, 2.0, -3.0);
        assert_eq!(v.flip_y(), Vertex::new(1.5, -2.0, -3.0));
        assert_eq!(v.flip_y().flip_y(), v);
    }

    #[test]
    fn test_min_max() {
        let a = Vertex::new(0.0, 5.0, -1.0);
        let b = Vertex::new(2.0, 1.0, 3.0);
        assert_eq!(a.min(b), Vertex::new(0.0, 1.0, -1.0));
        assert_eq!(a.max(b), Vertex::new(2.0, 5.0, 3.0));
    }

    #[test]
    fn test_array_conversions_preserve_bits() {
        let raw = [0.1, -0.0, 1e-300];
        let v = Vertex::from(raw);
        assert_eq!(v.to_array().map(f64::to_bits), raw.map(f64::to_bits));
    }
}
