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

//! Axis-aligned bounds over decoded geometry.

use super::Vertex;

/// An axis-aligned bounding box in stream coordinates.
///
/// Collaborators use it to frame a camera around a freshly decoded scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// The corner with the smallest coordinates on all axes.
    pub min: Vertex,
    /// The corner with the largest coordinates on all axes.
    pub max: Vertex,
}

impl Bounds {
    /// Creates a degenerate box containing a single point.
    #[inline]
    pub fn from_point(point: Vertex) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest box containing every point, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |bounds, p| bounds.including(p)))
    }

    /// Returns a box grown to include `point`.
    #[inline]
    pub fn including(self, point: Vertex) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns the smallest box containing both boxes.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Calculates the center point.
    #[inline]
    pub fn center(&self) -> Vertex {
        Vertex::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Calculates the size along each axis.
    #[inline]
    pub fn extent(&self) -> Vertex {
        self.max - self.min
    }
}
