// Copyright 2025 Dustin McAfee
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

//! Integer 2-D points and the triangle edge function.

/// A pixel position in cell coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    /// The vector from `p2` to `p1`.
    #[must_use]
    pub const fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x - p2.x,
            y: p1.y - p2.y,
        }
    }

    /// 2-D cross product (z component of `self x other`).
    #[must_use]
    pub const fn cross(self, other: Vector) -> i64 {
        self.x * other.y - self.y * other.x
    }
}

/// Signed edge function for the directed segment `a -> b`.
///
/// Computes `(p - b) x (b - a)`. For a triangle whose three edges are all
/// evaluated in the same winding, a point is inside when every edge value has
/// the same sign.
#[inline]
#[must_use]
pub const fn edge(a: Point, b: Point, p: Point) -> i64 {
    Vector::from_points(p, b).cross(Vector::from_points(b, a))
}
