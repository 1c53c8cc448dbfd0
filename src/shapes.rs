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

//! Shape rasterizer.
//!
//! Each primitive turns a cell size `S` and a foreground/background pair into
//! an `S x S` [`Figure`] by testing every integer pixel coordinate against the
//! shape's containment predicate. Predicates are pure functions of
//! `(S, x, y)`; nothing here is random or stateful.
//!
//! # Geometry
//!
//! ```text
//! Triangle vertices  v0 = (S/2, 0)   v1 = (S, S)   v2 = (0, S)
//! Circle             center = (S/2, S/2)   r = (S - 2) / 2
//! ```
//!
//! All divisions are integer divisions truncating toward zero, so `S = 1`
//! gives `r = 0` and still rasterizes without special cases.

use rand::Rng;

use crate::color::Rgba;
use crate::figure::Figure;
use crate::vector::{edge, Point};

/// Tolerance band for two of the outline triangle's edges.
const OUTLINE_EDGE_BAND: i64 = 12;

/// The fixed shape inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Every pixel foreground.
    Square,
    /// A square drawn with the background as its fill; looks empty.
    BlankSquare,
    FilledTriangle,
    OutlineTriangle,
    OutlineCircle,
    FilledCircle,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Square,
        Shape::BlankSquare,
        Shape::FilledTriangle,
        Shape::OutlineTriangle,
        Shape::OutlineCircle,
        Shape::FilledCircle,
    ];

    /// Number of equally likely buckets behind [`Shape::random`].
    pub const BUCKETS: u8 = 8;

    /// Maps a bucket in `0..8` to a shape.
    ///
    /// | bucket  | shape           |
    /// |---------|-----------------|
    /// | 0       | Square          |
    /// | 1       | FilledTriangle  |
    /// | 2       | OutlineTriangle |
    /// | 3       | OutlineCircle   |
    /// | 4       | FilledCircle    |
    /// | 5, 6, 7 | BlankSquare     |
    #[must_use]
    pub const fn from_bucket(bucket: u8) -> Self {
        match bucket {
            0 => Shape::Square,
            1 => Shape::FilledTriangle,
            2 => Shape::OutlineTriangle,
            3 => Shape::OutlineCircle,
            4 => Shape::FilledCircle,
            _ => Shape::BlankSquare,
        }
    }

    /// Draws a shape, biased toward blank cells (3 of 8 buckets).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_bucket(rng.gen_range(0..Self::BUCKETS))
    }

    /// Rasterizes this shape into a `size x size` figure.
    #[must_use]
    pub fn rasterize(self, size: usize, fg: Rgba, bg: Rgba) -> Figure {
        match self {
            Shape::Square => square(size, fg, bg),
            Shape::BlankSquare => square(size, bg, fg),
            Shape::FilledTriangle => filled_triangle(size, fg, bg),
            Shape::OutlineTriangle => outline_triangle(size, fg, bg),
            Shape::OutlineCircle => outline_circle(size, fg, bg),
            Shape::FilledCircle => filled_circle(size, fg, bg),
        }
    }
}

/// Solid square. The second color is accepted and ignored.
#[must_use]
pub fn square(size: usize, fg: Rgba, _bg: Rgba) -> Figure {
    Figure::filled(size, fg)
}

#[derive(Debug, Clone, Copy)]
struct TriangleEdges {
    e10: i64,
    e21: i64,
    e02: i64,
}

#[allow(clippy::cast_possible_wrap)] // cell sizes are far below i64::MAX
fn triangle_edges(size: usize, x: usize, y: usize) -> TriangleEdges {
    let s = size as i64;
    let v0 = Point::new(s / 2, 0);
    let v1 = Point::new(s, s);
    let v2 = Point::new(0, s);
    let p = Point::new(x as i64, y as i64);
    TriangleEdges {
        e10: edge(v1, v0, p),
        e21: edge(v2, v1, p),
        e02: edge(v0, v2, p),
    }
}

/// Upward-pointing triangle; a pixel is inside when all three edges are
/// strictly positive.
#[must_use]
pub fn filled_triangle(size: usize, fg: Rgba, bg: Rgba) -> Figure {
    Figure::from_fn(size, |x, y| {
        let e = triangle_edges(size, x, y);
        if e.e10 > 0 && e.e21 > 0 && e.e02 > 0 {
            fg
        } else {
            bg
        }
    })
}

/// Triangle drawn as a band along its edges.
///
/// The two slanted edges use an inclusive `0..=12` band while the base only
/// matches `e21 == S` exactly. That asymmetry is part of the shape's look.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn outline_triangle(size: usize, fg: Rgba, bg: Rgba) -> Figure {
    let s = size as i64;
    let band = 0..=OUTLINE_EDGE_BAND;
    Figure::from_fn(size, |x, y| {
        let e = triangle_edges(size, x, y);
        if band.contains(&e.e10) || e.e21 == s || band.contains(&e.e02) {
            fg
        } else {
            bg
        }
    })
}

#[derive(Debug, Clone, Copy)]
struct Circle {
    cx: i64,
    cy: i64,
    radius_sq: i64,
}

impl Circle {
    #[allow(clippy::cast_possible_wrap)]
    fn for_cell(size: usize) -> Self {
        let s = size as i64;
        let radius = (s - 2) / 2;
        Self {
            cx: s / 2,
            cy: s / 2,
            radius_sq: radius * radius,
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn distance_sq(&self, x: usize, y: usize) -> i64 {
        let dx = self.cx - x as i64;
        let dy = self.cy - y as i64;
        dx * dx + dy * dy
    }
}

/// Ring whose thickness grows with the cell: foreground where
/// `|d^2 - r^2| <= S/2`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn outline_circle(size: usize, fg: Rgba, bg: Rgba) -> Figure {
    let circle = Circle::for_cell(size);
    let half = size as i64 / 2;
    Figure::from_fn(size, |x, y| {
        let diff = circle.distance_sq(x, y) - circle.radius_sq;
        if (-half..=half).contains(&diff) {
            fg
        } else {
            bg
        }
    })
}

/// Disc: foreground where `d^2 <= r^2`.
#[must_use]
pub fn filled_circle(size: usize, fg: Rgba, bg: Rgba) -> Figure {
    let circle = Circle::for_cell(size);
    Figure::from_fn(size, |x, y| {
        if circle.distance_sq(x, y) <= circle.radius_sq {
            fg
        } else {
            bg
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FG: Rgba = Rgba::new(204, 36, 29, 255);
    const BG: Rgba = Rgba::new(29, 32, 33, 255);

    fn count(figure: &Figure, color: Rgba) -> usize {
        figure.pixels().filter(|(_, _, c)| *c == color).count()
    }

    /// Renders a figure as rows of `#` and `.` for readable assertions.
    fn ascii(figure: &Figure) -> Vec<String> {
        (0..figure.height())
            .map(|y| {
                (0..figure.width())
                    .map(|x| if figure.get(x, y) == Some(FG) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_square_8_all_foreground() {
        let f = square(8, FG, BG);
        assert_eq!(f.size(), 8);
        assert_eq!(count(&f, FG), 64);
    }

    #[test]
    fn test_blank_square_uses_background() {
        let f = Shape::BlankSquare.rasterize(8, FG, BG);
        assert_eq!(count(&f, BG), 64);
    }

    #[test]
    fn test_filled_circle_8() {
        let f = filled_circle(8, FG, BG);
        assert_eq!(f.get(4, 4), Some(FG));
        assert_eq!(f.get(0, 0), Some(BG));
        // r^2 = 9 around (4, 4)
        assert_eq!(f.get(1, 4), Some(FG));
        assert_eq!(f.get(4, 7), Some(FG));
        assert_eq!(f.get(0, 4), Some(BG));
        assert_eq!(f.get(2, 2), Some(FG));
        assert_eq!(f.get(1, 1), Some(BG));
    }

    #[test]
    fn test_filled_circle_monotonic_toward_center() {
        for size in 1..=24 {
            let f = filled_circle(size, FG, BG);
            let c = (size / 2) as i64;
            for (x, y, color) in f.pixels() {
                if color != FG {
                    continue;
                }
                // Every pixel on the straight path to the center is also inside.
                let (mut px, mut py) = (x as i64, y as i64);
                while (px, py) != (c, c) {
                    px -= (px - c).signum();
                    py -= (py - c).signum();
                    assert_eq!(
                        f.get(px as usize, py as usize),
                        Some(FG),
                        "size {size} from ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_outline_circle_8() {
        // d = dist^2 - 9, band [-4, 4]
        let f = outline_circle(8, FG, BG);
        assert_eq!(f.get(4, 4), Some(BG)); // d = -9
        assert_eq!(f.get(1, 4), Some(FG)); // d = 0
        assert_eq!(f.get(7, 4), Some(FG)); // d = 0
        assert_eq!(f.get(2, 2), Some(FG)); // d = -1
        assert_eq!(f.get(2, 4), Some(BG)); // d = -5
        assert_eq!(f.get(0, 0), Some(BG)); // d = 23
    }

    #[test]
    fn test_filled_triangle_8() {
        let f = filled_triangle(8, FG, BG);
        assert_eq!(
            ascii(&f),
            vec![
                "........", "....#...", "....#...", "...###..", "...###..", "..#####.",
                "..#####.", ".#######",
            ]
        );
    }

    #[test]
    fn test_filled_triangle_apex_and_base_excluded() {
        let f = filled_triangle(16, FG, BG);
        // the apex and the left base corner sit on edges, not inside
        assert_eq!(f.get(8, 0), Some(BG));
        assert_eq!(f.get(8, 8), Some(FG));
        assert_eq!(f.get(0, 15), Some(BG));
    }

    #[test]
    fn test_outline_triangle_base_exact_match() {
        // e21 = S * (S - y), so `e21 == S` selects exactly the bottom row.
        let size = 8;
        let f = outline_triangle(size, FG, BG);
        for x in 0..size {
            assert_eq!(triangle_edges(size, x, size - 1).e21, size as i64);
            assert_eq!(f.get(x, size - 1), Some(FG), "base pixel {x}");
        }
        for y in 0..size - 1 {
            assert_ne!(triangle_edges(size, 0, y).e21, size as i64);
        }
    }

    #[test]
    fn test_outline_triangle_matches_predicate() {
        let size = 20;
        let f = outline_triangle(size, FG, BG);
        for (x, y, color) in f.pixels() {
            let e = triangle_edges(size, x, y);
            let on = (0..=12).contains(&e.e10) || e.e21 == 20 || (0..=12).contains(&e.e02);
            assert_eq!(color == FG, on, "pixel ({x}, {y})");
        }
        assert!(count(&f, FG) > 0);
        assert!(count(&f, BG) > 0);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        for size in 0..=3 {
            for shape in Shape::ALL {
                let f = shape.rasterize(size, FG, BG);
                assert_eq!(f.width(), size);
                assert_eq!(f.height(), size);
            }
        }
    }

    #[test]
    fn test_only_two_colors_produced() {
        for size in [1, 5, 8, 13, 50] {
            for shape in Shape::ALL {
                let f = shape.rasterize(size, FG, BG);
                assert_eq!(count(&f, FG) + count(&f, BG), size * size);
            }
        }
    }

    #[test]
    fn test_shape_buckets() {
        let mapped: Vec<Shape> = (0..Shape::BUCKETS).map(Shape::from_bucket).collect();
        assert_eq!(
            mapped,
            vec![
                Shape::Square,
                Shape::FilledTriangle,
                Shape::OutlineTriangle,
                Shape::OutlineCircle,
                Shape::FilledCircle,
                Shape::BlankSquare,
                Shape::BlankSquare,
                Shape::BlankSquare,
            ]
        );
    }

    #[test]
    fn test_random_shape_reaches_full_inventory() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            seen.insert(Shape::random(&mut rng));
        }
        assert_eq!(seen.len(), Shape::ALL.len());
    }
}
