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

//! Rasterized cell grids and the transforms that permute them.
//!
//! A [`Figure`] is stored column-major: `columns[x][y]`. Transforms never
//! recolor, they only move pixels, so a transformed figure always holds the
//! same multiset of colors as its source.
//!
//! # Transforms
//!
//! ```text
//! Rotate     out[i][j] = in[j][h - i - 1]
//! RotateRev  out[i][j] = in[w - j - 1][i]         (inverse of Rotate)
//! Reverse    out[i][j] = in[w - i - 1][h - j - 1] (180 degrees)
//! ```

use rand::Rng;

use crate::color::Rgba;

/// One cell's worth of pixels, indexed `[column][row]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    columns: Vec<Vec<Rgba>>,
}

impl Figure {
    /// A `size x size` figure where every pixel is `color`.
    #[must_use]
    pub fn filled(size: usize, color: Rgba) -> Self {
        Self {
            columns: vec![vec![color; size]; size],
        }
    }

    /// A `size x size` figure colored by `f(x, y)`.
    #[must_use]
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let columns = (0..size)
            .map(|x| (0..size).map(|y| f(x, y)).collect())
            .collect();
        Self { columns }
    }

    /// Wraps raw columns. Every column must have the same length.
    #[must_use]
    pub fn from_columns(columns: Vec<Vec<Rgba>>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "Figure columns must have equal length"
        );
        Self { columns }
    }

    /// Side length; only meaningful for square figures.
    #[must_use]
    pub fn size(&self) -> usize {
        self.width()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        self.columns.get(x).and_then(|col| col.get(y)).copied()
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<Rgba>] {
        &self.columns
    }

    /// Iterates `(x, y, color)` over every pixel, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(x, col)| col.iter().enumerate().map(move |(y, c)| (x, y, *c)))
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Quarter-turn one way.
#[must_use]
pub fn rotate(figure: &Figure) -> Figure {
    if figure.is_empty() {
        return figure.clone();
    }
    let (w, h) = (figure.width(), figure.height());
    let src = &figure.columns;
    let columns = (0..h)
        .map(|i| (0..w).map(|j| src[j][h - i - 1]).collect())
        .collect();
    Figure { columns }
}

/// Quarter-turn the other way; undoes [`rotate`].
///
/// Walks both axes from the far edge down, mirroring how `rotate` reads the
/// source from the bottom row up.
#[must_use]
pub fn rotate_rev(figure: &Figure) -> Figure {
    if figure.is_empty() {
        return figure.clone();
    }
    let (w, h) = (figure.width(), figure.height());
    let src = &figure.columns;
    let mut columns = vec![Vec::with_capacity(w); h];
    for i in (1..=h).rev() {
        let column = &mut columns[h - i];
        for j in (1..=w).rev() {
            column.push(src[j - 1][h - i]);
        }
    }
    Figure { columns }
}

/// Half-turn (point reflection through the center).
#[must_use]
pub fn reverse(figure: &Figure) -> Figure {
    if figure.is_empty() {
        return figure.clone();
    }
    let (w, h) = (figure.width(), figure.height());
    let src = &figure.columns;
    let columns = (0..w)
        .map(|i| (0..h).map(|j| src[w - i - 1][h - j - 1]).collect())
        .collect();
    Figure { columns }
}

/// Optional post-rasterization permutation of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    None,
    Rotate,
    RotateRev,
    Reverse,
}

impl Transform {
    /// Number of equally likely buckets behind [`Transform::random`].
    pub const BUCKETS: u8 = 5;

    /// Maps a bucket in `0..5` to a transform.
    ///
    /// | bucket | transform |
    /// |--------|-----------|
    /// | 0      | Reverse   |
    /// | 1      | Rotate    |
    /// | 2      | RotateRev |
    /// | 3, 4   | None      |
    #[must_use]
    pub const fn from_bucket(bucket: u8) -> Self {
        match bucket {
            0 => Transform::Reverse,
            1 => Transform::Rotate,
            2 => Transform::RotateRev,
            _ => Transform::None,
        }
    }

    /// Draws a transform: 1/5 each for Reverse, Rotate and RotateRev, 2/5 None.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_bucket(rng.gen_range(0..Self::BUCKETS))
    }

    #[must_use]
    pub fn apply(self, figure: &Figure) -> Figure {
        match self {
            Transform::None => figure.clone(),
            Transform::Rotate => rotate(figure),
            Transform::RotateRev => rotate_rev(figure),
            Transform::Reverse => reverse(figure),
        }
    }

    /// Applies the transform, returning the source untouched for `None`.
    #[must_use]
    pub fn apply_owned(self, figure: Figure) -> Figure {
        match self {
            Transform::None => figure,
            other => other.apply(&figure),
        }
    }
}
