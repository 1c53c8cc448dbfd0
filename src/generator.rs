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

//! Tile composer.
//!
//! # Generation Pass
//!
//! 1. Validate the canvas (square, at least [`MIN_SCENE_SIZE`] wide). Nothing is
//!    written if validation fails.
//! 2. Draw one foreground/background pair for the whole pass.
//! 3. Clear the canvas to the background.
//! 4. For every cell `(i, j)`, pick a [`Shape`] and a [`Transform`],
//!    rasterize, transform, and write the figure at `(i * S, j * S)`.
//!
//! Cells partition the canvas, so no pixel is written by two cells. When the
//! side is not a multiple of the cell count, the leftover strip keeps the
//! cleared background.

use rand::Rng;
use thiserror::Error;

use crate::color::{ColorPair, Palette};
use crate::figure::{Figure, Transform};
use crate::scene::Canvas;
use crate::shapes::Shape;
use crate::{DEFAULT_CELLS_PER_SIDE, MIN_SCENE_SIZE};

/// Reasons a canvas is rejected before generation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("scene width and height must be equal (got {width}x{height})")]
    DimensionMismatch { width: usize, height: usize },
    #[error("scene width must be at least {minimum} (got {width})")]
    TooSmall { width: usize, minimum: usize },
}

/// Fills a square canvas with a grid of random shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    cells_per_side: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator with the default 8 x 8 grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells_per_side: DEFAULT_CELLS_PER_SIDE,
        }
    }

    /// Generator with an `n x n` grid.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub const fn with_cells_per_side(n: usize) -> Self {
        assert!(n > 0, "cells per side must be at least 1");
        Self { cells_per_side: n }
    }

    #[must_use]
    pub const fn cells_per_side(&self) -> usize {
        self.cells_per_side
    }

    /// Checks the canvas and returns the cell size.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::DimensionMismatch`] for a non-square canvas and
    /// [`GenerateError::TooSmall`] when the side is below [`MIN_SCENE_SIZE`].
    pub fn cell_size<C: Canvas + ?Sized>(&self, canvas: &C) -> Result<usize, GenerateError> {
        let (width, height) = (canvas.width(), canvas.height());
        if width != height {
            return Err(GenerateError::DimensionMismatch { width, height });
        }
        if width < MIN_SCENE_SIZE {
            return Err(GenerateError::TooSmall {
                width,
                minimum: MIN_SCENE_SIZE,
            });
        }
        Ok(width / self.cells_per_side)
    }

    /// Runs one full generation pass, drawing the colors from `palette`.
    ///
    /// Returns the color pair every cell was drawn with.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if the canvas is rejected; the canvas is
    /// left untouched in that case.
    pub fn generate<C, P, R>(
        &self,
        canvas: &mut C,
        palette: &P,
        rng: &mut R,
    ) -> Result<ColorPair, GenerateError>
    where
        C: Canvas + ?Sized,
        P: Palette + ?Sized,
        R: Rng + ?Sized,
    {
        let cell_size = self.checked_cell_size(canvas)?;
        let colors = palette.random_pair(rng);
        self.compose(canvas, cell_size, colors, rng);
        Ok(colors)
    }

    /// Same pass as [`Generator::generate`] with caller-chosen colors.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] if the canvas is rejected.
    pub fn generate_with_colors<C, R>(
        &self,
        canvas: &mut C,
        colors: ColorPair,
        rng: &mut R,
    ) -> Result<(), GenerateError>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        let cell_size = self.checked_cell_size(canvas)?;
        self.compose(canvas, cell_size, colors, rng);
        Ok(())
    }

    fn checked_cell_size<C: Canvas + ?Sized>(&self, canvas: &C) -> Result<usize, GenerateError> {
        self.cell_size(canvas).map_err(|e| {
            #[cfg(feature = "debug-logging")]
            log::warn!("Generator: rejected canvas: {e}");
            e
        })
    }

    fn compose<C, R>(&self, canvas: &mut C, cell_size: usize, colors: ColorPair, rng: &mut R)
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        #[cfg(feature = "debug-logging")]
        log::debug!(
            "Generator: {}x{} grid, cell={}px, fg={:?}, bg={:?}",
            self.cells_per_side,
            self.cells_per_side,
            cell_size,
            colors.foreground,
            colors.background
        );

        canvas.clear(colors.background);

        if cell_size == 0 {
            return;
        }

        for i in 0..self.cells_per_side {
            for j in 0..self.cells_per_side {
                let shape = Shape::random(rng);
                let transform = Transform::random(rng);

                #[cfg(feature = "debug-logging")]
                log::trace!("Generator: cell ({i}, {j}) -> {shape:?} / {transform:?}");

                let figure = compose_cell(shape, transform, cell_size, colors);
                write_figure(canvas, &figure, i * cell_size, j * cell_size);
            }
        }

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "Generator: wrote {} cells",
            self.cells_per_side * self.cells_per_side
        );
    }
}

/// Rasterizes `shape` at `cell_size` and applies `transform`.
#[must_use]
pub fn compose_cell(
    shape: Shape,
    transform: Transform,
    cell_size: usize,
    colors: ColorPair,
) -> Figure {
    let figure = shape.rasterize(cell_size, colors.foreground, colors.background);
    transform.apply_owned(figure)
}

fn write_figure<C: Canvas + ?Sized>(canvas: &mut C, figure: &Figure, x0: usize, y0: usize) {
    for (x, y, color) in figure.pixels() {
        canvas.set(x0 + x, y0 + y, color);
    }
}
