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

//! Procedural generator for tiled geometric avatars.
//!
//! A square scene is divided into an N x N grid of equal cells. Every cell gets
//! one primitive shape (square, triangle, circle, or a blank cell) rasterized in
//! the session's two colors, optionally rotated or reversed, and written into
//! the scene at its grid offset.
//!
//! # Example
//!
//! ```
//! use avagen::{Generator, GruvboxPalette, Scene, Rgba};
//! use rand::SeedableRng;
//!
//! let mut scene = Scene::new(80, 80, Rgba::BLACK, Rgba::WHITE);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let pair = Generator::with_cells_per_side(10)
//!     .generate(&mut scene, &GruvboxPalette, &mut rng)
//!     .unwrap();
//! let corner = scene.pixel(0, 0).unwrap();
//! assert!(corner == pair.foreground || corner == pair.background);
//! ```

pub mod color;
pub mod figure;
pub mod generator;
pub mod scene;
pub mod shapes;
pub mod vector;

pub use color::{ColorPair, FixedPalette, GruvboxPalette, Palette, Rgba};
pub use figure::{Figure, Transform};
pub use generator::{compose_cell, GenerateError, Generator};
pub use scene::{Canvas, Scene};
pub use shapes::Shape;

/// Smallest scene side length the generator accepts.
pub const MIN_SCENE_SIZE: usize = 8;

/// Grid cells per scene side used by [`Generator::new`].
pub const DEFAULT_CELLS_PER_SIDE: usize = 8;
