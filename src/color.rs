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

//! Colors and palette providers.
//!
//! The generator treats colors as opaque tokens: it only ever needs a
//! foreground and a background per pass. Palettes hand those out from a small
//! fixed set, drawing from a caller-supplied random source.

use rand::Rng;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

/// The two colors shared by every cell of one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Rgba,
    pub background: Rgba,
}

impl ColorPair {
    #[must_use]
    pub const fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// True if `color` is one of the two colors of this pair.
    #[must_use]
    pub fn contains(&self, color: Rgba) -> bool {
        color == self.foreground || color == self.background
    }
}

/// Source of the foreground/background colors for a generation pass.
pub trait Palette {
    fn random_foreground<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba;
    fn random_background<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba;

    /// Draws a foreground, then a background.
    fn random_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorPair {
        let foreground = self.random_foreground(rng);
        let background = self.random_background(rng);
        ColorPair::new(foreground, background)
    }
}

// Gruvbox dark backgrounds
const GRUVBOX_BG: [Rgba; 3] = [
    Rgba::new(29, 32, 33, 255),
    Rgba::new(40, 40, 40, 255),
    Rgba::new(50, 48, 47, 255),
];

// Gruvbox accents: red, yellow, blue, aqua
const GRUVBOX_FG: [Rgba; 4] = [
    Rgba::new(204, 36, 29, 255),
    Rgba::new(215, 153, 33, 255),
    Rgba::new(69, 133, 136, 255),
    Rgba::new(104, 157, 106, 255),
];

/// Default palette built from the Gruvbox colorscheme.
///
/// Foregrounds are the red, yellow, blue and aqua accents; backgrounds are the
/// three darkest background shades. Each draw is uniform over its set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GruvboxPalette;

impl GruvboxPalette {
    #[must_use]
    pub const fn foregrounds() -> &'static [Rgba] {
        &GRUVBOX_FG
    }

    #[must_use]
    pub const fn backgrounds() -> &'static [Rgba] {
        &GRUVBOX_BG
    }
}

impl Palette for GruvboxPalette {
    fn random_foreground<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        GRUVBOX_FG[rng.gen_range(0..GRUVBOX_FG.len())]
    }

    fn random_background<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        GRUVBOX_BG[rng.gen_range(0..GRUVBOX_BG.len())]
    }
}

/// Palette that always returns the same pair. Does not consume randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPalette {
    pub foreground: Rgba,
    pub background: Rgba,
}

impl FixedPalette {
    #[must_use]
    pub const fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

impl Palette for FixedPalette {
    fn random_foreground<R: Rng + ?Sized>(&self, _rng: &mut R) -> Rgba {
        self.foreground
    }

    fn random_background<R: Rng + ?Sized>(&self, _rng: &mut R) -> Rgba {
        self.background
    }
}
