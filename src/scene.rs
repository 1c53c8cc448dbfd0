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

//! Pixel sink the generator draws into.
//!
//! [`Canvas`] is the only surface the generator touches: dimensions, single
//! pixel writes, and a bulk clear. [`Scene`] is the owned RGBA8 implementation
//! that can also be encoded to PNG.
//!
//! # Buffer Layout
//!
//! ```text
//! offset(x, y) = (y * width + x) * 4
//! bytes        = [R][G][B][A] per pixel, rows top to bottom
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bytes::BytesMut;

use crate::color::Rgba;

const BYTES_PER_PIXEL: usize = 4;

/// A write-only pixel target.
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sets one pixel. Coordinates outside the canvas are ignored.
    fn set(&mut self, x: usize, y: usize, color: Rgba);

    /// Paints every pixel with `color`.
    fn clear(&mut self, color: Rgba) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set(x, y, color);
            }
        }
    }
}

/// Owned RGBA8 image with a configured background/foreground pair.
#[derive(Debug, Clone)]
pub struct Scene {
    width: usize,
    height: usize,
    background: Rgba,
    foreground: Rgba,
    pixels: BytesMut,
}

impl Scene {
    /// Allocates a zeroed (transparent black) scene.
    #[must_use]
    pub fn new(width: usize, height: usize, background: Rgba, foreground: Rgba) -> Self {
        let len = width * height * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            background,
            foreground,
            pixels: BytesMut::zeroed(len),
        }
    }

    #[must_use]
    pub fn background(&self) -> Rgba {
        self.background
    }

    #[must_use]
    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    /// Clears the scene to its configured background.
    pub fn fill_background(&mut self) {
        let background = self.background;
        self.clear(background);
    }

    /// Sets one pixel; `None` paints the configured foreground.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Option<Rgba>) {
        let color = color.unwrap_or(self.foreground);
        self.set(x, y, color);
    }

    /// Paints every pixel with the color returned by `f(x, y)`.
    pub fn each_pixel<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> Option<Rgba>,
    {
        for x in 0..self.width {
            for y in 0..self.height {
                let color = f(x, y);
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Reads one pixel back, or `None` outside the scene.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let offset = self.offset(x, y)?;
        let px = &self.pixels[offset..offset + BYTES_PER_PIXEL];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Raw row-major RGBA8 bytes.
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Encodes the scene as an 8-bit RGBA PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene is too large for PNG or the writer fails.
    pub fn encode_png<W: Write>(&self, writer: W) -> io::Result<()> {
        let width = u32::try_from(self.width).map_err(|_| too_large(self.width))?;
        let height = u32::try_from(self.height).map_err(|_| too_large(self.height))?;

        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header().map_err(io::Error::other)?;
        png_writer
            .write_image_data(&self.pixels)
            .map_err(io::Error::other)?;
        png_writer.finish().map_err(io::Error::other)?;

        #[cfg(feature = "debug-logging")]
        log::debug!(
            "Scene: encoded {}x{} PNG ({} raw bytes)",
            self.width,
            self.height,
            self.pixels.len()
        );

        Ok(())
    }

    /// Writes the scene to `path` as PNG, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode_png(&mut writer)?;
        writer.flush()
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) * BYTES_PER_PIXEL)
        } else {
            None
        }
    }
}

impl Canvas for Scene {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if let Some(offset) = self.offset(x, y) {
            self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        }
    }

    fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&bytes);
        }
    }
}

fn too_large(dimension: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Scene: dimension {dimension} does not fit in a PNG header"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(204, 36, 29, 255);

    #[test]
    fn test_new_scene_is_zeroed() {
        let scene = Scene::new(4, 3, Rgba::BLACK, Rgba::WHITE);
        assert_eq!(scene.as_rgba().len(), 4 * 3 * 4);
        assert!(scene.as_rgba().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_fill_background() {
        let mut scene = Scene::new(5, 5, RED, Rgba::WHITE);
        scene.fill_background();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(scene.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn test_set_pixel_defaults_to_foreground() {
        let mut scene = Scene::new(4, 4, Rgba::BLACK, RED);
        scene.set_pixel(1, 2, None);
        scene.set_pixel(3, 0, Some(Rgba::WHITE));
        assert_eq!(scene.pixel(1, 2), Some(RED));
        assert_eq!(scene.pixel(3, 0), Some(Rgba::WHITE));
        assert_eq!(scene.pixel(0, 0), Some(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_row_major_layout() {
        let mut scene = Scene::new(3, 2, Rgba::BLACK, Rgba::WHITE);
        scene.set(2, 1, RED);
        let offset = (scene.width() + 2) * 4;
        assert_eq!(&scene.as_rgba()[offset..offset + 4], &[204, 36, 29, 255]);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut scene = Scene::new(2, 2, Rgba::BLACK, Rgba::WHITE);
        scene.set(2, 0, RED);
        scene.set(0, 7, RED);
        assert!(scene.as_rgba().iter().all(|b| *b == 0));
        assert_eq!(scene.pixel(2, 0), None);
    }

    #[test]
    fn test_each_pixel_checkerboard() {
        let mut scene = Scene::new(4, 4, Rgba::BLACK, Rgba::WHITE);
        scene.each_pixel(|x, y| {
            if (x + y) % 2 == 0 {
                None
            } else {
                Some(Rgba::BLACK)
            }
        });
        assert_eq!(scene.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(scene.pixel(1, 0), Some(Rgba::BLACK));
        assert_eq!(scene.pixel(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_encode_png_signature() {
        let mut scene = Scene::new(8, 8, RED, Rgba::WHITE);
        scene.fill_background();
        let mut out = Vec::new();
        scene.encode_png(&mut out).unwrap();
        assert_eq!(&out[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
