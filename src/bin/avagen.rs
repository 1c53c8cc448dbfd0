//! Avatar Generator
//!
//! Renders one tiled avatar with the default 8x8 grid and Gruvbox palette and
//! saves it as PNG.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin avagen -- [OUTPUT] [SIZE] [SEED]
//! ```
//!
//! - `OUTPUT` defaults to `avatar.png`
//! - `SIZE` is the side length in pixels, default 400
//! - `SEED` makes the render reproducible; a random seed is picked and printed
//!   when omitted

use std::error::Error;
use std::time::Instant;

use avagen::{Generator, GruvboxPalette, Rgba, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_OUTPUT: &str = "avatar.png";
const DEFAULT_SIZE: usize = 400;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let size = match args.next() {
        Some(s) => s
            .parse::<usize>()
            .map_err(|e| format!("invalid SIZE {s:?}: {e}"))?,
        None => DEFAULT_SIZE,
    };
    let seed = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .map_err(|e| format!("invalid SEED {s:?}: {e}"))?,
        None => rand::random(),
    };

    let mut scene = Scene::new(size, size, Rgba::BLACK, Rgba::WHITE);
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let colors = Generator::new().generate(&mut scene, &GruvboxPalette, &mut rng)?;
    println!(
        "Generated {size}x{size} avatar (seed {seed}, fg {:?}, bg {:?}) in {:?}",
        colors.foreground,
        colors.background,
        start.elapsed()
    );

    let start = Instant::now();
    scene.save(&output)?;
    println!("Saved {output} in {:?}", start.elapsed());

    Ok(())
}
