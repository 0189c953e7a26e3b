//! Turn raster images into plain-text ascii art.
//!
//! The pipeline has three stages:
//!
//! 1. **Grayscale** - average the RGB channels of every pixel
//! 2. **Resample** - block-average the brightness grid down to the character grid
//! 3. **Glyphs** - map each cell onto the `"@ac-. "` ramp, optionally reversed
//!
//! ```no_run
//! use asciify::{image_to_ascii_art, load_brightness_grid};
//!
//! let grid = load_brightness_grid("images/gradient.png")?;
//! let art = image_to_ascii_art(&grid, 90, 10, true)?;
//! print!("{}", art);
//! # Ok::<(), asciify::AsciiError>(())
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod glyph;
pub mod grayscale;
pub mod grid;
pub mod live;
pub mod resample;
pub mod sink;

pub use converter::{
    decoded_image_to_ascii_art, image_to_ascii_art, render_outputs, AsciiOptions, ImageConverter,
    RenderedArt, ToAsciiArt,
};
pub use error::AsciiError;
pub use glyph::{map_to_glyphs, Ramp, GLYPH_RAMP};
pub use grayscale::{decode_image, load_brightness_grid, to_brightness_grid};
pub use grid::BrightnessGrid;
pub use resample::resample;
pub use sink::{write_ascii_art, Destination};
