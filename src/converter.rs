use image::DynamicImage;

use crate::error::Result;
use crate::glyph::map_to_glyphs;
use crate::grayscale::to_brightness_grid;
use crate::grid::BrightnessGrid;
use crate::resample::resample;

/// Options for the ASCII art conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiOptions {
    pub width: usize,
    pub height: usize,
    pub invert: bool,
}

impl AsciiOptions {
    pub fn new(width: usize, height: usize, invert: bool) -> Self {
        Self {
            width,
            height,
            invert,
        }
    }
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self::new(90, 10, false)
    }
}

/// Resample a brightness grid to `ascii_width` x `ascii_height` and render
/// it with the glyph ramp.
pub fn image_to_ascii_art(
    grid: &BrightnessGrid,
    ascii_width: usize,
    ascii_height: usize,
    invert_brightness: bool,
) -> Result<String> {
    let resized = resample(grid, ascii_width, ascii_height)?;
    Ok(map_to_glyphs(&resized, invert_brightness))
}

/// Same as [`image_to_ascii_art`], starting from a decoded color image.
pub fn decoded_image_to_ascii_art(
    image: &DynamicImage,
    ascii_width: usize,
    ascii_height: usize,
    invert_brightness: bool,
) -> Result<String> {
    let grid = to_brightness_grid(image);
    image_to_ascii_art(&grid, ascii_width, ascii_height, invert_brightness)
}

/// Trait for converting something generically to ASCII art.
pub trait ToAsciiArt {
    fn to_ascii_art(&self, options: Option<AsciiOptions>) -> Result<String>;
}

impl ToAsciiArt for BrightnessGrid {
    fn to_ascii_art(&self, options: Option<AsciiOptions>) -> Result<String> {
        let options = options.unwrap_or_default();
        image_to_ascii_art(self, options.width, options.height, options.invert)
    }
}

/// Holds the brightness grid of a decoded image so it can be rendered
/// repeatedly at different sizes.
pub struct ImageConverter {
    grid: BrightnessGrid,
}

impl ImageConverter {
    pub fn new(image: &DynamicImage) -> Self {
        Self {
            grid: to_brightness_grid(image),
        }
    }

    pub fn from_grid(grid: BrightnessGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &BrightnessGrid {
        &self.grid
    }
}

impl ToAsciiArt for ImageConverter {
    fn to_ascii_art(&self, options: Option<AsciiOptions>) -> Result<String> {
        self.grid.to_ascii_art(options)
    }
}

/// Art for each destination of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    pub console: Option<String>,
    pub file: Option<String>,
}

/// Render the console copy (unless `print_console` is false) and, when
/// `file_invert` is set, the copy meant for a text file.
///
/// The file copy reuses the console art when both use the same ramp
/// direction. Either way nothing is returned unless every render succeeds.
pub fn render_outputs<C: ToAsciiArt + ?Sized>(
    converter: &C,
    options: AsciiOptions,
    print_console: bool,
    file_invert: Option<bool>,
) -> Result<RenderedArt> {
    let art = converter.to_ascii_art(Some(options))?;

    let file = match file_invert {
        Some(invert) if invert == options.invert => Some(art.clone()),
        Some(invert) => Some(converter.to_ascii_art(Some(AsciiOptions { invert, ..options }))?),
        None => None,
    };

    Ok(RenderedArt {
        console: print_console.then_some(art),
        file,
    })
}
