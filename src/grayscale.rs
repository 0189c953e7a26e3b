//! Image decoding and RGB to brightness conversion.

use std::path::Path;

use image::{io::Reader as ImageReader, DynamicImage, GenericImageView, ImageError, Rgba};

use crate::error::{AsciiError, Result};
use crate::grid::BrightnessGrid;

/// Decode the image at `path`, sniffing the format from its contents.
pub fn decode_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decode_error = |source: ImageError| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Convert an RGBA image into a brightness grid of the same size.
///
/// Each cell is the plain average of red, green and blue, rounded down.
/// Alpha is ignored.
pub fn to_brightness_grid<I>(image: &I) -> BrightnessGrid
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    BrightnessGrid::from_fn(width as usize, height as usize, |x, y| {
        let [r, g, b, _] = image.get_pixel(x as u32, y as u32).0;
        ((r as u16 + g as u16 + b as u16) / 3) as u8
    })
}

/// Decode the image at `path` and reduce it to brightness values.
pub fn load_brightness_grid(path: impl AsRef<Path>) -> Result<BrightnessGrid> {
    let image = decode_image(path)?;
    Ok(to_brightness_grid(&image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_average_of_rgb_rounds_down() {
        // (10 + 20 + 31) / 3 = 20.33
        let image = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 31, 255]));
        let grid = to_brightness_grid(&image);
        assert_eq!(grid.get(0, 0), 20);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = RgbaImage::from_pixel(1, 1, Rgba([90, 120, 150, 255]));
        let clear = RgbaImage::from_pixel(1, 1, Rgba([90, 120, 150, 0]));
        assert_eq!(
            to_brightness_grid(&opaque).get(0, 0),
            to_brightness_grid(&clear).get(0, 0)
        );
        assert_eq!(to_brightness_grid(&clear).get(0, 0), 120);
    }

    #[test]
    fn test_extremes() {
        let white = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let black = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        assert_eq!(to_brightness_grid(&white).get(0, 0), 255);
        assert_eq!(to_brightness_grid(&black).get(0, 0), 0);
    }

    #[test]
    fn test_grid_matches_image_dimensions_and_orientation() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(2, 1, Rgba([255, 255, 255, 255]));
        let grid = to_brightness_grid(&image);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(2, 1), 255);
        assert_eq!(grid.get(1, 1), 0);
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode_image("does/not/exist.png").unwrap_err();
        assert!(matches!(err, AsciiError::Decode { .. }));
    }
}
