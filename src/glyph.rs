//! Brightness to character mapping.

use rayon::prelude::*;

use crate::grid::BrightnessGrid;

/// Characters ordered from the fullest-looking to the emptiest.
pub const GLYPH_RAMP: &str = "@ac-. ";

/// The glyph ramp, either as written or reversed for dark backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// With `invert` the ramp runs emptiest to fullest, so bright pixels get
    /// the dense glyphs. That reads correctly on a dark terminal.
    pub fn new(invert: bool) -> Self {
        let mut glyphs: Vec<char> = GLYPH_RAMP.chars().collect();
        if invert {
            glyphs.reverse();
        }
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Pick the glyph for a brightness value: `floor(value / 256 * len)`.
    pub fn glyph_for(&self, value: u8) -> char {
        let index = value as usize * self.glyphs.len() / 256;
        debug_assert!(index < self.glyphs.len());
        self.glyphs[index]
    }
}

/// Render a grid as `height` newline-terminated lines of `width` glyphs.
pub fn map_to_glyphs(grid: &BrightnessGrid, invert: bool) -> String {
    let ramp = Ramp::new(invert);
    let width = grid.width();

    let rows: Vec<String> = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            let mut row = String::with_capacity(width + 1);
            for x in 0..width {
                row.push(ramp.glyph_for(grid.get(x, y)));
            }
            row.push('\n');
            row
        })
        .collect();

    rows.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_bounds() {
        let ramp = Ramp::new(false);
        assert_eq!(ramp.len(), 6);
        assert_eq!(ramp.glyph_for(0), '@');
        assert_eq!(ramp.glyph_for(255), ' ');
    }

    #[test]
    fn test_ramp_band_edges() {
        let ramp = Ramp::new(false);
        // bands are 256 / 6 = 42.67 wide
        assert_eq!(ramp.glyph_for(42), '@');
        assert_eq!(ramp.glyph_for(43), 'a');
        assert_eq!(ramp.glyph_for(128), '-');
        assert_eq!(ramp.glyph_for(213), '.');
        assert_eq!(ramp.glyph_for(214), ' ');
    }

    #[test]
    fn test_inverted_ramp() {
        let ramp = Ramp::new(true);
        assert_eq!(ramp.glyphs(), &[' ', '.', '-', 'c', 'a', '@']);
        assert_eq!(ramp.glyph_for(0), ' ');
        assert_eq!(ramp.glyph_for(255), '@');
    }

    #[test]
    fn test_rows_follow_column_row_indexing() {
        // column 0 is black, column 1 is white
        let grid = BrightnessGrid::from_columns(&[vec![0, 0], vec![255, 255]]).unwrap();
        assert_eq!(map_to_glyphs(&grid, false), "@ \n@ \n");
        assert_eq!(map_to_glyphs(&grid, true), " @\n @\n");
    }

    #[test]
    fn test_line_shape() {
        let grid = BrightnessGrid::from_fn(7, 3, |x, y| (x * 30 + y * 5) as u8);
        let art = map_to_glyphs(&grid, false);
        assert!(art.ends_with('\n'));
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 7));
        assert!(art
            .chars()
            .all(|c| c == '\n' || GLYPH_RAMP.contains(c)));
    }
}
