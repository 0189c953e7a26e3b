//! Single-channel brightness grid shared by every pipeline stage.

use crate::error::{AsciiError, Result};

/// A width x height grid of brightness values, indexed by `(x, y)`.
///
/// Values are stored column by column, so `values[x * height + y]` is the
/// sample at column `x`, row `y`. The `u8` storage keeps every value in
/// 0-255 once the grid exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessGrid {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl BrightnessGrid {
    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Build a grid from `[x][y]` integer columns.
    ///
    /// Fails with `InvalidDimensions` when there are no columns, the columns
    /// are empty or have different lengths, and with `OutOfRange` when a
    /// value falls outside 0-255.
    pub fn from_columns(columns: &[Vec<i32>]) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map(Vec::len).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(AsciiError::invalid_dimensions(
                "brightness grid must have at least one row and one column",
            ));
        }

        let mut values = Vec::with_capacity(width * height);
        for (x, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(AsciiError::invalid_dimensions(format!(
                    "column {} has {} rows, expected {}",
                    x,
                    column.len(),
                    height
                )));
            }
            for (y, &value) in column.iter().enumerate() {
                let value = u8::try_from(value).map_err(|_| AsciiError::OutOfRange {
                    x,
                    y,
                    value: value as i64,
                })?;
                values.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Assemble a grid from column-major values produced by a pipeline stage.
    pub(crate) fn from_column_major(width: usize, height: usize, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Brightness at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.values[x * self.height + y]
    }

    /// Iterate over the grid one column at a time.
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.values.chunks_exact(self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_keeps_xy_indexing() {
        let grid = BrightnessGrid::from_columns(&[vec![0, 10, 20], vec![30, 40, 50]]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(0, 2), 20);
        assert_eq!(grid.get(1, 0), 30);
    }

    #[test]
    fn test_from_columns_rejects_out_of_range() {
        let err = BrightnessGrid::from_columns(&[vec![0, 256]]).unwrap_err();
        assert!(matches!(
            err,
            AsciiError::OutOfRange {
                x: 0,
                y: 1,
                value: 256
            }
        ));

        let err = BrightnessGrid::from_columns(&[vec![-1]]).unwrap_err();
        assert!(matches!(err, AsciiError::OutOfRange { value: -1, .. }));
    }

    #[test]
    fn test_from_columns_rejects_ragged_or_empty() {
        assert!(matches!(
            BrightnessGrid::from_columns(&[]),
            Err(AsciiError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            BrightnessGrid::from_columns(&[vec![]]),
            Err(AsciiError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            BrightnessGrid::from_columns(&[vec![1, 2], vec![3]]),
            Err(AsciiError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_fn_matches_get() {
        let grid = BrightnessGrid::from_fn(4, 3, |x, y| (x * 10 + y) as u8);
        assert_eq!(grid.get(3, 2), 32);
        assert_eq!(grid.columns().count(), 4);
        assert_eq!(grid.columns().nth(1).unwrap(), &[10, 11, 12]);
    }
}
