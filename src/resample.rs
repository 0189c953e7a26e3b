//! Block-average downsampling of brightness grids.

use rayon::prelude::*;

use crate::error::{AsciiError, Result};
use crate::grid::BrightnessGrid;

/// Downsample `source` to `out_width` x `out_height` by block averaging.
///
/// Every output cell averages a `step_x` x `step_y` region, where the steps
/// are the floor of the source/output size ratios. The region's top-left
/// corner is placed proportionally (`i / out_width * in_width`), not at
/// `i * step_x`, so regions can overlap or leave gaps when sizes don't divide
/// evenly. Existing renders depend on that placement.
///
/// Fails with `InvalidDimensions` when an output size is zero, larger than
/// the source, or a region would reach past the source edge.
pub fn resample(source: &BrightnessGrid, out_width: usize, out_height: usize) -> Result<BrightnessGrid> {
    let in_width = source.width();
    let in_height = source.height();

    if out_width == 0 || out_height == 0 {
        return Err(AsciiError::invalid_dimensions(format!(
            "output size {}x{} must be non-zero",
            out_width, out_height
        )));
    }

    let step_x = in_width / out_width;
    let step_y = in_height / out_height;
    if step_x == 0 || step_y == 0 {
        return Err(AsciiError::invalid_dimensions(format!(
            "output size {}x{} exceeds source size {}x{}",
            out_width, out_height, in_width, in_height
        )));
    }

    let columns: Vec<Vec<u8>> = (0..out_width)
        .into_par_iter()
        .map(|i| {
            let mapped_x = ((i as f64 / out_width as f64) * in_width as f64) as usize;
            (0..out_height)
                .map(|j| {
                    let mapped_y = ((j as f64 / out_height as f64) * in_height as f64) as usize;
                    region_average(source, mapped_x, mapped_y, step_x, step_y)
                })
                .collect::<Result<Vec<u8>>>()
        })
        .collect::<Result<_>>()?;

    log::debug!(
        "resampled {}x{} -> {}x{} (region {}x{})",
        in_width,
        in_height,
        out_width,
        out_height,
        step_x,
        step_y
    );

    Ok(BrightnessGrid::from_column_major(
        out_width,
        out_height,
        columns.concat(),
    ))
}

/// Floor of the mean over `[start_x, start_x + width) x [start_y, start_y + height)`.
fn region_average(
    source: &BrightnessGrid,
    start_x: usize,
    start_y: usize,
    width: usize,
    height: usize,
) -> Result<u8> {
    if start_x + width > source.width() || start_y + height > source.height() {
        return Err(AsciiError::invalid_dimensions(format!(
            "region {}x{} at ({}, {}) falls outside {}x{} source",
            width,
            height,
            start_x,
            start_y,
            source.width(),
            source.height()
        )));
    }

    let mut sum = 0u64;
    for x in start_x..start_x + width {
        for y in start_y..start_y + height {
            sum += source.get(x, y) as u64;
        }
    }
    let count = (width * height) as u64;

    Ok((sum / count) as u8)
}
