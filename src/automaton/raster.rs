use crate::{
    automaton::grid::Grid,
    foundation::error::{GeomotionError, GeomotionResult},
};

/// Default live-cell colour (`#D147BD`).
pub const PINK: [u8; 4] = [0xD1, 0x47, 0xBD, 0xFF];
/// Default dead-cell colour.
pub const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

/// Rasterize a grid into an RGBA image with `cell_px × cell_px` squares per cell.
///
/// Row 0 is drawn at the bottom of the image, matching a y-up scene.
pub fn to_image(
    grid: &Grid,
    cell_px: u32,
    alive: [u8; 4],
    dead: [u8; 4],
) -> GeomotionResult<image::RgbaImage> {
    if cell_px == 0 {
        return Err(GeomotionError::automaton("cell_px must be > 0"));
    }
    let dim = |cells: usize| -> GeomotionResult<u32> {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(cell_px))
            .ok_or_else(|| GeomotionError::automaton("image dimensions overflow u32"))
    };
    let width = dim(grid.cols())?;
    let height = dim(grid.rows())?;
    let rows = grid.rows();

    Ok(image::RgbaImage::from_fn(width, height, |x, y| {
        let col = (x / cell_px) as usize;
        let row = rows - 1 - (y / cell_px) as usize;
        image::Rgba(if grid.get(row, col) { alive } else { dead })
    }))
}

/// Rasterize and write a PNG.
pub fn save_png(
    grid: &Grid,
    cell_px: u32,
    path: impl AsRef<std::path::Path>,
) -> GeomotionResult<()> {
    let img = to_image(grid, cell_px, PINK, BLACK)?;
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)
        .map_err(|e| {
            GeomotionError::automaton(format!(
                "write png '{}': {e}",
                path.as_ref().display()
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/raster.rs"]
mod tests;
