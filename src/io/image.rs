//! Triangle rasterisation of grids and PNG export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{BACKGROUND_LEVEL, HIGHLIGHT_COLORS, TILE_COLOR};
use crate::io::error::{ErrorContext, MosaicError, Result, WithContext, invalid_parameter};
use crate::spatial::grid::{Grid, Tile};
use crate::symmetry::transform::TileType;

/// Whether the pixel at `(x, y)` inside a cell of side `side` is covered by
/// the filled triangle of `tile_type`
///
/// Coverage is decided at the pixel centre; pixels whose centre lies on the
/// diagonal count as covered.
pub const fn covers(tile_type: TileType, x: u32, y: u32, side: u32) -> bool {
    match tile_type {
        // (s,0) (s,s) (0,s)
        TileType::BottomRight => x + y + 1 >= side,
        // (s,0) (0,0) (0,s)
        TileType::TopLeft => x + y + 1 <= side,
        // (s,s) (0,0) (0,s)
        TileType::BottomLeft => x <= y,
        // (s,s) (0,0) (s,0)
        TileType::TopRight => x >= y,
    }
}

/// Fill colour of a tile, its per-type highlight colour while highlighted
pub fn tile_color(tile: &Tile) -> Rgba<u8> {
    if tile.highlighted {
        Rgba(
            HIGHLIGHT_COLORS
                .get(tile.tile_type.index())
                .copied()
                .unwrap_or(TILE_COLOR),
        )
    } else {
        Rgba(TILE_COLOR)
    }
}

/// Rasterise a grid with square cells of `tile_size` pixels
///
/// # Errors
///
/// Returns `InvalidParameter` if the tile size is zero or the image would
/// not fit in `u32` pixel dimensions
pub fn render_grid(grid: &Grid, tile_size: usize) -> Result<RgbaImage> {
    let side = u32::try_from(tile_size)
        .ok()
        .filter(|&side| side > 0)
        .ok_or_else(|| invalid_parameter("tile_size", &tile_size, &"must be in 1..=u32::MAX"))?;
    let width = pixel_extent(grid.cols(), side, "cols")?;
    let height = pixel_extent(grid.rows(), side, "rows")?;

    let background = Rgba([BACKGROUND_LEVEL, BACKGROUND_LEVEL, BACKGROUND_LEVEL, 255]);
    let mut img = ImageBuffer::from_pixel(width, height, background);

    for tile in grid.tiles() {
        let color = tile_color(&tile);
        // Cells lie inside the image, so these cannot overflow
        let origin_x = u32::try_from(tile.column).unwrap_or(0) * side;
        let origin_y = u32::try_from(tile.row).unwrap_or(0) * side;
        for y in 0..side {
            for x in 0..side {
                if covers(tile.tile_type, x, y, side) {
                    img.put_pixel(origin_x + x, origin_y + y, color);
                }
            }
        }
    }

    Ok(img)
}

fn pixel_extent(cells: usize, side: u32, parameter: &'static str) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(side))
        .ok_or_else(|| invalid_parameter(parameter, &cells, &"rendered image is too large"))
}

/// Render a grid and save it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The grid cannot be rendered at this tile size
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, tile_size: usize, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, tile_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(ErrorContext {
            path: Some(parent.to_path_buf()),
            operation: Some("create directory"),
        })?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
