// src/decode/render.rs

use super::Grid;

/// One string per grid row, top row first, no separators between cells.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    grid.rows().map(|row| row.iter().collect()).collect()
}
