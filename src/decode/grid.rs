// src/decode/grid.rs

use super::Record;
use crate::config::CoordinateOrigin;
use crate::error::{Error, Result};
use std::fmt;

const BLANK: char = ' ';

/// Default cap on `width * height`.
pub const DEFAULT_MAX_CELLS: usize = 4_000_000;

/// Row-major character buffer, `height` rows of `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Size the grid to fit `records` and place every character.
    ///
    /// Records are written in order, so the last one aimed at a cell wins.
    /// An empty slice yields a 1×1 blank grid; callers reject that case
    /// before getting here. Fails with `Error::GridTooLarge` when the grid
    /// would hold more than `max_cells` cells; nothing is allocated then.
    pub fn build(records: &[Record], origin: CoordinateOrigin, max_cells: usize) -> Result<Self> {
        let max_x = records.iter().map(|r| r.x).max().unwrap_or(0);
        let max_y = records.iter().map(|r| r.y).max().unwrap_or(0);
        let too_large = || Error::GridTooLarge {
            max_x,
            max_y,
            limit: max_cells,
        };

        let width = max_x.checked_add(1).ok_or_else(too_large)?;
        let height = max_y.checked_add(1).ok_or_else(too_large)?;
        let total = width.checked_mul(height).ok_or_else(too_large)?;
        if total > max_cells {
            return Err(too_large());
        }

        let mut cells = vec![BLANK; width * height];
        for r in records {
            let row = match origin {
                CoordinateOrigin::TopLeft => r.y,
                CoordinateOrigin::BottomLeft => max_y - r.y,
            };
            cells[row * width + r.x] = r.ch;
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
