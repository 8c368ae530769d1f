// Read-only occupancy snapshot of the board.
//
// A new Grid is built by the caller each tick; nothing mutates it once a
// search is underway. Bounds and traversability checks are O(1) over a
// row-major occupancy array.

use crate::error::InputError;
use crate::types::{Cell, Coord};

/// Square N x N occupancy snapshot
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    occupied: Vec<bool>,
    food: Option<Coord>,
}

impl Grid {
    /// Creates an empty grid of the given side length
    pub fn empty(size: usize) -> Self {
        Grid {
            size,
            occupied: vec![false; size * size],
            food: None,
        }
    }

    /// Creates a grid with the given cells marked occupied.
    /// Out-of-bounds coordinates are ignored; they cannot block anything.
    pub fn with_blocked<I: IntoIterator<Item = Coord>>(size: usize, blocked: I) -> Self {
        let mut grid = Grid::empty(size);
        for coord in blocked {
            if let Some(idx) = grid.index_of(coord) {
                grid.occupied[idx] = true;
            }
        }
        grid
    }

    /// Builds a grid from the external cell-code matrix
    /// (0 = empty, 1 = body, 2 = food). Row `y` of the matrix holds the
    /// cells with that y coordinate, so `cells[y][x]` maps to (x, y).
    ///
    /// Rejects empty, non-square, or unknown-code input.
    pub fn from_cells(cells: &[Vec<u8>]) -> Result<Self, InputError> {
        let size = cells.len();
        if size == 0 {
            return Err(InputError::ZeroSizeGrid);
        }

        let mut grid = Grid::empty(size);
        for (y, row) in cells.iter().enumerate() {
            if row.len() != size {
                return Err(InputError::NonSquareGrid {
                    row: y,
                    len: row.len(),
                    expected: size,
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let coord = Coord { x: x as i32, y: y as i32 };
                match Cell::from_code(code) {
                    Some(Cell::Empty) => {}
                    Some(Cell::Body) => {
                        grid.occupied[y * size + x] = true;
                    }
                    Some(Cell::Food) => {
                        grid.food = Some(coord);
                    }
                    None => {
                        return Err(InputError::BadCellCode { code, x: coord.x, y: coord.y });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Position of the food cell, if the cell matrix encoded one
    pub fn food(&self) -> Option<Coord> {
        self.food
    }

    /// Checks whether a coordinate lies on the board
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.size
            && (coord.y as usize) < self.size
    }

    /// Checks whether a coordinate is on the board and not occupied
    pub fn is_traversable(&self, coord: Coord) -> bool {
        match self.index_of(coord) {
            Some(idx) => !self.occupied[idx],
            None => false,
        }
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }
}
