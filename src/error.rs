// Input contract violations.
//
// Only malformed caller input is an error. A missing path and a board
// with no safe move are ordinary outcomes and are returned as values
// (`Ok(None)` from the pathfinder, `MoveDecision::NoSafeMove` from the
// orchestrator), never through this type.

use thiserror::Error;

use crate::types::Coord;

/// Rejected at the boundary before any search begins
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("grid must be square: row {row} has {len} cells, expected {expected}")]
    NonSquareGrid { row: usize, len: usize, expected: usize },

    #[error("grid must have at least one cell")]
    ZeroSizeGrid,

    #[error("unknown cell code {code} at ({x}, {y})")]
    BadCellCode { code: u8, x: i32, y: i32 },

    #[error("position ({}, {}) is outside the {size}x{size} grid", .coord.x, .coord.y)]
    OutOfBounds { coord: Coord, size: usize },

    #[error("goal ({}, {}) lies on an occupied cell", .coord.x, .coord.y)]
    GoalOccupied { coord: Coord },

    #[error("snake body must contain at least the head")]
    EmptyBody,
}
