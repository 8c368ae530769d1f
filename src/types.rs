// Core value types shared by the pathfinder, the reachability evaluator
// and the decision orchestrator.

use serde::{Deserialize, Serialize};

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Calculates the Manhattan distance to another coordinate
    pub fn manhattan_distance(&self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Represents the four possible movement directions for the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions, in the fixed tie-break order
    /// used throughout the engine: Up, Down, Left, Right.
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parses a direction name as it appears in Pilot.toml
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::Up => Coord { x: coord.x, y: coord.y + 1 },
            Direction::Down => Coord { x: coord.x, y: coord.y - 1 },
            Direction::Left => Coord { x: coord.x - 1, y: coord.y },
            Direction::Right => Coord { x: coord.x + 1, y: coord.y },
        }
    }

    /// Returns the unit vector (dx, dy) for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Derives the direction of a single orthogonal step from one
    /// coordinate to an adjacent one. Returns None if the two coordinates
    /// are equal or not exactly one orthogonal step apart.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// State of a single grid cell, matching the external cell codes:
/// 0 = empty, 1 = body, 2 = food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Body,
    Food,
}

impl Cell {
    /// Decodes an external cell code; unknown codes are rejected by the
    /// grid constructor rather than silently mapped.
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Body),
            2 => Some(Cell::Food),
            _ => None,
        }
    }
}

/// Complete decision input received from the game-loop collaborator
/// for one tick: the cell-code matrix, the snake body (head first) and
/// the food coordinate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TickSnapshot {
    pub cells: Vec<Vec<u8>>,
    pub body: Vec<Coord>,
    pub food: Coord,
}
