// snake-pilot: autonomous navigation decision engine for a grid snake.
//
// Each tick the host game loop hands the engine a fresh board snapshot,
// the snake body and the food position; the engine answers with either
// the first step of a shortest path to the food, the move that keeps the
// most open space reachable when no path exists, or an explicit
// no-safe-move signal.

pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod pilot;
pub mod reachability;
pub mod types;

pub use config::Config;
pub use error::InputError;
pub use grid::Grid;
pub use pathfinder::find_path;
pub use pilot::{MoveDecision, Pilot};
pub use reachability::reachable_area;
pub use types::{Cell, Coord, Direction, TickSnapshot};
