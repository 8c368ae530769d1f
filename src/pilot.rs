// Move decision orchestrator.
//
// Each tick the pilot receives a fresh board snapshot, the snake body
// (head first) and the food position. It asks the pathfinder for a
// shortest route to the food; when none exists it scores every legal
// next-head cell with the flood-fill evaluator and keeps the one with
// the most open space behind it.

use std::collections::HashSet;

use log::{info, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::error::InputError;
use crate::grid::Grid;
use crate::pathfinder::find_path;
use crate::reachability::reachable_area;
use crate::types::{Cell, Coord, Direction, TickSnapshot};

/// Outcome of one decision tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDecision {
    /// A shortest path to the food exists; `step` is its first move and
    /// `route` the full path from head (inclusive) to food (inclusive).
    Path { step: Direction, route: Vec<Coord> },
    /// No route to the food; `step` maximizes the reachable open space
    /// (`open_cells`) after the move.
    Fallback { step: Direction, open_cells: usize },
    /// The head already sits on the food cell; no movement this tick.
    Hold,
    /// Every candidate move is immediately fatal. The caller decides how
    /// to treat the loss; this is a value, not an error.
    NoSafeMove,
}

impl MoveDecision {
    /// The chosen direction, if the decision moves the snake
    pub fn direction(&self) -> Option<Direction> {
        match self {
            MoveDecision::Path { step, .. } | MoveDecision::Fallback { step, .. } => Some(*step),
            MoveDecision::Hold | MoveDecision::NoSafeMove => None,
        }
    }

    /// The chosen move as a (dx, dy) vector; (0, 0) for Hold, None when
    /// there is no safe move at all.
    pub fn vector(&self) -> Option<(i32, i32)> {
        match self {
            MoveDecision::Path { step, .. } | MoveDecision::Fallback { step, .. } => {
                Some(step.delta())
            }
            MoveDecision::Hold => Some((0, 0)),
            MoveDecision::NoSafeMove => None,
        }
    }
}

/// Decision engine with static configuration
/// Takes the configuration once and exposes one decision method per tick
pub struct Pilot {
    config: Config,
    priority: [Direction; 4],
}

impl Pilot {
    /// Creates a new Pilot instance with the given configuration.
    /// The fallback tie-break order is resolved once here.
    pub fn new(config: Config) -> Self {
        let priority = config.fallback.resolved_priority();
        Pilot { config, priority }
    }

    /// Computes the move for one tick.
    ///
    /// The whole current body, tail included, blocks the search. The tail
    /// cell would vacate on the very tick the head arrives, so this is
    /// conservative, but it matches the behavior the engine has always
    /// had and never walks into a cell that might still be occupied.
    ///
    /// # Errors
    /// `InputError` for malformed input: empty body, coordinates off the
    /// board, or a goal on an occupied cell.
    pub fn decide(
        &self,
        grid: &Grid,
        body: &[Coord],
        goal: Coord,
    ) -> Result<MoveDecision, InputError> {
        let head = *body.first().ok_or(InputError::EmptyBody)?;
        for &segment in body {
            if !grid.in_bounds(segment) {
                return Err(InputError::OutOfBounds { coord: segment, size: grid.size() });
            }
        }
        if !grid.in_bounds(goal) {
            return Err(InputError::OutOfBounds { coord: goal, size: grid.size() });
        }
        if goal != head && body.contains(&goal) {
            return Err(InputError::GoalOccupied { coord: goal });
        }

        let blocked: HashSet<Coord> = body.iter().copied().collect();
        if let Some(route) = find_path(grid, head, &blocked, goal)? {
            if route.len() < 2 {
                info!("head already on food, holding");
                return Ok(MoveDecision::Hold);
            }
            // Consecutive path cells are adjacent by construction.
            let step = Direction::between(route[0], route[1])
                .expect("pathfinder returned a non-unit step");
            info!(
                "following {}-step path to food, first move {}",
                route.len() - 1,
                step.as_str()
            );
            return Ok(MoveDecision::Path { step, route });
        }

        info!("no path to food, scoring fallback candidates");
        Ok(self.best_fallback(grid, body, head))
    }

    /// Convenience entry point taking the wire-shaped tick input
    /// (cell-code matrix, head-first body, food coordinate).
    ///
    /// The matrix paints the body as occupied, but the search grid is
    /// built without that occupancy: the body already blocks through the
    /// explicit body list, and the fallback simulation frees the tail
    /// cell, which a grid-blocked tail would keep walled off. The matrix
    /// is still fully validated, and any body cell it names that the body
    /// list does not is logged.
    pub fn decide_snapshot(&self, snapshot: &TickSnapshot) -> Result<MoveDecision, InputError> {
        let painted = Grid::from_cells(&snapshot.cells)?;
        if let Some(encoded) = painted.food() {
            if encoded != snapshot.food {
                warn!(
                    "cell matrix encodes food at ({}, {}) but the tick names ({}, {}); using the tick",
                    encoded.x, encoded.y, snapshot.food.x, snapshot.food.y
                );
            }
        }
        for (y, row) in snapshot.cells.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let coord = Coord { x: x as i32, y: y as i32 };
                if Cell::from_code(code) == Some(Cell::Body) && !snapshot.body.contains(&coord) {
                    warn!(
                        "cell matrix marks ({}, {}) as body but the body list does not",
                        coord.x, coord.y
                    );
                }
            }
        }
        self.decide(&Grid::empty(painted.size()), &snapshot.body, snapshot.food)
    }

    /// Scores every legal next-head cell by the open space reachable from
    /// it after the body slides forward one tick (head prepended, tail
    /// dropped, length unchanged). The candidate with the strictly
    /// greatest count wins; ties go to the earlier direction in the
    /// configured priority order.
    fn best_fallback(&self, grid: &Grid, body: &[Coord], head: Coord) -> MoveDecision {
        let candidates: Vec<(Direction, Coord)> = self
            .priority
            .iter()
            .filter_map(|&dir| {
                let next = dir.apply(&head);
                if grid.is_traversable(next) && !body.contains(&next) {
                    Some((dir, next))
                } else {
                    None
                }
            })
            .collect();

        if candidates.is_empty() {
            info!("no safe move available");
            return MoveDecision::NoSafeMove;
        }

        // Body after one tick with no food eaten: the tail cell frees up.
        let slid_body: HashSet<Coord> = body[..body.len() - 1].iter().copied().collect();

        let parallel = self.config.parallelism.parallel_candidates
            && candidates.len() >= self.config.parallelism.min_candidates_for_parallel;
        // Scores are collected positionally, so the parallel fan-out
        // cannot change which candidate wins.
        let scores: Vec<usize> = if parallel {
            candidates
                .par_iter()
                .map(|&(_, next)| reachable_area(grid, next, &slid_body))
                .collect()
        } else {
            candidates
                .iter()
                .map(|&(_, next)| reachable_area(grid, next, &slid_body))
                .collect()
        };

        let mut best = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = idx;
            }
        }

        let (step, _) = candidates[best];
        let open_cells = scores[best];
        info!(
            "fallback chose {} ({} open cells, {} candidates)",
            step.as_str(),
            open_cells,
            candidates.len()
        );
        MoveDecision::Fallback { step, open_cells }
    }
}
