// A* shortest-path search over a grid snapshot.
//
// Nodes live in an arena (`Vec<Node>`) with parents stored as indices,
// so the search tree needs no reference counting and path reconstruction
// is a plain index walk. The open set is a binary heap ordered by lowest
// f = g + h; ties are broken by insertion sequence number so equal-f
// nodes are expanded in the order they were pushed, which makes every
// search fully deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::debug;

use crate::error::InputError;
use crate::grid::Grid;
use crate::types::{Coord, Direction};

/// One entry of the search-tree arena
struct Node {
    position: Coord,
    parent: Option<usize>,
    g: i32,
}

/// Heap entry pointing into the arena. Ordered so that the lowest f pops
/// first, and among equal f the earliest-pushed entry pops first.
#[derive(PartialEq, Eq)]
struct OpenEntry {
    f: i32,
    seq: u64,
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reversing both keys turns it into a
        // min-heap on (f, insertion sequence).
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest 4-connected path from `start` to `goal`, treating both
/// the explicit `blocked` set and any occupied grid cell as walls.
///
/// Returns `Ok(None)` when no path exists; that is an expected outcome,
/// not an error. `start == goal` yields the trivial single-element path.
/// The start cell itself is exempt from the blocked check (the head
/// usually sits inside the occupancy set it is handed).
///
/// # Errors
/// `InputError::OutOfBounds` if `start` or `goal` is off the board,
/// `InputError::GoalOccupied` if the goal cell is blocked.
pub fn find_path(
    grid: &Grid,
    start: Coord,
    blocked: &HashSet<Coord>,
    goal: Coord,
) -> Result<Option<Vec<Coord>>, InputError> {
    if !grid.in_bounds(start) {
        return Err(InputError::OutOfBounds { coord: start, size: grid.size() });
    }
    if !grid.in_bounds(goal) {
        return Err(InputError::OutOfBounds { coord: goal, size: grid.size() });
    }
    if goal != start && (blocked.contains(&goal) || !grid.is_traversable(goal)) {
        return Err(InputError::GoalOccupied { coord: goal });
    }

    let mut arena: Vec<Node> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut closed: HashSet<Coord> = HashSet::new();
    let mut seq: u64 = 0;

    arena.push(Node { position: start, parent: None, g: 0 });
    open.push(OpenEntry {
        f: start.manhattan_distance(goal),
        seq,
        node: 0,
    });

    while let Some(entry) = open.pop() {
        let current = entry.node;
        let position = arena[current].position;

        // A cheaper push may have closed this position already; the stale
        // heap entry is simply discarded.
        if !closed.insert(position) {
            continue;
        }

        if position == goal {
            let path = reconstruct(&arena, current);
            debug!(
                "path found: {} steps, {} nodes expanded",
                path.len() - 1,
                closed.len()
            );
            return Ok(Some(path));
        }

        let g = arena[current].g;
        for dir in Direction::all().iter() {
            let neighbor = dir.apply(&position);
            if !grid.in_bounds(neighbor) {
                continue;
            }
            if blocked.contains(&neighbor) || !grid.is_traversable(neighbor) {
                continue;
            }
            if closed.contains(&neighbor) {
                continue;
            }

            arena.push(Node {
                position: neighbor,
                parent: Some(current),
                g: g + 1,
            });
            seq += 1;
            open.push(OpenEntry {
                f: g + 1 + neighbor.manhattan_distance(goal),
                seq,
                node: arena.len() - 1,
            });
        }
    }

    debug!("no path to goal, {} nodes expanded", closed.len());
    Ok(None)
}

/// Walks parent links from the goal node back to the root and reverses
fn reconstruct(arena: &[Node], goal_node: usize) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = Some(goal_node);
    while let Some(idx) = current {
        path.push(arena[idx].position);
        current = arena[idx].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    fn body_set(coords: &[(i32, i32)]) -> HashSet<Coord> {
        coords.iter().map(|&(x, y)| coord(x, y)).collect()
    }

    #[test]
    fn test_straight_line_on_open_grid() {
        let grid = Grid::empty(5);
        let path = find_path(&grid, coord(0, 0), &HashSet::new(), coord(0, 4))
            .unwrap()
            .expect("open grid should have a path");
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], coord(0, 0));
        assert_eq!(path[4], coord(0, 4));
    }

    #[test]
    fn test_start_equals_goal_is_trivial_path() {
        let grid = Grid::empty(3);
        let path = find_path(&grid, coord(1, 1), &HashSet::new(), coord(1, 1))
            .unwrap()
            .expect("trivial path expected");
        assert_eq!(path, vec![coord(1, 1)]);
    }

    #[test]
    fn test_demo_board_scenario() {
        // The 5x5 demo board: body at (2,2) and (1,2), head (2,1), food
        // (0,4). Shortest route costs 5 (the Manhattan distance), slipping
        // past the body along x = 0.
        let grid = Grid::empty(5);
        let body = body_set(&[(2, 2), (1, 2)]);
        let path = find_path(&grid, coord(2, 1), &body, coord(0, 4))
            .unwrap()
            .expect("demo board has a path");
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], coord(2, 1));
        assert_eq!(*path.last().unwrap(), coord(0, 4));
        for step in &path[1..] {
            assert!(!body.contains(step), "path enters body at {:?}", step);
        }
    }

    #[test]
    fn test_demo_board_with_grid_occupancy() {
        // Same scenario with the body also painted onto the grid, head
        // cell included. Blocked cells from either source must be
        // avoided; the start cell itself is exempt.
        let cells = vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0], // (2,1) head
            vec![0, 1, 1, 0, 0], // (1,2), (2,2) body
            vec![0, 0, 0, 0, 0],
            vec![2, 0, 0, 0, 0], // (0,4) food
        ];
        let grid = Grid::from_cells(&cells).unwrap();
        let body = body_set(&[(2, 2), (1, 2)]);
        let path = find_path(&grid, coord(2, 1), &body, coord(0, 4))
            .unwrap()
            .expect("path expected");
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn test_enclosed_head_returns_not_found() {
        let grid = Grid::empty(5);
        let body = body_set(&[(2, 3), (2, 1), (1, 2), (3, 2)]);
        let result = find_path(&grid, coord(2, 2), &body, coord(0, 0)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_wall_detour() {
        // Vertical wall with a gap forces a detour but never a failure.
        let grid = Grid::empty(5);
        let wall = body_set(&[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let path = find_path(&grid, coord(0, 0), &wall, coord(4, 0))
            .unwrap()
            .expect("gap at (2,4) should admit a path");
        // Around the wall: 4 east + 4 north + 4 south of detour = cost 12.
        assert_eq!(path.len(), 13);
        for step in &path {
            assert!(!wall.contains(step));
        }
    }

    #[test]
    fn test_every_step_is_orthogonal_unit() {
        let grid = Grid::empty(7);
        let blocked = body_set(&[(3, 3), (3, 4), (4, 3)]);
        let path = find_path(&grid, coord(0, 0), &blocked, coord(6, 6))
            .unwrap()
            .expect("path expected");
        for pair in path.windows(2) {
            assert!(
                Direction::between(pair[0], pair[1]).is_some(),
                "{:?} -> {:?} is not a unit step",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_out_of_bounds_start_is_rejected() {
        let grid = Grid::empty(4);
        let result = find_path(&grid, coord(-1, 0), &HashSet::new(), coord(2, 2));
        assert_eq!(
            result.unwrap_err(),
            InputError::OutOfBounds { coord: coord(-1, 0), size: 4 }
        );
    }

    #[test]
    fn test_out_of_bounds_goal_is_rejected() {
        let grid = Grid::empty(4);
        let result = find_path(&grid, coord(0, 0), &HashSet::new(), coord(4, 0));
        assert_eq!(
            result.unwrap_err(),
            InputError::OutOfBounds { coord: coord(4, 0), size: 4 }
        );
    }

    #[test]
    fn test_occupied_goal_is_rejected() {
        let grid = Grid::empty(4);
        let body = body_set(&[(2, 2)]);
        let result = find_path(&grid, coord(0, 0), &body, coord(2, 2));
        assert_eq!(
            result.unwrap_err(),
            InputError::GoalOccupied { coord: coord(2, 2) }
        );
    }

    #[test]
    fn test_repeated_calls_return_identical_paths() {
        let grid = Grid::empty(9);
        let blocked = body_set(&[(4, 4), (4, 5), (5, 4), (3, 1), (1, 3)]);
        let first = find_path(&grid, coord(0, 0), &blocked, coord(8, 8)).unwrap();
        for _ in 0..10 {
            let again = find_path(&grid, coord(0, 0), &blocked, coord(8, 8)).unwrap();
            assert_eq!(again, first);
        }
    }
}
