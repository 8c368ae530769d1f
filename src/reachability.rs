// Flood-fill reachability evaluator.
//
// Counts how many cells the snake could still reach from a candidate
// head position. The fill runs on an explicit stack with a visited array
// sized to the grid, so the call-stack depth stays constant no matter
// how large the board is.

use std::collections::HashSet;

use crate::grid::Grid;
use crate::types::{Coord, Direction};

/// Counts the cells reachable from `start` via 4-connected traversal,
/// `start` included. A cell counts when it is in bounds, not in the
/// explicit `blocked` set and not occupied on the grid. Returns 0 when
/// `start` itself is out of bounds or blocked.
pub fn reachable_area(grid: &Grid, start: Coord, blocked: &HashSet<Coord>) -> usize {
    if !grid.is_traversable(start) || blocked.contains(&start) {
        return 0;
    }

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut frontier = vec![start];
    visited[start.y as usize * size + start.x as usize] = true;
    let mut count = 0;

    while let Some(cell) = frontier.pop() {
        count += 1;
        for dir in Direction::all().iter() {
            let neighbor = dir.apply(&cell);
            if !grid.is_traversable(neighbor) || blocked.contains(&neighbor) {
                continue;
            }
            let idx = neighbor.y as usize * size + neighbor.x as usize;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            frontier.push(neighbor);
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    #[test]
    fn test_open_grid_counts_every_cell() {
        let grid = Grid::empty(6);
        assert_eq!(reachable_area(&grid, coord(3, 3), &HashSet::new()), 36);
        assert_eq!(reachable_area(&grid, coord(0, 0), &HashSet::new()), 36);
    }

    #[test]
    fn test_occupied_cells_reduce_the_count() {
        let blocked: HashSet<Coord> =
            [coord(1, 1), coord(2, 2), coord(3, 3)].iter().copied().collect();
        let grid = Grid::empty(4);
        assert_eq!(reachable_area(&grid, coord(0, 0), &blocked), 13);
    }

    #[test]
    fn test_grid_occupancy_blocks_like_the_explicit_set() {
        let grid = Grid::with_blocked(4, vec![coord(1, 1), coord(2, 2), coord(3, 3)]);
        assert_eq!(reachable_area(&grid, coord(0, 0), &HashSet::new()), 13);
    }

    #[test]
    fn test_enclosed_start_counts_exactly_one() {
        let grid = Grid::empty(5);
        let walls: HashSet<Coord> =
            [coord(2, 3), coord(2, 1), coord(1, 2), coord(3, 2)].iter().copied().collect();
        assert_eq!(reachable_area(&grid, coord(2, 2), &walls), 1);
    }

    #[test]
    fn test_blocked_start_counts_zero() {
        let grid = Grid::empty(5);
        let blocked: HashSet<Coord> = [coord(2, 2)].iter().copied().collect();
        assert_eq!(reachable_area(&grid, coord(2, 2), &blocked), 0);
    }

    #[test]
    fn test_out_of_bounds_start_counts_zero() {
        let grid = Grid::empty(5);
        assert_eq!(reachable_area(&grid, coord(-1, 2), &HashSet::new()), 0);
        assert_eq!(reachable_area(&grid, coord(2, 5), &HashSet::new()), 0);
    }

    #[test]
    fn test_wall_splits_the_board() {
        // Vertical wall at x = 2 divides a 5x5 board into a 10-cell west
        // region and a 10-cell east region.
        let wall: HashSet<Coord> = (0..5).map(|y| coord(2, y)).collect();
        let grid = Grid::empty(5);
        assert_eq!(reachable_area(&grid, coord(0, 0), &wall), 10);
        assert_eq!(reachable_area(&grid, coord(4, 4), &wall), 10);
    }

    #[test]
    fn test_large_grid_terminates_without_recursion() {
        // 300x300 fully open grid: a recursive fill would blow the stack,
        // the explicit frontier must not.
        let grid = Grid::empty(300);
        assert_eq!(
            reachable_area(&grid, coord(150, 150), &HashSet::new()),
            300 * 300
        );
    }
}
