//! Sliding-tile puzzle: a rectangular grid of labelled tiles with one
//! blank cell; a move slides an orthogonally adjacent tile into the
//! blank.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;

/// Marker for the blank cell.
pub const BLANK: char = '*';

/// A sliding-tile configuration: the current grid and the target grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingTilesPuzzle {
    grid: Vec<Vec<char>>,
    target: Vec<Vec<char>>,
}

impl SlidingTilesPuzzle {
    pub fn new(grid: Vec<Vec<char>>, target: Vec<Vec<char>>) -> Self {
        Self { grid, target }
    }

    /// Locate the blank cell.
    fn blank(&self) -> Option<(usize, usize)> {
        for (y, row) in self.grid.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                if tile == BLANK {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Slide the tile at (x, y) into the blank at (bx, by), if (x, y)
    /// lies on the grid.
    fn slide(&self, bx: usize, by: usize, x: i64, y: i64) -> Option<Self> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if y >= self.grid.len() || x >= self.grid[y].len() {
            return None;
        }
        let mut next = self.clone();
        next.grid[by][bx] = next.grid[y][x];
        next.grid[y][x] = BLANK;
        Some(next)
    }

    fn token_counts(grid: &[Vec<char>]) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for row in grid {
            for &tile in row {
                *counts.entry(tile).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Puzzle for SlidingTilesPuzzle {
    fn is_solved(&self) -> bool {
        self.grid == self.target
    }

    fn fail_fast(&self) -> bool {
        // sliding permutes tiles in place: a dimension or token-multiset
        // mismatch with the target can never be reconciled
        if self.grid.len() != self.target.len() {
            return true;
        }
        if self
            .grid
            .iter()
            .zip(&self.target)
            .any(|(row, target_row)| row.len() != target_row.len())
        {
            return true;
        }
        Self::token_counts(&self.grid) != Self::token_counts(&self.target)
    }

    /// Moves are enumerated as the tile above, below, left of, and
    /// right of the blank; directions that fall off the grid stay in
    /// the enumeration as absent entries.
    fn extensions(&self) -> Vec<Option<Self>> {
        let (bx, by) = match self.blank() {
            Some(pos) => pos,
            None => return Vec::new(),
        };
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .map(|(dx, dy)| self.slide(bx, by, bx as i64 + dx, by as i64 + dy))
            .collect()
    }

    fn signature(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{breadth_first_search, depth_first_search};

    fn grid(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    #[test]
    fn test_corner_blank_has_two_moves() {
        let puzzle = SlidingTilesPuzzle::new(grid(&["12", "3*"]), grid(&["12", "3*"]));
        let extensions = puzzle.extensions();
        assert_eq!(extensions.len(), 4);
        assert_eq!(extensions.iter().flatten().count(), 2);
    }

    #[test]
    fn test_slide_moves_the_tile_into_the_blank() {
        let puzzle = SlidingTilesPuzzle::new(grid(&["1*", "32"]), grid(&["12", "3*"]));
        let moves: Vec<String> = puzzle
            .extensions()
            .into_iter()
            .flatten()
            .map(|p| p.signature())
            .collect();
        // down brings 2 up, left brings 1 right
        assert_eq!(moves, ["12\n3*", "*1\n32"]);
    }

    #[test]
    fn test_fail_fast_on_mismatched_tokens() {
        let puzzle = SlidingTilesPuzzle::new(grid(&["1*"]), grid(&["2*"]));
        assert!(puzzle.fail_fast());
        let puzzle = SlidingTilesPuzzle::new(grid(&["1*"]), grid(&["1*", "23"]));
        assert!(puzzle.fail_fast());
        let puzzle = SlidingTilesPuzzle::new(grid(&["1*"]), grid(&["*1"]));
        assert!(!puzzle.fail_fast());
    }

    #[test]
    fn test_bfs_solves_in_two_moves() {
        let puzzle = SlidingTilesPuzzle::new(grid(&["*1", "32"]), grid(&["12", "3*"]));
        let tree = breadth_first_search(puzzle).unwrap();
        let chain = tree.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(tree.state(chain[2]).signature(), "12\n3*");
    }

    #[test]
    fn test_dfs_reaches_the_target() {
        let puzzle = SlidingTilesPuzzle::new(grid(&["*1", "32"]), grid(&["12", "3*"]));
        let tree = depth_first_search(puzzle.clone()).unwrap();
        let chain = tree.chain();
        assert!(tree.state(chain[chain.len() - 1]).is_solved());
        assert_eq!(tree.state(chain[0]).signature(), puzzle.signature());
    }
}
