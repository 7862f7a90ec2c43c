// Flood engine shared by zone detection and interior filling.
//
// A flood labels the maximal 4-connected region of zero cells reachable from
// a seed. It runs on an explicit stack, so region size is bounded by memory
// rather than call depth. Every flood also carries a `ConvexityTracker` that
// rejects maps whose exterior wraps back into the shape.

use crate::core::types::{Direction, DEFAULT_FILL, EMPTY};
use crate::core::{ClotureError, Layer, Result};
use crate::perception::Grid;

/// Per-flood accumulator for the exterior re-entry check.
///
/// Tracks the bounding box of visited cells and the x of the most recently
/// visited cell that had an occupied grid cell directly to its left
/// (`left_edge_x`) or directly to its right (`right_edge_x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexityTracker {
    width: usize,
    height: usize,
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
    pub left_edge_x: Option<usize>,
    pub right_edge_x: Option<usize>,
}

impl ConvexityTracker {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            min_x: width,
            max_x: 0,
            min_y: height,
            max_y: 0,
            left_edge_x: None,
            right_edge_x: None,
        }
    }

    pub fn visit(&mut self, grid: &Grid, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);

        if occupied_towards(grid, x, y, Direction::Left) {
            self.left_edge_x = Some(x);
        }
        if occupied_towards(grid, x, y, Direction::Right) {
            self.right_edge_x = Some(x);
        }
    }

    /// The flood has been bounded by occupied cells on its left and its right.
    pub fn is_between_edges(&self) -> bool {
        matches!((self.left_edge_x, self.right_edge_x), (Some(l), Some(r)) if l <= r)
    }

    pub fn has_reached_border(&self) -> bool {
        self.min_x == 0
            || self.min_y == 0
            || self.max_x + 1 == self.width
            || self.max_y + 1 == self.height
    }

    pub fn check(&self, x: usize, y: usize) -> Result<()> {
        if self.is_between_edges() && self.has_reached_border() {
            return Err(ClotureError::StructuralValidity { x, y });
        }
        Ok(())
    }
}

fn occupied_towards(grid: &Grid, x: usize, y: usize, dir: Direction) -> bool {
    dir.step(x, y, grid.width(), grid.height())
        .map_or(false, |(nx, ny)| grid.is_occupied(nx, ny))
}

/// Flood `layer` from `(x, y)` with [`DEFAULT_FILL`].
pub fn flood_default(grid: &Grid, layer: &mut Layer, x: usize, y: usize) -> Result<usize> {
    flood(grid, layer, x, y, DEFAULT_FILL)
}

/// Replace every zero cell 4-connected to `(x, y)` with `fill`.
///
/// The seed itself is overwritten unconditionally. Neighbors are pushed in
/// up, down, left, right order; only in-bounds zero cells are taken. Returns
/// the number of cells visited, or the structural error raised by the
/// convexity check at the offending cell. A `fill` of `0` is rejected.
pub fn flood(grid: &Grid, layer: &mut Layer, x: usize, y: usize, fill: u32) -> Result<usize> {
    if fill == EMPTY {
        return Err(ClotureError::InvalidFill);
    }
    let width = grid.width();
    let height = grid.height();
    let mut tracker = ConvexityTracker::new(width, height);
    let mut stack = vec![(x, y)];
    let mut visited = 0;
    layer[y][x] = fill;

    while let Some((cx, cy)) = stack.pop() {
        visited += 1;
        tracker.visit(grid, cx, cy);

        for dir in Direction::ALL {
            if let Some((nx, ny)) = dir.step(cx, cy, width, height) {
                if layer[ny][nx] == EMPTY {
                    layer[ny][nx] = fill;
                    stack.push((nx, ny));
                }
            }
        }

        if let Err(e) = tracker.check(cx, cy) {
            tracing::warn!(x = cx, y = cy, fill, "flood rejected: exterior re-enters the shape");
            return Err(e);
        }
    }

    Ok(visited)
}
