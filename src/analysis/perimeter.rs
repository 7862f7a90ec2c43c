use super::edges::EDGE;
use crate::core::types::{neighbor_value, Direction, EMPTY};
use crate::core::Layer;

/// Length of one fence segment.
pub const FENCE_SEGMENT_LENGTH: f64 = 2.5;

/// Fence segments contributed by the outer edge at `(x, y)`.
///
/// One for sitting in the first or last column, one for sitting in the first
/// or last row, and one per side facing either the grid edge or a cell that
/// is still empty in the filled map.
pub fn cell_fences(filled: &Layer, x: usize, y: usize) -> usize {
    let height = filled.len();
    let width = filled.first().map_or(0, |row| row.len());
    let mut fences = 0;

    if x == 0 || x + 1 == width { fences += 1; }
    if y == 0 || y + 1 == height { fences += 1; }

    for dir in Direction::ALL {
        match neighbor_value(filled, x, y, dir) {
            None | Some(EMPTY) => fences += 1,
            Some(_) => {}
        }
    }
    fences
}

pub fn fence_count(edges: &Layer, filled: &Layer) -> usize {
    let mut count = 0;
    for (y, row) in edges.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == EDGE {
                count += cell_fences(filled, x, y);
            }
        }
    }
    count
}

pub fn fence_perimeter(fence_count: usize) -> f64 {
    fence_count as f64 * FENCE_SEGMENT_LENGTH
}
