// Interior filling: flood the inside of the traced outline so that lakes
// enclosed by the shape are no longer counted as open sides.

use super::edges::EDGE;
use super::flood::flood_default;
use crate::core::types::{is_on_border, Direction};
use crate::core::{Layer, Result};
use crate::perception::Grid;

/// Walk the diagonal `(x, y) -> ((x + 1) % w, (y + 1) % h)` from `(0, 0)`
/// looking for an occupied cell that is not an outer edge.
///
/// Gives up at an interior cell whose four neighbors are all occupied, or
/// once the walk reaches the bottom-right cell.
pub fn find_fill_seed(grid: &Grid, edges: &Layer) -> Option<(usize, usize)> {
    let (width, height) = (grid.width(), grid.height());
    let (mut x, mut y) = (0, 0);

    loop {
        if grid.is_occupied(x, y) && edges[y][x] != EDGE {
            return Some((x, y));
        }
        if is_enclosed(grid, x, y) {
            tracing::debug!(x, y, "fill seed search stopped at an enclosed cell");
            return None;
        }
        if x + 1 == width && y + 1 == height {
            return None;
        }
        x = (x + 1) % width;
        y = (y + 1) % height;
    }
}

fn is_enclosed(grid: &Grid, x: usize, y: usize) -> bool {
    let (width, height) = (grid.width(), grid.height());
    !is_on_border(x, y, width, height)
        && Direction::ALL.iter().all(|dir| {
            dir.step(x, y, width, height)
                .map_or(false, |(nx, ny)| grid.is_occupied(nx, ny))
        })
}

/// Copy of `edges` with the region inside the outline flooded with `1`.
pub fn fill_map(grid: &Grid, edges: &Layer) -> Result<Layer> {
    let mut filled = edges.clone();
    match find_fill_seed(grid, edges) {
        Some((x, y)) => {
            let cells = flood_default(grid, &mut filled, x, y)?;
            tracing::debug!(x, y, cells, "interior filled");
        }
        None => tracing::debug!("no fill seed, filled map is the outline"),
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::edges::detect_outer_edges;
    use crate::analysis::zones::Zones;

    fn setup(rows: Vec<Vec<u8>>) -> (Grid, Layer) {
        let grid = Grid::new(rows).unwrap();
        let zones = Zones::detect(&grid).unwrap();
        let edges = detect_outer_edges(&grid, &zones, &zones.outer_zones());
        (grid, edges)
    }

    #[test]
    fn lake_is_filled_through_the_interior() {
        let (grid, edges) = setup(vec![
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 0, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]);
        assert_eq!(find_fill_seed(&grid, &edges), Some((2, 2)));
        let filled = fill_map(&grid, &edges).unwrap();
        assert_eq!(filled, vec![
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]);
    }

    #[test]
    fn enclosed_single_lake_stops_the_search() {
        let (grid, edges) = setup(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        assert_eq!(find_fill_seed(&grid, &edges), None);
        assert_eq!(fill_map(&grid, &edges).unwrap(), edges);
    }

    #[test]
    fn search_ends_at_bottom_right() {
        let (grid, edges) = setup(vec![
            vec![0, 1, 0],
            vec![0, 0, 0],
        ]);
        assert_eq!(find_fill_seed(&grid, &edges), None);
        assert_eq!(fill_map(&grid, &edges).unwrap(), edges);
    }

    #[test]
    fn diagonal_walk_wraps_on_non_square_grids() {
        // Walk: (0,0) (1,1) (2,0) (3,1) (0,0)... reaches (3,1) and stops.
        let (grid, edges) = setup(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(find_fill_seed(&grid, &edges), None);
    }

    #[test]
    fn full_grid_fills_its_core() {
        let (grid, edges) = setup(vec![vec![1; 4]; 4]);
        assert_eq!(find_fill_seed(&grid, &edges), Some((1, 1)));
        let filled = fill_map(&grid, &edges).unwrap();
        assert!(filled.iter().flatten().all(|&v| v == 1));
    }
}
