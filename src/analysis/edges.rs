// Outer edge tracing: occupied cells touching an outer zone, plus every
// occupied cell on the grid border.

use rustc_hash::FxHashSet;

use super::zones::Zones;
use crate::core::types::{is_on_border, Direction, EMPTY};
use crate::core::Layer;
use crate::perception::Grid;

pub const EDGE: u32 = 1;

pub fn detect_outer_edges(grid: &Grid, zones: &Zones, outer: &FxHashSet<u32>) -> Layer {
    let mut edges = vec![vec![EMPTY; grid.width()]; grid.height()];
    let marked = mark_outer_edges(grid, zones, outer, &mut edges);
    tracing::debug!(edges = marked, "outer edges traced");
    edges
}

/// Mark every missing outer edge in `edges` and return how many were added.
/// A cell already marked is left alone, so a complete layer gains nothing.
pub fn mark_outer_edges(grid: &Grid, zones: &Zones, outer: &FxHashSet<u32>, edges: &mut Layer) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut marked = 0;

    for y in 0..height {
        for x in 0..width {
            let in_outer_zone = zones.zone_at(x, y).map_or(false, |id| outer.contains(&id));
            if !in_outer_zone { continue; }

            for dir in Direction::ALL {
                if let Some((nx, ny)) = dir.step(x, y, width, height) {
                    if grid.is_occupied(nx, ny) && edges[ny][nx] != EDGE {
                        edges[ny][nx] = EDGE;
                        marked += 1;
                    }
                }
            }
        }
    }

    // Border cells have no exterior zone beyond them to trigger the rule above.
    for y in 0..height {
        for x in 0..width {
            if is_on_border(x, y, width, height) && grid.is_occupied(x, y) && edges[y][x] != EDGE {
                edges[y][x] = EDGE;
                marked += 1;
            }
        }
    }

    marked
}

pub fn edge_count(edges: &Layer) -> usize {
    edges.iter().flatten().filter(|&&v| v == EDGE).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(rows: Vec<Vec<u8>>) -> (Grid, Zones, FxHashSet<u32>, Layer) {
        let grid = Grid::new(rows).unwrap();
        let zones = Zones::detect(&grid).unwrap();
        let outer = zones.outer_zones();
        let edges = detect_outer_edges(&grid, &zones, &outer);
        (grid, zones, outer, edges)
    }

    #[test]
    fn rectangle_outline() {
        let (_, _, _, edges) = trace(vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0],
        ]);
        assert_eq!(edges, vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 1, 0, 0, 1, 0],
            vec![0, 1, 0, 0, 1, 0],
            vec![0, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0],
        ]);
        assert_eq!(edge_count(&edges), 12);
    }

    #[test]
    fn full_grid_marks_border_only() {
        let (_, _, _, edges) = trace(vec![vec![1; 3]; 3]);
        assert_eq!(edges, vec![
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]);
    }

    #[test]
    fn inner_zone_does_not_create_edges() {
        let (_, _, _, edges) = trace(vec![
            vec![0, 0, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 0, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0],
        ]);
        assert_eq!(edges[2][3], 0);
        assert_eq!(edges[3][2], 0);
        assert_eq!(edge_count(&edges), 16);
    }

    #[test]
    fn marking_is_a_fixed_point() {
        let (grid, zones, outer, mut edges) = trace(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let before = edges.clone();
        assert_eq!(mark_outer_edges(&grid, &zones, &outer, &mut edges), 0);
        assert_eq!(edges, before);
    }
}
