// Zone classification.
//
// Empty cells are partitioned into maximal 4-connected zones, numbered from
// `FIRST_ZONE` in row-major order of first encounter. A zone touching any
// grid border is an outer zone; the rest are inner zones (lakes).

use rustc_hash::FxHashSet;

use super::flood::flood;
use crate::core::types::{DEFAULT_FILL, EMPTY, FIRST_ZONE};
use crate::core::{Layer, Result};
use crate::perception::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zones {
    layer: Layer,
    last_id: u32,
}

impl Zones {
    /// Label every empty cell of `grid` with its zone id. Occupied cells end
    /// up as `0` in the resulting layer.
    pub fn detect(grid: &Grid) -> Result<Self> {
        let mut layer = grid.cells().clone();
        let mut last_id = FIRST_ZONE - 1;

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if layer[y][x] == EMPTY {
                    last_id += 1;
                    flood(grid, &mut layer, x, y, last_id)?;
                }
            }
        }

        for cell in layer.iter_mut().flatten() {
            if *cell == DEFAULT_FILL {
                *cell = EMPTY;
            }
        }

        tracing::debug!(zones = last_id + 1 - FIRST_ZONE, "zones detected");
        Ok(Self { layer, last_id })
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Number of distinct zones.
    pub fn count(&self) -> usize {
        (self.last_id + 1 - FIRST_ZONE) as usize
    }

    pub fn zone_at(&self, x: usize, y: usize) -> Option<u32> {
        let id = self.layer[y][x];
        (id >= FIRST_ZONE).then_some(id)
    }

    /// Zone ids present on row 0, the last row, column 0 or the last column.
    pub fn outer_zones(&self) -> FxHashSet<u32> {
        let mut outer = FxHashSet::default();
        let (Some(top), Some(bottom)) = (self.layer.first(), self.layer.last()) else {
            return outer;
        };

        let border_rows = top.iter().chain(bottom.iter());
        let border_cols = self
            .layer
            .iter()
            .flat_map(|row| row.first().into_iter().chain(row.last()));

        for &id in border_rows.chain(border_cols) {
            if id >= FIRST_ZONE {
                outer.insert(id);
            }
        }
        outer
    }

    /// Zone ids in `FIRST_ZONE..=last_id` that are not outer zones, ascending.
    pub fn inner_zones(&self, outer: &FxHashSet<u32>) -> Vec<u32> {
        (FIRST_ZONE..=self.last_id).filter(|id| !outer.contains(id)).collect()
    }
}

pub fn sorted(ids: &FxHashSet<u32>) -> Vec<u32> {
    let mut out: Vec<u32> = ids.iter().copied().collect();
    out.sort_unstable();
    out
}
