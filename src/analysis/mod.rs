// Fence analysis pipeline.
//
// `EdgeMap::new` runs every stage once, in order:
//   zones -> outer edges -> filled map -> fence count
// and the result is read-only afterwards.

pub mod edges;
pub mod fill;
pub mod flood;
pub mod perimeter;
pub mod report;
pub mod zones;

use rustc_hash::FxHashSet;

use crate::core::{Layer, Result};
use crate::perception::display::render_layer;
use crate::perception::Grid;
use self::report::Report;
use self::zones::Zones;

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap {
    map: Grid,
    zones: Zones,
    outer: FxHashSet<u32>,
    outer_edges: Layer,
    filled_map: Layer,
    fence_count: usize,
    perimeter: f64,
}

impl EdgeMap {
    pub fn new(map: Grid) -> Result<Self> {
        let zones = Zones::detect(&map)?;
        let outer = zones.outer_zones();
        let outer_edges = edges::detect_outer_edges(&map, &zones, &outer);
        let filled_map = fill::fill_map(&map, &outer_edges)?;
        let fence_count = perimeter::fence_count(&outer_edges, &filled_map);
        let perimeter = perimeter::fence_perimeter(fence_count);

        tracing::debug!(
            height = map.height(),
            width = map.width(),
            outer_zones = outer.len(),
            fence_count,
            perimeter,
            "edge map built"
        );

        Ok(Self { map, zones, outer, outer_edges, filled_map, fence_count, perimeter })
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::new(Grid::new(rows)?)
    }

    /// Total fence length needed around the shape.
    pub fn fence_perimeter(&self) -> f64 { self.perimeter }
    pub fn fence_count(&self) -> usize { self.fence_count }

    pub fn map(&self) -> &Grid { &self.map }
    pub fn zones(&self) -> &Layer { self.zones.layer() }
    pub fn outer_edges(&self) -> &Layer { &self.outer_edges }
    pub fn filled_map(&self) -> &Layer { &self.filled_map }

    pub fn zone_count(&self) -> usize { self.zones.count() }

    pub fn outer_zones(&self) -> Vec<u32> {
        zones::sorted(&self.outer)
    }

    pub fn inner_zones(&self) -> Vec<u32> {
        self.zones.inner_zones(&self.outer)
    }

    pub fn display_map(&self) -> String { render_layer(self.map.cells()) }
    pub fn display_zones(&self) -> String { render_layer(self.zones.layer()) }
    pub fn display_outer_edges(&self) -> String { render_layer(&self.outer_edges) }
    pub fn display_filled_map(&self) -> String { render_layer(&self.filled_map) }

    pub fn report(&self) -> Report {
        let (height, width) = self.map.dimensions();
        Report {
            height,
            width,
            zone_count: self.zone_count(),
            outer_zones: self.outer_zones(),
            inner_zones: self.inner_zones(),
            edge_cells: edges::edge_count(&self.outer_edges),
            fence_count: self.fence_count,
            perimeter: self.perimeter,
        }
    }
}
