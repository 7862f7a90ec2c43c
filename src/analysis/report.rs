use serde::Serialize;

/// Summary of one analysis, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub height: usize,
    pub width: usize,
    pub zone_count: usize,
    pub outer_zones: Vec<u32>,
    pub inner_zones: Vec<u32>,
    pub edge_cells: usize,
    pub fence_count: usize,
    pub perimeter: f64,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
