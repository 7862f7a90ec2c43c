use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::types::{EMPTY, OCCUPIED};
use crate::core::{ClotureError, Layer, Result};

/// Immutable rectangular map of occupied (`1`) and empty (`0`) cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    cells: Layer,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(ClotureError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ClotureError::RaggedRow { row: r, expected: width, found: row.len() });
            }
            let mut out = Vec::with_capacity(width);
            for (c, value) in row.into_iter().enumerate() {
                match value {
                    0 => out.push(EMPTY),
                    1 => out.push(OCCUPIED),
                    _ => return Err(ClotureError::InvalidCell { row: r, col: c, value }),
                }
            }
            cells.push(out);
        }

        Ok(Self { cells, width, height })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn dimensions(&self) -> (usize, usize) { (self.height, self.width) }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[y][x] == OCCUPIED
    }

    pub fn cells(&self) -> &Layer {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == OCCUPIED).count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = ClotureError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Grid::new(rows)
    }
}

/// Input encodings accepted by [`load_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    /// `[[0,1,...],...]`
    Json,
    /// One row per line, cells `0`/`1`, optional whitespace between cells.
    Text,
}

impl GridFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GridFormat::Json,
            _ => GridFormat::Text,
        }
    }
}

pub fn parse_json(content: &str) -> anyhow::Result<Grid> {
    let grid: Grid = serde_json::from_str(content).context("invalid grid JSON")?;
    Ok(grid)
}

pub fn parse_text(content: &str) -> anyhow::Result<Grid> {
    let mut rows = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue; }
        let row = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => Ok(0u8),
                '1' => Ok(1u8),
                other => Err(anyhow::anyhow!("line {}: unexpected character {:?}", lineno + 1, other)),
            })
            .collect::<anyhow::Result<Vec<u8>>>()?;
        rows.push(row);
    }
    Ok(Grid::new(rows)?)
}

pub fn parse_grid(content: &str, format: GridFormat) -> anyhow::Result<Grid> {
    match format {
        GridFormat::Json => parse_json(content),
        GridFormat::Text => parse_text(content),
    }
}

pub fn load_grid(path: &Path, format: Option<GridFormat>) -> anyhow::Result<Grid> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read grid file {}", path.display()))?;
    let format = format.unwrap_or_else(|| GridFormat::from_path(path));
    parse_grid(&content, format).with_context(|| format!("cannot parse {}", path.display()))
}
