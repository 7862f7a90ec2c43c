pub mod display;
pub mod grid;

pub use grid::{load_grid, Grid, GridFormat};
