pub mod core;
pub mod perception;
pub mod analysis;

pub use crate::analysis::EdgeMap;
pub use crate::core::{ClotureError, Result};
