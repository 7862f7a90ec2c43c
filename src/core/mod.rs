pub mod error;
pub mod types;

pub use error::{ClotureError, Result};
pub use types::{Direction, Layer};
