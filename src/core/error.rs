use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClotureError {
    /// A flood was bounded by occupied cells on both sides while touching the
    /// grid border: the exterior is re-entering the shape at `(x, y)`.
    StructuralValidity { x: usize, y: usize },
    EmptyGrid,
    RaggedRow { row: usize, expected: usize, found: usize },
    InvalidCell { row: usize, col: usize, value: u8 },
    /// A flood was asked to write the empty value, which it would revisit forever.
    InvalidFill,
}

impl fmt::Display for ClotureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralValidity { x, y } => write!(
                f,
                "map does not have correct format: exterior border is entering at position [{}][{}]",
                y, x
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow { row, expected, found } => {
                write!(f, "row {} has {} cells, expected {}", row, found, expected)
            }
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell [{}][{}] is {}, expected 0 or 1", row, col, value)
            }
            Self::InvalidFill => write!(f, "flood fill value must be non-zero"),
        }
    }
}

impl std::error::Error for ClotureError {}

pub type Result<T> = std::result::Result<T, ClotureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_message_is_row_major() {
        let e = ClotureError::StructuralValidity { x: 3, y: 1 };
        assert!(e.to_string().ends_with("[1][3]"));
    }

    #[test]
    fn ragged_message() {
        let e = ClotureError::RaggedRow { row: 2, expected: 4, found: 3 };
        assert_eq!(e.to_string(), "row 2 has 3 cells, expected 4");
    }
}
