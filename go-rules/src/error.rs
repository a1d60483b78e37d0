use std::fmt;

/// Rules engine failures. Off-board points and the neutral sign are never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// A row of the initial grid does not match the width of the first row.
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension of the initial grid exceeds 255.
    TooLarge {
        width: usize,
        height: usize,
    },
    Overwrite,
    Ko,
    Suicide,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::Shape {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed board: row {row} has {found} cells, expected {expected}"
            ),
            GoError::TooLarge { width, height } => {
                write!(f, "board of {width}x{height} exceeds 255x255")
            }
            GoError::Overwrite => write!(f, "overwrite prevented"),
            GoError::Ko => write!(f, "ko prevented"),
            GoError::Suicide => write!(f, "suicide prevented"),
        }
    }
}

impl std::error::Error for GoError {}
