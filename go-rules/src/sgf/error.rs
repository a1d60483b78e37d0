use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SgfError {
    /// A structural delimiter or identifier was missing. `found` is `None` at end of input.
    Syntax {
        expected: &'static str,
        found: Option<char>,
        pos: usize,
    },
    InvalidPropertyValue {
        property: String,
        value: String,
        reason: String,
    },
    InvalidCoordinate(String),
    /// A coordinate that lies outside a `board_size × board_size` board.
    OutOfRange {
        value: String,
        board_size: u8,
    },
}

impl fmt::Display for SgfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SgfError::Syntax {
                expected,
                found: Some(found),
                pos,
            } => write!(f, "expected {expected}, found '{found}' at position {pos}"),
            SgfError::Syntax {
                expected,
                found: None,
                pos,
            } => write!(f, "expected {expected}, found end of input at position {pos}"),
            SgfError::InvalidPropertyValue {
                property,
                value,
                reason,
            } => write!(
                f,
                "invalid value '{value}' for property {property}: {reason}"
            ),
            SgfError::InvalidCoordinate(s) => write!(f, "invalid coordinate: {s}"),
            SgfError::OutOfRange { value, board_size } => {
                write!(f, "coordinate {value} is outside a {board_size}x{board_size} board")
            }
        }
    }
}

impl std::error::Error for SgfError {}
