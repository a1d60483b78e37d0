use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A player's stone. The discriminants are the cell signs stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Normalize any sign to a player; `0` is the neutral value and yields `None`.
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// SGF property key for a move by this player.
    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }

    pub fn from_letter(s: &str) -> Option<Self> {
        match s {
            "B" => Some(Stone::Black),
            "W" => Some(Stone::White),
            _ => None,
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl From<Stone> for i8 {
    fn from(stone: Stone) -> i8 {
        stone.to_int()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_normalizes_sign() {
        assert_eq!(Stone::from_int(1), Some(Stone::Black));
        assert_eq!(Stone::from_int(7), Some(Stone::Black));
        assert_eq!(Stone::from_int(-1), Some(Stone::White));
        assert_eq!(Stone::from_int(-128), Some(Stone::White));
        assert_eq!(Stone::from_int(0), None);
    }

    #[test]
    fn negation_is_opponent() {
        assert_eq!(-Stone::Black, Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
    }

    #[test]
    fn letters() {
        assert_eq!(Stone::from_letter(Stone::Black.letter()), Some(Stone::Black));
        assert_eq!(Stone::from_letter(Stone::White.letter()), Some(Stone::White));
        assert_eq!(Stone::from_letter("AB"), None);
    }

    #[test]
    fn into_sign() {
        assert_eq!(i8::from(Stone::White), -1);
        assert_eq!(Stone::Black.to_string(), "Black");
    }
}
