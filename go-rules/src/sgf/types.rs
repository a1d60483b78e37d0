use serde::{Deserialize, Serialize};

use crate::Stone;

/// A raw SGF property: its identifier and unescaped values, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub ident: String,
    pub values: Vec<String>,
}

/// A single node of the main line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub properties: Vec<Property>,
}

impl Node {
    /// First value of the first property named `ident`.
    pub fn value(&self, ident: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.ident == ident)
            .and_then(|p| p.values.first())
            .map(String::as_str)
    }
}

/// Game information collected from the record. Only the board size is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub board_size: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_rank: Option<String>,
    /// (e.g. "B+2.5", "W+R").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub komi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handicap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime: Option<String>,
}

impl Default for GameInfo {
    fn default() -> Self {
        GameInfo {
            board_size: 19,
            black_name: None,
            white_name: None,
            black_rank: None,
            white_rank: None,
            result: None,
            komi: None,
            handicap: None,
            date: None,
            event: None,
            round: None,
            place: None,
            game_name: None,
            rules: None,
            time_limit_secs: None,
            overtime: None,
        }
    }
}

/// A move of the main line. `notation` is the raw SGF point; empty for a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub stone: Stone,
    pub notation: String,
    /// 1-based position in the move sequence.
    pub number: u32,
}

/// A stone added (or a point cleared, sign 0) by AB/AW/AE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub sign: i8,
    pub notation: String,
    /// Number of moves played before this setup applies; 0 for the initial position.
    pub after_move: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub info: GameInfo,
    pub setup: Vec<Setup>,
    pub moves: Vec<Move>,
}
