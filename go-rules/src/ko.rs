use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// The single point a player may not retake on the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub point: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, stone: Stone, point: Point) -> bool {
        self.illegal == stone && self.point == point
    }
}
