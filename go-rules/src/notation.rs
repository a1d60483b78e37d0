//! Human board coordinates such as `D16`: a column letter (no `I`) followed
//! by the row counted from the bottom edge.

use crate::Point;

const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Empty string when `point` is off the board or past column `Z`.
pub fn stringify_vertex(width: u8, height: u8, (x, y): Point) -> String {
    if x >= width || y >= height {
        return String::new();
    }
    match COLUMNS.get(x as usize) {
        Some(&letter) => format!("{}{}", letter as char, height - y),
        None => String::new(),
    }
}

/// Inverse of [`stringify_vertex`]. The letter is case-insensitive.
pub fn parse_vertex(width: u8, height: u8, s: &str) -> Option<Point> {
    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let x = COLUMNS.iter().position(|&c| c as char == letter)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: u32 = digits.parse().ok()?;
    if row == 0 || row > height as u32 || x >= width as usize {
        return None;
    }

    Some((x as u8, height - row as u8))
}
