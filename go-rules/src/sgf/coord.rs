use crate::Point;

use super::error::SgfError;

/// SGF letter to 0-based index: a=0 .. z=25, A=26 .. Z=51.
pub(crate) fn letter_to_coord(ch: char) -> Option<u8> {
    match ch {
        'a'..='z' => Some(ch as u8 - b'a'),
        'A'..='Z' => Some(ch as u8 - b'A' + 26),
        _ => None,
    }
}

pub(crate) fn coord_to_letter(c: u8) -> Option<char> {
    match c {
        0..=25 => Some((b'a' + c) as char),
        26..=51 => Some((b'A' + c - 26) as char),
        _ => None,
    }
}

/// Decode a two-letter SGF point without checking it against a board size.
pub(crate) fn decode(token: &str) -> Result<Point, SgfError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => match (letter_to_coord(a), letter_to_coord(b)) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(SgfError::InvalidCoordinate(token.to_string())),
        },
        _ => Err(SgfError::InvalidCoordinate(token.to_string())),
    }
}

/// Convert an SGF point such as `"cd"` to `(2, 3)` on a `board_size` board.
///
/// An empty token is a pass, as is `"tt"` on boards up to 19×19. Both map to `None`.
pub fn sgf_to_vertex(token: &str, board_size: u8) -> Result<Option<Point>, SgfError> {
    if token.is_empty() || (token == "tt" && board_size <= 19) {
        return Ok(None);
    }

    let (x, y) = decode(token)?;
    if x >= board_size || y >= board_size {
        return Err(SgfError::OutOfRange {
            value: token.to_string(),
            board_size,
        });
    }
    Ok(Some((x, y)))
}

/// Inverse of [`sgf_to_vertex`]; a pass (`None`) becomes an empty token.
pub fn vertex_to_sgf(vertex: Option<Point>, board_size: u8) -> Result<String, SgfError> {
    let Some((x, y)) = vertex else {
        return Ok(String::new());
    };

    let out_of_range = || SgfError::OutOfRange {
        value: format!("({x}, {y})"),
        board_size,
    };
    if x >= board_size || y >= board_size {
        return Err(out_of_range());
    }
    match (coord_to_letter(x), coord_to_letter(y)) {
        (Some(cx), Some(cy)) => Ok([cx, cy].iter().collect()),
        _ => Err(out_of_range()),
    }
}
