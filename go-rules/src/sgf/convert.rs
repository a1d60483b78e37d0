use crate::Stone;

use super::coord::{self, coord_to_letter};
use super::error::SgfError;
use super::parser::parse_nodes;
use super::types::{GameRecord, Move, Node, Setup};

/// Parse SGF text into a [`GameRecord`] holding the main line.
pub fn parse(input: &str) -> Result<GameRecord, SgfError> {
    GameRecord::from_nodes(&parse_nodes(input)?)
}

impl GameRecord {
    /// Project a flat node list onto game info, setup stones and moves.
    /// Unrecognized properties are ignored.
    pub fn from_nodes(nodes: &[Node]) -> Result<GameRecord, SgfError> {
        let mut record = GameRecord::default();

        for node in nodes {
            for prop in &node.properties {
                let ident = prop.ident.as_str();
                let values = prop.values.as_slice();
                let info = &mut record.info;

                match ident {
                    "B" | "W" => {
                        let Some(stone) = Stone::from_letter(ident) else {
                            continue;
                        };
                        let number = record.moves.len() as u32 + 1;
                        record.moves.push(Move {
                            stone,
                            notation: one_value(values),
                            number,
                        });
                    }
                    "AB" | "AW" | "AE" => {
                        let sign = match ident {
                            "AB" => Stone::Black.to_int(),
                            "AW" => Stone::White.to_int(),
                            _ => 0,
                        };
                        let after_move = record.moves.len() as u32;
                        for notation in expand_point_list(values)? {
                            record.setup.push(Setup {
                                sign,
                                notation,
                                after_move,
                            });
                        }
                    }

                    "SZ" => info.board_size = parse_board_size(values)?,
                    "KM" => info.komi = Some(parse_f64(values, ident)?),
                    "HA" => info.handicap = Some(parse_u8(values, ident)?),
                    "TM" => info.time_limit_secs = Some(parse_f64(values, ident)?),

                    "PB" => info.black_name = Some(one_value(values)),
                    "PW" => info.white_name = Some(one_value(values)),
                    "BR" => info.black_rank = Some(one_value(values)),
                    "WR" => info.white_rank = Some(one_value(values)),
                    "RE" => info.result = Some(one_value(values)),
                    "DT" => info.date = Some(one_value(values)),
                    "EV" => info.event = Some(one_value(values)),
                    "RO" => info.round = Some(one_value(values)),
                    "PC" => info.place = Some(one_value(values)),
                    "GN" => info.game_name = Some(one_value(values)),
                    "RU" => info.rules = Some(one_value(values)),
                    "OT" => info.overtime = Some(one_value(values)),

                    _ => tracing::trace!("ignoring property {ident}"),
                }
            }
        }

        tracing::debug!(
            "game record on size {} with {} move(s) and {} setup point(s)",
            record.info.board_size,
            record.moves.len(),
            record.setup.len()
        );

        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// Value parsers
// ---------------------------------------------------------------------------

fn one_value(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}

fn first_trimmed(values: &[String]) -> &str {
    values.first().map_or("", |s| s.trim())
}

fn parse_u8(values: &[String], ident: &str) -> Result<u8, SgfError> {
    let s = first_trimmed(values);
    s.parse::<u8>().map_err(|_| SgfError::InvalidPropertyValue {
        property: ident.to_string(),
        value: s.to_string(),
        reason: "expected integer 0-255".to_string(),
    })
}

fn parse_f64(values: &[String], ident: &str) -> Result<f64, SgfError> {
    let s = first_trimmed(values);
    s.parse::<f64>().map_err(|_| SgfError::InvalidPropertyValue {
        property: ident.to_string(),
        value: s.to_string(),
        reason: "expected number".to_string(),
    })
}

/// SZ holds a side length between 1 and 52, either `n` or the square `n:n`.
fn parse_board_size(values: &[String]) -> Result<u8, SgfError> {
    let s = first_trimmed(values);
    let invalid = |reason: &str| SgfError::InvalidPropertyValue {
        property: "SZ".to_string(),
        value: s.to_string(),
        reason: reason.to_string(),
    };
    let side = match s.split_once(':') {
        Some((w, h)) if w.trim() == h.trim() => w.trim(),
        Some(_) => return Err(invalid("rectangular boards are not supported")),
        None => s,
    };
    match side.parse::<u8>() {
        Ok(size @ 1..=52) => Ok(size),
        _ => Err(invalid("expected a board size from 1 to 52")),
    }
}

/// Expand a point list, including compressed `aa:cc` rectangles, into single points.
fn expand_point_list(values: &[String]) -> Result<Vec<String>, SgfError> {
    let mut points = Vec::new();
    for val in values {
        if val.is_empty() {
            continue;
        }
        let Some((from, to)) = val.split_once(':') else {
            coord::decode(val)?;
            points.push(val.clone());
            continue;
        };

        let (x1, y1) = coord::decode(from)?;
        let (x2, y2) = coord::decode(to)?;
        for y in y1.min(y2)..=y1.max(y2) {
            for x in x1.min(x2)..=x1.max(x2) {
                if let (Some(cx), Some(cy)) = (coord_to_letter(x), coord_to_letter(y)) {
                    points.push([cx, cy].iter().collect());
                }
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_players_and_moves() {
        let record = parse("(;GM[1]SZ[9]PB[Alice]PW[Bob];B[ee];W[ge])").unwrap();
        assert_eq!(record.info.board_size, 9);
        assert_eq!(record.info.black_name.as_deref(), Some("Alice"));
        assert_eq!(record.info.white_name.as_deref(), Some("Bob"));
        assert_eq!(
            record.moves,
            vec![
                Move {
                    stone: Stone::Black,
                    notation: "ee".to_string(),
                    number: 1
                },
                Move {
                    stone: Stone::White,
                    notation: "ge".to_string(),
                    number: 2
                },
            ]
        );
    }

    #[test]
    fn board_size_defaults_to_19() {
        let record = parse("(;B[pd])").unwrap();
        assert_eq!(record.info.board_size, 19);
    }

    #[test]
    fn game_info_fields() {
        let input = "(;SZ[19]KM[6.5]HA[2]RE[W+R]DT[2016-03-09]EV[Match]RO[4]\
                     BR[9p]WR[9p]GN[Game 4]RU[Chinese]PC[Seoul]TM[7200]OT[3x60 byo-yomi])";
        let info = parse(input).unwrap().info;
        assert_eq!(info.komi, Some(6.5));
        assert_eq!(info.handicap, Some(2));
        assert_eq!(info.result.as_deref(), Some("W+R"));
        assert_eq!(info.date.as_deref(), Some("2016-03-09"));
        assert_eq!(info.event.as_deref(), Some("Match"));
        assert_eq!(info.round.as_deref(), Some("4"));
        assert_eq!(info.black_rank.as_deref(), Some("9p"));
        assert_eq!(info.game_name.as_deref(), Some("Game 4"));
        assert_eq!(info.rules.as_deref(), Some("Chinese"));
        assert_eq!(info.place.as_deref(), Some("Seoul"));
        assert_eq!(info.time_limit_secs, Some(7200.0));
        assert_eq!(info.overtime.as_deref(), Some("3x60 byo-yomi"));
    }

    #[test]
    fn passes_and_unknown_properties() {
        let record = parse("(;FF[4]XX[foo][bar];B[];W[tt]C[comment])").unwrap();
        assert_eq!(record.moves.len(), 2);
        assert_eq!(record.moves[0].notation, "");
        assert_eq!(record.moves[1].notation, "tt");
        assert_eq!(record.moves[1].number, 2);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert!(matches!(
            parse("(;KM[six])"),
            Err(SgfError::InvalidPropertyValue { property, .. }) if property == "KM"
        ));
        assert!(matches!(
            parse("(;HA[-1])"),
            Err(SgfError::InvalidPropertyValue { .. })
        ));
        assert!(parse("(;SZ[19:13])").is_err());
        assert!(parse("(;SZ[0])").is_err());
    }

    #[test]
    fn square_size_in_pair_form() {
        assert_eq!(parse("(;SZ[13:13])").unwrap().info.board_size, 13);
        assert!(matches!(
            parse("(;SZ[19:13])"),
            Err(SgfError::InvalidPropertyValue { property, .. }) if property == "SZ"
        ));
    }

    #[test]
    fn setup_stones_with_compressed_lists() {
        let record = parse("(;SZ[9]AB[aa:bb]AW[cc];B[dd];AE[aa])").unwrap();
        let black: Vec<_> = record
            .setup
            .iter()
            .filter(|s| s.sign == 1)
            .map(|s| s.notation.as_str())
            .collect();
        assert_eq!(black, ["aa", "ba", "ab", "bb"]);
        assert_eq!(record.setup[4].sign, -1);
        assert_eq!(record.setup[4].after_move, 0);
        assert_eq!(
            record.setup[5],
            Setup {
                sign: 0,
                notation: "aa".to_string(),
                after_move: 1
            }
        );
    }

    #[test]
    fn malformed_setup_point() {
        assert_eq!(
            parse("(;AB[a])"),
            Err(SgfError::InvalidCoordinate("a".to_string()))
        );
    }

    #[test]
    fn syntax_error_propagates() {
        assert!(matches!(parse("B[aa]"), Err(SgfError::Syntax { .. })));
    }
}
