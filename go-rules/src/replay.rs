use std::fmt;

use crate::board::{Board, MoveOptions};
use crate::error::GoError;
use crate::sgf::{self, GameRecord, SgfError};

/// A move of the record could not be replayed. `number` is the 1-based move
/// number, or 0 for the initial setup.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayError {
    Sgf { number: u32, source: SgfError },
    Go { number: u32, source: GoError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Sgf { number, source } => write!(f, "move {number}: {source}"),
            ReplayError::Go { number, source } => write!(f, "move {number}: {source}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Sgf { source, .. } => Some(source),
            ReplayError::Go { source, .. } => Some(source),
        }
    }
}

/// Replay a record's main line from an empty board.
///
/// Returns one board per position: index 0 is the start position (after
/// root setup stones) and index `n` the position after move `n`.
pub fn replay(record: &GameRecord, options: MoveOptions) -> Result<Vec<Board>, ReplayError> {
    let size = record.info.board_size;
    let mut board = apply_setup(Board::with_dimensions(size, size), record, 0)?;

    let mut snapshots = Vec::with_capacity(record.moves.len() + 1);
    snapshots.push(board.clone());

    for m in &record.moves {
        let point = sgf::sgf_to_vertex(&m.notation, size).map_err(|source| ReplayError::Sgf {
            number: m.number,
            source,
        })?;

        let next = match point {
            Some(p) => board
                .make_move(m.stone.to_int(), p, options)
                .map_err(|source| ReplayError::Go {
                    number: m.number,
                    source,
                })?,
            None => board.pass(),
        };

        board = apply_setup(next, record, m.number)?;
        snapshots.push(board.clone());
    }

    tracing::debug!("replayed {} move(s)", record.moves.len());
    Ok(snapshots)
}

fn apply_setup(mut board: Board, record: &GameRecord, after_move: u32) -> Result<Board, ReplayError> {
    let size = record.info.board_size;
    for s in record.setup.iter().filter(|s| s.after_move == after_move) {
        let point = sgf::sgf_to_vertex(&s.notation, size).map_err(|source| ReplayError::Sgf {
            number: after_move,
            source,
        })?;
        if let Some(p) = point {
            board = board.set(p, s.sign);
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stone;

    #[test]
    fn one_snapshot_per_move() {
        let record = sgf::parse("(;SZ[9];B[ee];W[ge];B[])").unwrap();
        let boards = replay(&record, MoveOptions::default()).unwrap();
        assert_eq!(boards.len(), 4);
        assert!(boards[0].is_empty());
        assert_eq!(boards[1].stone_at((4, 4)), Some(Stone::Black));
        assert_eq!(boards[2].stone_at((6, 4)), Some(Stone::White));
        assert_eq!(boards[3].cells(), boards[2].cells());
    }

    #[test]
    fn setup_stones_are_placed() {
        let record = sgf::parse("(;SZ[9]AB[aa][bb]AW[cc];W[dd]AE[aa])").unwrap();
        let boards = replay(&record, MoveOptions::default()).unwrap();
        assert_eq!(boards[0].stone_at((0, 0)), Some(Stone::Black));
        assert_eq!(boards[0].stone_at((2, 2)), Some(Stone::White));
        assert_eq!(boards[1].stone_at((0, 0)), None);
        assert_eq!(boards[1].stone_at((3, 3)), Some(Stone::White));
    }

    #[test]
    fn reports_failing_move() {
        let record = sgf::parse("(;SZ[9];B[ee];W[ee])").unwrap();
        let err = replay(&record, MoveOptions::strict()).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Go {
                number: 2,
                source: GoError::Overwrite
            }
        );
        assert_eq!(err.to_string(), "move 2: overwrite prevented");

        let record = sgf::parse("(;SZ[9];B[ee];W[zz])").unwrap();
        assert!(matches!(
            replay(&record, MoveOptions::default()),
            Err(ReplayError::Sgf { number: 2, .. })
        ));
    }
}
