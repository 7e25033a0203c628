//! Wire protocol for the Othello server.
//!
//! Each turn the server sends one JSON object:
//! `{"board": [[u8; 8]; 8], "maxTurnTime": u64, "player": u8}`
//! with cells 0=empty, 1=player one, 2=player two. The client answers with
//! the ASCII line `[row, col]\n`.
//!
//! Known protocol ambiguity: the server expects "no legal move" as the
//! position-shaped sentinel `[-1, -1]\n`, which conflates a pass with an
//! out-of-range move. Internally the outcome stays a tagged
//! `Option<Position>`; the sentinel exists only here at the wire edge.

use serde::Deserialize;
use thiserror::Error;

use crate::board::{BOARD_SIZE, Board};
use crate::types::{Cell, Player, Position};

/// One turn notification as sent by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub board: Vec<Vec<u8>>,
    /// Per-turn time budget in milliseconds. Informational only; the move
    /// selector never reads it.
    pub max_turn_time: u64,
    pub player: u8,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid turn message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board must be 8x8, got {rows} rows and {cols} cols in row {row}")]
    BadDimensions { rows: usize, cols: usize, row: usize },
    #[error("cell ({row}, {col}) holds invalid value {value}, expected 0, 1 or 2")]
    BadCell { row: usize, col: usize, value: u8 },
    #[error("invalid player identifier {0}, expected 1 or 2")]
    BadPlayer(u8),
}

impl TurnRequest {
    /// Validates the wire board and converts it into engine types.
    pub fn decode(&self) -> Result<(Board, Player), ProtocolError> {
        let player = decode_player(self.player)?;
        let board = decode_board(&self.board)?;
        Ok((board, player))
    }
}

fn decode_player(value: u8) -> Result<Player, ProtocolError> {
    match value {
        1 => Ok(Player::One),
        2 => Ok(Player::Two),
        other => Err(ProtocolError::BadPlayer(other)),
    }
}

fn decode_board(rows: &[Vec<u8>]) -> Result<Board, ProtocolError> {
    if rows.len() != BOARD_SIZE {
        return Err(ProtocolError::BadDimensions {
            rows: rows.len(),
            cols: rows.first().map_or(0, Vec::len),
            row: 0,
        });
    }

    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        if row.len() != BOARD_SIZE {
            return Err(ProtocolError::BadDimensions {
                rows: rows.len(),
                cols: row.len(),
                row: r,
            });
        }
        for (c, &value) in row.iter().enumerate() {
            cells[r][c] = match value {
                0 => Cell::Empty,
                1 => Cell::Taken(Player::One),
                2 => Cell::Taken(Player::Two),
                other => {
                    return Err(ProtocolError::BadCell {
                        row: r,
                        col: c,
                        value: other,
                    });
                }
            };
        }
    }

    Ok(Board::from_cells(cells))
}

/// Encodes the selected move as the newline-terminated line the server
/// expects: `[4, 2]\n` for a move, `[-1, -1]\n` for a pass.
pub fn encode_move(outcome: Option<Position>) -> Vec<u8> {
    let line = match outcome {
        Some(pos) => format!("[{}, {}]\n", pos.row, pos.col),
        None => "[-1, -1]\n".to_string(),
    };
    line.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_turn_message() {
        let raw = r#"{
            "board": [
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 1, 0, 0, 0],
                [0, 0, 0, 1, 1, 0, 0, 0],
                [0, 0, 0, 2, 1, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0]
            ],
            "maxTurnTime": 2000,
            "player": 1
        }"#;

        let request: TurnRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.max_turn_time, 2000);

        let (board, player) = request.decode().unwrap();
        assert_eq!(player, Player::One);
        assert_eq!(
            board.cell(Position::new(4, 3)),
            Cell::Taken(Player::Two)
        );
        assert_eq!(board.count(Player::One), 4);
        assert_eq!(board.count(Player::Two), 1);
    }

    #[test]
    fn rejects_short_rows() {
        let request = TurnRequest {
            board: vec![vec![0; 7]; 8],
            max_turn_time: 1000,
            player: 1,
        };

        assert!(matches!(
            request.decode(),
            Err(ProtocolError::BadDimensions { cols: 7, .. })
        ));
    }

    #[test]
    fn rejects_missing_rows() {
        let request = TurnRequest {
            board: vec![vec![0; 8]; 5],
            max_turn_time: 1000,
            player: 1,
        };

        assert!(matches!(
            request.decode(),
            Err(ProtocolError::BadDimensions { rows: 5, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_cells() {
        let mut board = vec![vec![0; 8]; 8];
        board[2][5] = 3;
        let request = TurnRequest {
            board,
            max_turn_time: 1000,
            player: 2,
        };

        assert!(matches!(
            request.decode(),
            Err(ProtocolError::BadCell { row: 2, col: 5, value: 3 })
        ));
    }

    #[test]
    fn rejects_invalid_players() {
        let request = TurnRequest {
            board: vec![vec![0; 8]; 8],
            max_turn_time: 1000,
            player: 0,
        };

        assert!(matches!(request.decode(), Err(ProtocolError::BadPlayer(0))));
    }

    #[test]
    fn encodes_a_move_byte_for_byte() {
        assert_eq!(encode_move(Some(Position::new(4, 2))), b"[4, 2]\n");
    }

    #[test]
    fn encodes_a_pass_as_the_wire_sentinel() {
        assert_eq!(encode_move(None), b"[-1, -1]\n");
    }
}
