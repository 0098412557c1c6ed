//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line: the winning symbol and the exact cells that formed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    /// The symbol that owns the line.
    pub winner: Player,
    /// The three cells of the line, in scan order.
    pub line: [Position; 3],
}

/// Checks if there is a completed line on the board.
///
/// The eight triples are scanned in a fixed order: rows top-to-bottom,
/// columns left-to-right, then the main diagonal before the anti-diagonal.
/// The first match wins, so the result is deterministic even on boards
/// holding more than one completed line.
#[instrument]
pub fn check_win(board: &Board) -> Option<WinResult> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(winner) = sq {
                return Some(WinResult { winner, line });
            }
        }
    }

    None
}
