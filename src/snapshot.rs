//! Read-only view payload for the presentation layer.

use crate::engine::Game;
use crate::history::{DisplayOrder, HistoryEntry};
use crate::position::Position;
use crate::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render one frame.
///
/// Data flows one way: the engine produces a snapshot, the view renders
/// it and sends back cell-click, jump-to-step, and order-toggle
/// commands. The snapshot holds no references into the engine and is
/// serializable for views living across a process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The viewed board.
    pub board: Board,
    /// Win/draw/next-player status.
    pub status: GameStatus,
    /// Cells to highlight: the winning triple, when the board is won.
    pub highlighted: Option<[Position; 3]>,
    /// Jump-to-step controls, ordered per `display_order`.
    pub history: Vec<HistoryEntry>,
    /// Current history list ordering.
    pub display_order: DisplayOrder,
}

impl GameSnapshot {
    /// Status formatted for display: "Winner: X", "Draw", or
    /// "Next player: O".
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board(),
            status: game.status(),
            highlighted: game.win_result().map(|win| win.line),
            history: game.history_entries(),
            display_order: game.display_order(),
        }
    }
}
