//! The game engine: move log, navigation cursor, and derived state.

use crate::history::{DisplayOrder, HistoryEntry};
use crate::invariants;
use crate::position::Position;
use crate::rules::{WinResult, check_win, is_draw};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument, warn};

/// Reason a move command was ignored.
///
/// The engine never surfaces these to callers of [`Game::play`]; an
/// illegal move is simply a no-op, surfaced only by the board not
/// changing. They are available through [`Game::move_legality`] for
/// callers that want to know in advance, and they show up in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// Tic-tac-toe engine with move-history time travel.
///
/// Owns the canonical move log and the navigation cursor, and nothing
/// else mutates them. The board, the active player, and the win/draw
/// status are derived by replaying the log prefix under the cursor on
/// every read, never cached, so they cannot drift from the moves that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) log: Vec<Position>,
    pub(crate) cursor: usize,
    pub(crate) order: DisplayOrder,
}

impl Game {
    /// Creates a new game: empty log, cursor at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            log: Vec::new(),
            cursor: 0,
            order: DisplayOrder::default(),
        }
    }

    /// Rebuilds an engine by replaying a recorded move sequence.
    ///
    /// Moves pass through the same legality gate as [`Game::play`], so an
    /// illegal entry is dropped rather than corrupting the log.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        let mut game = Game::new();
        for &pos in moves {
            game.play(pos);
        }
        game
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays a move at the given position.
    ///
    /// Illegal moves (occupied cell, finished game) are silently
    /// ignored. A legal move made from a rewound cursor discards the
    /// abandoned continuation: the log is truncated to the first
    /// `current_step()` entries before the new move is appended and the
    /// cursor advances by 1.
    #[instrument(skip(self), fields(position = ?pos, step = self.cursor))]
    pub fn play(&mut self, pos: Position) {
        if let Err(rejection) = self.move_legality(pos) {
            debug!(%rejection, "move ignored");
            return;
        }

        self.log.truncate(self.cursor);
        self.log.push(pos);
        self.cursor += 1;

        invariants::assert_invariants(self);
    }

    /// Plays a move given a raw cell index (0-8).
    ///
    /// Out-of-range indices are ignored like any other illegal command.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => warn!(index, "cell index out of range, move ignored"),
        }
    }

    /// Moves the cursor to `step` without touching the log.
    ///
    /// Always legal regardless of win/draw status: rewinding a finished
    /// game is allowed, and the status is recomputed from the rewound
    /// board. Callers must keep `step <= self.moves().len()`; the
    /// history list only ever offers valid steps.
    #[instrument(skip(self))]
    pub fn go_to_step(&mut self, step: usize) {
        debug_assert!(step <= self.log.len(), "step {step} outside history");
        self.cursor = step;

        invariants::assert_invariants(self);
    }

    /// Flips the presentation order of the history list.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Resets to the empty-log, step-0 state, starting a new game.
    ///
    /// The display order is a presentation preference and survives the
    /// reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.log.clear();
        self.cursor = 0;
    }

    // ─────────────────────────────────────────────────────────────
    //  Owned-state accessors
    // ─────────────────────────────────────────────────────────────

    /// The full move log, including plies beyond the cursor that a
    /// rewind has not yet abandoned.
    pub fn moves(&self) -> &[Position] {
        &self.log
    }

    /// The navigation cursor: how many logged plies are applied to the
    /// viewed board. 0 is the empty board.
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Presentation order of the history list.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived reads
    // ─────────────────────────────────────────────────────────────

    /// The board as seen from the cursor: the logged moves up to
    /// `current_step()` replayed onto an empty board.
    pub fn board(&self) -> Board {
        Board::from_moves(&self.log[..self.cursor])
    }

    /// The winner and winning triple on the viewed board, if any.
    pub fn win_result(&self) -> Option<WinResult> {
        check_win(&self.board())
    }

    /// True when the viewed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.board())
    }

    /// The player whose symbol the next ply would carry, or, once the
    /// viewed board is won, the winner (the player who just moved).
    pub fn active_player(&self) -> Player {
        match self.win_result() {
            Some(win) => win.winner,
            None => Player::for_ply(self.cursor),
        }
    }

    /// Win, draw, or next-player status for the viewed board, checked in
    /// that priority order.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.win_result() {
            GameStatus::Winner(win.winner)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.active_player())
        }
    }

    /// Checks whether a move at `pos` would be accepted right now.
    ///
    /// Occupancy is checked before game-over, matching the order the
    /// engine applies internally.
    pub fn move_legality(&self, pos: Position) -> Result<(), MoveRejection> {
        let board = self.board();
        if !board.is_empty(pos) {
            return Err(MoveRejection::CellOccupied(pos));
        }
        if check_win(&board).is_some() {
            return Err(MoveRejection::GameOver);
        }
        Ok(())
    }

    /// History descriptors for every step in `0..=moves().len()`,
    /// ordered per [`DisplayOrder`].
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = (0..=self.log.len())
            .map(|step| {
                HistoryEntry::new(
                    step,
                    step == self.cursor,
                    (step > 0).then(|| self.log[step - 1]),
                )
            })
            .collect();

        if self.order == DisplayOrder::MostRecentFirst {
            entries.reverse();
        }
        entries
    }

    /// Read-only view payload for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
