//! Tic-tac-toe with full move-history time travel.
//!
//! The [`Game`] engine owns a canonical move log and a navigation cursor.
//! Every read (board, active player, win, draw, status) is derived by
//! replaying the log prefix under the cursor, never stored, so derived
//! state cannot drift from the moves that produced it. Rewinding to an
//! earlier step and playing from there permanently discards the abandoned
//! continuation.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft);
//! game.play(Position::Center);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
//!
//! // Rewind one ply and branch: the old second ply is gone.
//! game.go_to_step(1);
//! game.play(Position::TopRight);
//! assert_eq!(game.moves(), &[Position::TopLeft, Position::TopRight]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod history;
mod position;
mod rules;
mod snapshot;
mod types;

/// First-class invariants over reachable engine state.
pub mod invariants;

// Crate-level exports - engine
pub use engine::{Game, MoveRejection};

// Crate-level exports - history presentation
pub use history::{DisplayOrder, HistoryEntry};

// Crate-level exports - board vocabulary
pub use position::Position;

// Crate-level exports - rules
pub use rules::{WinResult, check_win, is_draw, is_full};

// Crate-level exports - view contract
pub use snapshot::GameSnapshot;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};
