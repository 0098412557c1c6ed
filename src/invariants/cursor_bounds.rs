//! Cursor bounds invariant: the cursor never leaves the logged range.

use super::Invariant;
use crate::engine::Game;

/// Invariant: `0 <= cursor <= log length <= 9`.
///
/// The cursor counts applied plies, so it may equal the log length
/// (every ply applied) but never exceed it, and a 3x3 log never holds
/// more than 9 plies.
pub struct CursorInBounds;

impl Invariant<Game> for CursorInBounds {
    fn holds(game: &Game) -> bool {
        game.current_step() <= game.moves().len() && game.moves().len() <= 9
    }

    fn description() -> &'static str {
        "Cursor stays within 0..=log length, log never exceeds 9 plies"
    }
}
