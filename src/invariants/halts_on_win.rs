//! Halts-on-win invariant: no logged ply follows a completed line.

use super::Invariant;
use crate::engine::Game;
use crate::rules::check_win;
use crate::types::Board;

/// Invariant: every ply in the log was made on a board without a winner.
///
/// The legality gate refuses moves once a line is complete, so a win can
/// only sit at the very end of the log.
pub struct HaltsOnWin;

impl Invariant<Game> for HaltsOnWin {
    fn holds(game: &Game) -> bool {
        (0..game.moves().len())
            .all(|ply| check_win(&Board::from_moves(&game.moves()[..ply])).is_none())
    }

    fn description() -> &'static str {
        "No ply in the log was played after a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_log_holds() {
        assert!(HaltsOnWin::holds(&Game::new()));
    }

    #[test]
    fn test_win_on_final_ply_holds() {
        // X claims the top row on the fifth ply.
        let game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(game.moves().len(), 5);
        assert!(HaltsOnWin::holds(&game));
    }

    #[test]
    fn test_ply_after_win_violates() {
        let mut game = Game::new();
        game.log = vec![
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];
        assert!(!HaltsOnWin::holds(&game));
    }
}
