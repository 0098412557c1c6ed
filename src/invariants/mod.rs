//! First-class invariants for the engine.
//!
//! Each invariant is a named, independently testable property of
//! reachable engine state. The engine checks the full set after every
//! mutating command in debug builds.

use crate::engine::Game;

mod cursor_bounds;
mod distinct_cells;
mod halts_on_win;

pub use cursor_bounds::CursorInBounds;
pub use distinct_cells::DistinctCells;
pub use halts_on_win::HaltsOnWin;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants, so a whole set is verified in
/// one step and all violations are collected, not just the first.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// All engine invariants as a composable set.
pub type GameInvariants = (CursorInBounds, DistinctCells, HaltsOnWin);

/// Asserts the full invariant set in debug builds.
pub(crate) fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "engine invariants violated: {:?}",
        GameInvariants::check_all(game).unwrap_err()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_holds_after_moves() {
        let game = Game::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_collects_violations() {
        let mut game = Game::new();
        game.log = vec![Position::Center, Position::Center];
        game.cursor = 7;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (CursorInBounds, DistinctCells);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
