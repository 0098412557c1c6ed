//! History list presentation: display order and per-step descriptors.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Ordering of the history list.
///
/// Pure presentation state: flipping it never touches the move log or
/// the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayOrder {
    /// Ascending by step: the most recent move is listed last.
    #[default]
    MostRecentLast,
    /// Descending by step: the most recent move is listed first.
    MostRecentFirst,
}

impl DisplayOrder {
    /// The opposite ordering.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::MostRecentLast => DisplayOrder::MostRecentFirst,
            DisplayOrder::MostRecentFirst => DisplayOrder::MostRecentLast,
        }
    }
}

/// One jump-to-step control in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The step this entry jumps to (0 = empty board).
    pub step: usize,
    /// Button label: "Start again" at step 0, "Go to step #N" otherwise.
    pub label: String,
    /// True exactly when the engine's cursor sits on this step.
    pub is_current: bool,
    /// The cell claimed by the ply that produced this step; absent at
    /// step 0.
    pub position: Option<Position>,
}

impl HistoryEntry {
    pub(crate) fn new(step: usize, is_current: bool, position: Option<Position>) -> Self {
        let label = if step == 0 {
            "Start again".to_string()
        } else {
            format!("Go to step #{}", step + 1)
        };
        Self {
            step,
            label,
            is_current,
            position,
        }
    }

    /// `(row, col)` of the ply that produced this step.
    pub fn coords(&self) -> Option<(usize, usize)> {
        self.position.map(|pos| (pos.row(), pos.col()))
    }
}
