//! Game outcome and turn-level action selection
//!
//! A side loses when its last piece is captured. Running out of legal
//! actions with pieces left is not a loss here.

use crate::board::{Board, Pos, Side};

use super::action::Action;
use super::capture::capture_chains_for;
use super::movegen::moves_for;

/// Whether `side` has no pieces left
#[inline]
pub fn has_lost(board: &Board, side: Side) -> bool {
    board.piece_count(side) == 0
}

/// Winning side, if the game is over
pub fn winner(board: &Board) -> Option<Side> {
    if has_lost(board, Side::Black) {
        Some(Side::White)
    } else if has_lost(board, Side::White) {
        Some(Side::Black)
    } else {
        None
    }
}

/// Actions `side` may choose from this turn.
///
/// If any capture exists only capture chains are offered, otherwise plain
/// moves. Grouped by origin, row-major, then table order within a square.
pub fn legal_actions(board: &Board, side: Side) -> Vec<(Pos, Vec<Action>)> {
    let captures = capture_chains_for(board, side);
    if !captures.is_empty() {
        return captures
            .into_iter()
            .map(|(pos, chains)| (pos, chains.into_iter().map(Action::from_chain).collect()))
            .collect();
    }

    moves_for(board, side)
        .into_iter()
        .map(|(pos, deltas)| (pos, deltas.into_iter().map(Action::Move).collect()))
        .collect()
}

/// [`legal_actions`] flattened into `(origin, action)` pairs in the same order
pub fn legal_action_list(board: &Board, side: Side) -> Vec<(Pos, Action)> {
    legal_actions(board, side)
        .into_iter()
        .flat_map(|(pos, actions)| actions.into_iter().map(move |a| (pos, a)))
        .collect()
}
