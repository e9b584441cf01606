//! Heuristic evaluation function for checkers positions
//!
//! `100 * (own pieces - enemy pieces) + 50 * (own kings - enemy kings)`.
//! No positional terms.

use crate::board::{Board, Side};
use crate::rules::winner;

use super::weights::MaterialScore;

/// Evaluate the board from the perspective of `side`.
///
/// Positive values favour `side`. Terminal positions are not special-cased
/// here; see [`terminal_score`].
#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let opponent = side.opponent();

    let pieces = i32::from(board.piece_count(side)) - i32::from(board.piece_count(opponent));
    let kings = i32::from(board.king_count(side)) - i32::from(board.king_count(opponent));

    MaterialScore::PIECE * pieces + MaterialScore::KING * kings
}

/// `Some(±WIN)` from `side`'s perspective if either side has no pieces left
#[must_use]
pub fn terminal_score(board: &Board, side: Side) -> Option<i32> {
    winner(board).map(|w| {
        if w == side {
            MaterialScore::WIN
        } else {
            -MaterialScore::WIN
        }
    })
}
