//! Plain negamax
//!
//! Each node returns its value from the mover's point of view; the parent
//! negates. Used as the reference the pruned search must agree with.

use crate::board::{Board, Side};
use crate::eval::{evaluate, terminal_score, MaterialScore};
use crate::rules::{apply, legal_action_list};

use super::Searcher;

impl Searcher {
    pub(super) fn negamax(&mut self, board: &Board, side: Side, depth: u8) -> i32 {
        if self.enter_node() {
            return 0;
        }

        // Terminal check comes before the depth check
        if let Some(score) = terminal_score(board, side) {
            return score;
        }
        if depth == 0 {
            return evaluate(board, side);
        }

        // A side with nothing to play keeps the initial -WIN
        let mut best = -MaterialScore::WIN;
        for (from, action) in legal_action_list(board, side) {
            let mut child = board.clone();
            apply(&mut child, from, &action);

            best = best.max(-self.negamax(&child, side.opponent(), depth - 1));
        }
        best
    }
}
