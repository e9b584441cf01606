//! Negamax with alpha-beta pruning
//!
//! Fail-soft: the returned value may lie outside `(alpha, beta)`, and is
//! exact whenever it lies inside. Pruning changes which subtrees are
//! visited, never the root decision.

use crate::board::{Board, Side};
use crate::eval::{evaluate, terminal_score, MaterialScore};
use crate::rules::{apply, legal_action_list};

use super::Searcher;

impl Searcher {
    pub(super) fn alpha_beta(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if self.enter_node() {
            return 0;
        }

        if let Some(score) = terminal_score(board, side) {
            return score;
        }
        if depth == 0 {
            return evaluate(board, side);
        }

        let mut best = -MaterialScore::WIN;
        for (from, action) in legal_action_list(board, side) {
            let mut child = board.clone();
            apply(&mut child, from, &action);

            let score = -self.alpha_beta(&child, side.opponent(), depth - 1, -beta, -alpha);
            best = best.max(score);
            alpha = alpha.max(best);

            if alpha >= beta {
                break;
            }
        }
        best
    }
}
