//! Multi-capture chain enumeration
//!
//! Chains are built by structural recursion over board copies. Every legal
//! jump from a square becomes a [`CaptureTree`] node; a node whose landing
//! crowns the piece is a leaf, otherwise its children are the jumps
//! available from the landing square on the mutated copy.

use crate::board::{Board, Delta, Pos, Side};

use super::action::apply_jump;
use super::movegen::jumps_from;

/// One capture and everything that can follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTree {
    pub jump: Delta,
    pub landing: Pos,
    /// The landing crowned the piece, which ends the chain
    pub promoted: bool,
    pub continuations: Vec<CaptureTree>,
}

impl CaptureTree {
    /// Every complete chain starting with this jump.
    ///
    /// A node without continuations yields the one-jump chain `[jump]`.
    pub fn chains(&self) -> Vec<Vec<Delta>> {
        if self.continuations.is_empty() {
            return vec![vec![self.jump]];
        }
        self.continuations
            .iter()
            .flat_map(CaptureTree::chains)
            .map(|tail| {
                let mut chain = Vec::with_capacity(tail.len() + 1);
                chain.push(self.jump);
                chain.extend(tail);
                chain
            })
            .collect()
    }

    /// Number of jumps on the longest branch
    pub fn depth(&self) -> usize {
        1 + self
            .continuations
            .iter()
            .map(CaptureTree::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Capture alternatives for the piece on `from`, one tree per legal jump
pub fn capture_tree(board: &Board, from: Pos) -> Vec<CaptureTree> {
    jumps_from(board, from)
        .into_iter()
        .filter_map(|jump| {
            let mut next = board.clone();
            let step = apply_jump(&mut next, from, jump);
            if !step.applied {
                return None;
            }
            let continuations = if step.promoted {
                Vec::new()
            } else {
                capture_tree(&next, step.location)
            };
            Some(CaptureTree {
                jump,
                landing: step.location,
                promoted: step.promoted,
                continuations,
            })
        })
        .collect()
}

/// All complete capture chains for the piece on `from`
pub fn capture_chains_from(board: &Board, from: Pos) -> Vec<Vec<Delta>> {
    capture_tree(board, from)
        .iter()
        .flat_map(CaptureTree::chains)
        .collect()
}

/// Capture chains of every piece of `side` that has one, row-major
pub fn capture_chains_for(board: &Board, side: Side) -> Vec<(Pos, Vec<Vec<Delta>>)> {
    board
        .pieces(side)
        .filter_map(|pos| {
            let chains = capture_chains_from(board, pos);
            (!chains.is_empty()).then_some((pos, chains))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    const UP_LEFT: Delta = Delta::new(-2, -2);
    const UP_RIGHT: Delta = Delta::new(-2, 2);

    #[test]
    fn test_no_captures() {
        let board = Board::new();
        assert!(capture_tree(&board, Pos::new(5, 2)).is_empty());
        assert!(capture_chains_for(&board, Side::Black).is_empty());
    }

    #[test]
    fn test_single_capture_chain() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 2), Cell::BlackMan);
        board.place(Pos::new(4, 3), Cell::WhiteMan);

        assert_eq!(capture_chains_from(&board, Pos::new(5, 2)), vec![vec![UP_RIGHT]]);
    }

    #[test]
    fn test_double_capture_is_one_chain() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 0), Cell::BlackMan);
        board.place(Pos::new(4, 1), Cell::WhiteMan);
        board.place(Pos::new(2, 3), Cell::WhiteMan);

        // Landing on row 3 doesn't crown, so the chain continues to row 1
        let chains = capture_chains_from(&board, Pos::new(5, 0));
        assert_eq!(chains, vec![vec![UP_RIGHT, UP_RIGHT]]);

        let tree = capture_tree(&board, Pos::new(5, 0));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].landing, Pos::new(3, 2));
        assert_eq!(tree[0].depth(), 2);
    }

    #[test]
    fn test_divergent_branches_keep_short_chain() {
        let mut board = Board::empty();
        board.place(Pos::new(6, 3), Cell::BlackMan);
        // Left branch: one capture, then the edge
        board.place(Pos::new(5, 2), Cell::WhiteMan);
        // Right branch: two captures
        board.place(Pos::new(5, 4), Cell::WhiteMan);
        board.place(Pos::new(3, 6), Cell::WhiteMan);

        let chains = capture_chains_from(&board, Pos::new(6, 3));
        assert_eq!(chains, vec![vec![UP_LEFT], vec![UP_RIGHT, UP_RIGHT]]);
    }

    #[test]
    fn test_promotion_ends_chain() {
        let mut board = Board::empty();
        board.place(Pos::new(2, 1), Cell::BlackMan);
        board.place(Pos::new(1, 2), Cell::WhiteMan);
        // A king on (0,3) could continue over this piece
        board.place(Pos::new(1, 4), Cell::WhiteMan);

        let tree = capture_tree(&board, Pos::new(2, 1));
        assert_eq!(tree.len(), 1);
        assert!(tree[0].promoted);
        assert!(tree[0].continuations.is_empty());
        assert_eq!(capture_chains_from(&board, Pos::new(2, 1)), vec![vec![UP_RIGHT]]);
    }

    #[test]
    fn test_king_chain_can_turn() {
        let mut board = Board::empty();
        board.place(Pos::new(3, 2), Cell::WhiteKing);
        board.place(Pos::new(4, 3), Cell::BlackMan);
        board.place(Pos::new(4, 5), Cell::BlackMan);

        // (3,2) -> (5,4) -> (3,6): down-right then up-right
        let chains = capture_chains_from(&board, Pos::new(3, 2));
        assert_eq!(chains, vec![vec![Delta::new(2, 2), UP_RIGHT]]);
    }

    #[test]
    fn test_king_cannot_recapture_same_piece() {
        let mut board = Board::empty();
        board.place(Pos::new(3, 2), Cell::BlackKing);
        board.place(Pos::new(4, 3), Cell::WhiteMan);

        // The captured man is gone, so there is no way back over it
        let chains = capture_chains_from(&board, Pos::new(3, 2));
        assert_eq!(chains, vec![vec![Delta::new(2, 2)]]);
    }

    #[test]
    fn test_chains_for_side() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 0), Cell::BlackMan);
        board.place(Pos::new(4, 1), Cell::WhiteMan);
        board.place(Pos::new(5, 6), Cell::BlackMan);
        board.place(Pos::new(4, 5), Cell::WhiteMan);
        board.place(Pos::new(7, 4), Cell::BlackMan);

        let all = capture_chains_for(&board, Side::Black);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, Pos::new(5, 0));
        assert_eq!(all[1].0, Pos::new(5, 6));
        assert_eq!(all[1].1, vec![vec![UP_LEFT]]);
    }
}
