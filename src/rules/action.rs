//! Applying actions to the board
//!
//! An action either applies in full, including any promotion, or leaves the
//! board untouched and reports `applied == false`.

use crate::board::{Board, Delta, Pos, Side};

use super::movegen::{valid_jump, valid_move};

/// Everything a side can do with one piece in one turn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// One diagonal step
    Move(Delta),
    /// One capture
    Jump(Delta),
    /// Consecutive captures by the same piece
    Chain(Vec<Delta>),
}

impl Action {
    /// Wrap a capture sequence, collapsing a single capture to [`Action::Jump`]
    pub fn from_chain(chain: Vec<Delta>) -> Action {
        match chain.as_slice() {
            [single] => Action::Jump(*single),
            _ => Action::Chain(chain),
        }
    }

    /// Whether the action captures at least one piece
    #[inline]
    pub fn is_capture(&self) -> bool {
        !matches!(self, Action::Move(_))
    }

    /// Individual steps in order
    pub fn steps(&self) -> &[Delta] {
        match self {
            Action::Move(d) | Action::Jump(d) => std::slice::from_ref(d),
            Action::Chain(chain) => chain,
        }
    }

    /// Squares the piece visits when started from `from`, origin first
    pub fn path(&self, from: Pos) -> Vec<Pos> {
        let mut squares = vec![from];
        for &delta in self.steps() {
            match squares.last().and_then(|at| at.offset(delta)) {
                Some(next) => squares.push(next),
                None => break,
            }
        }
        squares
    }

    /// Square the piece ends on when started from `from`
    pub fn destination(&self, from: Pos) -> Option<Pos> {
        self.steps()
            .iter()
            .try_fold(from, |pos, &delta| pos.offset(delta))
    }
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub applied: bool,
    pub promoted: bool,
    /// Where the piece ended up; the origin when nothing was applied
    pub location: Pos,
}

impl Outcome {
    #[inline]
    fn rejected(from: Pos) -> Self {
        Self {
            applied: false,
            promoted: false,
            location: from,
        }
    }
}

/// Step the piece on `from` by `delta` if legal, then check promotion
pub fn apply_move(board: &mut Board, from: Pos, delta: Delta) -> Outcome {
    if !valid_move(board, from, delta) {
        return Outcome::rejected(from);
    }
    let Some(to) = from.offset(delta) else {
        return Outcome::rejected(from);
    };

    let piece = board.remove(from);
    board.place(to, piece);
    let promoted = board.promote(to);

    Outcome {
        applied: true,
        promoted,
        location: to,
    }
}

/// Capture with the piece on `from` by `delta` if legal.
///
/// Removes the jumped piece, credits its value to the capturer's score,
/// moves the capturer and checks promotion on the landing square.
pub fn apply_jump(board: &mut Board, from: Pos, delta: Delta) -> Outcome {
    if !valid_jump(board, from, delta) {
        return Outcome::rejected(from);
    }
    let (Some(mid), Some(to)) = (from.offset(delta.half()), from.offset(delta)) else {
        return Outcome::rejected(from);
    };

    let piece = board.remove(from);
    let captured = board.remove(mid);
    if let Some(side) = piece.side() {
        board.add_score(side, captured.value());
    }
    board.place(to, piece);
    let promoted = board.promote(to);

    Outcome {
        applied: true,
        promoted,
        location: to,
    }
}

/// Apply a capture sequence from `from`.
///
/// Rejected as a whole if any jump is illegal or a jump follows the one that
/// crowned the piece.
pub fn apply_chain(board: &mut Board, from: Pos, chain: &[Delta]) -> Outcome {
    if chain.is_empty() {
        return Outcome::rejected(from);
    }

    let mut work = board.clone();
    let mut location = from;
    let mut promoted = false;
    for &jump in chain {
        if promoted {
            return Outcome::rejected(from);
        }
        let step = apply_jump(&mut work, location, jump);
        if !step.applied {
            return Outcome::rejected(from);
        }
        location = step.location;
        promoted = step.promoted;
    }
    // No-op unless a chain somehow ended on the far row without crowning
    promoted |= work.promote(location);

    *board = work;
    Outcome {
        applied: true,
        promoted,
        location,
    }
}

/// Single entry point for all action kinds
pub fn apply(board: &mut Board, from: Pos, action: &Action) -> Outcome {
    match action {
        Action::Move(delta) => apply_move(board, from, *delta),
        Action::Jump(delta) => apply_jump(board, from, *delta),
        Action::Chain(chain) => apply_chain(board, from, chain),
    }
}

/// Apply an action for a specific side, rejecting pieces of the other side
pub fn apply_for(board: &mut Board, side: Side, from: Pos, action: &Action) -> Outcome {
    if !board.is_side(from, side) {
        return Outcome::rejected(from);
    }
    apply(board, from, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_apply_move_relocates() {
        let mut board = Board::new();
        let out = apply_move(&mut board, Pos::new(5, 2), Delta::new(-1, 1));

        assert_eq!(
            out,
            Outcome {
                applied: true,
                promoted: false,
                location: Pos::new(4, 3)
            }
        );
        assert!(board.is_empty(Pos::new(5, 2)));
        assert_eq!(board.get(Pos::new(4, 3)), Cell::BlackMan);
        assert_eq!(board.piece_count(Side::Black), 12);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();

        // Blocked by own piece
        let out = apply_move(&mut board, Pos::new(6, 1), Delta::new(-1, 1));
        assert!(!out.applied);
        assert_eq!(out.location, Pos::new(6, 1));
        // Backward
        assert!(!apply_move(&mut board, Pos::new(5, 2), Delta::new(1, 1)).applied);
        // Empty origin
        assert!(!apply_move(&mut board, Pos::new(4, 3), Delta::new(-1, 1)).applied);
        // No enemy to jump
        assert!(!apply_jump(&mut board, Pos::new(5, 2), Delta::new(-2, 2)).applied);

        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_jump_captures() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 2), Cell::BlackMan);
        board.place(Pos::new(4, 3), Cell::WhiteKing);
        board.place(Pos::new(0, 1), Cell::WhiteMan);

        let out = apply_jump(&mut board, Pos::new(5, 2), Delta::new(-2, 2));
        assert!(out.applied);
        assert!(!out.promoted);
        assert_eq!(out.location, Pos::new(3, 4));

        assert!(board.is_empty(Pos::new(4, 3)));
        assert!(board.is_empty(Pos::new(5, 2)));
        assert_eq!(board.get(Pos::new(3, 4)), Cell::BlackMan);
        assert_eq!(board.piece_count(Side::White), 1);
        assert_eq!(board.king_count(Side::White), 0);
        assert_eq!(board.piece_count(Side::Black), 1);
        // A king is worth two points
        assert_eq!(board.score(Side::Black), 2);
        assert_eq!(board.score(Side::White), 0);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_onto_far_row_promotes() {
        let mut board = Board::empty();
        board.place(Pos::new(1, 2), Cell::BlackMan);
        board.place(Pos::new(6, 5), Cell::WhiteMan);

        let out = apply_move(&mut board, Pos::new(1, 2), Delta::new(-1, -1));
        assert!(out.promoted);
        assert_eq!(board.get(Pos::new(0, 1)), Cell::BlackKing);
        assert_eq!(board.king_count(Side::Black), 1);
        assert_eq!(board.score(Side::Black), 1);

        let out = apply_move(&mut board, Pos::new(6, 5), Delta::new(1, 1));
        assert!(out.promoted);
        assert_eq!(board.get(Pos::new(7, 6)), Cell::WhiteKing);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_king_moving_on_far_row_does_not_promote_again() {
        let mut board = Board::empty();
        board.place(Pos::new(1, 2), Cell::BlackKing);

        let out = apply_move(&mut board, Pos::new(1, 2), Delta::new(-1, 1));
        assert!(out.applied);
        assert!(!out.promoted);
        assert_eq!(board.score(Side::Black), 0);
    }

    #[test]
    fn test_apply_chain_two_jumps() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 0), Cell::BlackMan);
        board.place(Pos::new(4, 1), Cell::WhiteMan);
        board.place(Pos::new(2, 3), Cell::WhiteMan);

        let chain = [Delta::new(-2, 2), Delta::new(-2, 2)];
        let out = apply_chain(&mut board, Pos::new(5, 0), &chain);

        assert!(out.applied);
        assert!(!out.promoted);
        assert_eq!(out.location, Pos::new(1, 4));
        assert_eq!(board.piece_count(Side::White), 0);
        assert_eq!(board.score(Side::Black), 2);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_apply_chain_is_atomic() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 0), Cell::BlackMan);
        board.place(Pos::new(4, 1), Cell::WhiteMan);
        board.place(Pos::new(2, 3), Cell::WhiteMan);
        let before = board.clone();

        // Second jump goes the wrong way
        let chain = [Delta::new(-2, 2), Delta::new(-2, -2)];
        assert!(!apply_chain(&mut board, Pos::new(5, 0), &chain).applied);
        assert!(!apply_chain(&mut board, Pos::new(5, 0), &[]).applied);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_chain_rejects_jump_after_promotion() {
        let mut board = Board::empty();
        board.place(Pos::new(2, 1), Cell::BlackMan);
        board.place(Pos::new(1, 2), Cell::WhiteMan);
        board.place(Pos::new(1, 4), Cell::WhiteMan);
        let before = board.clone();

        // Crowned on (0,3); a king could go on over (1,4) but the turn is over
        let chain = [Delta::new(-2, 2), Delta::new(2, 2)];
        assert!(!apply_chain(&mut board, Pos::new(2, 1), &chain).applied);
        assert_eq!(board, before);

        let out = apply_chain(&mut board, Pos::new(2, 1), &chain[..1]);
        assert!(out.applied);
        assert!(out.promoted);
        assert_eq!(board.get(Pos::new(0, 3)), Cell::BlackKing);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut board = Board::empty();
        board.place(Pos::new(5, 2), Cell::BlackMan);
        board.place(Pos::new(4, 3), Cell::WhiteMan);

        let jump = Action::Jump(Delta::new(-2, 2));
        assert!(!apply(&mut board, Pos::new(5, 2), &Action::Move(Delta::new(-1, 1))).applied);
        assert!(apply(&mut board, Pos::new(5, 2), &jump).applied);
        assert_eq!(board.piece_count(Side::White), 0);
    }

    #[test]
    fn test_apply_for_checks_owner() {
        let mut board = Board::new();
        let action = Action::Move(Delta::new(1, 1));
        assert!(!apply_for(&mut board, Side::Black, Pos::new(2, 1), &action).applied);
        assert!(apply_for(&mut board, Side::White, Pos::new(2, 1), &action).applied);
    }

    #[test]
    fn test_action_helpers() {
        assert_eq!(
            Action::from_chain(vec![Delta::new(-2, 2)]),
            Action::Jump(Delta::new(-2, 2))
        );
        let chain = Action::from_chain(vec![Delta::new(-2, 2), Delta::new(-2, -2)]);
        assert!(matches!(chain, Action::Chain(_)));
        assert!(chain.is_capture());
        assert!(!Action::Move(Delta::new(1, 1)).is_capture());
        assert_eq!(chain.destination(Pos::new(6, 1)), Some(Pos::new(2, 1)));
        assert_eq!(chain.steps().len(), 2);
    }
}
