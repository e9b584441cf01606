//! Move and jump generation for single steps
//!
//! Black men advance toward row 0, White men toward row 7, kings go
//! along all four diagonals. Jump tables mirror the move tables at
//! twice the distance.

use crate::board::{Board, Cell, Delta, Pos, Side};

const BLACK_MOVES: [Delta; 2] = [Delta::new(-1, -1), Delta::new(-1, 1)];
const BLACK_JUMPS: [Delta; 2] = [Delta::new(-2, -2), Delta::new(-2, 2)];

const WHITE_MOVES: [Delta; 2] = [Delta::new(1, -1), Delta::new(1, 1)];
const WHITE_JUMPS: [Delta; 2] = [Delta::new(2, -2), Delta::new(2, 2)];

const KING_MOVES: [Delta; 4] = [
    Delta::new(-1, -1),
    Delta::new(-1, 1),
    Delta::new(1, -1),
    Delta::new(1, 1),
];
const KING_JUMPS: [Delta; 4] = [
    Delta::new(-2, -2),
    Delta::new(-2, 2),
    Delta::new(2, -2),
    Delta::new(2, 2),
];

/// Move deltas available to a piece kind (empty for an empty square)
#[inline]
pub fn move_deltas(cell: Cell) -> &'static [Delta] {
    match cell {
        Cell::BlackMan => &BLACK_MOVES,
        Cell::WhiteMan => &WHITE_MOVES,
        Cell::BlackKing | Cell::WhiteKing => &KING_MOVES,
        Cell::Empty => &[],
    }
}

/// Jump deltas available to a piece kind (empty for an empty square)
#[inline]
pub fn jump_deltas(cell: Cell) -> &'static [Delta] {
    match cell {
        Cell::BlackMan => &BLACK_JUMPS,
        Cell::WhiteMan => &WHITE_JUMPS,
        Cell::BlackKing | Cell::WhiteKing => &KING_JUMPS,
        Cell::Empty => &[],
    }
}

/// Check whether the piece on `from` may step by `delta`.
///
/// False when the origin is empty, the destination is off the board or
/// occupied, or the delta is not in the piece's move table.
pub fn valid_move(board: &Board, from: Pos, delta: Delta) -> bool {
    let Some(to) = from.offset(delta) else {
        return false;
    };
    let piece = board.get(from);
    if piece.is_empty() || !board.is_empty(to) {
        return false;
    }
    move_deltas(piece).contains(&delta)
}

/// Check whether the piece on `from` may jump by `delta`.
///
/// Same contract as [`valid_move`], and additionally the midpoint must hold
/// an enemy piece.
pub fn valid_jump(board: &Board, from: Pos, delta: Delta) -> bool {
    if !delta.is_jump() {
        return false;
    }
    let Some(to) = from.offset(delta) else {
        return false;
    };
    let piece = board.get(from);
    if piece.is_empty() || !board.is_empty(to) {
        return false;
    }
    let Some(mid) = from.offset(delta.half()) else {
        return false;
    };
    if !piece.is_enemy_of(board.get(mid)) {
        return false;
    }
    jump_deltas(piece).contains(&delta)
}

/// Legal plain moves of the piece on `from`, in table order
pub fn moves_from(board: &Board, from: Pos) -> Vec<Delta> {
    move_deltas(board.get(from))
        .iter()
        .copied()
        .filter(|&d| valid_move(board, from, d))
        .collect()
}

/// Legal single jumps of the piece on `from`, in table order
pub fn jumps_from(board: &Board, from: Pos) -> Vec<Delta> {
    jump_deltas(board.get(from))
        .iter()
        .copied()
        .filter(|&d| valid_jump(board, from, d))
        .collect()
}

/// Every piece of `side` with at least one legal move, row-major
pub fn moves_for(board: &Board, side: Side) -> Vec<(Pos, Vec<Delta>)> {
    collect_for(board, side, moves_from)
}

/// Every piece of `side` with at least one legal jump, row-major
pub fn jumps_for(board: &Board, side: Side) -> Vec<(Pos, Vec<Delta>)> {
    collect_for(board, side, jumps_from)
}

/// Whether `side` has any capture available anywhere
pub fn must_capture(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|pos| !jumps_from(board, pos).is_empty())
}

fn collect_for(
    board: &Board,
    side: Side,
    generate: fn(&Board, Pos) -> Vec<Delta>,
) -> Vec<(Pos, Vec<Delta>)> {
    board
        .pieces(side)
        .filter_map(|pos| {
            let deltas = generate(board, pos);
            (!deltas.is_empty()).then_some((pos, deltas))
        })
        .collect()
}
