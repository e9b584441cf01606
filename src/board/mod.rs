//! Board representation for checkers

pub mod board;


use std::fmt;

use crate::error::{CheckersError, Result};

// Re-exports
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Pieces per side in the starting layout
pub const PIECES_PER_SIDE: u8 = 12;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Row on which a man of this side is promoted
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Black => 0,
            Side::White => (BOARD_SIZE - 1) as u8,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    BlackMan,
    BlackKing,
    WhiteMan,
    WhiteKing,
}

impl Cell {
    #[inline]
    pub fn man(side: Side) -> Cell {
        match side {
            Side::Black => Cell::BlackMan,
            Side::White => Cell::WhiteMan,
        }
    }

    #[inline]
    pub fn king(side: Side) -> Cell {
        match side {
            Side::Black => Cell::BlackKing,
            Side::White => Cell::WhiteKing,
        }
    }

    /// Owner of the piece, `None` for an empty square
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
            Cell::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_man(self) -> bool {
        matches!(self, Cell::BlackMan | Cell::WhiteMan)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Cell::BlackKing | Cell::WhiteKing)
    }

    /// Point value awarded for capturing this piece (man = 1, king = 2)
    #[inline]
    pub fn value(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::BlackMan | Cell::WhiteMan => 1,
            Cell::BlackKing | Cell::WhiteKing => 2,
        }
    }

    /// King encoding of a man; kings and empty squares are unchanged
    #[inline]
    pub fn promoted(self) -> Cell {
        match self {
            Cell::BlackMan => Cell::BlackKing,
            Cell::WhiteMan => Cell::WhiteKing,
            other => other,
        }
    }

    /// True iff both squares are occupied by opposite sides
    #[inline]
    pub fn is_enemy_of(self, other: Cell) -> bool {
        match (self.side(), other.side()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

/// Position on the board, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Panics when the coordinates are off the board.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from an input layer
    pub fn try_new(row: i32, col: i32) -> Result<Self> {
        if Self::is_valid(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CheckersError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8)
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Square reached by `delta`, `None` if it leaves the board
    #[inline]
    pub fn offset(self, delta: Delta) -> Option<Pos> {
        let row = self.row as i32 + delta.dr as i32;
        let col = self.col as i32 + delta.dc as i32;
        Self::try_new(row, col).ok()
    }

    /// Whether pieces can ever stand here (the dark squares)
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterate all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, (b'a' + self.col) as char)
    }
}

/// Relative displacement between two squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub dr: i8,
    pub dc: i8,
}

impl Delta {
    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// Displacement from `from` to `to`
    #[inline]
    pub fn between(from: Pos, to: Pos) -> Self {
        Self {
            dr: to.row as i8 - from.row as i8,
            dc: to.col as i8 - from.col as i8,
        }
    }

    /// One diagonal step
    #[inline]
    pub fn is_move(self) -> bool {
        self.dr.abs() == 1 && self.dc.abs() == 1
    }

    /// Two diagonal steps
    #[inline]
    pub fn is_jump(self) -> bool {
        self.dr.abs() == 2 && self.dc.abs() == 2
    }

    /// Step to the midpoint of a jump
    #[inline]
    pub fn half(self) -> Delta {
        Delta::new(self.dr / 2, self.dc / 2)
    }
}
