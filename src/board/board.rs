//! Board structure with piece, king and score tracking

use std::fmt;

use super::{Cell, Pos, Side, BOARD_SIZE, PIECES_PER_SIDE, TOTAL_CELLS};

/// Points added to a side's score when one of its men is crowned
pub const PROMOTION_BONUS: u32 = 1;

/// Cached per-side counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideCounts {
    pub pieces: u8,
    pub kings: u8,
}

/// Game board.
///
/// The per-side counters are a cache of what the grid holds. Every mutation
/// goes through [`Board::place`], [`Board::remove`] or [`Board::promote`],
/// which keep them in step; [`Board::recount`] rebuilds them from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    counts: [SideCounts; 2],
    scores: [u32; 2],
}

impl Board {
    /// Standard starting layout: twelve men per side on the dark squares of
    /// their back three rows, White on top.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in Pos::all().filter(|p| p.is_playable()) {
            match pos.row {
                0..=2 => board.place(pos, Cell::WhiteMan),
                5..=7 => board.place(pos, Cell::BlackMan),
                _ => {}
            }
        }
        debug_assert_eq!(board.piece_count(Side::Black), PIECES_PER_SIDE);
        debug_assert_eq!(board.piece_count(Side::White), PIECES_PER_SIDE);
        board
    }

    /// Board with no pieces, for setting up positions
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
            counts: [SideCounts::default(); 2],
            scores: [0; 2],
        }
    }

    /// Build a board from a row-major grid
    pub fn from_cells(grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, line) in grid.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                board.place(Pos::new(row as u8, col as u8), cell);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    #[inline]
    pub fn is_side(&self, pos: Pos, side: Side) -> bool {
        self.get(pos).side() == Some(side)
    }

    #[inline]
    pub fn is_man(&self, pos: Pos) -> bool {
        self.get(pos).is_man()
    }

    #[inline]
    pub fn is_king(&self, pos: Pos) -> bool {
        self.get(pos).is_king()
    }

    /// True iff both squares are occupied and by opposite sides
    #[inline]
    pub fn are_enemies(&self, a: Pos, b: Pos) -> bool {
        self.get(a).is_enemy_of(self.get(b))
    }

    /// Put a piece on a square, replacing whatever stood there
    pub fn place(&mut self, pos: Pos, cell: Cell) {
        self.remove(pos);
        if let Some(side) = cell.side() {
            let counts = &mut self.counts[side.index()];
            counts.pieces += 1;
            if cell.is_king() {
                counts.kings += 1;
            }
        }
        self.cells[pos.to_index()] = cell;
    }

    /// Clear a square and return what was on it
    pub fn remove(&mut self, pos: Pos) -> Cell {
        let cell = std::mem::take(&mut self.cells[pos.to_index()]);
        if let Some(side) = cell.side() {
            let counts = &mut self.counts[side.index()];
            counts.pieces -= 1;
            if cell.is_king() {
                counts.kings -= 1;
            }
        }
        cell
    }

    /// Crown the man on `pos` if it stands on its side's far row.
    ///
    /// Returns whether a promotion happened. Kings, empty squares and men
    /// elsewhere are left alone.
    pub fn promote(&mut self, pos: Pos) -> bool {
        let cell = self.get(pos);
        let Some(side) = cell.side() else {
            return false;
        };
        if !cell.is_man() || pos.row != side.promotion_row() {
            return false;
        }
        self.cells[pos.to_index()] = cell.promoted();
        self.counts[side.index()].kings += 1;
        self.add_score(side, PROMOTION_BONUS);
        true
    }

    /// Live pieces of a side
    #[inline]
    pub fn piece_count(&self, side: Side) -> u8 {
        self.counts[side.index()].pieces
    }

    /// Kings of a side
    #[inline]
    pub fn king_count(&self, side: Side) -> u8 {
        self.counts[side.index()].kings
    }

    /// Cumulative score of a side
    #[inline]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    #[inline]
    pub fn add_score(&mut self, side: Side, points: u32) {
        self.scores[side.index()] = self.scores[side.index()].saturating_add(points);
    }

    /// Cached counters of both sides, Black first
    #[inline]
    pub fn counts(&self) -> [SideCounts; 2] {
        self.counts
    }

    /// Counters derived from a full scan of the grid
    pub fn recount(&self) -> [SideCounts; 2] {
        let mut counts = [SideCounts::default(); 2];
        for cell in self.cells {
            if let Some(side) = cell.side() {
                counts[side.index()].pieces += 1;
                if cell.is_king() {
                    counts[side.index()].kings += 1;
                }
            }
        }
        counts
    }

    /// Whether the cached counters match the grid
    pub fn is_consistent(&self) -> bool {
        self.counts == self.recount()
    }

    /// Occupied squares of a side in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_side(pos, side))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let symbol = match self.get(Pos::new(row as u8, col as u8)) {
                    Cell::Empty => '.',
                    Cell::BlackMan => 'b',
                    Cell::BlackKing => 'B',
                    Cell::WhiteMan => 'w',
                    Cell::WhiteKing => 'W',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
