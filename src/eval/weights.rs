//! Scoring weights for material evaluation

/// Evaluation weights
pub struct MaterialScore;

impl MaterialScore {
    /// Every live piece, man or king
    pub const PIECE: i32 = 100;
    /// Extra weight on top of `PIECE` for a king
    pub const KING: i32 = 50;
    /// Score of a won position; stands in for infinity
    pub const WIN: i32 = 1_000_000;
    /// Alpha-beta window bound, strictly beyond any reachable score
    pub const INF: i32 = Self::WIN + 1;
}
