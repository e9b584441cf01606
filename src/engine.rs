//! Main AI engine
//!
//! Wraps the [`Searcher`] with configuration and turns a search result into
//! a [`Decision`], or an error when the question has no answer (game already
//! over, or nothing to play).
//!
//! # Example
//!
//! ```
//! use checkers::{AIEngine, Board, Side, EngineConfig};
//!
//! let mut engine = AIEngine::with_config(EngineConfig { depth: 3, ..Default::default() });
//! let board = Board::new();
//!
//! let decision = engine.decide(&board, Side::Black).unwrap();
//! println!("{} {:?} = {}", decision.from, decision.action, decision.value);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Pos, Side};
use crate::error::{CheckersError, Result};
use crate::rules::{legal_action_list, winner, Action};
use crate::search::{Algorithm, SearchLimits, Searcher};

/// Default look-ahead in plies
pub const DEFAULT_DEPTH: u8 = 5;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    /// Plies to look ahead; a capture chain is one ply
    pub depth: u8,
    /// Optional wall-clock cap per decision
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth: DEFAULT_DEPTH,
            time_limit: None,
        }
    }
}

/// Chosen action with search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub from: Pos,
    pub action: Action,
    /// Heuristic value of the action for the deciding side
    pub value: i32,
    pub nodes: u64,
    pub time_ms: u64,
    /// False when the time limit cut the search short
    pub completed: bool,
}

/// Checkers AI engine
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default configuration (alpha-beta, depth 5, no time cap)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// Choose an action for `side` on `board`.
    ///
    /// The board is only read; every hypothetical position is a copy.
    pub fn decide(&mut self, board: &Board, side: Side) -> Result<Decision> {
        self.decide_with_limits(board, side, SearchLimits {
            time_limit: self.config.time_limit,
            stop: None,
        })
    }

    /// Like [`AIEngine::decide`] with caller-supplied limits
    pub fn decide_with_limits(
        &mut self,
        board: &Board,
        side: Side,
        limits: SearchLimits,
    ) -> Result<Decision> {
        if let Some(winner) = winner(board) {
            return Err(CheckersError::GameOver { winner });
        }

        let start = Instant::now();
        let mut searcher = Searcher::with_limits(self.config.algorithm, limits);
        let result = searcher.search(board, side, self.config.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        // A search cut off before its first child still has to answer
        let best = result.best.or_else(|| {
            if result.completed {
                None
            } else {
                legal_action_list(board, side).into_iter().next()
            }
        });
        let Some((from, action)) = best else {
            return Err(CheckersError::NoLegalActions { side });
        };

        debug!(
            %side,
            %from,
            ?action,
            value = result.score,
            nodes = result.nodes,
            time_ms,
            completed = result.completed,
            "decision"
        );

        Ok(Decision {
            from,
            action,
            value: result.score,
            nodes: result.nodes,
            time_ms,
            completed: result.completed,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot decision with alpha-beta at the given depth
pub fn decide(board: &Board, side: Side, depth: u8) -> Result<Decision> {
    AIEngine::with_config(EngineConfig {
        depth,
        ..EngineConfig::default()
    })
    .decide(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Delta};
    use crate::rules::apply;

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.config().depth, DEFAULT_DEPTH);
        assert_eq!(engine.config().algorithm, Algorithm::AlphaBeta);
        assert_eq!(engine.config().time_limit, None);
    }

    #[test]
    fn test_engine_setters() {
        let mut engine = AIEngine::new();
        engine.set_depth(7);
        engine.set_algorithm(Algorithm::Negamax);
        assert_eq!(engine.config().depth, 7);
        assert_eq!(engine.config().algorithm, Algorithm::Negamax);
    }

    #[test]
    fn test_decide_start_depth_one() {
        let board = Board::new();
        let decision = decide(&board, Side::Black, 1).unwrap();

        assert_eq!(decision.value, 0);
        assert!(legal_action_list(&board, Side::Black)
            .contains(&(decision.from, decision.action.clone())));

        let mut live = board.clone();
        let out = apply(&mut live, decision.from, &decision.action);
        assert!(out.applied);
        assert!(!out.promoted);
        assert_eq!(out.location.row, 4);
    }

    #[test]
    fn test_decide_does_not_touch_board() {
        let board = Board::new();
        let before = board.clone();
        let _ = decide(&board, Side::White, 4).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_decide_prefers_double_capture() {
        let mut board = Board::empty();
        board.place(Pos::new(6, 3), Cell::BlackMan);
        board.place(Pos::new(5, 2), Cell::WhiteMan);
        board.place(Pos::new(5, 4), Cell::WhiteMan);
        board.place(Pos::new(3, 6), Cell::WhiteMan);
        board.place(Pos::new(0, 1), Cell::WhiteMan);

        let decision = decide(&board, Side::Black, 1).unwrap();
        assert_eq!(decision.from, Pos::new(6, 3));
        assert_eq!(
            decision.action,
            Action::Chain(vec![Delta::new(-2, 2), Delta::new(-2, 2)])
        );
        // 1 black against 2 white afterwards
        assert_eq!(decision.value, -100);
    }

    #[test]
    fn test_decide_game_over() {
        let mut board = Board::empty();
        board.place(Pos::new(3, 2), Cell::BlackMan);
        assert_eq!(
            decide(&board, Side::Black, 3),
            Err(CheckersError::GameOver { winner: Side::Black })
        );
    }

    #[test]
    fn test_decide_no_legal_actions() {
        let mut board = Board::empty();
        board.place(Pos::new(1, 0), Cell::BlackMan);
        board.place(Pos::new(0, 1), Cell::WhiteMan);
        board.place(Pos::new(7, 0), Cell::WhiteMan);

        assert_eq!(
            decide(&board, Side::Black, 3),
            Err(CheckersError::NoLegalActions { side: Side::Black })
        );
    }

    #[test]
    fn test_zero_time_limit_still_answers() {
        let mut engine = AIEngine::with_config(EngineConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 8,
            time_limit: Some(Duration::ZERO),
        });
        let decision = engine.decide(&Board::new(), Side::Black).unwrap();
        assert!(!decision.completed);
        assert_eq!(decision.from, Pos::new(5, 0));
    }

    #[test]
    fn test_engines_agree() {
        let board = Board::new();
        let mut plain = AIEngine::with_config(EngineConfig {
            algorithm: Algorithm::Negamax,
            depth: 4,
            time_limit: None,
        });
        let mut pruned = AIEngine::with_config(EngineConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
            time_limit: None,
        });

        let a = plain.decide(&board, Side::Black).unwrap();
        let b = pruned.decide(&board, Side::Black).unwrap();
        assert_eq!((a.from, a.action, a.value), (b.from, b.action, b.value));
        assert!(b.nodes <= a.nodes);
    }
}
