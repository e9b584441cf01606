//! Fixed-depth game-tree search driver
//!
//! The root loop lives here; node recursion is in [`super::negamax`] and
//! [`super::alphabeta`]. Every node works on its own board copy, so the
//! caller's board is never touched.
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Side};
//! use checkers::search::{Algorithm, Searcher};
//!
//! let mut searcher = Searcher::new(Algorithm::AlphaBeta);
//! let result = searcher.search(&Board::new(), Side::Black, 3);
//! assert!(result.best.is_some());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::board::{Board, Pos, Side};
use crate::eval::{terminal_score, MaterialScore};
use crate::rules::{apply, legal_action_list, Action};

/// Which tree walk to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Plain negamax, every node expanded
    Negamax,
    /// Negamax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

/// Optional bounds on a search.
///
/// Both default to off, in which case a search always runs to full depth.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Wall-clock budget measured from the start of [`Searcher::search`]
    pub time_limit: Option<Duration>,
    /// External stop request, polled at every node
    pub stop: Option<Arc<AtomicBool>>,
}

/// Result of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen origin and action, `None` when the side cannot act
    pub best: Option<(Pos, Action)>,
    /// Value of the chosen action from the mover's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Nodes visited, root included
    pub nodes: u64,
    /// False when a limit cut the search short
    pub completed: bool,
}

/// Game-tree searcher.
///
/// Ties between equally valued actions go to the first one found, in
/// row-major board order and then table order within a square.
pub struct Searcher {
    algorithm: Algorithm,
    nodes: u64,
    limits: SearchLimits,
    deadline: Option<Instant>,
    aborted: bool,
}

impl Searcher {
    /// Create a searcher with no limits
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_limits(algorithm, SearchLimits::default())
    }

    #[must_use]
    pub fn with_limits(algorithm: Algorithm, limits: SearchLimits) -> Self {
        Self {
            algorithm,
            nodes: 0,
            limits,
            deadline: None,
            aborted: false,
        }
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best action for `side`, looking `depth` plies ahead.
    ///
    /// A whole capture chain counts as one ply. Depth 0 is treated as 1.
    #[must_use]
    pub fn search(&mut self, board: &Board, side: Side, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.begin();
        self.nodes += 1;

        if let Some(score) = terminal_score(board, side) {
            return self.finish(None, score, depth);
        }

        let mut best: Option<(Pos, Action)> = None;
        let mut best_score = -MaterialScore::INF;
        let mut alpha = -MaterialScore::INF;
        let beta = MaterialScore::INF;

        for (from, action) in legal_action_list(board, side) {
            let mut child = board.clone();
            let outcome = apply(&mut child, from, &action);
            debug_assert!(outcome.applied, "enumerated action must apply");

            let score = -self.child_value(&child, side.opponent(), depth - 1, -beta, -alpha);
            if self.aborted {
                break;
            }
            trace!(%from, ?action, score, "root action");

            if score > best_score {
                best_score = score;
                best = Some((from, action));
            }
            alpha = alpha.max(best_score);
        }

        if best.is_none() && !self.aborted {
            // Nothing to play: the side loses
            best_score = -MaterialScore::WIN;
        }
        self.finish(best, best_score, depth)
    }

    /// Value of `board` for `side` at the given remaining depth
    #[must_use]
    pub fn value(&mut self, board: &Board, side: Side, depth: u8) -> i32 {
        self.begin();
        self.child_value(board, side, depth, -MaterialScore::INF, MaterialScore::INF)
    }

    fn child_value(&mut self, board: &Board, side: Side, depth: u8, alpha: i32, beta: i32) -> i32 {
        match self.algorithm {
            Algorithm::Negamax => self.negamax(board, side, depth),
            Algorithm::AlphaBeta => self.alpha_beta(board, side, depth, alpha, beta),
        }
    }

    fn begin(&mut self) {
        self.nodes = 0;
        self.aborted = false;
        self.deadline = self.limits.time_limit.map(|limit| Instant::now() + limit);
    }

    fn finish(&self, best: Option<(Pos, Action)>, score: i32, depth: u8) -> SearchResult {
        SearchResult {
            best,
            score,
            depth,
            nodes: self.nodes,
            completed: !self.aborted,
        }
    }

    /// Count a node and report whether the search must unwind
    #[inline]
    pub(super) fn enter_node(&mut self) -> bool {
        self.nodes += 1;
        if self.aborted {
            return true;
        }
        let stop_requested = self
            .limits
            .stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        let out_of_time = self.deadline.is_some_and(|d| Instant::now() >= d);
        if stop_requested || out_of_time {
            self.aborted = true;
        }
        self.aborted
    }
}
