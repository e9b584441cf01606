//! Checkers (English draughts) rules engine and game-tree AI
//!
//! An 8x8 draughts engine with the classic rule set:
//! - Men move one square diagonally forward, kings in all four directions
//! - Capturing is mandatory, and a piece keeps jumping while it can
//! - A man reaching the far row is promoted and its turn ends
//! - A side loses when its last piece is captured
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, pieces and coordinates
//! - [`rules`]: Move generation, capture chains, action application, win check
//! - [`eval`]: Material heuristic
//! - [`search`]: Negamax and alpha-beta search
//! - [`engine`]: Main AI engine integrating all components
//! - [`worker`]: Background search thread
//! - [`ui`], [`cli`]: Window and terminal front ends
//!
//! # Quick Start
//!
//! ```
//! use checkers::{apply, decide, Board, Side};
//!
//! let mut board = Board::new();
//!
//! // AI plays Black, looking three plies ahead
//! let decision = decide(&board, Side::Black, 3).unwrap();
//! let outcome = apply(&mut board, decision.from, &decision.action);
//! assert!(outcome.applied);
//! println!("AI moved {} to {}", decision.from, outcome.location);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod notation;
pub mod rules;
pub mod search;
pub mod ui;
pub mod worker;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Delta, Pos, Side, BOARD_SIZE};
pub use engine::{decide, AIEngine, Decision, EngineConfig};
pub use error::{CheckersError, Result};
pub use rules::{apply, legal_actions, Action, Outcome};
