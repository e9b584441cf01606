//! Search module for the checkers AI
//!
//! Contains:
//! - Root driver with optional time and stop limits
//! - Plain negamax
//! - Negamax with alpha-beta pruning

pub mod alphabeta;
pub mod negamax;
pub mod searcher;

pub use searcher::{Algorithm, SearchLimits, SearchResult, Searcher};
