//! Position evaluation for checkers
//!
//! Material only: piece and king differences from the mover's point of view.

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, terminal_score};
pub use weights::MaterialScore;
