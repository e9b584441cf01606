//! Game rules for English draughts
//!
//! This module implements the rule set:
//! - Single moves and captures, with mandatory capture
//! - Multi-capture chains, ended early by promotion
//! - Promotion on the far row
//! - Win by removing every enemy piece

pub mod action;
pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use action::{apply, apply_chain, apply_for, apply_jump, apply_move, Action, Outcome};
pub use capture::{capture_chains_for, capture_chains_from, capture_tree, CaptureTree};
pub use movegen::{
    jump_deltas, jumps_for, jumps_from, move_deltas, moves_for, moves_from, must_capture,
    valid_jump, valid_move,
};
pub use win::{has_lost, legal_action_list, legal_actions, winner};
