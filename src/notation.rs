//! Text notation for squares and steps
//!
//! A square is its row digit followed by its column letter (`5a`). A step
//! is an origin and a landing square separated by whitespace (`5a 4b`).

use crate::board::{Delta, Pos};
use crate::error::{CheckersError, Result};
use crate::rules::Action;

/// Parse a single square such as `5a`
pub fn parse_pos(text: &str) -> Result<Pos> {
    let invalid = || CheckersError::InvalidNotation(text.to_string());

    let mut chars = text.trim().chars();
    let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let row = row.to_digit(10).ok_or_else(invalid)? as i32;
    let col = col.to_ascii_lowercase();
    if !col.is_ascii_lowercase() {
        return Err(invalid());
    }
    let col = (col as u8 - b'a') as i32;

    Pos::try_new(row, col)
}

/// Parse `"<from> <to>"` into an origin and a displacement.
///
/// The displacement is not checked against the rules.
pub fn parse_step(text: &str) -> Result<(Pos, Delta)> {
    let mut parts = text.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CheckersError::InvalidNotation(text.to_string()));
    };

    let from = parse_pos(from)?;
    let to = parse_pos(to)?;
    Ok((from, Delta::between(from, to)))
}

#[inline]
pub fn format_pos(pos: Pos) -> String {
    pos.to_string()
}

/// Every square the piece visits, space separated (`6d 4f 2h`)
pub fn format_action(from: Pos, action: &Action) -> String {
    action
        .path(from)
        .into_iter()
        .map(format_pos)
        .collect::<Vec<_>>()
        .join(" ")
}
