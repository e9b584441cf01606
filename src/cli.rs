//! Terminal front end
//!
//! Reads one step per line in `5a 4b` notation. A capture that can continue
//! keeps the turn until the chain is finished.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::notation::{format_action, parse_step};
use crate::rules::legal_action_list;
use crate::ui::{GameState, StepOutcome};

/// Play a game on the given streams until it ends, input runs out, or the
/// player quits
pub fn run<R: BufRead, W: Write>(config: GameConfig, mut input: R, mut out: W) -> io::Result<()> {
    let mut state = GameState::new(config);
    let mut engine = AIEngine::with_config(state.engine_config().clone());
    let mut line = String::new();

    loop {
        writeln!(out, "\n{}", state.board)?;

        if let Some(winner) = state.game_over {
            writeln!(out, "{winner} wins")?;
            return Ok(());
        }
        if let Some(side) = state.stalled {
            writeln!(out, "{side} has no legal action, game stops")?;
            return Ok(());
        }

        let side = state.current_turn;
        if state.is_ai_turn() {
            writeln!(out, "AI ({side}) thinking...")?;
            match engine.decide(&state.board, side) {
                Ok(decision) => {
                    writeln!(
                        out,
                        "AI plays {} (value {}, {} nodes, {}ms)",
                        format_action(decision.from, &decision.action),
                        decision.value,
                        decision.nodes,
                        decision.time_ms
                    )?;
                    state.apply_decision(decision);
                }
                Err(err) => {
                    writeln!(out, "{err}")?;
                    return Ok(());
                }
            }
            continue;
        }

        match &state.pending_chain {
            Some(chain) => write!(out, "{side}, keep capturing from {}: ", chain.at)?,
            None => write!(out, "{side} to move: ")?,
        }
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let text = line.trim();
        debug!(text, "cli input");

        match text {
            "" => continue,
            "q" | "quit" => return Ok(()),
            "?" | "help" => {
                writeln!(out, "Enter origin and landing, e.g. 5a 4b. Legal actions:")?;
                for (from, action) in legal_action_list(&state.board, side) {
                    writeln!(out, "  {}", format_action(from, &action))?;
                }
                continue;
            }
            _ => {}
        }

        let result = parse_step(text).and_then(|(from, delta)| state.step(from, delta));
        match result {
            Ok(StepOutcome::Continue { at }) => writeln!(out, "Capture continues from {at}")?,
            Ok(StepOutcome::TurnEnded) => {}
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}
