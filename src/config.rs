//! Command-line configuration

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::board::Side;
use crate::engine::{EngineConfig, DEFAULT_DEPTH};
use crate::search::Algorithm;

/// Who plays which side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Side },
    /// Player vs Player (hotseat)
    PvP { show_hints: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Black }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Negamax,
    AlphaBeta,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Negamax => Algorithm::Negamax,
            AlgorithmArg::AlphaBeta => Algorithm::AlphaBeta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Black,
    White,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Black => Side::Black,
            SideArg::White => Side::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Human against the AI
    Pve,
    /// Two humans on one board
    Pvp,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "checkers")]
#[command(about = "English draughts against a negamax / alpha-beta AI", long_about = None)]
pub struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub depth: u8,

    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::AlphaBeta)]
    pub algorithm: AlgorithmArg,

    /// Side played by the human in PvE
    #[arg(long, value_enum, default_value_t = SideArg::Black)]
    pub human: SideArg,

    /// Game mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Pve)]
    pub mode: ModeArg,

    /// Wall-clock cap per AI decision, in milliseconds
    #[arg(short, long)]
    pub time_limit_ms: Option<u64>,

    /// Play in the terminal instead of the window
    #[arg(long)]
    pub cli: bool,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            algorithm: self.algorithm.into(),
            depth: self.depth,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        let mode = match self.mode {
            ModeArg::Pve => GameMode::PvE {
                human: self.human.into(),
            },
            ModeArg::Pvp => GameMode::PvP { show_hints: false },
        };
        GameConfig {
            mode,
            engine: self.engine_config(),
        }
    }
}
