//! Game state management shared by the window and the terminal front end

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::{GameConfig, GameMode};
use crate::engine::{Decision, EngineConfig};
use crate::error::{CheckersError, Result};
use crate::rules::{
    apply_for, apply_jump, apply_move, jumps_from, legal_actions, moves_from, must_capture,
    winner, Action,
};
use crate::worker::AiWorker;
use crate::{Board, Delta, Pos, Side};

/// Depth used for PvP hints
const HINT_DEPTH: u8 = 4;

/// What the worker is computing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    /// A move the engine plays on the board
    Move,
    /// A suggestion for the human to move, never played
    Hint,
}

/// AI computation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Thinking {
        request_id: u64,
        task: AiTask,
        start_time: Instant,
    },
}

/// What a single human step did to the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The capturing piece at `at` must jump again
    Continue { at: Pos },
    /// The turn passed to the other side
    TurnEnded,
}

/// Capture chain a human is part-way through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChain {
    pub origin: Pos,
    pub at: Pos,
    pub steps: Vec<Delta>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Side,
    /// Winner once a side has no pieces left
    pub game_over: Option<Side>,
    /// Side to move that has pieces but nothing legal to do
    pub stalled: Option<Side>,
    pub selected: Option<Pos>,
    pub pending_chain: Option<PendingChain>,
    pub last_action: Option<(Pos, Action)>,
    pub last_decision: Option<Decision>,
    pub hint: Option<(Pos, Action)>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub turn_count: u32,
    pub message: Option<String>,

    engine_config: EngineConfig,
    worker: Option<AiWorker>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            mode: config.mode,
            current_turn: Side::Black,
            game_over: None,
            stalled: None,
            selected: None,
            pending_chain: None,
            last_action: None,
            last_decision: None,
            hint: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            turn_count: 0,
            message: None,
            engine_config: config.engine,
            worker: None,
        }
    }

    /// Start over in the same mode; the worker thread is kept
    pub fn reset(&mut self) {
        let worker = self.worker.take();
        let config = GameConfig {
            mode: self.mode,
            engine: self.engine_config.clone(),
        };
        *self = Self::new(config);
        self.worker = worker;
    }

    /// Start over in a new mode
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine_config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.engine_config.depth = depth;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.game_over.is_some() || self.stalled.is_some()
    }

    /// Single steps the piece at `from` may take right now
    pub fn legal_steps(&self, from: Pos) -> Vec<Delta> {
        if !self.board.is_side(from, self.current_turn) {
            return Vec::new();
        }
        match &self.pending_chain {
            Some(chain) if chain.at == from => jumps_from(&self.board, from),
            Some(_) => Vec::new(),
            None if must_capture(&self.board, self.current_turn) => jumps_from(&self.board, from),
            None => moves_from(&self.board, from),
        }
    }

    /// Landing squares for the piece at `from`
    pub fn destinations(&self, from: Pos) -> Vec<Pos> {
        self.legal_steps(from)
            .into_iter()
            .filter_map(|delta| from.offset(delta))
            .collect()
    }

    /// Pieces of the side to move that have a legal step
    pub fn movable_pieces(&self) -> Vec<Pos> {
        if let Some(chain) = &self.pending_chain {
            return vec![chain.at];
        }
        legal_actions(&self.board, self.current_turn)
            .into_iter()
            .map(|(pos, _)| pos)
            .collect()
    }

    fn check_input(&self) -> Result<()> {
        if let Some(winner) = self.game_over {
            return Err(CheckersError::GameOver { winner });
        }
        if let Some(side) = self.stalled {
            return Err(CheckersError::NoLegalActions { side });
        }
        if self.is_ai_thinking() {
            return Err(CheckersError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(CheckersError::NotYourTurn);
        }
        Ok(())
    }

    /// Handle a click on a square: select a piece or move the selected one
    pub fn click(&mut self, pos: Pos) -> Result<Option<StepOutcome>> {
        self.check_input()?;

        if let Some(chain) = &self.pending_chain {
            let at = chain.at;
            if pos == at {
                return Ok(None);
            }
            return self.step(at, Delta::between(at, pos)).map(Some);
        }

        if self.board.is_side(pos, self.current_turn) {
            if self.legal_steps(pos).is_empty() {
                self.selected = None;
                return Err(CheckersError::IllegalAction { from: pos });
            }
            self.selected = Some(pos);
            return Ok(None);
        }

        match self.selected {
            Some(from) => self.step(from, Delta::between(from, pos)).map(Some),
            None => Ok(None),
        }
    }

    /// Take one human step; a capture that can continue keeps the turn
    pub fn step(&mut self, from: Pos, delta: Delta) -> Result<StepOutcome> {
        self.check_input()?;

        if !self.legal_steps(from).contains(&delta) {
            warn!(%from, ?delta, "rejected human step");
            return Err(CheckersError::IllegalAction { from });
        }

        let side = self.current_turn;
        let outcome = if delta.is_jump() {
            apply_jump(&mut self.board, from, delta)
        } else {
            apply_move(&mut self.board, from, delta)
        };
        if !outcome.applied {
            return Err(CheckersError::IllegalAction { from });
        }

        if !delta.is_jump() {
            self.finish_turn(side, from, Action::Move(delta));
            return Ok(StepOutcome::TurnEnded);
        }

        let mut chain = self.pending_chain.take().unwrap_or(PendingChain {
            origin: from,
            at: from,
            steps: Vec::new(),
        });
        chain.steps.push(delta);
        chain.at = outcome.location;

        let can_continue = !outcome.promoted
            && winner(&self.board).is_none()
            && !jumps_from(&self.board, outcome.location).is_empty();
        if can_continue {
            let at = chain.at;
            self.pending_chain = Some(chain);
            self.selected = Some(at);
            self.hint = None;
            self.message = Some(format!("Keep capturing with the piece on {at}"));
            return Ok(StepOutcome::Continue { at });
        }

        self.finish_turn(side, chain.origin, Action::from_chain(chain.steps));
        Ok(StepOutcome::TurnEnded)
    }

    /// Hand the turn over and settle the game status
    fn finish_turn(&mut self, side: Side, from: Pos, action: Action) {
        self.last_action = Some((from, action));
        self.pending_chain = None;
        self.selected = None;
        self.hint = None;
        self.message = None;
        self.turn_count += 1;
        self.move_timer.stop();

        if let Some(winner) = winner(&self.board) {
            info!(%winner, turns = self.turn_count, "game over");
            self.game_over = Some(winner);
            return;
        }

        self.current_turn = side.opponent();
        if legal_actions(&self.board, self.current_turn).is_empty() {
            info!(side = %self.current_turn, "side to move is blocked");
            self.stalled = Some(self.current_turn);
            return;
        }
        self.move_timer.start();
    }

    fn worker(&mut self) -> Result<&mut AiWorker> {
        if self.worker.is_none() {
            self.worker = Some(AiWorker::spawn()?);
        }
        self.worker.as_mut().ok_or(CheckersError::WorkerDisconnected)
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_finished() {
            return;
        }
        let config = self.engine_config.clone();
        self.send_request(AiTask::Move, config);
    }

    /// Hand the current position to the worker
    fn send_request(&mut self, task: AiTask, config: EngineConfig) {
        let board = self.board.clone();
        let side = self.current_turn;

        let request = self
            .worker()
            .and_then(|worker| worker.request(&board, side, config));
        match request {
            Ok(request_id) => {
                self.ai_state = AiState::Thinking {
                    request_id,
                    task,
                    start_time: Instant::now(),
                };
            }
            Err(err) => {
                self.worker = None;
                self.message = Some(err.to_string());
            }
        }
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking {
            request_id, task, ..
        } = self.ai_state
        else {
            return;
        };
        let Some(worker) = self.worker.as_ref() else {
            self.ai_state = AiState::Idle;
            return;
        };

        let response = loop {
            match worker.try_recv() {
                Ok(Some(response)) if response.id == request_id => break response,
                Ok(Some(stale)) => {
                    warn!(id = stale.id, expected = request_id, "dropping stale AI response");
                }
                Ok(None) => return,
                Err(err) => {
                    self.ai_state = AiState::Idle;
                    self.worker = None;
                    self.message = Some(err.to_string());
                    return;
                }
            }
        };

        self.ai_state = AiState::Idle;

        match (task, response.result) {
            (AiTask::Move, Ok(decision)) => {
                self.move_timer.set_ai_time(response.elapsed);
                self.apply_decision(decision);
            }
            (AiTask::Hint, Ok(decision)) => {
                self.hint = Some((decision.from, decision.action.clone()));
                self.last_decision = Some(decision);
            }
            (_, Err(err)) => self.message = Some(err.to_string()),
        }
    }

    /// Play an AI decision on the live board
    pub fn apply_decision(&mut self, decision: Decision) {
        let side = self.current_turn;
        let outcome = apply_for(&mut self.board, side, decision.from, &decision.action);
        if !outcome.applied {
            warn!(from = %decision.from, action = ?decision.action, "AI decision did not apply");
            self.message = Some(CheckersError::IllegalAction { from: decision.from }.to_string());
            return;
        }

        let from = decision.from;
        let action = decision.action.clone();
        self.last_decision = Some(decision);
        self.finish_turn(side, from, action);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Quick suggestion for the side to move, computed on the worker.
    ///
    /// Input stays blocked until the answer arrives.
    pub fn request_hint(&mut self) {
        if self.is_finished()
            || self.is_ai_thinking()
            || !self.is_human_turn()
            || self.pending_chain.is_some()
        {
            return;
        }

        let config = EngineConfig {
            depth: HINT_DEPTH.min(self.engine_config.depth),
            ..self.engine_config.clone()
        };
        self.hint = None;
        self.send_request(AiTask::Hint, config);
    }

    /// True while the worker is computing a hint
    pub fn is_hint_pending(&self) -> bool {
        matches!(
            self.ai_state,
            AiState::Thinking {
                task: AiTask::Hint,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn pvp() -> GameState {
        GameState::new(GameConfig {
            mode: GameMode::PvP { show_hints: true },
            engine: EngineConfig {
                depth: 2,
                ..EngineConfig::default()
            },
        })
    }

    fn pve(human: Side) -> GameState {
        GameState::new(GameConfig {
            mode: GameMode::PvE { human },
            engine: EngineConfig {
                depth: 2,
                ..EngineConfig::default()
            },
        })
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!state.is_ai_thinking(), "AI did not answer in time");
    }

    #[test]
    fn test_turns() {
        let state = pve(Side::White);
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());

        let state = pvp();
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_click_select_then_move() {
        let mut state = pvp();
        assert_eq!(state.click(Pos::new(5, 2)), Ok(None));
        assert_eq!(state.selected, Some(Pos::new(5, 2)));

        assert_eq!(state.click(Pos::new(4, 3)), Ok(Some(StepOutcome::TurnEnded)));
        assert_eq!(state.board.get(Pos::new(4, 3)), Cell::BlackMan);
        assert_eq!(state.current_turn, Side::White);
        assert_eq!(
            state.last_action,
            Some((Pos::new(5, 2), Action::Move(Delta::new(-1, 1))))
        );
    }

    #[test]
    fn test_click_blocked_piece() {
        let mut state = pvp();
        // Back-row man has no step at the start
        assert_eq!(
            state.click(Pos::new(7, 0)),
            Err(CheckersError::IllegalAction { from: Pos::new(7, 0) })
        );
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_illegal_step_leaves_board() {
        let mut state = pvp();
        let before = state.board.clone();
        assert!(state.step(Pos::new(5, 2), Delta::new(-2, 2)).is_err());
        assert!(state.step(Pos::new(2, 1), Delta::new(1, 1)).is_err());
        assert_eq!(state.board, before);
        assert_eq!(state.current_turn, Side::Black);
    }

    #[test]
    fn test_forced_capture_for_human() {
        let mut state = pvp();
        state.board = Board::empty();
        state.board.place(Pos::new(5, 2), Cell::BlackMan);
        state.board.place(Pos::new(4, 3), Cell::WhiteMan);
        state.board.place(Pos::new(6, 7), Cell::BlackMan);
        state.board.place(Pos::new(0, 1), Cell::WhiteMan);

        assert!(state.legal_steps(Pos::new(6, 7)).is_empty());
        assert_eq!(state.movable_pieces(), vec![Pos::new(5, 2)]);
        assert_eq!(state.destinations(Pos::new(5, 2)), vec![Pos::new(3, 4)]);
        assert!(state.step(Pos::new(6, 7), Delta::new(-1, -1)).is_err());
    }

    #[test]
    fn test_human_chain_continuation() {
        let mut state = pvp();
        state.board = Board::empty();
        state.board.place(Pos::new(5, 0), Cell::BlackMan);
        state.board.place(Pos::new(4, 1), Cell::WhiteMan);
        state.board.place(Pos::new(2, 3), Cell::WhiteMan);
        state.board.place(Pos::new(0, 7), Cell::WhiteMan);

        let first = state.step(Pos::new(5, 0), Delta::new(-2, 2)).unwrap();
        assert_eq!(first, StepOutcome::Continue { at: Pos::new(3, 2) });
        assert_eq!(state.current_turn, Side::Black);
        assert_eq!(state.movable_pieces(), vec![Pos::new(3, 2)]);

        // Clicking elsewhere cannot abandon the chain
        assert!(state.click(Pos::new(2, 1)).is_err());

        let second = state.click(Pos::new(1, 4)).unwrap();
        assert_eq!(second, Some(StepOutcome::TurnEnded));
        assert_eq!(state.current_turn, Side::White);
        assert_eq!(
            state.last_action,
            Some((
                Pos::new(5, 0),
                Action::Chain(vec![Delta::new(-2, 2), Delta::new(-2, 2)])
            ))
        );
        assert_eq!(state.board.piece_count(Side::White), 1);
    }

    #[test]
    fn test_capture_wins_game() {
        let mut state = pvp();
        state.board = Board::empty();
        state.board.place(Pos::new(5, 2), Cell::BlackMan);
        state.board.place(Pos::new(4, 3), Cell::WhiteMan);

        state.step(Pos::new(5, 2), Delta::new(-2, 2)).unwrap();
        assert_eq!(state.game_over, Some(Side::Black));
        assert_eq!(
            state.click(Pos::new(3, 4)),
            Err(CheckersError::GameOver { winner: Side::Black })
        );
    }

    #[test]
    fn test_blocked_side_stalls() {
        let mut state = pvp();
        state.board = Board::empty();
        state.board.place(Pos::new(5, 2), Cell::BlackMan);
        // A white man on Black's back row can never move
        state.board.place(Pos::new(7, 0), Cell::WhiteMan);

        state.step(Pos::new(5, 2), Delta::new(-1, 1)).unwrap();
        assert_eq!(state.game_over, None);
        assert_eq!(state.stalled, Some(Side::White));
        assert_eq!(
            state.click(Pos::new(7, 0)),
            Err(CheckersError::NoLegalActions { side: Side::White })
        );
    }

    #[test]
    fn test_not_your_turn() {
        let mut state = pve(Side::White);
        assert_eq!(state.click(Pos::new(5, 2)), Err(CheckersError::NotYourTurn));
    }

    #[test]
    fn test_ai_plays_and_input_is_blocked() {
        let mut state = pve(Side::White);
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.click(Pos::new(2, 1)), Err(CheckersError::AiThinking));

        wait_for_ai(&mut state);
        assert_eq!(state.current_turn, Side::White);
        assert_eq!(state.turn_count, 1);
        assert!(state.last_decision.is_some());
        assert_eq!(state.board.piece_count(Side::Black), 12);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut state = pve(Side::White);
        state.start_ai_thinking();
        let AiState::Thinking { request_id, .. } = state.ai_state else {
            panic!("AI should be thinking");
        };

        // A newer request supersedes the first one
        let board = state.board.clone();
        let config = state.engine_config().clone();
        let newer = state
            .worker()
            .unwrap()
            .request(&board, Side::Black, config)
            .unwrap();
        state.ai_state = AiState::Thinking {
            request_id: newer,
            task: AiTask::Move,
            start_time: Instant::now(),
        };
        assert!(newer > request_id);

        wait_for_ai(&mut state);
        assert_eq!(state.turn_count, 1);
        assert_eq!(state.current_turn, Side::White);
    }

    #[test]
    fn test_hint() {
        let mut state = pvp();
        state.request_hint();
        assert!(state.is_hint_pending());
        assert_eq!(state.hint, None);

        wait_for_ai(&mut state);
        let (from, action) = state.hint.clone().unwrap();
        assert_eq!(from.row, 5);
        assert!(!action.is_capture());
    }

    #[test]
    fn test_hint_is_not_played() {
        let mut state = pvp();
        let before = state.board.clone();
        state.request_hint();
        assert_eq!(
            state.step(Pos::new(5, 2), Delta::new(-1, 1)),
            Err(CheckersError::AiThinking)
        );

        wait_for_ai(&mut state);
        assert!(state.hint.is_some());
        assert_eq!(state.board, before);
        assert_eq!(state.current_turn, Side::Black);
        assert_eq!(state.turn_count, 0);
        assert_eq!(state.last_action, None);
        assert_eq!(state.move_timer.ai_thinking_time, None);

        // The human can still play once the hint is in
        assert_eq!(
            state.step(Pos::new(5, 2), Delta::new(-1, 1)),
            Ok(StepOutcome::TurnEnded)
        );
    }

    #[test]
    fn test_hint_follows_forced_capture() {
        let mut state = pvp();
        state.board = Board::empty();
        state.board.place(Pos::new(5, 2), Cell::BlackMan);
        state.board.place(Pos::new(4, 3), Cell::WhiteMan);
        state.board.place(Pos::new(6, 7), Cell::BlackMan);
        state.board.place(Pos::new(0, 1), Cell::WhiteMan);

        state.request_hint();
        wait_for_ai(&mut state);
        assert_eq!(
            state.hint,
            Some((Pos::new(5, 2), Action::Jump(Delta::new(-2, 2))))
        );
    }

    #[test]
    fn test_no_hint_on_ai_turn() {
        let mut state = pve(Side::White);
        state.request_hint();
        assert!(!state.is_hint_pending());
        assert_eq!(state.hint, None);
    }

    #[test]
    fn test_reset() {
        let mut state = pvp();
        state.step(Pos::new(5, 2), Delta::new(-1, 1)).unwrap();
        state.reset();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn, Side::Black);
        assert_eq!(state.turn_count, 0);
    }
}
