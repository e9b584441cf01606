//! Background AI worker
//!
//! One long-lived thread runs searches so the input path never blocks.
//! Requests carry their own board snapshot and an id; the caller matches
//! responses by id and drops any it no longer waits for.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{Board, Side};
use crate::engine::{AIEngine, Decision, EngineConfig};
use crate::error::{CheckersError, Result};

/// Search job sent to the worker thread
#[derive(Debug, Clone)]
pub struct AiRequest {
    pub id: u64,
    pub board: Board,
    pub side: Side,
    pub config: EngineConfig,
}

/// Finished search, tagged with the id of its request
#[derive(Debug, Clone)]
pub struct AiResponse {
    pub id: u64,
    pub result: Result<Decision>,
    /// Wall-clock time spent on the worker
    pub elapsed: Duration,
}

/// Handle to the search thread
pub struct AiWorker {
    requests: Option<Sender<AiRequest>>,
    responses: Receiver<AiResponse>,
    handle: Option<JoinHandle<()>>,
    next_id: u64,
}

impl AiWorker {
    /// Start the worker thread
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = channel::<AiRequest>();
        let (response_tx, response_rx) = channel::<AiResponse>();

        let handle = thread::Builder::new()
            .name("checkers-ai".into())
            .spawn(move || run(request_rx, response_tx))
            .map_err(|_| CheckersError::WorkerDisconnected)?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
            next_id: 1,
        })
    }

    /// Queue a search on a copy of `board`; returns the request id
    pub fn request(&mut self, board: &Board, side: Side, config: EngineConfig) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;

        let sender = self.requests.as_ref().ok_or(CheckersError::WorkerDisconnected)?;
        sender
            .send(AiRequest {
                id,
                board: board.clone(),
                side,
                config,
            })
            .map_err(|_| CheckersError::WorkerDisconnected)?;

        info!(id, %side, "AI request queued");
        Ok(id)
    }

    /// Poll for a finished search without blocking
    pub fn try_recv(&self) -> Result<Option<AiResponse>> {
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(CheckersError::WorkerDisconnected),
        }
    }

    /// Block until the next search finishes
    pub fn recv(&self) -> Result<AiResponse> {
        self.responses
            .recv()
            .map_err(|_| CheckersError::WorkerDisconnected)
    }
}

impl Drop for AiWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("AI worker panicked");
            }
        }
    }
}

fn run(requests: Receiver<AiRequest>, responses: Sender<AiResponse>) {
    for request in requests {
        let start = Instant::now();
        let mut engine = AIEngine::with_config(request.config);
        let result = engine.decide(&request.board, request.side);
        let elapsed = start.elapsed();

        match &result {
            Ok(decision) => info!(
                id = request.id,
                from = %decision.from,
                value = decision.value,
                nodes = decision.nodes,
                elapsed_ms = elapsed.as_millis() as u64,
                "AI search complete"
            ),
            Err(err) => warn!(id = request.id, %err, "AI search failed"),
        }

        let response = AiResponse {
            id: request.id,
            result,
            elapsed,
        };
        if responses.send(response).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    fn shallow() -> EngineConfig {
        EngineConfig {
            depth: 2,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_request_and_receive() {
        let mut worker = AiWorker::spawn().unwrap();
        let board = Board::new();

        let id = worker.request(&board, Side::Black, shallow()).unwrap();
        let response = worker.recv().unwrap();

        assert_eq!(response.id, id);
        let decision = response.result.unwrap();
        assert_eq!(decision.from.row, 5);
    }

    #[test]
    fn test_ids_increase_and_answers_keep_order() {
        let mut worker = AiWorker::spawn().unwrap();
        let board = Board::new();

        let first = worker.request(&board, Side::Black, shallow()).unwrap();
        let second = worker.request(&board, Side::White, shallow()).unwrap();
        assert!(second > first);

        assert_eq!(worker.recv().unwrap().id, first);
        assert_eq!(worker.recv().unwrap().id, second);
    }

    #[test]
    fn test_errors_come_back_as_responses() {
        let mut worker = AiWorker::spawn().unwrap();
        let mut board = Board::empty();
        board.place(Pos::new(3, 2), Cell::BlackMan);

        worker.request(&board, Side::White, shallow()).unwrap();
        let response = worker.recv().unwrap();
        assert_eq!(
            response.result,
            Err(CheckersError::GameOver { winner: Side::Black })
        );
    }

    #[test]
    fn test_try_recv_empty_when_idle() {
        let worker = AiWorker::spawn().unwrap();
        assert!(worker.try_recv().unwrap().is_none());
    }

    #[test]
    fn test_request_does_not_borrow_board() {
        let mut worker = AiWorker::spawn().unwrap();
        let mut board = Board::new();
        worker.request(&board, Side::Black, shallow()).unwrap();

        // Mutating the live board afterwards cannot affect the queued search
        board.remove(Pos::new(5, 0));
        let decision = worker.recv().unwrap().result.unwrap();
        assert_eq!(decision.from, Pos::new(5, 0));
    }
}
