//! Turn scheduler: alternates two players over one board.
//!
//! Each turn asks the side to move for a move under that player's own time
//! budget, validates it with the configured `LegalityCheck`, applies it and
//! hands the turn over. A failed turn (timeout, player error, rejected or
//! unappliable move) leaves the board and the side to move untouched, so the
//! same color can simply be asked again.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use crate::errors::{GameError, GameResult, PlayerError};
use crate::game::config::GameConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, PieceKind};
use crate::players::player_trait::Player;
use crate::rules::game_status::{GameStatus, PlyLimit, StatusEvaluator, Unbounded};
use crate::rules::legality::{LegalityCheck, PermissiveLegality};

/// Stand-in deadline for budgets too large to add to the current instant.
const UNBOUNDED_TURN: Duration = Duration::from_secs(86_400 * 365 * 30);

/// One applied move.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub ply: u32,
    pub color: Color,
    pub mv: Move,
    pub piece: PieceKind,
    pub captured: Option<(Color, PieceKind)>,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum TurnOutcome {
    Moved(TurnRecord),
    Resigned { color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub plies: usize,
    pub failed_attempts: u32,
    /// The shutdown signal fired before the game reached a result.
    pub interrupted: bool,
}

pub struct ChessGame {
    board: Board,
    // [color]
    players: [Box<dyn Player>; 2],
    side_to_move: Color,
    legality: Box<dyn LegalityCheck>,
    status_evaluator: Box<dyn StatusEvaluator>,
    status: GameStatus,
    history: Vec<TurnRecord>,
    config: GameConfig,
    board_output: Box<dyn Write + Send>,
}

impl ChessGame {
    /// Standard starting board, White to move.
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>, config: GameConfig) -> Self {
        let status_evaluator: Box<dyn StatusEvaluator> = match config.max_plies {
            Some(max_plies) => Box::new(PlyLimit { max_plies }),
            None => Box::new(Unbounded),
        };

        Self {
            board: Board::standard(),
            players: [white, black],
            side_to_move: Color::White,
            legality: Box::new(PermissiveLegality),
            status_evaluator,
            status: GameStatus::InProgress,
            history: Vec::new(),
            config,
            board_output: Box::new(std::io::stdout()),
        }
    }

    pub fn standard(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::new(white, black, GameConfig::default())
    }

    pub fn with_legality(mut self, legality: Box<dyn LegalityCheck>) -> Self {
        self.legality = legality;
        self
    }

    pub fn with_status_evaluator(mut self, evaluator: Box<dyn StatusEvaluator>) -> Self {
        self.status_evaluator = evaluator;
        self
    }

    /// Start from `board` instead of the standard setup.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Where `print_board` writes the board; stdout by default.
    pub fn with_board_output(mut self, output: Box<dyn Write + Send>) -> Self {
        self.board_output = output;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    #[inline]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Run one turn for the side to move.
    ///
    /// The player's future is bounded by a deadline derived from its own
    /// budget and is dropped (cancelling its work and its timer) when the
    /// deadline passes. Nothing is mutated unless a move is applied or the
    /// player resigns.
    pub async fn take_turn(&mut self) -> GameResult<TurnOutcome> {
        if self.status.is_finished() {
            return Err(GameError::GameFinished {
                status: self.status,
            });
        }

        let color = self.side_to_move;
        let player = &mut self.players[color.index()];
        let budget = player.turn_budget();
        let started_at = Utc::now();
        let started = Instant::now();
        let deadline = started
            .checked_add(budget)
            .unwrap_or_else(|| started + UNBOUNDED_TURN);
        debug!(
            %color,
            player = player.name(),
            legality = self.legality.name(),
            ?budget,
            "requesting move"
        );

        let produced = timeout_at(deadline, player.produce_move(self.board, deadline)).await;
        let mv = match produced {
            Err(_elapsed) => return Err(GameError::TurnTimeout { color, budget }),
            Ok(Err(PlayerError::Resigned)) => {
                self.status = GameStatus::Resigned {
                    winner: color.opposite(),
                };
                info!(%color, "player resigned");
                return Ok(TurnOutcome::Resigned { color });
            }
            Ok(Err(PlayerError::Parse(err))) => return Err(GameError::Parse(err)),
            Ok(Err(source)) => return Err(GameError::Player { color, source }),
            Ok(Ok(mv)) => mv,
        };

        if !self.legality.is_legal(&self.board, mv, color) {
            return Err(GameError::InvalidMove { mv, color });
        }

        let applied = self.board.apply_move(mv)?;
        self.side_to_move = color.opposite();

        let record = TurnRecord {
            ply: self.history.len() as u32 + 1,
            color,
            mv,
            piece: applied.moved.1,
            captured: applied.captured,
            started_at,
            elapsed: started.elapsed(),
        };
        info!(
            ply = record.ply,
            %color,
            %mv,
            piece = ?record.piece,
            captured = ?record.captured,
            elapsed_ms = record.elapsed.as_millis() as u64,
            "move applied"
        );
        self.history.push(record.clone());
        self.status = self.status_evaluator.evaluate(&self.board, &self.history);

        Ok(TurnOutcome::Moved(record))
    }

    /// Play until the game reaches a result. With the default evaluator the
    /// game never ends on its own; use `play_until` to stop it from outside.
    pub async fn play_game(&mut self) -> GameResult<GameSummary> {
        self.play_until(std::future::pending()).await
    }

    /// Play until the game reaches a result or `shutdown` completes.
    ///
    /// Failed turns are logged and retried for the same color. The only error
    /// returned is the last failure once `max_consecutive_failures` is hit.
    pub async fn play_until<F>(&mut self, shutdown: F) -> GameResult<GameSummary>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut failed_attempts = 0u32;
        let mut consecutive_failures = 0u32;

        self.print_board();
        loop {
            if !self.status.is_finished() {
                self.status = self.status_evaluator.evaluate(&self.board, &self.history);
            }
            if self.status.is_finished() {
                info!(status = ?self.status, plies = self.history.len(), "game finished");
                return Ok(self.summary(failed_attempts, false));
            }

            let attempt = tokio::select! {
                _ = &mut shutdown => None,
                outcome = self.take_turn() => Some(outcome),
            };
            let Some(outcome) = attempt else {
                info!(plies = self.history.len(), "shutdown requested, stopping game");
                return Ok(self.summary(failed_attempts, true));
            };

            let failure = match outcome {
                Ok(_) => {
                    consecutive_failures = 0;
                    None
                }
                Err(err) => {
                    failed_attempts += 1;
                    consecutive_failures += 1;
                    warn!(color = %self.side_to_move, error = %err, "error taking turn, trying again");
                    Some(err)
                }
            };

            self.print_board();

            if let (Some(err), Some(limit)) = (failure, self.config.max_consecutive_failures) {
                if consecutive_failures >= limit {
                    warn!(limit, "too many failed turns in a row, giving up");
                    return Err(err);
                }
            }
        }
    }

    fn summary(&self, failed_attempts: u32, interrupted: bool) -> GameSummary {
        GameSummary {
            status: self.status,
            plies: self.history.len(),
            failed_attempts,
            interrupted,
        }
    }

    fn print_board(&mut self) {
        if !self.config.print_board {
            return;
        }
        if let Err(err) = writeln!(self.board_output, "board:\n{}", self.board) {
            warn!(error = %err, "could not print board");
        }
    }
}
