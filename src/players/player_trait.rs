//! Player abstraction used by the turn scheduler.
//!
//! A player receives an owned snapshot of the board and a deadline, and
//! answers with a move. The scheduler always races the call against that
//! deadline and drops the future when it expires, so implementations must
//! keep their work inside the returned future (no detached tasks) for the
//! cancellation to reach them.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::errors::PlayerError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

#[async_trait]
pub trait Player: Send {
    fn name(&self) -> &str;

    /// Maximum time this player may spend on one move.
    fn turn_budget(&self) -> Duration;

    async fn produce_move(&mut self, board: Board, deadline: Instant) -> Result<Move, PlayerError>;
}
