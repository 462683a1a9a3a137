//! Player that replays a fixed list of move strings.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::errors::PlayerError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::players::player_trait::Player;
use crate::utils::algebraic::parse_move;

pub struct ScriptedPlayer {
    name: String,
    budget: Duration,
    script: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(name: &str, budget: Duration, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            budget,
            script: moves.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn turn_budget(&self) -> Duration {
        self.budget
    }

    async fn produce_move(&mut self, _board: Board, _deadline: Instant) -> Result<Move, PlayerError> {
        let text = self.script.pop_front().ok_or(PlayerError::InputClosed)?;
        Ok(parse_move(&text)?)
    }
}
