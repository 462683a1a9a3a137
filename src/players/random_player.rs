//! Random pseudo-move player.
//!
//! Picks one of its own pieces and sends it to any square not held by its
//! own color. No chess rules are consulted; this is a sparring partner for
//! the scheduler and for console games against the machine.

use std::time::Duration;

use async_trait::async_trait;
use rand::{prelude::IndexedRandom, rngs::StdRng, SeedableRng};
use tokio::time::Instant;

use crate::errors::PlayerError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move, Square};
use crate::players::player_trait::Player;

pub struct RandomPlayer {
    name: String,
    color: Color,
    budget: Duration,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color, budget: Duration, seed: u64) -> Self {
        Self {
            name: format!("{color} (random, seed {seed})"),
            color,
            budget,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, board: &Board) -> Option<Move> {
        let own = board.occupancy(self.color);
        let sources: Vec<Square> = Square::all().filter(|sq| own & sq.bit() != 0).collect();
        let targets: Vec<Square> = Square::all().filter(|sq| own & sq.bit() == 0).collect();

        let start = *sources.choose(&mut self.rng)?;
        let end = *targets.choose(&mut self.rng)?;
        Some(Move::between(start, end))
    }
}

#[async_trait]
impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn turn_budget(&self) -> Duration {
        self.budget
    }

    async fn produce_move(&mut self, board: Board, _deadline: Instant) -> Result<Move, PlayerError> {
        self.pick(&board)
            .ok_or_else(|| PlayerError::Other(format!("{} has no piece to move", self.color)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::RandomPlayer;
    use crate::errors::PlayerError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::players::player_trait::Player;

    fn deadline() -> Instant {
        Instant::now() + Duration::from_secs(1)
    }

    #[tokio::test]
    async fn moves_own_piece_off_own_squares() {
        let mut player = RandomPlayer::new(Color::Black, Duration::from_secs(1), 7);
        let board = Board::standard();
        for _ in 0..50 {
            let mv = player
                .produce_move(board, deadline())
                .await
                .expect("black has pieces");
            assert_eq!(board.piece_at(mv.start).map(|(c, _)| c), Some(Color::Black));
            assert_ne!(board.piece_at(mv.end).map(|(c, _)| c), Some(Color::Black));
        }
    }

    #[tokio::test]
    async fn same_seed_gives_same_sequence() {
        let mut a = RandomPlayer::new(Color::White, Duration::from_secs(1), 42);
        let mut b = RandomPlayer::new(Color::White, Duration::from_secs(1), 42);
        for _ in 0..10 {
            let left = a.produce_move(Board::standard(), deadline()).await.expect("white has pieces");
            let right = b.produce_move(Board::standard(), deadline()).await.expect("white has pieces");
            assert_eq!(left, right);
        }
    }

    #[tokio::test]
    async fn no_pieces_is_an_error() {
        let mut board = Board::empty();
        board.place("a1".parse().expect("a1 should parse"), Color::White, PieceKind::King);
        let mut player = RandomPlayer::new(Color::Black, Duration::from_secs(1), 1);

        let err = player
            .produce_move(board, deadline())
            .await
            .expect_err("black has nothing to move");
        assert!(matches!(err, PlayerError::Other(_)));
    }
}
