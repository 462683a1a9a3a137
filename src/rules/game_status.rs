//! Game status and the evaluators that decide it.
//!
//! The loop asks a `StatusEvaluator` before every turn and stops once the
//! status is no longer `InProgress`. Resignation is not evaluated here; the
//! scheduler records it when a player resigns.

use crate::game::turn_scheduler::TurnRecord;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw,
    Resigned { winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(winner),
            GameStatus::InProgress | GameStatus::Stalemate | GameStatus::Draw => None,
        }
    }
}

pub trait StatusEvaluator: Send + Sync {
    fn evaluate(&self, board: &Board, history: &[TurnRecord]) -> GameStatus;
}

/// Never ends the game; only resignation or shutdown stop the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl StatusEvaluator for Unbounded {
    fn evaluate(&self, _board: &Board, _history: &[TurnRecord]) -> GameStatus {
        GameStatus::InProgress
    }
}

/// Declares a draw once `max_plies` moves have been applied.
#[derive(Debug, Clone, Copy)]
pub struct PlyLimit {
    pub max_plies: u32,
}

impl StatusEvaluator for PlyLimit {
    fn evaluate(&self, _board: &Board, history: &[TurnRecord]) -> GameStatus {
        if history.len() as u64 >= u64::from(self.max_plies) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::{GameStatus, PlyLimit, StatusEvaluator, Unbounded};
    use crate::game::turn_scheduler::TurnRecord;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Move, PieceKind};

    fn record(ply: u32) -> TurnRecord {
        TurnRecord {
            ply,
            color: Color::White,
            mv: Move::new(8, 16).expect("indices are in range"),
            piece: PieceKind::Pawn,
            captured: None,
            started_at: Utc::now(),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn winner_is_reported_only_for_decisive_results() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::Stalemate.winner(), None);
        assert_eq!(
            GameStatus::Checkmate { winner: Color::Black }.winner(),
            Some(Color::Black)
        );
        assert_eq!(
            GameStatus::Resigned { winner: Color::White }.winner(),
            Some(Color::White)
        );
        assert!(!GameStatus::InProgress.is_finished());
        assert!(GameStatus::Stalemate.is_finished());
    }

    #[test]
    fn unbounded_never_finishes() {
        let history: Vec<TurnRecord> = (1..=500).map(record).collect();
        assert_eq!(
            Unbounded.evaluate(&Board::standard(), &history),
            GameStatus::InProgress
        );
    }

    #[test]
    fn ply_limit_draws_at_the_limit() {
        let limit = PlyLimit { max_plies: 3 };
        let board = Board::standard();
        let mut history = Vec::new();
        for ply in 1..=2 {
            history.push(record(ply));
            assert_eq!(limit.evaluate(&board, &history), GameStatus::InProgress);
        }
        history.push(record(3));
        assert_eq!(limit.evaluate(&board, &history), GameStatus::Draw);
    }
}
