//! Pluggable move-legality strategies.
//!
//! The scheduler only knows the `LegalityCheck` trait, so a real rules
//! engine can replace the permissive default without touching the loop.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

pub trait LegalityCheck: Send + Sync {
    fn name(&self) -> &str;

    fn is_legal(&self, board: &Board, mv: Move, color: Color) -> bool;
}

/// Accepts every move; defers to `Board::is_legal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveLegality;

impl LegalityCheck for PermissiveLegality {
    fn name(&self) -> &str {
        "permissive"
    }

    fn is_legal(&self, board: &Board, mv: Move, color: Color) -> bool {
        board.is_legal(mv, color)
    }
}

#[cfg(test)]
mod tests {
    use super::{LegalityCheck, PermissiveLegality};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Move};

    #[test]
    fn permissive_accepts_moves_from_either_side_and_empty_squares() {
        let board = Board::standard();
        let check = PermissiveLegality;
        let own = Move::new(12, 28).expect("indices are in range");
        let foreign = Move::new(52, 36).expect("indices are in range");
        let empty = Move::new(30, 31).expect("indices are in range");

        assert!(check.is_legal(&board, own, Color::White));
        assert!(check.is_legal(&board, foreign, Color::White));
        assert!(check.is_legal(&board, empty, Color::Black));
        assert_eq!(check.name(), "permissive");
    }
}
