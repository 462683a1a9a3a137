//! Bitboard piece placement and the in-place move transform.
//!
//! `Board` stores one 64-bit mask per (color, piece kind) pair. Two
//! invariants hold before and after every public operation:
//! - no square is set in more than one mask;
//! - masks only carry bits for squares `0..=63` (guaranteed by `Square`).

use std::fmt;

use tracing::trace;

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_types::{Color, Move, PieceKind, Square, PIECE_SCAN_ORDER};
use crate::utils::render_board::render_board;

/// What `Board::apply_move` moved and what it removed from the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub moved: (Color, PieceKind),
    pub captured: Option<(Color, PieceKind)>,
}

/// Bitboard placement for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
}

const WHITE_PAWN_RANK: u64 = 0x0000_0000_0000_FF00;
const BLACK_PAWN_RANK: u64 = 0x00FF_0000_0000_0000;

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Orthodox chess starting position.
    pub fn standard() -> Self {
        let mut pieces = [[0u64; 6]; 2];
        let white = Color::White.index();
        let black = Color::Black.index();

        pieces[white][PieceKind::King.index()] = 1 << 4;
        pieces[black][PieceKind::King.index()] = 1 << 60;
        pieces[white][PieceKind::Queen.index()] = 1 << 3;
        pieces[black][PieceKind::Queen.index()] = 1 << 59;
        pieces[white][PieceKind::Bishop.index()] = (1 << 2) | (1 << 5);
        pieces[black][PieceKind::Bishop.index()] = (1 << 58) | (1 << 61);
        pieces[white][PieceKind::Knight.index()] = (1 << 1) | (1 << 6);
        pieces[black][PieceKind::Knight.index()] = (1 << 57) | (1 << 62);
        pieces[white][PieceKind::Rook.index()] = 1 | (1 << 7);
        pieces[black][PieceKind::Rook.index()] = (1 << 56) | (1 << 63);
        pieces[white][PieceKind::Pawn.index()] = WHITE_PAWN_RANK;
        pieces[black][PieceKind::Pawn.index()] = BLACK_PAWN_RANK;

        Self { pieces }
    }

    /// Build a board from raw masks, rejecting overlapping placements.
    pub fn from_masks(pieces: [[u64; 6]; 2]) -> GameResult<Self> {
        let mut seen = 0u64;
        for color_masks in &pieces {
            for mask in color_masks {
                let overlap = seen & mask;
                if overlap != 0 {
                    let square = Square::new(overlap.trailing_zeros() as u8)?;
                    return Err(GameError::OverlappingPieces { square });
                }
                seen |= mask;
            }
        }
        Ok(Self { pieces })
    }

    /// Put a piece on `square`, replacing whatever was there.
    pub fn place(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.clear_square(square);
        self.pieces[color.index()][kind.index()] |= square.bit();
    }

    #[inline]
    pub fn mask(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    /// Union of all six piece masks for `color`.
    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces[color.index()].iter().fold(0, |acc, mask| acc | mask)
    }

    #[inline]
    pub fn all_occupancy(&self) -> u64 {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    /// Which color and kind sit on `square`; `None` for an empty square.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        let bit = square.bit();
        let color = Color::ALL
            .into_iter()
            .find(|color| self.occupancy(*color) & bit != 0)?;

        PIECE_SCAN_ORDER
            .into_iter()
            .find(|kind| self.mask(color, *kind) & bit != 0)
            .map(|kind| (color, kind))
    }

    /// Chess legality is not modelled; every move passes.
    #[inline]
    pub fn is_legal(&self, _mv: Move, _color: Color) -> bool {
        true
    }

    /// Move the piece on `mv.start` to `mv.end`, removing anything on `mv.end`.
    ///
    /// Fails with `NoPieceAtSource` without touching any mask when the source
    /// square is empty. The captured piece is only reported back; the board
    /// keeps no record of it.
    pub fn apply_move(&mut self, mv: Move) -> GameResult<AppliedMove> {
        let (color, kind) = self
            .piece_at(mv.start)
            .ok_or(GameError::NoPieceAtSource { square: mv.start })?;

        let captured = if mv.start == mv.end {
            None
        } else {
            self.piece_at(mv.end)
        };

        self.clear_square(mv.end);
        let mask = &mut self.pieces[color.index()][kind.index()];
        *mask &= !mv.start.bit();
        *mask |= mv.end.bit();

        trace!(%mv, ?color, ?kind, ?captured, "applied move to board");
        Ok(AppliedMove {
            moved: (color, kind),
            captured,
        })
    }

    fn clear_square(&mut self, square: Square) {
        let keep = !square.bit();
        for color_masks in &mut self.pieces {
            for mask in color_masks.iter_mut() {
                *mask &= keep;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
