//! Terminal-oriented board renderer.
//!
//! Creates a human-readable grid from the bitboards for the game loop and
//! for debugging. Presentation only; nothing parses this output.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, PIECE_SCAN_ORDER};

const RULE: &str = "-----------------\n";

/// Render the board as an 8x8 grid, rank 8 first, files a to h.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_board(board: &Board) -> String {
    let mut cells = [' '; 64];
    for color in Color::ALL {
        for kind in PIECE_SCAN_ORDER {
            place_glyphs(board.mask(color, kind), piece_glyph(color, kind), &mut cells);
        }
    }

    let mut out = String::from(RULE);
    for rank in (0..8).rev() {
        for file in 0..8 {
            out.push('|');
            out.push(cells[rank * 8 + file]);
        }
        out.push_str("|\n");
        out.push_str(RULE);
    }
    out
}

/// Write `glyph` into every cell whose bit is set in `mask`.
pub fn place_glyphs(mask: u64, glyph: char, cells: &mut [char; 64]) {
    let mut remaining = mask;
    while remaining != 0 {
        let square = remaining.trailing_zeros() as usize;
        cells[square] = glyph;
        remaining &= remaining - 1;
    }
}

/// Uppercase for White, lowercase for Black; knights are `H`.
pub fn piece_glyph(color: Color, kind: PieceKind) -> char {
    let glyph = match kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'H',
        PieceKind::Rook => 'R',
        PieceKind::Pawn => 'P',
    };
    match color {
        Color::White => glyph,
        Color::Black => glyph.to_ascii_lowercase(),
    }
}
