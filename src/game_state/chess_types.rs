//! Core value types shared by the board, the codec, and the scheduler.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;
use crate::utils::algebraic::text_to_index;

/// Board square index (`0..=63`, `row * 8 + column`, `0 == a1`).
///
/// The only way to build one is through a range check, so every bit derived
/// from a `Square` lies inside a 64-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub fn new(index: u8) -> Result<Self, ParseError> {
        if index > 63 {
            return Err(ParseError::IndexOutOfRange { index });
        }
        Ok(Self(index))
    }

    #[inline]
    pub(crate) const fn from_row_column(row: u8, column: u8) -> Self {
        Self(row * 8 + column)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// One-hot occupancy mask for this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.column());
        let rank = char::from(b'1' + self.row());
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text_to_index(s)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Piece kind (color is represented separately, one mask per pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// Order in which `Board::piece_at` probes a color's masks.
///
/// Masks are disjoint, so the order only affects how soon the probe stops.
pub const PIECE_SCAN_ORDER: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Pawn,
];

impl PieceKind {
    /// Row of this kind inside `Board`'s `[color][kind]` mask table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Pawn => 5,
        }
    }
}

/// A move as plain data: where a piece starts and where it ends.
///
/// Carries no legality information; self-moves (`start == end`) are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    /// Build a move from raw indices, rejecting anything outside `0..=63`.
    pub fn new(start: u8, end: u8) -> Result<Self, ParseError> {
        Ok(Self {
            start: Square::new(start)?,
            end: Square::new(end)?,
        })
    }

    #[inline]
    pub const fn between(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
