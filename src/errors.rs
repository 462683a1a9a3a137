//! Errors used throughout the game core.
//!
//! Three layers, each a `thiserror` enum:
//! - `ParseError` for coordinate and move text (and out-of-range indices).
//! - `PlayerError` for failures raised inside a `Player` implementation.
//! - `GameError` for everything the turn scheduler can surface.
//!
//! All of them are recoverable values; the game loop logs them and retries
//! the same turn.

use std::time::Duration;

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Square};
use crate::rules::game_status::GameStatus;

/// Malformed coordinate or move text.
///
/// Every variant carries the offending token so console users can see which
/// half of a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("position string ({text}) has invalid length")]
    InvalidLength { text: String },

    #[error("position string ({text}) has invalid file")]
    InvalidFile { text: String },

    #[error("position string ({text}) has invalid rank")]
    InvalidRank { text: String },

    #[error("could not parse move string ({text}): expected two squares")]
    TokenCount { text: String },

    #[error("square index {index} is outside 0..=63")]
    IndexOutOfRange { index: u8 },
}

/// Failure raised by a `Player` while producing a move.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("player input failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("player input closed")]
    InputClosed,

    #[error("player resigned")]
    Resigned,

    #[error("{0}")]
    Other(String),
}

/// Errors surfaced by board operations and the turn scheduler.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no piece at source square {square}")]
    NoPieceAtSource { square: Square },

    #[error("move not valid for {color}: {mv}")]
    InvalidMove { mv: Move, color: Color },

    #[error("{color} did not move within {budget:?}")]
    TurnTimeout { color: Color, budget: Duration },

    #[error("{color} player failed: {source}")]
    Player {
        color: Color,
        #[source]
        source: PlayerError,
    },

    #[error("game is already over: {status:?}")]
    GameFinished { status: GameStatus },

    #[error("square {square} is occupied by more than one piece mask")]
    OverlappingPieces { square: Square },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
