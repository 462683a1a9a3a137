//! Crate root module declarations for the Tempo Chess game core.
//!
//! Exposes the bitboard game state, the coordinate codec and renderer, the
//! rule strategies, the player implementations, and the turn scheduler so
//! the binary and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
}

pub mod rules {
    pub mod game_status;
    pub mod legality;
}

pub mod players {
    pub mod console_player;
    pub mod player_trait;
    pub mod random_player;
    pub mod scripted_player;
}

pub mod game {
    pub mod config;
    pub mod turn_scheduler;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
