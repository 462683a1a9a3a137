//! Game loop configuration.

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Print the board after every turn attempt (see `ChessGame::with_board_output`).
    pub print_board: bool,
    /// Declare a draw after this many applied moves.
    pub max_plies: Option<u32>,
    /// Give up after this many failed attempts in a row. `None` retries forever.
    pub max_consecutive_failures: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            print_board: true,
            max_plies: None,
            max_consecutive_failures: None,
        }
    }
}
