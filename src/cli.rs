use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on stdin
    Console,
    /// Random pseudo-moves from a seeded generator
    Random,
}

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Who plays White
    #[clap(long, value_enum, default_value = "console")]
    pub white: PlayerKind,
    /// Who plays Black
    #[clap(long, value_enum, default_value = "console")]
    pub black: PlayerKind,
    /// Time budget per move, in seconds, for every player (default 30)
    #[clap(long, value_name = "SECONDS")]
    pub turn_seconds: Option<u64>,
    /// Seed for random players (Black uses seed + 1)
    #[clap(long, default_value = "0")]
    pub seed: u64,
    /// End the game as a draw after this many moves
    #[clap(long, value_name = "PLIES")]
    pub max_plies: Option<u32>,
    /// Stop after this many failed turns in a row
    #[clap(long, value_name = "N")]
    pub max_failures: Option<u32>,
    /// Do not print the board after every turn
    #[clap(short, long)]
    pub quiet: bool,
    /// Log filter used when RUST_LOG is not set
    #[clap(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}
