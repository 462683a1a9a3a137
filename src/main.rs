use std::time::Duration;

use tempo_chess::game::config::GameConfig;
use tempo_chess::game::turn_scheduler::ChessGame;
use tempo_chess::game_state::chess_types::Color;
use tempo_chess::players::console_player::{
    shared_stdin, ConsolePlayer, SharedInput, DEFAULT_CONSOLE_BUDGET,
};
use tempo_chess::players::player_trait::Player;
use tempo_chess::players::random_player::RandomPlayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Cli, PlayerKind};

fn build_player(
    kind: PlayerKind,
    color: Color,
    budget: Duration,
    seed: u64,
    stdin: &SharedInput,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Console => Box::new(ConsolePlayer::stdio(color, budget, stdin.clone())),
        PlayerKind::Random => Box::new(RandomPlayer::new(color, budget, seed)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = <Cli as clap::Parser>::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let budget = cli
        .turn_seconds
        .map_or(DEFAULT_CONSOLE_BUDGET, Duration::from_secs);
    let stdin = shared_stdin()?;
    let white = build_player(cli.white, Color::White, budget, cli.seed, &stdin);
    let black = build_player(cli.black, Color::Black, budget, cli.seed.wrapping_add(1), &stdin);
    info!(white = white.name(), black = black.name(), ?budget, "starting game");

    let config = GameConfig {
        print_board: !cli.quiet,
        max_plies: cli.max_plies,
        max_consecutive_failures: cli.max_failures,
    };
    let mut game = ChessGame::new(white, black, config);

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "could not listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };
    let summary = game.play_until(shutdown).await?;

    match summary.status.winner() {
        Some(winner) => println!("{winner} wins ({:?})", summary.status),
        None => println!("result: {:?}", summary.status),
    }
    println!(
        "plies={} failed_attempts={} interrupted={}",
        summary.plies, summary.failed_attempts, summary.interrupted
    );
    Ok(())
}
