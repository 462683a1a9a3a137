//! Line-oriented human player.
//!
//! Prompts on a writer and takes one move per line from a shared line feed.
//! Lines are read by a dedicated OS thread and handed over a channel, so a
//! turn that hits its deadline only abandons a pending `recv`: no partial
//! line is lost, and a blocked terminal read never holds up runtime shutdown.
//! Both console players of a game share the one feed and take lines in turn.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::{mpsc, Mutex};
use tokio::time::Instant;
use tracing::debug;

use crate::errors::PlayerError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};
use crate::players::player_trait::Player;
use crate::utils::algebraic::parse_move;

pub const DEFAULT_CONSOLE_BUDGET: Duration = Duration::from_secs(30);

const RESIGN_COMMAND: &str = "resign";

/// Complete input lines, shared by every console player reading the same source.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<io::Result<String>>>>;

pub struct ConsolePlayer<W> {
    name: String,
    color: Color,
    budget: Duration,
    input: SharedInput,
    output: W,
}

/// Start a reader thread over `reader` and return the feed of its lines.
///
/// The thread stops at end of input, after the first read error, or once
/// every receiver is gone.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<SharedInput>
where
    R: BufRead + Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("console-input".into())
        .spawn(move || line_reader_worker(reader, sender))?;
    Ok(Arc::new(Mutex::new(receiver)))
}

fn line_reader_worker<R: BufRead>(reader: R, sender: mpsc::UnboundedSender<io::Result<String>>) {
    for line in reader.lines() {
        let failed = line.is_err();
        if sender.send(line).is_err() || failed {
            break;
        }
    }
}

/// One line feed over stdin for every console player in the process.
pub fn shared_stdin() -> io::Result<SharedInput> {
    spawn_line_reader(io::BufReader::new(io::stdin()))
}

impl ConsolePlayer<Stdout> {
    /// Console player reading `input` (see `shared_stdin`) and prompting on stdout.
    pub fn stdio(color: Color, budget: Duration, input: SharedInput) -> Self {
        Self::new(color, budget, input, tokio::io::stdout())
    }
}

impl<W> ConsolePlayer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(color: Color, budget: Duration, input: SharedInput, output: W) -> Self {
        Self {
            name: format!("{color} (console)"),
            color,
            budget,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[async_trait]
impl<W> Player for ConsolePlayer<W>
where
    W: AsyncWrite + Unpin + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn turn_budget(&self) -> Duration {
        self.budget
    }

    async fn produce_move(&mut self, _board: Board, deadline: Instant) -> Result<Move, PlayerError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let prompt = format!(
            "{} to move, {}s left (<src> to <dst>): ",
            self.color,
            remaining.as_secs()
        );
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        // lock and recv are both cancel safe
        let line = match self.input.lock().await.recv().await {
            Some(line) => line?,
            None => return Err(PlayerError::InputClosed),
        };

        let entered = line.trim();
        debug!(player = %self.name, input = entered, "console input");
        if entered.eq_ignore_ascii_case(RESIGN_COMMAND) {
            return Err(PlayerError::Resigned);
        }
        Ok(parse_move(entered)?)
    }
}
