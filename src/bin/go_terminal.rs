//! Play a game in the terminal.
//!
//! Reads moves from stdin, one per line: `"<row> <col>"` (1-based), `pass`,
//! `resign` or `undo`. Exits 0 when the game ends, non-zero if input runs
//! out first or cannot be read.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use go_engine::core::GameConfig;
use go_engine::session::GameSession;
use go_engine::terminal::{parse_command, render, summary, Command};

/// Terminal harness for the rules engine.
#[derive(Parser, Debug)]
#[command(name = "go-terminal")]
#[command(about = "Play a territory-capture board game in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Side length of a square board
    #[arg(short, long, default_value = "9")]
    size: usize,

    /// Board height (overrides --size)
    #[arg(long)]
    height: Option<usize>,

    /// Board width (overrides --size)
    #[arg(long)]
    width: Option<usize>,

    /// Number of players
    #[arg(short, long, default_value = "2")]
    players: usize,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_dimensions(
                self.height.unwrap_or(self.size),
                self.width.unwrap_or(self.size),
            )
            .with_players(self.players)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let mut session = GameSession::new(&config).context("invalid game configuration")?;
    info!(?config, "starting terminal game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while !session.is_finished() {
        write!(
            stdout,
            "\n{}{} ({}) to move: ",
            render(session.current_state()),
            session.active_player(),
            session.active_color().symbol()
        )?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            bail!("input ended before the game finished");
        };
        let line = line.context("failed to read input")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        let outcome = match command {
            Command::Place(point) => session.place(point).map(|record| record.captured.len()),
            Command::Pass => session.pass().map(|_| 0),
            Command::Resign => session.resign().map(|()| 0),
            Command::Undo => session.undo().map(|_| 0),
        };
        match outcome {
            Ok(0) => {}
            Ok(captured) => writeln!(stdout, "Captured {captured} stone(s).")?,
            Err(rejection) => writeln!(stdout, "{rejection}")?,
        }
    }

    writeln!(stdout, "\n{}\n{}", render(session.current_state()), summary(&session))?;
    Ok(())
}
