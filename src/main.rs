#![warn(clippy::all)]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use torus_life::{Board, Config, Pattern, Runner, TextRenderer};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "torus_life",
    version,
    about = "Conway's Game of Life on an 8x8 toroidal board"
)]
struct Cli {
    /// Starting pattern: blinker, toad, beacon, random or test (case-insensitive).
    #[arg(required_unless_present = "list")]
    pattern: Option<String>,

    /// Number of generations to compute after the initial board.
    #[arg(long, default_value_t = Config::DEFAULT_STEPS)]
    steps: u32,

    /// Seed for the random pattern.
    #[arg(long, env = "TORUS_LIFE_SEED")]
    seed: Option<u64>,

    /// Print the recognized pattern names and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for pattern in Pattern::ALL {
            writeln!(out, "{}", pattern).context("failed to write pattern list")?;
        }
        return Ok(());
    }

    let config = Config {
        steps: cli.steps,
        seed: cli.seed,
    };
    let pattern = cli.pattern.unwrap_or_default().parse::<Pattern>()?;
    info!(%pattern, steps = config.steps, seed = ?config.seed, "starting simulation");

    let mut runner = Runner::new(Board::from_pattern(pattern, config.seed));
    let mut renderer = TextRenderer::new(&mut out);
    runner
        .run(config.steps, |board| renderer.render(board))
        .context("failed to write generation")?;
    out.flush().context("failed to flush output")?;

    info!(
        generations = runner.generation(),
        population = runner.current().population(),
        "simulation finished"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
