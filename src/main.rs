//! LaurieMOO - CLI
//!
//! Four-digit code-breaking game with TUI and CLI modes, plus a simulation
//! harness for auto-player strategies.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use laurie_moo::{
    commands::{run_simple, run_simulation, score_codes},
    engine::Engine,
    output::{print_score_report, print_simulation_result},
    solver::{Solver, Strategy, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "laurie_moo",
    about = "LaurieMOO! Crack the secret 4-digit code in 10 guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fix the first game's secret (0-9999) instead of picking one at random
    #[arg(long, global = true, value_parser = clap::value_parser!(i32).range(0..=9999))]
    secret: Option<i32>,

    /// Seed for secret generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a given secret
    Score {
        /// The secret code, e.g. 0423 or 423
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play many games with an auto-player and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Strategy: consistent (default) or random
        #[arg(short, long, default_value = "consistent")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.secret, cli.seed),
        Commands::Simple => run_simple_command(cli.secret, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(&strategy, count, cli.seed.unwrap_or(0));
            Ok(())
        }
    }
}

/// Build the engine for an interactive session
fn build_engine(secret: Option<i32>, seed: Option<u64>) -> Result<Engine> {
    let mut engine = seed.map_or_else(Engine::new, Engine::seeded);
    if let Some(value) = secret {
        engine
            .restart_with(value)
            .context("could not apply --secret")?;
    }
    log::debug!("engine ready (fixed secret: {})", secret.is_some());
    Ok(engine)
}

fn run_play_command(secret: Option<i32>, seed: Option<u64>) -> Result<()> {
    use laurie_moo::interactive::{App, run_tui};

    let app = App::new(build_engine(secret, seed)?);
    run_tui(app)
}

fn run_simple_command(secret: Option<i32>, seed: Option<u64>) -> Result<()> {
    let mut engine = build_engine(secret, seed)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_simple(&mut engine, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let report = score_codes(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_report(&report);
    Ok(())
}

fn run_simulate_command(strategy_name: &str, count: usize, seed: u64) {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Simulating {count} games with the {} strategy...",
        strategy.name()
    );
    let solver = Solver::new(strategy);
    let result = run_simulation(&solver, count, seed, true);
    print_simulation_result(&result);
}
