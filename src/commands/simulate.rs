//! Simulation command
//!
//! Plays many independent games with an auto-player and collects statistics.

use crate::core::{Code, MAX_ATTEMPTS, Score};
use crate::engine::{Engine, GameStatus};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Code,
    pub status: GameStatus,
    pub guesses: u32,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Average guesses over won games only
    pub average_guesses: f64,
    pub distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to completion against a seeded engine
pub fn play_game<S: Strategy>(solver: &Solver<S>, seed: u64) -> GameOutcome {
    let mut engine = Engine::seeded(seed);
    let mut history: Vec<(Code, Score)> = Vec::new();

    while !engine.is_over() {
        let Some(guess) = solver.next_guess(&history) else {
            break;
        };
        match engine.submit_guess(guess) {
            Ok(turn) => history.push((turn.guess, turn.score)),
            Err(_) => break,
        }
    }

    GameOutcome {
        secret: engine.secret(),
        status: engine.status(),
        guesses: engine.guesses_used(),
    }
}

/// Play `count` games in parallel, game `i` seeded with `seed + i`
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<S>,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = (0..count)
        .into_par_iter()
        .map(|i| {
            let outcome = play_game(solver, seed.wrapping_add(i as u64));
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let result = summarize(solver.strategy().name(), &outcomes, duration);
    log::info!(
        "simulated {} games: {} won, {} lost",
        result.total_games,
        result.wins,
        result.losses
    );
    result
}

fn summarize(
    strategy: &'static str,
    outcomes: &[GameOutcome],
    duration: Duration,
) -> SimulationResult {
    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut wins = 0;
    let mut win_guesses = 0u64;

    for outcome in outcomes {
        if outcome.status == GameStatus::Won {
            wins += 1;
            win_guesses += u64::from(outcome.guesses);
            *distribution.entry(outcome.guesses).or_insert(0) += 1;
        }
    }

    let total_games = outcomes.len();
    let secs = duration.as_secs_f64();

    SimulationResult {
        strategy,
        total_games,
        wins,
        losses: total_games - wins,
        average_guesses: if wins == 0 {
            0.0
        } else {
            win_guesses as f64 / wins as f64
        },
        distribution,
        duration,
        games_per_second: if secs > 0.0 {
            total_games as f64 / secs
        } else {
            0.0
        },
    }
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Guess counts in display order (1-10)
    pub fn distribution_rows(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        (1..=MAX_ATTEMPTS).map(|n| (n, self.distribution.get(&n).copied().unwrap_or(0)))
    }
}
