//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Reads from any `BufRead` and writes
//! to any `Write` so it can be driven from tests.

use super::session::Statistics;
use crate::core::{Code, MAX_ATTEMPTS};
use crate::engine::{Engine, GameStatus, render_feedback};
use crate::output::formatters::{LOSS_MESSAGE, WIN_MESSAGE, guess_label, secret_reveal};
use colored::Colorize;
use std::io::{self, BufRead, Write};

enum Input {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        other => Input::Guess(other.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// Stops on `quit` or end of input and returns the session tallies.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    engine: &mut Engine,
    mut reader: R,
    mut out: W,
) -> io::Result<Statistics> {
    let mut stats = Statistics::default();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "            LaurieMOO! - Crack the code".bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\nGuess the secret 4-digit code in {MAX_ATTEMPTS} tries. Digits may repeat."
    )?;
    writeln!(out, "  MOO! = right digit, right place")?;
    writeln!(out, "  moo. = right digit, wrong place")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    loop {
        if engine.is_over() {
            write!(out, "Play again? ('new' or 'quit'): ")?;
        } else {
            write!(out, "{}: ", guess_label(engine.current_attempt()))?;
        }
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match parse_input(&line) {
            Input::Quit => {
                writeln!(out, "\nThanks for playing!")?;
                break;
            }
            Input::NewGame => {
                engine.new_game();
                writeln!(out, "\nNew game started!\n")?;
            }
            Input::Guess(_) if engine.is_over() => {
                writeln!(out, "This game is over.")?;
            }
            Input::Guess(text) => {
                let guess = match text.parse::<Code>() {
                    Ok(code) => code,
                    Err(e) => {
                        writeln!(out, "{} {e}", "Invalid guess:".red())?;
                        continue;
                    }
                };

                let turn = match engine.submit_guess(guess) {
                    Ok(turn) => turn,
                    Err(e) => {
                        writeln!(out, "{}", e.to_string().red())?;
                        continue;
                    }
                };
                stats.record(&turn);

                writeln!(out, "  {}  {}", turn.guess, render_feedback(turn.score))?;

                match turn.status {
                    GameStatus::Won => {
                        writeln!(out, "\n{}", WIN_MESSAGE.bright_green().bold())?;
                        writeln!(
                            out,
                            "Cracked in {} {}.\n",
                            turn.attempt,
                            if turn.attempt == 1 { "guess" } else { "guesses" }
                        )?;
                    }
                    GameStatus::Lost => {
                        writeln!(out, "\n{}", LOSS_MESSAGE.red().bold())?;
                        writeln!(out, "{}\n", secret_reveal(engine.secret()))?;
                    }
                    GameStatus::InProgress => {}
                }
            }
        }
    }

    log::info!(
        "session finished: {} games, {} won",
        stats.total_games,
        stats.games_won
    );
    Ok(stats)
}
