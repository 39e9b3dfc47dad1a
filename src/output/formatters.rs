//! Formatting utilities for terminal output

use crate::core::{Code, Score};

/// Shown when the secret is guessed
pub const WIN_MESSAGE: &str = "LaurieMOO!!!";

/// Shown when the last attempt misses
pub const LOSS_MESSAGE: &str = "Boo hoo -- no LaurieMOO.";

/// Label for the attempt about to be played
#[must_use]
pub fn guess_label(attempt: u32) -> String {
    format!("Guess #{attempt}")
}

/// Game-over line revealing the zero-padded secret
#[must_use]
pub fn secret_reveal(secret: Code) -> String {
    format!("The secret value was {secret}")
}

/// Compact "2 big, 1 little" summary
#[must_use]
pub fn score_summary(score: Score) -> String {
    format!("{} big, {} little", score.big, score.little)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
