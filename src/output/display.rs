//! Display functions for command results

use super::formatters::{create_progress_bar, score_summary};
use crate::commands::{ScoreReport, SimulationResult};
use crate::core::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        report.secret.to_string().bright_yellow().bold(),
        report.guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  Score:    {}", score_summary(report.score));
    println!("  Feedback: {}", report.feedback.trim_end().bright_cyan());

    println!();
    if report.is_win {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guess_count, count) in result.distribution_rows() {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
    if result.losses > 0 {
        println!(
            "   {}",
            format!("Not cracked in {MAX_ATTEMPTS}: {}", result.losses).red()
        );
    }
}
