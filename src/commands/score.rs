//! One-shot scoring command
//!
//! Scores a guess against a given secret without starting a game.

use crate::core::{Code, CodeError, Score};
use crate::engine::{Engine, render_feedback};

/// Result of scoring one guess
pub struct ScoreReport {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
    pub feedback: String,
    pub is_win: bool,
}

/// Parse a code from either four digits ("0042") or an integer ("42")
///
/// # Errors
///
/// Returns the four-digit parse error if the text is neither form.
pub fn parse_code_arg(text: &str) -> Result<Code, CodeError> {
    text.parse::<Code>().or_else(|err| {
        text.trim()
            .parse::<i32>()
            .map_err(|_| err)
            .and_then(Code::try_from)
    })
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either argument is not a valid code.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreReport, String> {
    let secret = parse_code_arg(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = parse_code_arg(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let mut engine = Engine::seeded(0);
    engine
        .restart_with(i32::from(secret.value()))
        .map_err(|e| e.to_string())?;

    let score = engine.score_guess(&guess);
    Ok(ScoreReport {
        secret,
        guess,
        score,
        feedback: render_feedback(score),
        is_win: engine.is_winning_guess(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_arg_accepts_both_forms() {
        assert_eq!(parse_code_arg("0042").unwrap().value(), 42);
        assert_eq!(parse_code_arg("42").unwrap().to_string(), "0042");
        assert_eq!(parse_code_arg("7").unwrap().digits(), &[0, 0, 0, 7]);
    }

    #[test]
    fn parse_code_arg_rejects_bad_input() {
        assert!(matches!(
            parse_code_arg("-1"),
            Err(CodeError::OutOfRange(-1))
        ));
        assert!(matches!(
            parse_code_arg("10000"),
            Err(CodeError::OutOfRange(10_000))
        ));
        assert!(matches!(
            parse_code_arg("abcd"),
            Err(CodeError::InvalidDigit('a'))
        ));
    }

    #[test]
    fn score_codes_permutation() {
        let report = score_codes("1234", "4321").unwrap();
        assert_eq!(report.score, Score::new(0, 4));
        assert_eq!(report.feedback, "moo. moo. moo. moo. ");
        assert!(!report.is_win);
    }

    #[test]
    fn score_codes_win() {
        let report = score_codes("423", "0423").unwrap();
        assert!(report.is_win);
        assert_eq!(report.score, Score::PERFECT);
    }

    #[test]
    fn score_codes_reports_which_argument_failed() {
        let err = score_codes("12345", "1234").err().unwrap();
        assert!(err.starts_with("Invalid secret"));

        let err = score_codes("1234", "x").err().unwrap();
        assert!(err.starts_with("Invalid guess"));
    }
}
