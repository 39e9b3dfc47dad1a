//! Feedback text for a scored guess
//!
//! Big matches read as "MOO!", little matches as "moo.". The tokens are
//! shuffled so their order says nothing about which positions matched.

use crate::core::Score;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shown when nothing matched
pub const COWBELLS: &str = "All you hear are cowbells.";

/// Token for a big match
pub const BIG_MOO: &str = "MOO!";

/// Token for a little match
pub const LITTLE_MOO: &str = "moo.";

/// Render feedback using the thread-local RNG
///
/// # Examples
/// ```
/// use laurie_moo::core::Score;
/// use laurie_moo::engine::render_feedback;
///
/// assert_eq!(render_feedback(Score::NONE), "All you hear are cowbells.");
/// assert_eq!(render_feedback(Score::PERFECT), "MOO! MOO! MOO! MOO! ");
/// ```
#[must_use]
pub fn render_feedback(score: Score) -> String {
    render_feedback_with(score, &mut rand::rng())
}

/// Render feedback, shuffling with the given RNG
///
/// Each token is followed by a single space.
#[must_use]
pub fn render_feedback_with<R: Rng + ?Sized>(score: Score, rng: &mut R) -> String {
    if score.big == 0 && score.little == 0 {
        return COWBELLS.to_string();
    }

    let mut tokens: Vec<&str> = std::iter::repeat_n(BIG_MOO, usize::from(score.big))
        .chain(std::iter::repeat_n(LITTLE_MOO, usize::from(score.little)))
        .collect();
    tokens.shuffle(rng);

    let mut text = String::with_capacity(tokens.len() * (BIG_MOO.len() + 1));
    for token in tokens {
        text.push_str(token);
        text.push(' ');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count(text: &str, token: &str) -> usize {
        text.split_whitespace().filter(|t| *t == token).count()
    }

    #[test]
    fn cowbells_when_nothing_matches() {
        let secret = Code::from_digits([1, 2, 3, 4]).unwrap();
        let guess = Code::from_digits([5, 6, 7, 8]).unwrap();
        let score = Score::calculate(&guess, &secret);
        assert_eq!(render_feedback(score), "All you hear are cowbells.");
    }

    #[test]
    fn token_counts_match_score() {
        let mut rng = StdRng::seed_from_u64(11);
        for big in 0..=4u8 {
            for little in 0..=(4 - big) {
                if big == 0 && little == 0 {
                    continue;
                }
                let text = render_feedback_with(Score::new(big, little), &mut rng);
                assert_eq!(count(&text, BIG_MOO), usize::from(big));
                assert_eq!(count(&text, LITTLE_MOO), usize::from(little));
                assert!(text.ends_with(' '));
                assert!(!text.ends_with("  "));
            }
        }
    }

    #[test]
    fn single_token_has_trailing_space() {
        assert_eq!(render_feedback(Score::new(0, 1)), "moo. ");
        assert_eq!(render_feedback(Score::new(1, 0)), "MOO! ");
    }

    #[test]
    fn shuffle_produces_every_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(render_feedback_with(Score::new(1, 1), &mut rng));
        }
        assert!(seen.contains("MOO! moo. "));
        assert!(seen.contains("moo. MOO! "));
        assert_eq!(seen.len(), 2);
    }
}
