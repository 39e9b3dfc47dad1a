//! Auto-player that narrows the space of possible secrets

use super::strategy::Strategy;
use crate::core::{Code, Score};

/// Code-breaking solver
///
/// Keeps no state of its own; every query is answered from the
/// (guess, score) history passed in.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Get the next guess given previous guesses and scores
    ///
    /// Returns `None` if no code is consistent with the history.
    pub fn next_guess(&self, history: &[(Code, Score)]) -> Option<Code> {
        let candidates = self.filter_candidates(history);
        self.strategy.select_guess(&candidates)
    }

    /// Every code that would have produced the observed score for all guesses
    fn filter_candidates(&self, history: &[(Code, Score)]) -> Vec<Code> {
        Code::all()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Score::calculate(guess, candidate) == *observed)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::ConsistentStrategy;

    fn code(value: i32) -> Code {
        Code::try_from(value).unwrap()
    }

    #[test]
    fn next_guess_with_empty_history() {
        let solver = Solver::new(ConsistentStrategy);
        assert_eq!(solver.next_guess(&[]), Some(code(0)));
        assert_eq!(solver.filter_candidates(&[]).len(), 10_000);
    }

    #[test]
    fn candidates_stay_consistent_with_history() {
        let solver = Solver::new(ConsistentStrategy);
        let secret = code(4172);

        let guess = code(1234);
        let history = vec![(guess, Score::calculate(&guess, &secret))];
        let candidates = solver.filter_candidates(&history);

        assert!(candidates.contains(&secret));
        assert!(candidates.len() < 10_000);
        for candidate in &candidates {
            assert_eq!(
                Score::calculate(&guess, candidate),
                Score::calculate(&guess, &secret)
            );
        }
    }

    #[test]
    fn next_guess_returns_none_when_history_is_contradictory() {
        let solver = Solver::new(ConsistentStrategy);
        let history = vec![(code(1111), Score::PERFECT), (code(2222), Score::PERFECT)];
        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn perfect_score_leaves_one_candidate() {
        let solver = Solver::new(ConsistentStrategy);
        let history = vec![(code(907), Score::PERFECT)];
        assert_eq!(solver.filter_candidates(&history), vec![code(907)]);
    }

    #[test]
    fn consistent_solver_always_converges() {
        let solver = Solver::new(ConsistentStrategy);
        for secret in [code(0), code(9999), code(4172), code(1123), code(5050)] {
            let mut history = Vec::new();
            let mut found = false;
            // Every wrong guess eliminates at least itself
            for _ in 0..50 {
                let guess = solver.next_guess(&history).unwrap();
                let score = Score::calculate(&guess, &secret);
                history.push((guess, score));
                if score.is_perfect() {
                    found = true;
                    break;
                }
            }
            assert!(found, "failed to find {secret}");
        }
    }
}
