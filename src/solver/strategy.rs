//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for picking the next guess among codes still consistent with the history
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess(&self, candidates: &[Code]) -> Option<Code>;

    /// Short name used on the command line
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Lowest consistent code (default, deterministic)
    Consistent(ConsistentStrategy),
    /// Uniformly random consistent code
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::Consistent(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Consistent(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "consistent", "random".
    /// Defaults to consistent if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Consistent(ConsistentStrategy),
        }
    }
}

/// Always guesses the lowest code that fits every score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        candidates.iter().min().copied()
    }

    fn name(&self) -> &'static str {
        "consistent"
    }
}

/// Random strategy
///
/// Picks uniformly among the consistent codes using the thread-local RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_candidates() -> Vec<Code> {
        [4321, 1234, 5555, 42]
            .into_iter()
            .map(|v| Code::try_from(v).unwrap())
            .collect()
    }

    #[test]
    fn consistent_strategy_picks_lowest() {
        let candidates = setup_candidates();
        let guess = ConsistentStrategy.select_guess(&candidates).unwrap();
        assert_eq!(guess.to_string(), "0042");
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let candidates = setup_candidates();
        for _ in 0..20 {
            let guess = RandomStrategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        assert!(ConsistentStrategy.select_guess(&[]).is_none());
        assert!(RandomStrategy.select_guess(&[]).is_none());
    }

    #[test]
    fn strategy_type_from_name() {
        assert_eq!(
            StrategyType::from_name("random"),
            StrategyType::Random(RandomStrategy)
        );
        assert_eq!(
            StrategyType::from_name("consistent"),
            StrategyType::Consistent(ConsistentStrategy)
        );
        // Unknown names fall back to the default
        assert_eq!(StrategyType::from_name("bogus").name(), "consistent");
    }
}
