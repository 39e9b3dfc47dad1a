//! Guess scoring
//!
//! A score counts big matches (right digit, right position) and little matches
//! (right digit, wrong position). Every secret digit instance is claimed by at
//! most one match, so repeated guess digits cannot count twice against it.

use super::{CODE_LENGTH, Code};

/// Outcome of scoring one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub big: u8,
    pub little: u8,
}

impl Score {
    /// All four digits in place
    pub const PERFECT: Self = Self { big: 4, little: 0 };

    /// Nothing matched at all
    pub const NONE: Self = Self { big: 0, little: 0 };

    #[inline]
    #[must_use]
    pub const fn new(big: u8, little: u8) -> Self {
        debug_assert!(big as usize + little as usize <= CODE_LENGTH);
        Self { big, little }
    }

    /// Check if this is a winning score
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.big as usize == CODE_LENGTH
    }

    /// Total number of matched digits
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.big + self.little
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and consume those secret positions
    /// 2. Second pass: for each remaining guess digit, claim the lowest-index
    ///    unconsumed secret position holding the same digit
    ///
    /// # Examples
    /// ```
    /// use laurie_moo::core::{Code, Score};
    ///
    /// let secret = Code::from_digits([1, 1, 2, 3]).unwrap();
    /// let guess = Code::from_digits([1, 1, 1, 9]).unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(2, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let guess = guess.digits();
        let secret = secret.digits();
        let mut consumed = [false; CODE_LENGTH];
        let mut big = 0;
        let mut little = 0;

        // Allow: Index needed to compare guess[i], secret[i] and set consumed[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess[i] == secret[i] {
                big += 1;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            if guess[i] == secret[i] {
                continue;
            }
            let claim = (0..CODE_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = claim {
                little += 1;
                consumed[j] = true;
            }
        }

        Self { big, little }
    }
}
